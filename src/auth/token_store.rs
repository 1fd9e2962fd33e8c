use std::io;
use std::sync::{Mutex, PoisonError};

/// Durable home of the bearer token
///
/// Holds exactly the token string; nothing else issued by the server survives
/// a restart.
pub trait TokenStore: Send + Sync {
    /// Reads the persisted token
    ///
    /// Unreadable storage is reported as absent.
    fn load(&self) -> Option<String>;

    /// Persists `token`, replacing any previous value
    fn save(&self, token: &str) -> io::Result<()>;

    /// Removes the persisted token; removing an absent token succeeds
    fn clear(&self) -> io::Result<()>;
}

/// Process-local store, used for tests and for one-off sessions
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if left over from a previous run
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
