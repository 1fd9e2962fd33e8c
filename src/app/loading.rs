use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Loading/saving indicator for a screen
///
/// Set through [`LoadingFlag::start`]; the returned guard resets the flag when
/// dropped, so it never sticks after an error or an early return.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    #[must_use = "the flag resets as soon as the guard is dropped"]
    pub fn start(&self) -> LoadingGuard {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(self.0.clone())
    }
}

pub struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
