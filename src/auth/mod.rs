// Authentication state
// Session token + profile held in memory, token mirrored to a durable store

pub mod session;
pub mod token_store;

pub use session::Session;
pub use token_store::{MemoryTokenStore, TokenStore};
