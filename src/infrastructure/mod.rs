// Infrastructure layer module
// Contains the HTTP repository adapters and the durable token file
// Follows Hexagonal Architecture

pub mod file_token_store;
pub mod repositories;

pub use file_token_store::FileTokenStore;
