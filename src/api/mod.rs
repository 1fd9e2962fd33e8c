// API layer module (outbound adapter to the backend REST contract)
// Paths are relative to the configured base URL, which carries the /api prefix

pub mod client;
pub mod errors;

pub use client::{item_path, ApiClient, UnauthorizedHook};
pub use errors::{ApiError, ApiResult};
