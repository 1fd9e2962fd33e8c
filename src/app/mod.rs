// Application layer
// Headless screens driven by the CLI, plus the context they share

pub mod bootstrap;
pub mod context;
pub mod loading;
pub mod messages;
pub mod navigation;
pub mod notify;
pub mod screens;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::restore_session;
pub use context::AppContext;
pub use loading::LoadingFlag;
pub use navigation::{guard, History, Navigator, Route};
pub use notify::{Notice, NoticeLevel, NoticeLog, Notifier};
