// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain holds the wire shapes, form drafts and client-side rules

pub mod agent;
pub mod conversation;
pub mod errors;
pub mod repositories;
pub mod team;
pub mod time;
pub mod user;
