//! AgentPut admin client library
//!
//! Typed access to the AgentPut backend (agents, teams, conversations and
//! user accounts), session handling, and the headless screens the
//! `agentput` command drives.

pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
