// Agent domain module
// Wire shapes of agent definitions and the form draft that produces them

#![allow(clippy::module_inception)]

pub mod agent;
pub mod draft;

pub use agent::{Agent, AgentChanges, AgentSummary, NewAgent};
pub use draft::{handoff_candidates, AgentDraft};
