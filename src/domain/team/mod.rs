// Team domain module
// Team wire shapes, the form draft and the member/entry-agent consistency rule

#![allow(clippy::module_inception)]

pub mod draft;
pub mod membership;
pub mod team;

// Re-export main types for convenience
pub use draft::TeamDraft;
pub use membership::{EntryCandidate, TeamMembership};
pub use team::{NewTeam, Team, TeamChanges, TeamSummary};
