//! ConflictPolicy value object - what happens when two targets disagree
//!
//! - `DropTarget`: a target that maps a known source path elsewhere is dropped whole
//! - `FirstWins`: the earlier mapping is kept and the rest of the target merges

use serde::{Deserialize, Serialize};

/// Conflict handling strategy for merging build maps
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Drop every target that conflicts with an already merged one
    #[default]
    DropTarget,
    /// Keep the first mapping seen for a source path
    FirstWins,
}

impl ConflictPolicy {
    /// Parse from a user-facing string (env vars, config)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "drop-target" | "drop_target" | "drop" => Some(Self::DropTarget),
            "first-wins" | "first_wins" | "first" => Some(Self::FirstWins),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictPolicy::DropTarget => write!(f, "drop-target"),
            ConflictPolicy::FirstWins => write!(f, "first-wins"),
        }
    }
}
