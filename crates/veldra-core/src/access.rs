//! Access levels - the totally ordered privilege ladder
//!
//! Both actors and commands carry an [`AccessLevel`]; the ordering is the
//! sole semantic. A dispatch is authorized iff the invoker's level satisfies
//! the command's required level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Privilege rank assigned to both actors and registered commands
///
/// Ranks are totally ordered; `a.satisfies(required)` iff `a >= required`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum AccessLevel {
    /// Ordinary player, no staff privileges
    #[default]
    Player = 0,
    /// Entry-level staff, player assistance only
    Counselor = 1,
    /// World staff with in-game moderation powers
    GameMaster = 2,
    /// Senior world staff, event and content tooling
    Seer = 3,
    /// Shard administration
    Administrator = 4,
    /// Engineering access
    Developer = 5,
    /// Unrestricted
    Owner = 6,
}

impl AccessLevel {
    /// Lowest rank on the ladder
    pub const MIN: AccessLevel = AccessLevel::Player;

    /// Highest rank on the ladder
    pub const MAX: AccessLevel = AccessLevel::Owner;

    /// True iff this level is sufficient for the given requirement
    pub fn satisfies(self, required: AccessLevel) -> bool {
        self >= required
    }

    /// Rank name as displayed to operators
    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Player => "Player",
            AccessLevel::Counselor => "Counselor",
            AccessLevel::GameMaster => "GameMaster",
            AccessLevel::Seer => "Seer",
            AccessLevel::Administrator => "Administrator",
            AccessLevel::Developer => "Developer",
            AccessLevel::Owner => "Owner",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = crate::VeldraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "player" => Ok(AccessLevel::Player),
            "counselor" => Ok(AccessLevel::Counselor),
            "gamemaster" => Ok(AccessLevel::GameMaster),
            "seer" => Ok(AccessLevel::Seer),
            "administrator" => Ok(AccessLevel::Administrator),
            "developer" => Ok(AccessLevel::Developer),
            "owner" => Ok(AccessLevel::Owner),
            other => Err(crate::VeldraError::invalid(format!(
                "unknown access level: {other}"
            ))),
        }
    }
}
