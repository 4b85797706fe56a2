//! Plan tiers and the content-slot limits they grant.
//!
//! A plan limit counts content slots including the main product, so a limit
//! of `n` makes bonus slots `1..n` visible.

use serde::{Deserialize, Serialize};

/// Smallest plan limit: main product only.
pub const MIN_PLAN_LIMIT: u8 = 1;

/// Largest plan limit: main product plus all nine bonus slots.
pub const MAX_PLAN_LIMIT: u8 = 10;

/// Subscription tier of the app owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Free,
    Basic,
    Pro,
    Premium,
}

impl PlanTier {
    /// Parse a tier name from the database; unknown tiers are treated as free.
    pub fn from_str_db(s: &str) -> Self {
        match s {
            "basic" => Self::Basic,
            "pro" => Self::Pro,
            "premium" => Self::Premium,
            _ => Self::Free,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Premium => "premium",
        }
    }

    /// Number of visible content slots (main product included).
    pub fn content_slots(self) -> u8 {
        match self {
            Self::Free => 1,
            Self::Basic => 4,
            Self::Pro => 7,
            Self::Premium => MAX_PLAN_LIMIT,
        }
    }
}

/// Clamp an arbitrary integer into the valid plan-limit range.
pub fn clamp_plan_limit(value: i64) -> u8 {
    value.clamp(MIN_PLAN_LIMIT as i64, MAX_PLAN_LIMIT as i64) as u8
}
