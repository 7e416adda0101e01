//! Impact classification domain model.
//!
//! Every generated chapter carries an impact type derived from the day's
//! goal-completion ratio. The classification drives both the narrative tone
//! and the per-category statistics.

use serde::{Deserialize, Serialize};

/// Narrative consequence of a day's performance.
///
/// The categories are closed: templates and statistics match on them
/// exhaustively, so adding a variant is a deliberate schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactType {
    /// Every goal for the day was completed.
    Positive,
    /// Partial completion, or no goals were set at all.
    Negative,
    /// More completions than goals (over-achievement is a bonus, not an error).
    ExtraReward,
    /// Goals were set and none were completed.
    SeverePenalty,
}

impl ImpactType {
    /// Classify a day's performance.
    ///
    /// Rules are evaluated in order:
    /// 1. No goals set is a mild negative outcome, not a neutral one.
    /// 2. Setting goals and completing none is the severe penalty.
    /// 3. Partial completion stays negative.
    /// 4. Full completion is positive.
    /// 5. Over-counting (completed > total) must not crash; it is treated
    ///    as a bonus.
    ///
    /// Pure and total over all non-negative integer pairs.
    pub fn classify(total_goals: u32, completed_goals: u32) -> Self {
        if total_goals == 0 {
            Self::Negative
        } else if completed_goals == 0 {
            Self::SeverePenalty
        } else if completed_goals < total_goals {
            Self::Negative
        } else if completed_goals == total_goals {
            Self::Positive
        } else {
            Self::ExtraReward
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::ExtraReward => "extra_reward",
            Self::SeverePenalty => "severe_penalty",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "extra_reward" => Some(Self::ExtraReward),
            "severe_penalty" => Some(Self::SeverePenalty),
            _ => None,
        }
    }
}
