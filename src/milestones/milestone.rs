//! Milestone value object and its forward-only lifecycle

use crate::core::types::{deserialize_known_entries, AgeDays};
use crate::milestones::calculator;
use crate::milestones::definitions::{AgeWindow, MilestoneType};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle of a single milestone instance
///
/// Ordered: a milestone only ever moves Pending -> InProgress -> Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "Pending",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Completed => "Completed",
        }
    }
}

/// One milestone on a foal's timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    pub age_window: AgeWindow,
    pub status: MilestoneStatus,
}

impl Milestone {
    /// A pending milestone using the standard window for its type
    pub fn new(milestone_type: MilestoneType) -> Self {
        Self {
            milestone_type,
            age_window: milestone_type.age_window(),
            status: MilestoneStatus::Pending,
        }
    }

    pub fn with_window(milestone_type: MilestoneType, age_window: AgeWindow) -> Self {
        Self {
            milestone_type,
            age_window,
            status: MilestoneStatus::Pending,
        }
    }

    /// Explicit completion, e.g. after an evaluation was recorded
    pub fn completed(self) -> Self {
        Self {
            status: MilestoneStatus::Completed,
            ..self
        }
    }

    /// This milestone with its status recomputed for `age`
    ///
    /// Never moves backward: a later status is kept even if `age` would
    /// compute an earlier one.
    pub fn refreshed(self, age: AgeDays) -> Self {
        let computed = calculator::status(&self, age);
        if computed == MilestoneStatus::Completed && self.status != MilestoneStatus::Completed {
            tracing::debug!(
                "{} auto-completed at day {} (window {}-{})",
                self.milestone_type,
                age,
                self.age_window.min,
                self.age_window.max
            );
        }
        Self {
            status: computed.max(self.status),
            ..self
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }
}

/// Serde helper: stored milestone list, skipping entries of unknown type
pub fn deserialize_milestones<'de, D>(deserializer: D) -> Result<Vec<Milestone>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_known_entries(deserializer, "milestone")
}
