//! Selection and aggregation across a foal's whole milestone list

use crate::core::types::AgeDays;
use crate::milestones::calculator;
use crate::milestones::definitions::MILESTONE_DEFINITIONS;
use crate::milestones::milestone::{Milestone, MilestoneStatus};

/// A fresh, all-pending timeline built from the static table
pub fn milestone_timeline() -> Vec<Milestone> {
    MILESTONE_DEFINITIONS
        .iter()
        .map(|def| Milestone::new(def.milestone_type))
        .collect()
}

/// The first milestone, in list order, whose window contains `age`
pub fn current_milestone(milestones: &[Milestone], age: AgeDays) -> Option<&Milestone> {
    milestones.iter().find(|m| m.age_window.contains(age))
}

/// Overall development progress, 0 to 100
///
/// Each completed milestone contributes a full share; the current milestone
/// contributes the fraction of its share it has progressed through.
pub fn development_progress(milestones: &[Milestone], age: AgeDays) -> u8 {
    if milestones.is_empty() {
        return 0;
    }
    let total = milestones.len() as f64;
    let completed = milestones
        .iter()
        .filter(|m| calculator::status(m, age) == MilestoneStatus::Completed)
        .count() as f64;

    let current_share = match current_milestone(milestones, age) {
        Some(m) if calculator::status(m, age) != MilestoneStatus::Completed => {
            calculator::progress(m, age) as f64 / total
        }
        _ => 0.0,
    };

    let pct = (completed / total * 100.0 + current_share).round();
    pct.min(100.0) as u8
}

/// Every milestone refreshed for `age`
pub fn advance_milestones(milestones: &[Milestone], age: AgeDays) -> Vec<Milestone> {
    milestones.iter().map(|m| m.refreshed(age)).collect()
}
