//! Care history -> evaluation score
//!
//! Three components are read from the foal snapshot and summed:
//! - bond modifier: how attached the foal is to its caretakers (-2..=+2)
//! - task consistency: enrichment performed during the milestone window (0..=cap)
//! - care quality: how calm the foal has been kept (-2..=+2)

use crate::core::config::DevelopmentConfig;
use crate::evaluation::scorer::clamp_score;
use crate::foal::Foal;
use crate::milestones::MilestoneType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBreakdown {
    pub bond_modifier: i32,
    pub task_consistency: i32,
    pub care_quality: i32,
}

impl ComponentBreakdown {
    /// Sum of the components on the -10..=10 scale
    pub fn score(&self) -> f64 {
        clamp_score((self.bond_modifier + self.task_consistency + self.care_quality) as f64)
    }
}

pub fn bond_modifier(bonding_level: u8, config: &DevelopmentConfig) -> i32 {
    let steps = config
        .bond_thresholds
        .iter()
        .filter(|&&threshold| bonding_level >= threshold)
        .count() as i32;
    steps - 2
}

pub fn care_quality(stress_level: u8, config: &DevelopmentConfig) -> i32 {
    let steps = config
        .stress_thresholds
        .iter()
        .filter(|&&threshold| stress_level > threshold)
        .count() as i32;
    2 - steps
}

pub fn task_consistency(activities_in_window: usize, config: &DevelopmentConfig) -> i32 {
    let points = activities_in_window as u32 / config.activities_per_consistency_point;
    points.min(config.max_task_consistency) as i32
}

/// Components for `milestone` from the foal's current snapshot
pub fn compute_components(
    foal: &Foal,
    milestone: MilestoneType,
    config: &DevelopmentConfig,
) -> ComponentBreakdown {
    ComponentBreakdown {
        bond_modifier: bond_modifier(foal.bonding_level, config),
        task_consistency: task_consistency(foal.activities_during(milestone).count(), config),
        care_quality: care_quality(foal.stress_level, config),
    }
}
