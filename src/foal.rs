//! Foal snapshot - the read-only view of a young horse this crate reasons over
//!
//! The foal record is owned elsewhere. Nothing here mutates it; callers apply
//! results (completed milestones, new history entries) and persist them.

use crate::core::error::Result;
use crate::core::types::{clamp_level, deserialize_level, AgeDays, FoalId, Timestamp};
use crate::enrichment::EnrichmentActivityStatus;
use crate::milestones::{milestone_timeline, Milestone, MilestoneType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One enrichment activity the foal has already performed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub activity_id: String,
    pub performed_at: Timestamp,
    /// Foal age on the day it was performed
    pub age_days: AgeDays,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foal {
    #[serde(default)]
    pub id: FoalId,
    #[serde(default)]
    pub name: String,
    pub age_days: AgeDays,
    /// Unrecognized milestone keys are dropped with a warning
    #[serde(default, deserialize_with = "crate::milestones::deserialize_milestone_types")]
    pub completed_milestones: Vec<MilestoneType>,
    /// Stress level (0-100)
    #[serde(default, deserialize_with = "deserialize_level")]
    pub stress_level: u8,
    /// Bonding level with caretakers (0-100)
    #[serde(default, deserialize_with = "deserialize_level")]
    pub bonding_level: u8,
    #[serde(default)]
    pub enrichment_history: Vec<ActivityRecord>,
}

impl Foal {
    pub fn new(name: impl Into<String>, age_days: AgeDays) -> Self {
        Self {
            id: FoalId::new(),
            name: name.into(),
            age_days,
            completed_milestones: Vec::new(),
            stress_level: 0,
            bonding_level: 50,
            enrichment_history: Vec::new(),
        }
    }

    pub fn with_stress(mut self, stress: f64) -> Self {
        self.stress_level = clamp_level(stress);
        self
    }

    pub fn with_bonding(mut self, bonding: f64) -> Self {
        self.bonding_level = clamp_level(bonding);
        self
    }

    pub fn with_completed(mut self, milestone: MilestoneType) -> Self {
        if !self.completed_milestones.contains(&milestone) {
            self.completed_milestones.push(milestone);
        }
        self
    }

    pub fn with_activity(mut self, record: ActivityRecord) -> Self {
        self.enrichment_history.push(record);
        self
    }

    pub fn has_completed(&self, milestone: MilestoneType) -> bool {
        self.completed_milestones.contains(&milestone)
    }

    /// History entries performed while the foal's age was inside the milestone window
    pub fn activities_during(&self, milestone: MilestoneType) -> impl Iterator<Item = &ActivityRecord> {
        let window = milestone.age_window();
        self.enrichment_history
            .iter()
            .filter(move |record| window.contains(record.age_days))
    }
}

/// Everything the fetch layer hands over for one foal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoalSnapshot {
    pub foal: Foal,
    /// Stored milestone list; empty means the standard timeline
    #[serde(default, deserialize_with = "crate::milestones::deserialize_milestones")]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub activity_statuses: Vec<EnrichmentActivityStatus>,
}

impl FoalSnapshot {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The stored milestones, or the standard timeline with the foal's
    /// completed milestones marked
    pub fn milestones(&self) -> Vec<Milestone> {
        if !self.milestones.is_empty() {
            return self.milestones.clone();
        }
        milestone_timeline()
            .into_iter()
            .map(|m| {
                if self.foal.has_completed(m.milestone_type) {
                    m.completed()
                } else {
                    m
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_clamp_on_construction() {
        let foal = Foal::new("Comet", 5).with_stress(140.0).with_bonding(-3.0);
        assert_eq!(foal.stress_level, 100);
        assert_eq!(foal.bonding_level, 0);
    }

    #[test]
    fn test_levels_clamp_on_deserialize() {
        let foal: Foal = serde_json::from_str(
            r#"{"name":"Comet","ageDays":4,"stressLevel":120.5,"bondingLevel":-10}"#,
        )
        .unwrap();
        assert_eq!(foal.stress_level, 100);
        assert_eq!(foal.bonding_level, 0);
        assert!(foal.completed_milestones.is_empty());
    }

    #[test]
    fn test_negative_age_is_rejected() {
        assert!(serde_json::from_str::<Foal>(r#"{"ageDays":-1}"#).is_err());
    }

    #[test]
    fn test_completed_is_not_duplicated() {
        let foal = Foal::new("Comet", 10)
            .with_completed(MilestoneType::Imprinting)
            .with_completed(MilestoneType::Imprinting);
        assert_eq!(foal.completed_milestones.len(), 1);
        assert!(foal.has_completed(MilestoneType::Imprinting));
    }

    #[test]
    fn test_snapshot_defaults_to_standard_timeline() {
        let snapshot = FoalSnapshot::from_json(
            r#"{"foal":{"name":"Comet","ageDays":9,"completedMilestones":["imprinting"]}}"#,
        )
        .unwrap();
        let milestones = snapshot.milestones();
        assert_eq!(milestones.len(), 5);
        assert!(milestones[0].is_completed());
        assert!(!milestones[1].is_completed());
        assert!(snapshot.activity_statuses.is_empty());
    }

    #[test]
    fn test_snapshot_skips_unknown_milestone_keys() {
        let snapshot = FoalSnapshot::from_json(
            r#"{
                "foal": {"name":"Comet","ageDays":9,"completedMilestones":["imprinting","weaning"]},
                "milestones": [
                    {"type":"imprinting","ageWindow":{"min":1,"max":3},"status":"completed"},
                    {"type":"weaning","ageWindow":{"min":60,"max":90},"status":"pending"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.foal.completed_milestones, vec![MilestoneType::Imprinting]);
        let milestones = snapshot.milestones();
        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].milestone_type, MilestoneType::Imprinting);
    }

    #[test]
    fn test_snapshot_rejects_bad_json() {
        assert!(FoalSnapshot::from_json("{\"foal\":").is_err());
    }

    #[test]
    fn test_activities_during_window() {
        let at = Timestamp::from_millis(0).unwrap();
        let record = |age| ActivityRecord {
            activity_id: "gentle_touch".into(),
            performed_at: at,
            age_days: age,
        };
        let foal = Foal::new("Comet", 12)
            .with_activity(record(2))
            .with_activity(record(9))
            .with_activity(record(12));
        assert_eq!(foal.activities_during(MilestoneType::CuriosityPlay).count(), 2);
        assert_eq!(foal.activities_during(MilestoneType::Imprinting).count(), 1);
    }
}
