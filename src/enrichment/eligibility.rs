//! Whether a foal may perform an enrichment activity right now
//!
//! Gates run in a fixed order and the first one that fails decides the
//! reason, so the message shown for a given foal is always the same.

use crate::core::types::AgeDays;
use crate::enrichment::catalog::{EnrichmentActivityDefinition, ACTIVITY_CATALOG};
use crate::enrichment::status::{ActivityStatusKind, EnrichmentActivityStatus};
use crate::foal::Foal;
use crate::milestones::MilestoneType;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// The first gate an activity failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibleReason {
    Status(ActivityStatusKind),
    TooYoung { min_age: AgeDays },
    TooOld { max_age: AgeDays },
    MilestoneRequired(MilestoneType),
    TooStressed { stress_level: u8, max_stress_level: u8 },
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::Status(kind) => f.write_str(kind.label()),
            IneligibleReason::TooYoung { min_age } => {
                write!(f, "Foal must be at least {} days old", min_age)
            }
            IneligibleReason::TooOld { max_age } => {
                write!(f, "Foal must be {} days old or younger", max_age)
            }
            IneligibleReason::MilestoneRequired(milestone) => {
                write!(f, "Requires the {} milestone to be completed", milestone)
            }
            IneligibleReason::TooStressed {
                stress_level,
                max_stress_level,
            } => write!(
                f,
                "Stress level too high ({} > {})",
                stress_level, max_stress_level
            ),
        }
    }
}

/// Outcome of an eligibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    blocked_by: Option<IneligibleReason>,
}

impl Eligibility {
    pub fn allowed() -> Self {
        Self { blocked_by: None }
    }

    pub fn blocked(reason: IneligibleReason) -> Self {
        Self {
            blocked_by: Some(reason),
        }
    }

    pub fn can_perform(&self) -> bool {
        self.blocked_by.is_none()
    }

    pub fn blocked_by(&self) -> Option<IneligibleReason> {
        self.blocked_by
    }

    /// Human-readable reason, absent when the activity is allowed
    pub fn reason(&self) -> Option<String> {
        self.blocked_by.map(|r| r.to_string())
    }
}

impl Serialize for Eligibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Eligibility", 2)?;
        state.serialize_field("canPerform", &self.can_perform())?;
        match self.reason() {
            Some(reason) => state.serialize_field("reason", &reason)?,
            None => state.skip_field("reason")?,
        }
        state.end()
    }
}

/// Decide whether `foal` can perform `activity` given its current status record
pub fn can_perform(
    activity: &EnrichmentActivityDefinition,
    foal: &Foal,
    status: &EnrichmentActivityStatus,
) -> Eligibility {
    match first_failed_gate(activity, foal, status) {
        Some(reason) => {
            tracing::debug!("{} blocked for foal {:?}: {}", activity.id, foal.id, reason);
            Eligibility::blocked(reason)
        }
        None => Eligibility::allowed(),
    }
}

fn first_failed_gate(
    activity: &EnrichmentActivityDefinition,
    foal: &Foal,
    status: &EnrichmentActivityStatus,
) -> Option<IneligibleReason> {
    if status.status != ActivityStatusKind::Available {
        return Some(IneligibleReason::Status(status.status));
    }

    let req = &activity.requirements;

    if let Some(min_age) = req.min_age {
        if foal.age_days < min_age {
            return Some(IneligibleReason::TooYoung { min_age });
        }
    }

    if let Some(max_age) = req.max_age {
        if foal.age_days > max_age {
            return Some(IneligibleReason::TooOld { max_age });
        }
    }

    if let Some(milestone) = req.milestone_required {
        if !foal.has_completed(milestone) {
            return Some(IneligibleReason::MilestoneRequired(milestone));
        }
    }

    if let Some(max_stress_level) = req.max_stress_level {
        if foal.stress_level > max_stress_level {
            return Some(IneligibleReason::TooStressed {
                stress_level: foal.stress_level,
                max_stress_level,
            });
        }
    }

    None
}

/// Every catalog activity with its eligibility for `foal`
///
/// Activities without a status record are treated as available.
pub fn assess_catalog(
    foal: &Foal,
    statuses: &[EnrichmentActivityStatus],
) -> Vec<(&'static EnrichmentActivityDefinition, Eligibility)> {
    ACTIVITY_CATALOG
        .iter()
        .map(|activity| {
            let eligibility = match statuses.iter().find(|s| s.activity_id == activity.id) {
                Some(status) => can_perform(activity, foal, status),
                None => can_perform(activity, foal, &EnrichmentActivityStatus::available(activity.id)),
            };
            (activity, eligibility)
        })
        .collect()
}

/// Catalog activities the foal can perform right now
pub fn available_activities(
    foal: &Foal,
    statuses: &[EnrichmentActivityStatus],
) -> Vec<&'static EnrichmentActivityDefinition> {
    assess_catalog(foal, statuses)
        .into_iter()
        .filter(|(_, eligibility)| eligibility.can_perform())
        .map(|(activity, _)| activity)
        .collect()
}
