//! Enrichment activities
//!
//! Optional care actions with age, milestone and stress prerequisites and a
//! cooldown between repeats. The per-foal status of each activity is computed
//! by the caller from persisted history; this module only gates on it.

pub mod catalog;
pub mod cooldown;
pub mod eligibility;
pub mod status;

pub use catalog::{
    activity_label, get_activity_definition, ActivityCategory, ActivityRequirements,
    EnrichmentActivityDefinition, ACTIVITY_CATALOG,
};
pub use cooldown::{cooldown_display, format_duration, remaining_minutes};
pub use eligibility::{assess_catalog, available_activities, can_perform, Eligibility, IneligibleReason};
pub use status::{ActivityStatusKind, EnrichmentActivityStatus};
