//! Developmental milestones
//!
//! A foal passes through five fixed stages in its first month. Each stage has
//! an inclusive age window; the windows are contiguous and never overlap, so at
//! most one milestone is ever in progress.

pub mod calculator;
pub mod definitions;
pub mod milestone;
pub mod selector;

pub use calculator::{days_until, progress, status};
pub use definitions::{
    deserialize_milestone_types, milestone_for_age, milestone_label, AgeWindow, MilestoneDefinition, MilestoneType,
    GENERIC_MILESTONE_LABEL, MILESTONE_DEFINITIONS,
};
pub use milestone::{deserialize_milestones, Milestone, MilestoneStatus};
pub use selector::{advance_milestones, current_milestone, development_progress, milestone_timeline};
