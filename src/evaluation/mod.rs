//! Milestone evaluation
//!
//! An evaluation closes out a milestone: the foal's care history becomes a
//! bounded score, the score decides whether a trait is confirmed or left to
//! chance, and the result is rendered into explanation text.

pub mod components;
pub mod narrative;
pub mod outcome;
pub mod scorer;
pub mod traits;

pub use components::{compute_components, ComponentBreakdown};
pub use narrative::{care_guidance, explanation, EvaluationSummary};
pub use outcome::{evaluate_milestone, resolve_traits, MilestoneEvaluation};
pub use scorer::{
    category, clamp_score, confirmation, confirmation_reason, progress_percentage, score_color,
    Confirmation, EvaluationCategory, ScoreColor, MAX_SCORE, MIN_SCORE,
};
pub use traits::{get_trait_definition, trait_display_name, trait_pool, TraitDefinition, TraitPolarity};
