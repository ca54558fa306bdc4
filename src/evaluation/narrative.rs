//! User-facing explanation text for milestone evaluations

use crate::evaluation::outcome::MilestoneEvaluation;
use crate::evaluation::scorer::{
    category, clamp_score, progress_percentage, score_color, EvaluationCategory, ScoreColor,
};
use crate::evaluation::traits::trait_display_name;
use crate::milestones::MilestoneType;
use serde::Serialize;

/// Explanation paragraph for a milestone outcome
pub fn explanation(milestone: MilestoneType, category: EvaluationCategory) -> String {
    let name = milestone.display_name();
    match category {
        EvaluationCategory::Excellent => format!(
            "{name} results were excellent. Consistent, attentive care during this stage \
             gave the foal every chance to thrive, and its positive traits have been locked in."
        ),
        EvaluationCategory::Good => format!(
            "{name} went well. The foal received good care during this stage and a \
             positive trait has been confirmed."
        ),
        EvaluationCategory::Neutral => format!(
            "{name} was unremarkable. Care during this stage was adequate but not \
             consistent enough to shape the outcome, so the resulting trait was left to chance."
        ),
        EvaluationCategory::Poor => format!(
            "{name} was a struggle. Gaps in care during this stage left the foal \
             unsettled, and its development suffered for it."
        ),
        EvaluationCategory::Bad => format!(
            "{name} went badly. The foal was stressed and neglected during this stage, \
             and a negative trait has taken hold."
        ),
    }
}

/// What to do next, keyed by the three-way score band
pub fn care_guidance(score: f64) -> &'static str {
    let score = clamp_score(score);
    if score >= 3.0 {
        "Keep up the routine: regular enrichment and a calm environment carry over into the next stage."
    } else if score >= 0.0 {
        "Aim for more consistent enrichment and keep stress low to push the next stage toward a confirmed trait."
    } else {
        "Focus on bonding and lowering stress before the next stage; frequent gentle handling helps most."
    }
}

/// Everything a results panel shows for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub milestone_name: &'static str,
    pub milestone_description: &'static str,
    pub score: f64,
    pub category: EvaluationCategory,
    pub confirmation_reason: &'static str,
    pub color: ScoreColor,
    pub bar_percentage: u8,
    pub traits: Vec<String>,
    pub explanation: String,
    pub guidance: &'static str,
}

impl EvaluationSummary {
    pub fn from_evaluation(evaluation: &MilestoneEvaluation) -> Self {
        let milestone = evaluation.milestone();
        let score = evaluation.score();
        let category = category(score);
        Self {
            milestone_name: milestone.display_name(),
            milestone_description: milestone.description(),
            score,
            category,
            confirmation_reason: evaluation.confirmation().reason(),
            color: score_color(score),
            bar_percentage: progress_percentage(score),
            traits: evaluation
                .traits_confirmed()
                .iter()
                .map(|id| trait_display_name(id))
                .collect(),
            explanation: explanation(milestone, category),
            guidance: care_guidance(score),
        }
    }
}
