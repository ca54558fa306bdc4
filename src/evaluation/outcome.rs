//! Milestone evaluation - closing out a milestone with a score and trait outcome

use crate::core::config::DevelopmentConfig;
use crate::core::error::{FoalError, Result};
use crate::evaluation::components::{compute_components, ComponentBreakdown};
use crate::evaluation::scorer::{confirmation, Confirmation};
use crate::evaluation::traits::trait_pool;
use crate::foal::Foal;
use crate::milestones::{Milestone, MilestoneType};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Result of evaluating one milestone; fixed once created
///
/// Deserialized records are checked against the same rules that built them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EvaluationRecord")]
pub struct MilestoneEvaluation {
    milestone: MilestoneType,
    score: f64,
    confirmation: Confirmation,
    traits_confirmed: Vec<String>,
    component_breakdown: ComponentBreakdown,
}

impl MilestoneEvaluation {
    /// Build an evaluation from precomputed components
    ///
    /// `seed` drives the trait draw when the score neither confirms a
    /// positive nor a negative trait; the same inputs always give the same
    /// evaluation.
    pub fn from_components(
        milestone: MilestoneType,
        component_breakdown: ComponentBreakdown,
        seed: u64,
    ) -> Self {
        let score = component_breakdown.score();
        let confirmation = confirmation(score);
        let traits_confirmed = resolve_traits(milestone, confirmation, seed);
        tracing::debug!(
            "{} evaluated: score {} ({}), traits {:?}",
            milestone,
            score,
            confirmation.reason(),
            traits_confirmed
        );
        Self {
            milestone,
            score,
            confirmation,
            traits_confirmed,
            component_breakdown,
        }
    }

    pub fn milestone(&self) -> MilestoneType {
        self.milestone
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn confirmation(&self) -> Confirmation {
        self.confirmation
    }

    pub fn traits_confirmed(&self) -> &[String] {
        &self.traits_confirmed
    }

    pub fn component_breakdown(&self) -> ComponentBreakdown {
        self.component_breakdown
    }

    /// The evaluated milestone, marked completed
    ///
    /// Fails without touching the milestone if it is not the one evaluated.
    pub fn close(&self, milestone: Milestone) -> Result<Milestone> {
        if milestone.milestone_type != self.milestone {
            return Err(FoalError::MilestoneMismatch {
                expected: self.milestone,
                found: milestone.milestone_type,
            });
        }
        Ok(milestone.completed())
    }
}

/// Wire shape of a stored evaluation, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationRecord {
    milestone: MilestoneType,
    score: f64,
    confirmation: Confirmation,
    traits_confirmed: Vec<String>,
    component_breakdown: ComponentBreakdown,
}

impl TryFrom<EvaluationRecord> for MilestoneEvaluation {
    type Error = FoalError;

    fn try_from(record: EvaluationRecord) -> Result<Self> {
        let expected_score = record.component_breakdown.score();
        if record.score != expected_score {
            return Err(FoalError::InvalidEvaluation(format!(
                "score {} does not match components ({})",
                record.score, expected_score
            )));
        }

        let expected_confirmation = confirmation(record.score);
        if record.confirmation != expected_confirmation {
            return Err(FoalError::InvalidEvaluation(format!(
                "score {} must be \"{}\", not \"{}\"",
                record.score,
                expected_confirmation.reason(),
                record.confirmation.reason()
            )));
        }

        let pool = trait_pool(record.milestone);
        let traits_valid = match record.confirmation {
            Confirmation::ConfirmsPositive => record.traits_confirmed.iter().eq(pool.positive.iter()),
            Confirmation::ConfirmsNegative => record.traits_confirmed.iter().eq(pool.negative.iter()),
            Confirmation::Randomized => {
                record.traits_confirmed.len() == 1
                    && pool
                        .positive
                        .iter()
                        .chain(pool.negative)
                        .any(|id| *id == record.traits_confirmed[0])
            }
        };
        if !traits_valid {
            return Err(FoalError::InvalidEvaluation(format!(
                "traits {:?} are not a {} outcome for {}",
                record.traits_confirmed,
                record.confirmation.reason(),
                record.milestone
            )));
        }

        Ok(Self {
            milestone: record.milestone,
            score: record.score,
            confirmation: record.confirmation,
            traits_confirmed: record.traits_confirmed,
            component_breakdown: record.component_breakdown,
        })
    }
}

/// Evaluate `milestone` from the foal's care history
pub fn evaluate_milestone(
    foal: &Foal,
    milestone: MilestoneType,
    config: &DevelopmentConfig,
    seed: u64,
) -> MilestoneEvaluation {
    let breakdown = compute_components(foal, milestone, config);
    MilestoneEvaluation::from_components(milestone, breakdown, seed)
}

/// Trait ids settled by a confirmation decision
pub fn resolve_traits(milestone: MilestoneType, confirmation: Confirmation, seed: u64) -> Vec<String> {
    let pool = trait_pool(milestone);
    let chosen: Vec<&str> = match confirmation {
        Confirmation::ConfirmsPositive => pool.positive.to_vec(),
        Confirmation::ConfirmsNegative => pool.negative.to_vec(),
        Confirmation::Randomized => {
            let combined: Vec<&str> = pool.positive.iter().chain(pool.negative).copied().collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            combined.choose(&mut rng).into_iter().copied().collect()
        }
    };
    chosen.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Timestamp;
    use crate::foal::ActivityRecord;

    fn breakdown(bond: i32, tasks: i32, care: i32) -> ComponentBreakdown {
        ComponentBreakdown {
            bond_modifier: bond,
            task_consistency: tasks,
            care_quality: care,
        }
    }

    #[test]
    fn test_high_score_confirms_positive_pool() {
        let eval = MilestoneEvaluation::from_components(MilestoneType::CuriosityPlay, breakdown(2, 3, 2), 1);
        assert_eq!(eval.score(), 7.0);
        assert_eq!(eval.confirmation(), Confirmation::ConfirmsPositive);
        assert_eq!(eval.traits_confirmed(), ["curious".to_string()]);
    }

    #[test]
    fn test_low_score_confirms_negative_pool() {
        let eval = MilestoneEvaluation::from_components(MilestoneType::TrustHandling, breakdown(-2, 0, -2), 1);
        assert_eq!(eval.score(), -4.0);
        assert_eq!(eval.traits_confirmed(), ["head_shy".to_string()]);
    }

    #[test]
    fn test_middle_score_draws_one_trait_deterministically() {
        let a = MilestoneEvaluation::from_components(MilestoneType::Socialization, breakdown(0, 1, 0), 42);
        let b = MilestoneEvaluation::from_components(MilestoneType::Socialization, breakdown(0, 1, 0), 42);
        assert_eq!(a.confirmation(), Confirmation::Randomized);
        assert_eq!(a.traits_confirmed().len(), 1);
        assert_eq!(a, b);
        let drawn = &a.traits_confirmed()[0];
        assert!(drawn == "herd_savvy" || drawn == "antisocial");
    }

    #[test]
    fn test_evaluate_milestone_from_foal() {
        let at = Timestamp::from_millis(0).unwrap();
        let mut foal = Foal::new("Comet", 3).with_bonding(90.0).with_stress(5.0);
        for age in 1..=3 {
            foal = foal.with_activity(ActivityRecord {
                activity_id: "gentle_touch".into(),
                performed_at: at,
                age_days: age,
            });
        }
        let eval = evaluate_milestone(&foal, MilestoneType::Imprinting, &DevelopmentConfig::default(), 7);
        assert_eq!(eval.component_breakdown(), breakdown(2, 1, 2));
        assert_eq!(eval.score(), 5.0);
        assert_eq!(eval.traits_confirmed(), ["people_oriented".to_string()]);
    }

    #[test]
    fn test_close_completes_milestone() {
        let eval = MilestoneEvaluation::from_components(MilestoneType::Imprinting, breakdown(0, 0, 0), 0);
        let closed = eval.close(Milestone::new(MilestoneType::Imprinting)).unwrap();
        assert!(closed.is_completed());
    }

    #[test]
    fn test_close_rejects_other_milestone() {
        let eval = MilestoneEvaluation::from_components(MilestoneType::Imprinting, breakdown(0, 0, 0), 0);
        let result = eval.close(Milestone::new(MilestoneType::Socialization));
        assert!(matches!(
            result,
            Err(FoalError::MilestoneMismatch {
                expected: MilestoneType::Imprinting,
                found: MilestoneType::Socialization,
            })
        ));
    }

    #[test]
    fn test_stored_evaluation_reloads() {
        for (components, seed) in [(breakdown(2, 3, 2), 0), (breakdown(0, 1, 0), 9), (breakdown(-2, 0, -2), 3)] {
            let eval = MilestoneEvaluation::from_components(MilestoneType::CuriosityPlay, components, seed);
            let json = serde_json::to_string(&eval).unwrap();
            let reloaded: MilestoneEvaluation = serde_json::from_str(&json).unwrap();
            assert_eq!(reloaded, eval);
        }
    }

    #[test]
    fn test_tampered_evaluation_is_rejected() {
        let eval = MilestoneEvaluation::from_components(MilestoneType::CuriosityPlay, breakdown(2, 3, 2), 0);
        let good = serde_json::to_value(&eval).unwrap();

        let mut out_of_range = good.clone();
        out_of_range["score"] = serde_json::json!(42.0);
        assert!(serde_json::from_value::<MilestoneEvaluation>(out_of_range).is_err());

        let mut wrong_confirmation = good.clone();
        wrong_confirmation["confirmation"] = serde_json::json!("randomized");
        assert!(serde_json::from_value::<MilestoneEvaluation>(wrong_confirmation).is_err());

        let mut wrong_traits = good;
        wrong_traits["traitsConfirmed"] = serde_json::json!(["fearful"]);
        let err = serde_json::from_value::<MilestoneEvaluation>(wrong_traits).unwrap_err();
        assert!(err.to_string().contains("Invalid evaluation record"));
    }

    #[test]
    fn test_serialized_shape() {
        let eval = MilestoneEvaluation::from_components(MilestoneType::Imprinting, breakdown(2, 3, 2), 0);
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["milestone"], "imprinting");
        assert_eq!(json["score"], 7.0);
        assert_eq!(json["componentBreakdown"]["bondModifier"], 2);
        assert_eq!(json["traitsConfirmed"][0], "people_oriented");
    }
}
