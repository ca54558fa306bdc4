//! Score interpretation for milestone evaluations
//!
//! Scores live on a -10..=10 scale. Three independent readings are taken
//! from a score: a five-way quality category, a confirm/randomize decision
//! for traits, and a three-way display color. They share some thresholds but
//! are not derived from one another.

use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = -10.0;
pub const MAX_SCORE: f64 = 10.0;

/// Scores at or above this confirm a positive trait
pub const POSITIVE_CONFIRMATION_THRESHOLD: f64 = 3.0;
/// Scores at or below this confirm a negative trait
pub const NEGATIVE_CONFIRMATION_THRESHOLD: f64 = -3.0;

/// Clamp a raw score onto the evaluation scale
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        tracing::warn!("NaN evaluation score treated as 0");
        return 0.0;
    }
    let clamped = raw.clamp(MIN_SCORE, MAX_SCORE);
    if clamped != raw {
        tracing::warn!("Evaluation score {} clamped to {}", raw, clamped);
    }
    clamped
}

/// Five-way quality band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationCategory {
    Excellent,
    Good,
    Neutral,
    Poor,
    Bad,
}

impl EvaluationCategory {
    pub fn name(&self) -> &'static str {
        match self {
            EvaluationCategory::Excellent => "Excellent",
            EvaluationCategory::Good => "Good",
            EvaluationCategory::Neutral => "Neutral",
            EvaluationCategory::Poor => "Poor",
            EvaluationCategory::Bad => "Bad",
        }
    }
}

impl std::fmt::Display for EvaluationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Quality band for a score; each boundary belongs to the upper band
pub fn category(score: f64) -> EvaluationCategory {
    let score = clamp_score(score);
    if score >= 5.0 {
        EvaluationCategory::Excellent
    } else if score >= 3.0 {
        EvaluationCategory::Good
    } else if score >= 0.0 {
        EvaluationCategory::Neutral
    } else if score >= -3.0 {
        EvaluationCategory::Poor
    } else {
        EvaluationCategory::Bad
    }
}

/// What an evaluation does to trait outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    ConfirmsPositive,
    ConfirmsNegative,
    Randomized,
}

impl Confirmation {
    pub fn reason(&self) -> &'static str {
        match self {
            Confirmation::ConfirmsPositive => "confirms positive trait",
            Confirmation::ConfirmsNegative => "confirms negative trait",
            Confirmation::Randomized => "trait randomized",
        }
    }
}

/// Confirmation decision for a score
///
/// Good (3-4) already confirms, Neutral (0-2) does not.
pub fn confirmation(score: f64) -> Confirmation {
    let score = clamp_score(score);
    if score >= POSITIVE_CONFIRMATION_THRESHOLD {
        Confirmation::ConfirmsPositive
    } else if score <= NEGATIVE_CONFIRMATION_THRESHOLD {
        Confirmation::ConfirmsNegative
    } else {
        Confirmation::Randomized
    }
}

pub fn confirmation_reason(score: f64) -> &'static str {
    confirmation(score).reason()
}

/// Score rescaled from -10..=10 onto a 0..=100 bar
pub fn progress_percentage(score: f64) -> u8 {
    let score = clamp_score(score);
    ((score - MIN_SCORE) / (MAX_SCORE - MIN_SCORE) * 100.0).round() as u8
}

/// Three-way display band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

impl ScoreColor {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreColor::Green => "green",
            ScoreColor::Yellow => "yellow",
            ScoreColor::Red => "red",
        }
    }
}

pub fn score_color(score: f64) -> ScoreColor {
    let score = clamp_score(score);
    if score >= 3.0 {
        ScoreColor::Green
    } else if score >= 0.0 {
        ScoreColor::Yellow
    } else {
        ScoreColor::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(category(10.0), EvaluationCategory::Excellent);
        assert_eq!(category(5.0), EvaluationCategory::Excellent);
        assert_eq!(category(4.999), EvaluationCategory::Good);
        assert_eq!(category(3.0), EvaluationCategory::Good);
        assert_eq!(category(2.0), EvaluationCategory::Neutral);
        assert_eq!(category(0.0), EvaluationCategory::Neutral);
        assert_eq!(category(-0.5), EvaluationCategory::Poor);
        assert_eq!(category(-3.0), EvaluationCategory::Poor);
        assert_eq!(category(-4.0), EvaluationCategory::Bad);
        assert_eq!(category(-10.0), EvaluationCategory::Bad);
    }

    #[test]
    fn test_confirmation_asymmetry() {
        assert_eq!(confirmation_reason(3.0), "confirms positive trait");
        assert_eq!(confirmation_reason(2.0), "trait randomized");
        assert_eq!(confirmation_reason(0.0), "trait randomized");
        assert_eq!(confirmation_reason(-2.9), "trait randomized");
        assert_eq!(confirmation_reason(-3.0), "confirms negative trait");
        // Poor band straddles the negative threshold
        assert_eq!(category(-3.0), EvaluationCategory::Poor);
        assert_eq!(category(-2.0), EvaluationCategory::Poor);
        assert_eq!(confirmation(-2.0), Confirmation::Randomized);
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(-10.0), 0);
        assert_eq!(progress_percentage(0.0), 50);
        assert_eq!(progress_percentage(8.0), 90);
        assert_eq!(progress_percentage(10.0), 100);
        assert_eq!(progress_percentage(-3.0), 35);
    }

    #[test]
    fn test_color_bands() {
        assert_eq!(score_color(3.0), ScoreColor::Green);
        assert_eq!(score_color(2.9), ScoreColor::Yellow);
        assert_eq!(score_color(0.0), ScoreColor::Yellow);
        assert_eq!(score_color(-0.1), ScoreColor::Red);
        // Excellent and Good share a color
        assert_eq!(score_color(9.0), score_color(3.5));
    }

    #[test]
    fn test_out_of_range_scores_clamp() {
        assert_eq!(clamp_score(14.0), 10.0);
        assert_eq!(clamp_score(-30.0), -10.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(progress_percentage(25.0), 100);
        assert_eq!(category(-25.0), EvaluationCategory::Bad);
    }
}
