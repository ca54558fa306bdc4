//! Static milestone definitions - the fixed developmental timeline every foal follows

use crate::core::types::{deserialize_known_entries, AgeDays};
use serde::{Deserialize, Deserializer, Serialize};

/// The five developmental stages of a foal's first month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    Imprinting,
    Socialization,
    CuriosityPlay,
    TrustHandling,
    ConfidenceReactivity,
}

impl MilestoneType {
    pub const ALL: [MilestoneType; 5] = [
        MilestoneType::Imprinting,
        MilestoneType::Socialization,
        MilestoneType::CuriosityPlay,
        MilestoneType::TrustHandling,
        MilestoneType::ConfidenceReactivity,
    ];

    /// Wire key, e.g. `curiosity_play`
    pub fn key(&self) -> &'static str {
        match self {
            MilestoneType::Imprinting => "imprinting",
            MilestoneType::Socialization => "socialization",
            MilestoneType::CuriosityPlay => "curiosity_play",
            MilestoneType::TrustHandling => "trust_handling",
            MilestoneType::ConfidenceReactivity => "confidence_reactivity",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Human-readable name for this milestone
    pub fn display_name(&self) -> &'static str {
        self.definition().name
    }

    pub fn description(&self) -> &'static str {
        self.definition().description
    }

    pub fn age_window(&self) -> AgeWindow {
        self.definition().window
    }

    pub fn definition(&self) -> &'static MilestoneDefinition {
        // Table order matches declaration order
        &MILESTONE_DEFINITIONS[*self as usize]
    }
}

impl std::fmt::Display for MilestoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Label used when a milestone key is not recognized
pub const GENERIC_MILESTONE_LABEL: &str = "Development Milestone";

/// Display name for a raw milestone key, falling back to a generic label
pub fn milestone_label(key: &str) -> &'static str {
    match MilestoneType::from_key(key) {
        Some(milestone) => milestone.display_name(),
        None => GENERIC_MILESTONE_LABEL,
    }
}

/// Serde helper: milestone keys, skipping any this build does not know
pub fn deserialize_milestone_types<'de, D>(deserializer: D) -> Result<Vec<MilestoneType>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_known_entries(deserializer, "milestone")
}

/// Inclusive age range in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeWindow {
    pub min: AgeDays,
    pub max: AgeDays,
}

impl AgeWindow {
    pub const fn new(min: AgeDays, max: AgeDays) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: AgeDays) -> bool {
        self.min <= age && age <= self.max
    }

    pub fn span(&self) -> AgeDays {
        self.max.saturating_sub(self.min)
    }
}

/// Definition of a developmental milestone
#[derive(Debug, Clone)]
pub struct MilestoneDefinition {
    pub milestone_type: MilestoneType,
    pub name: &'static str,
    pub description: &'static str,
    pub window: AgeWindow,
}

/// Global milestone table, ordered by age window
pub static MILESTONE_DEFINITIONS: &[MilestoneDefinition] = &[
    MilestoneDefinition {
        milestone_type: MilestoneType::Imprinting,
        name: "Imprinting",
        description: "The first days of life, when the foal forms its earliest bond and learns to accept human presence.",
        window: AgeWindow::new(1, 3),
    },
    MilestoneDefinition {
        milestone_type: MilestoneType::Socialization,
        name: "Socialization",
        description: "The foal learns how to behave around its dam, the herd, and the people who care for it.",
        window: AgeWindow::new(4, 7),
    },
    MilestoneDefinition {
        milestone_type: MilestoneType::CuriosityPlay,
        name: "Curiosity & Play",
        description: "The foal explores new objects and surroundings through play, shaping how it meets the unfamiliar.",
        window: AgeWindow::new(8, 14),
    },
    MilestoneDefinition {
        milestone_type: MilestoneType::TrustHandling,
        name: "Trust & Handling",
        description: "The foal learns to accept being led, touched, and handled, building trust in its caretakers.",
        window: AgeWindow::new(15, 21),
    },
    MilestoneDefinition {
        milestone_type: MilestoneType::ConfidenceReactivity,
        name: "Confidence & Reactivity",
        description: "The foal meets sudden sights and sounds, settling how boldly or nervously it reacts to the world.",
        window: AgeWindow::new(22, 30),
    },
];

/// Find the milestone whose window contains `age` in the static table
pub fn milestone_for_age(age: AgeDays) -> Option<MilestoneType> {
    MILESTONE_DEFINITIONS
        .iter()
        .find(|def| def.window.contains(age))
        .map(|def| def.milestone_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (index, def) in MILESTONE_DEFINITIONS.iter().enumerate() {
            assert_eq!(def.milestone_type as usize, index);
            assert_eq!(def.milestone_type.definition().name, def.name);
        }
    }

    #[test]
    fn test_windows_are_contiguous_and_disjoint() {
        assert_eq!(MILESTONE_DEFINITIONS[0].window.min, 1);
        for pair in MILESTONE_DEFINITIONS.windows(2) {
            assert!(pair[0].window.min <= pair[0].window.max);
            assert_eq!(pair[0].window.max + 1, pair[1].window.min);
        }
        assert_eq!(MILESTONE_DEFINITIONS.last().unwrap().window.max, 30);
    }

    #[test]
    fn test_curiosity_play_window() {
        assert_eq!(MilestoneType::CuriosityPlay.age_window(), AgeWindow::new(8, 14));
    }

    #[test]
    fn test_key_round_trip_and_fallback() {
        for milestone in MilestoneType::ALL {
            assert_eq!(MilestoneType::from_key(milestone.key()), Some(milestone));
        }
        assert_eq!(milestone_label("trust_handling"), "Trust & Handling");
        assert_eq!(milestone_label("weaning"), GENERIC_MILESTONE_LABEL);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&MilestoneType::ConfidenceReactivity).unwrap();
        assert_eq!(json, "\"confidence_reactivity\"");
    }

    #[test]
    fn test_unknown_keys_are_skipped_in_lists() {
        let mut de = serde_json::Deserializer::from_str(r#"["imprinting", "weaning", "trust_handling"]"#);
        let parsed = deserialize_milestone_types(&mut de).unwrap();
        assert_eq!(parsed, vec![MilestoneType::Imprinting, MilestoneType::TrustHandling]);
    }

    #[test]
    fn test_milestone_for_age() {
        assert_eq!(milestone_for_age(0), None);
        assert_eq!(milestone_for_age(1), Some(MilestoneType::Imprinting));
        assert_eq!(milestone_for_age(7), Some(MilestoneType::Socialization));
        assert_eq!(milestone_for_age(30), Some(MilestoneType::ConfidenceReactivity));
        assert_eq!(milestone_for_age(31), None);
    }
}
