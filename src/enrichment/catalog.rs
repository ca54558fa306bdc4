//! Static enrichment activity definitions - the catalog all foals draw from

use crate::core::types::AgeDays;
use crate::milestones::MilestoneType;
use serde::{Deserialize, Serialize};

/// Broad grouping of an enrichment activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Bonding,
    Social,
    Exploration,
    Handling,
    Desensitization,
    /// Any category this build does not know about
    #[serde(other)]
    Unknown,
}

impl ActivityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Bonding => "Bonding",
            ActivityCategory::Social => "Social",
            ActivityCategory::Exploration => "Exploration",
            ActivityCategory::Handling => "Handling",
            ActivityCategory::Desensitization => "Desensitization",
            ActivityCategory::Unknown => "Enrichment",
        }
    }
}

/// Prerequisites for an activity; an absent field means no check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<AgeDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<AgeDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_required: Option<MilestoneType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stress_level: Option<u8>,
}

impl ActivityRequirements {
    pub const NONE: ActivityRequirements = ActivityRequirements {
        min_age: None,
        max_age: None,
        milestone_required: None,
        max_stress_level: None,
    };
}

/// Definition of an enrichment activity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentActivityDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActivityCategory,
    pub requirements: ActivityRequirements,
    /// Minimum wait before the activity can be repeated
    pub cooldown_minutes: u32,
}

/// Global activity catalog - static definitions
pub static ACTIVITY_CATALOG: &[EnrichmentActivityDefinition] = &[
    EnrichmentActivityDefinition {
        id: "gentle_touch",
        name: "Gentle Touch",
        description: "Slow, calm stroking along the neck and shoulders.",
        category: ActivityCategory::Bonding,
        requirements: ActivityRequirements::NONE,
        cooldown_minutes: 60,
    },
    EnrichmentActivityDefinition {
        id: "quiet_presence",
        name: "Quiet Presence",
        description: "Sitting calmly in the stall so the foal grows used to people.",
        category: ActivityCategory::Bonding,
        requirements: ActivityRequirements {
            max_age: Some(7),
            ..ActivityRequirements::NONE
        },
        cooldown_minutes: 30,
    },
    EnrichmentActivityDefinition {
        id: "herd_introduction",
        name: "Herd Introduction",
        description: "Supervised time alongside calm herd members.",
        category: ActivityCategory::Social,
        requirements: ActivityRequirements {
            min_age: Some(4),
            milestone_required: Some(MilestoneType::Imprinting),
            max_stress_level: Some(60),
            ..ActivityRequirements::NONE
        },
        cooldown_minutes: 240,
    },
    EnrichmentActivityDefinition {
        id: "object_exploration",
        name: "Object Exploration",
        description: "Safe, unfamiliar objects left in the paddock to investigate.",
        category: ActivityCategory::Exploration,
        requirements: ActivityRequirements {
            min_age: Some(7),
            max_stress_level: Some(70),
            ..ActivityRequirements::NONE
        },
        cooldown_minutes: 120,
    },
    EnrichmentActivityDefinition {
        id: "obstacle_play",
        name: "Obstacle Play",
        description: "Low poles and soft barriers to step over and around.",
        category: ActivityCategory::Exploration,
        requirements: ActivityRequirements {
            min_age: Some(10),
            milestone_required: Some(MilestoneType::Socialization),
            max_stress_level: Some(50),
            ..ActivityRequirements::NONE
        },
        cooldown_minutes: 180,
    },
    EnrichmentActivityDefinition {
        id: "leading_practice",
        name: "Leading Practice",
        description: "Short walks on a soft lead rope beside the dam.",
        category: ActivityCategory::Handling,
        requirements: ActivityRequirements {
            min_age: Some(14),
            milestone_required: Some(MilestoneType::CuriosityPlay),
            ..ActivityRequirements::NONE
        },
        cooldown_minutes: 240,
    },
    EnrichmentActivityDefinition {
        id: "hoof_handling",
        name: "Hoof Handling",
        description: "Lifting and holding each hoof for a few seconds.",
        category: ActivityCategory::Handling,
        requirements: ActivityRequirements {
            min_age: Some(15),
            max_stress_level: Some(40),
            ..ActivityRequirements::NONE
        },
        cooldown_minutes: 360,
    },
    EnrichmentActivityDefinition {
        id: "sound_exposure",
        name: "Sound Exposure",
        description: "Everyday barn noises introduced at low volume.",
        category: ActivityCategory::Desensitization,
        requirements: ActivityRequirements {
            min_age: Some(21),
            milestone_required: Some(MilestoneType::TrustHandling),
            max_stress_level: Some(30),
            ..ActivityRequirements::NONE
        },
        cooldown_minutes: 720,
    },
    EnrichmentActivityDefinition {
        id: "trailer_exposure",
        name: "Trailer Exposure",
        description: "Walking up to, and briefly into, a parked trailer.",
        category: ActivityCategory::Desensitization,
        requirements: ActivityRequirements {
            min_age: Some(22),
            max_age: Some(30),
            milestone_required: Some(MilestoneType::TrustHandling),
            max_stress_level: Some(30),
        },
        cooldown_minutes: 1440,
    },
];

/// Look up an activity definition by id
pub fn get_activity_definition(id: &str) -> Option<&'static EnrichmentActivityDefinition> {
    ACTIVITY_CATALOG.iter().find(|def| def.id == id)
}

/// Display name for an activity id, generated from the id when not in the catalog
pub fn activity_label(id: &str) -> String {
    match get_activity_definition(id) {
        Some(def) => def.name.to_string(),
        None => title_case(id),
    }
}

/// `snake_case` or `kebab-case` id rendered as "Title Case"
pub(crate) fn title_case(id: &str) -> String {
    id.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = ACTIVITY_CATALOG.iter().map(|def| def.id).collect();
        assert_eq!(ids.len(), ACTIVITY_CATALOG.len());
    }

    #[test]
    fn test_age_requirements_are_consistent() {
        for def in ACTIVITY_CATALOG {
            if let (Some(min), Some(max)) = (def.requirements.min_age, def.requirements.max_age) {
                assert!(min <= max, "{} has min_age > max_age", def.id);
            }
            assert!(def.cooldown_minutes > 0, "{} has no cooldown", def.id);
        }
    }

    #[test]
    fn test_lookup() {
        let def = get_activity_definition("hoof_handling").unwrap();
        assert_eq!(def.category, ActivityCategory::Handling);
        assert!(get_activity_definition("jumping").is_none());
    }

    #[test]
    fn test_activity_label_fallback() {
        assert_eq!(activity_label("obstacle_play"), "Obstacle Play");
        assert_eq!(activity_label("mirror_work"), "Mirror Work");
        assert_eq!(activity_label("rain-walk"), "Rain Walk");
    }

    #[test]
    fn test_unknown_category_deserializes() {
        let category: ActivityCategory = serde_json::from_str("\"agility\"").unwrap();
        assert_eq!(category, ActivityCategory::Unknown);
        assert_eq!(category.label(), "Enrichment");
    }
}
