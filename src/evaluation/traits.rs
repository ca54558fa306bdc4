//! Static trait definitions and the trait pools each milestone can settle

use crate::enrichment::catalog::title_case;
use crate::milestones::MilestoneType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitPolarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone)]
pub struct TraitDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub polarity: TraitPolarity,
}

/// Global trait table - static definitions
pub static TRAIT_DEFINITIONS: &[TraitDefinition] = &[
    TraitDefinition {
        id: "people_oriented",
        name: "People Oriented",
        description: "Seeks out human company and settles quickly when handled.",
        polarity: TraitPolarity::Positive,
    },
    TraitDefinition {
        id: "aloof",
        name: "Aloof",
        description: "Keeps its distance from people and bonds slowly.",
        polarity: TraitPolarity::Negative,
    },
    TraitDefinition {
        id: "herd_savvy",
        name: "Herd Savvy",
        description: "Reads other horses well and fits easily into a group.",
        polarity: TraitPolarity::Positive,
    },
    TraitDefinition {
        id: "antisocial",
        name: "Antisocial",
        description: "Uneasy around other horses and quick to pick fights.",
        polarity: TraitPolarity::Negative,
    },
    TraitDefinition {
        id: "curious",
        name: "Curious",
        description: "Approaches new things willingly and learns from them.",
        polarity: TraitPolarity::Positive,
    },
    TraitDefinition {
        id: "fearful",
        name: "Fearful",
        description: "Avoids the unfamiliar and is slow to investigate.",
        polarity: TraitPolarity::Negative,
    },
    TraitDefinition {
        id: "easy_handler",
        name: "Easy Handler",
        description: "Stands quietly to be led, groomed and examined.",
        polarity: TraitPolarity::Positive,
    },
    TraitDefinition {
        id: "head_shy",
        name: "Head Shy",
        description: "Resists being touched around the head and ears.",
        polarity: TraitPolarity::Negative,
    },
    TraitDefinition {
        id: "bold",
        name: "Bold",
        description: "Meets sudden sights and sounds with composure.",
        polarity: TraitPolarity::Positive,
    },
    TraitDefinition {
        id: "reactive",
        name: "Reactive",
        description: "Spooks easily and takes time to settle again.",
        polarity: TraitPolarity::Negative,
    },
];

/// Traits a milestone evaluation can confirm
#[derive(Debug, Clone)]
pub struct MilestoneTraitPool {
    pub milestone: MilestoneType,
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

pub static MILESTONE_TRAIT_POOLS: &[MilestoneTraitPool] = &[
    MilestoneTraitPool {
        milestone: MilestoneType::Imprinting,
        positive: &["people_oriented"],
        negative: &["aloof"],
    },
    MilestoneTraitPool {
        milestone: MilestoneType::Socialization,
        positive: &["herd_savvy"],
        negative: &["antisocial"],
    },
    MilestoneTraitPool {
        milestone: MilestoneType::CuriosityPlay,
        positive: &["curious"],
        negative: &["fearful"],
    },
    MilestoneTraitPool {
        milestone: MilestoneType::TrustHandling,
        positive: &["easy_handler"],
        negative: &["head_shy"],
    },
    MilestoneTraitPool {
        milestone: MilestoneType::ConfidenceReactivity,
        positive: &["bold"],
        negative: &["reactive"],
    },
];

pub fn get_trait_definition(id: &str) -> Option<&'static TraitDefinition> {
    TRAIT_DEFINITIONS.iter().find(|def| def.id == id)
}

pub fn trait_pool(milestone: MilestoneType) -> &'static MilestoneTraitPool {
    // Pool order matches declaration order
    &MILESTONE_TRAIT_POOLS[milestone as usize]
}

/// Display name for a trait id, generated from the id when not in the table
pub fn trait_display_name(id: &str) -> String {
    match get_trait_definition(id) {
        Some(def) => def.name.to_string(),
        None => title_case(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_reference_known_traits_with_matching_polarity() {
        for (index, pool) in MILESTONE_TRAIT_POOLS.iter().enumerate() {
            assert_eq!(pool.milestone as usize, index);
            for id in pool.positive {
                assert_eq!(get_trait_definition(id).unwrap().polarity, TraitPolarity::Positive);
            }
            for id in pool.negative {
                assert_eq!(get_trait_definition(id).unwrap().polarity, TraitPolarity::Negative);
            }
        }
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(trait_display_name("head_shy"), "Head Shy");
        assert_eq!(trait_display_name("night_owl"), "Night Owl");
        assert_eq!(trait_display_name(""), "");
    }
}
