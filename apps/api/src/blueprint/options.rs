//! Option catalog — the allowed values for every enumerated blueprint field.
//!
//! The catalog is product vocabulary, not validation logic: it is versioned,
//! can be replaced at startup from a JSON file, and is served to the client so
//! the form and the validator always agree on the same lists.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enumerated fields backed by an option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    ReadinessForNextGoal,
    IndustryGrowthTrajectoryPerception,
    PreferredCoachingStyle,
    ReactionToSetback,
    TeamOverallPerformance,
    PerceiveAsALeader,
    RelationWithManager,
    /// Suggestions shown by the form; free-form entries are accepted.
    AccountabilityMethods,
}

impl OptionField {
    pub const ALL: [OptionField; 8] = [
        OptionField::ReadinessForNextGoal,
        OptionField::IndustryGrowthTrajectoryPerception,
        OptionField::PreferredCoachingStyle,
        OptionField::ReactionToSetback,
        OptionField::TeamOverallPerformance,
        OptionField::PerceiveAsALeader,
        OptionField::RelationWithManager,
        OptionField::AccountabilityMethods,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            OptionField::ReadinessForNextGoal => "readiness_for_next_goal",
            OptionField::IndustryGrowthTrajectoryPerception => {
                "industry_growth_trajectory_perception"
            }
            OptionField::PreferredCoachingStyle => "preferred_coaching_style",
            OptionField::ReactionToSetback => "reaction_to_setback",
            OptionField::TeamOverallPerformance => "team_overall_performance",
            OptionField::PerceiveAsALeader => "perceive_as_a_leader",
            OptionField::RelationWithManager => "relation_with_manager",
            OptionField::AccountabilityMethods => "accountability_methods",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("option set '{0}' is missing")]
    MissingOptionSet(&'static str),

    #[error("option set '{0}' is empty")]
    EmptyOptionSet(&'static str),

    #[error("option set '{field}' lists '{value}' more than once")]
    DuplicateOption { field: &'static str, value: String },

    #[error("invalid catalog JSON: {0}")]
    Parse(String),
}

/// Versioned mapping from field name to its ordered allowed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionCatalog {
    pub version: String,
    pub options: BTreeMap<String, Vec<String>>,
}

const BUILTIN_VERSION: &str = "2024-11-01";

const READINESS_FOR_NEXT_GOAL: &[&str] = &[
    "Ready now",
    "Ready in 6-12 months",
    "Ready in 1-2 years",
    "Not sure yet",
];

const INDUSTRY_GROWTH_TRAJECTORY_PERCEPTION: &[&str] = &[
    "Rapidly growing",
    "Growing steadily",
    "Stable",
    "Declining",
    "Not sure",
];

const PREFERRED_COACHING_STYLE: &[&str] = &[
    "Directive",
    "Supportive",
    "Collaborative",
    "Challenging",
];

const REACTION_TO_SETBACK: &[&str] = &[
    "Bounce back quickly",
    "Reflect and adjust",
    "Seek support from others",
    "Take time to recover",
];

const TEAM_OVERALL_PERFORMANCE: &[&str] = &[
    "Exceeding expectations",
    "Meeting expectations",
    "Below expectations",
    "Not applicable",
];

const PERCEIVE_AS_A_LEADER: &[&str] = &[
    "Strongly agree",
    "Agree",
    "Neutral",
    "Disagree",
    "Strongly disagree",
];

const RELATION_WITH_MANAGER: &[&str] = &[
    "Excellent",
    "Good",
    "Neutral",
    "Strained",
    "I don't have a manager",
];

const ACCOUNTABILITY_METHODS: &[&str] = &[
    "Regular check-ins",
    "Written goals and milestones",
    "Progress tracking tools",
    "Peer accountability",
    "Self-reflection",
];

impl OptionCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        let sets: [(OptionField, &[&str]); 8] = [
            (OptionField::ReadinessForNextGoal, READINESS_FOR_NEXT_GOAL),
            (
                OptionField::IndustryGrowthTrajectoryPerception,
                INDUSTRY_GROWTH_TRAJECTORY_PERCEPTION,
            ),
            (OptionField::PreferredCoachingStyle, PREFERRED_COACHING_STYLE),
            (OptionField::ReactionToSetback, REACTION_TO_SETBACK),
            (OptionField::TeamOverallPerformance, TEAM_OVERALL_PERFORMANCE),
            (OptionField::PerceiveAsALeader, PERCEIVE_AS_A_LEADER),
            (OptionField::RelationWithManager, RELATION_WITH_MANAGER),
            (OptionField::AccountabilityMethods, ACCOUNTABILITY_METHODS),
        ];
        let options = sets
            .iter()
            .map(|(field, values)| {
                (
                    field.key().to_string(),
                    values.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self {
            version: BUILTIN_VERSION.to_string(),
            options,
        }
    }

    /// Parses and checks a catalog supplied as JSON.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: OptionCatalog =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Loads a catalog file, e.g. the one named by `OPTION_CATALOG_PATH`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read option catalog {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("Option catalog {} is invalid", path.display()))?;
        Ok(catalog)
    }

    /// Every option set must be present, non-empty and free of duplicates.
    pub fn check(&self) -> Result<(), CatalogError> {
        for field in OptionField::ALL {
            let key = field.key();
            let values = self
                .options
                .get(key)
                .ok_or(CatalogError::MissingOptionSet(key))?;
            if values.is_empty() {
                return Err(CatalogError::EmptyOptionSet(key));
            }
            for (i, value) in values.iter().enumerate() {
                if values[..i].contains(value) {
                    return Err(CatalogError::DuplicateOption {
                        field: key,
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Allowed values for `field`. Empty only for an unchecked catalog.
    pub fn allowed(&self, field: OptionField) -> &[String] {
        self.options
            .get(field.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
