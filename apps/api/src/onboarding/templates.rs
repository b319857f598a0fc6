//! Empty onboarding state — the values a client seeds its multi-step form with
//! before the user has typed anything.
//!
//! Every leaf is an empty string, an empty list or a nested object. The
//! career-blueprint template mirrors the submission shape the validator reads.

use serde_json::{json, Value};

/// Form sections served by the empty-state endpoint.
pub const SECTIONS: [&str; 2] = ["resume", "career_blueprint"];

pub fn empty_resume_state() -> Value {
    json!({
        "job_information": {
            "current_job_title": "",
            "current_company": "",
            "industry": "",
            "time_in_current_role": "",
            "employment_type": "",
            "location": "",
            "total_years_of_experience": "",
            "promotion_before_that": "",
            "last_promotion_time": ""
        },
        "study_information": {
            "highest_level_of_education": "",
            "field_of_study": "",
            "institute_name": "",
            "relevance_of_education": "",
            "certificates_list": []
        },
        "skills_information": {
            "top_skills": [],
            "achievements": "",
            "performance_recognition": "",
            "current_role_experience": ""
        }
    })
}

pub fn empty_career_blueprint_state() -> Value {
    json!({
        "goals": {
            "short_term_goal": "",
            "long_term_goal": "",
            "no_goals": "",
            "readiness_for_next_goal": "",
            "development_for_next_role": "",
            "challenges_for_goals": "",
            "clarity_on_overcoming_obstacle": ""
        },
        "momentum": {
            "growth_in_responsibility": "",
            "recent_skill_development": "",
            "proactive_career_activities": "",
            "learning_agility": "",
            "proactive_learning_example": "",
            "personal_alignment_fulfilment": {
                "rating": "",
                "explaination": ""
            },
            "seniority_perception": {
                "isTrue": "",
                "explaination": ""
            },
            "industry_growth_trajectory_perception": ""
        },
        "market_view": {
            "annual_salary": "",
            "annual_bonus": "",
            "equity": "",
            "other_compensation": "",
            "compensation_growth_trajectory": ""
        },
        "work_style": {
            "preferred_coaching_style": "",
            "accountability_methods": "",
            "reaction_to_setback": "",
            "excitement_about_consiliari": ""
        },
        "leadership_capabilities": {
            "is_manage_team": "",
            "team_overall_performance": "",
            "perceive_as_a_leader": "",
            "relation_with_manager": "",
            "self_leadership_assessment": {
                "self_awareness": "",
                "effective_communication": "",
                "interpersonal_relations": "",
                "vision": "",
                "time_management": "",
                "decision_making": "",
                "developing_team_members": "",
                "team_performance_leadership": "",
                "conflict_resolution": "",
                "strategic_thinking": "",
                "organizational_collaboration": "",
                "executive_presence": ""
            }
        }
    })
}

pub fn empty_onboarding_state() -> Value {
    json!({
        "resume": empty_resume_state(),
        "career_blueprint": empty_career_blueprint_state(),
    })
}

/// Template for one section, `None` for an unknown name.
pub fn empty_section_state(section: &str) -> Option<Value> {
    match section {
        "resume" => Some(empty_resume_state()),
        "career_blueprint" => Some(empty_career_blueprint_state()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::{validate_submission, OptionCatalog};

    /// Dotted paths of every leaf in `value`.
    fn leaf_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_paths(v, &path, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    fn leaves(value: &Value) -> Vec<&Value> {
        match value {
            Value::Object(map) => map.values().flat_map(leaves).collect(),
            other => vec![other],
        }
    }

    #[test]
    fn test_every_leaf_is_empty() {
        let state = empty_onboarding_state();
        for leaf in leaves(&state) {
            let empty = matches!(leaf, Value::String(s) if s.is_empty())
                || matches!(leaf, Value::Array(a) if a.is_empty());
            assert!(empty, "non-empty leaf {leaf}");
        }
    }

    #[test]
    fn test_onboarding_state_has_both_sections() {
        let state = empty_onboarding_state();
        for section in SECTIONS {
            assert_eq!(state[section], empty_section_state(section).unwrap());
        }
        assert!(empty_section_state("payroll").is_none());
    }

    #[test]
    fn test_blueprint_template_fails_only_at_template_paths() {
        let template = empty_career_blueprint_state();
        let mut paths = Vec::new();
        leaf_paths(&template, "", &mut paths);

        let errors = validate_submission(&template, &OptionCatalog::builtin()).unwrap_err();
        assert!(!errors.is_empty());
        for error in errors.iter() {
            assert!(paths.contains(&error.path), "unexpected path {}", error.path);
        }
    }

    #[test]
    fn test_blueprint_template_optional_fields_do_not_fail() {
        let template = empty_career_blueprint_state();
        let errors = validate_submission(&template, &OptionCatalog::builtin()).unwrap_err();
        for optional in [
            "market_view.annual_bonus",
            "market_view.equity",
            "market_view.other_compensation",
            "work_style.excitement_about_consiliari",
        ] {
            assert!(errors.at(optional).is_none(), "{optional} should be optional");
        }
        // Other goals fields fail, so the short-term goal rule never runs.
        assert!(errors.at("goals.short_term_goal").is_none());
    }
}
