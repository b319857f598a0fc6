use serde::{Deserialize, Serialize, Serializer};

/// A validated career blueprint. Wire names match what the onboarding form sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerBlueprint {
    pub goals: Goals,
    pub momentum: Momentum,
    pub market_view: MarketView,
    pub work_style: WorkStyle,
    pub leadership_capabilities: LeadershipCapabilities,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_term_goal: Option<String>,
    pub long_term_goal: String,
    pub no_goals: bool,
    pub readiness_for_next_goal: String,
    pub development_for_next_role: String,
    pub challenges_for_goals: String,
    /// 1-5
    pub clarity_on_overcoming_obstacle: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalAlignment {
    /// 1-5
    pub rating: u8,
    #[serde(rename = "explaination")]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorityPerception {
    #[serde(rename = "isTrue")]
    pub is_true: bool,
    #[serde(rename = "explaination")]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Momentum {
    pub growth_in_responsibility: String,
    pub recent_skill_development: String,
    pub proactive_career_activities: String,
    pub learning_agility: String,
    pub proactive_learning_example: String,
    pub personal_alignment_fulfilment: PersonalAlignment,
    pub seniority_perception: SeniorityPerception,
    pub industry_growth_trajectory_perception: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketView {
    #[serde(serialize_with = "serialize_amount")]
    pub annual_salary: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub annual_bonus: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub equity: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub other_compensation: f64,
    pub compensation_growth_trajectory: String,
}

/// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole amounts go out as JSON integers, so `145000` is returned as `145000`.
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkStyle {
    pub preferred_coaching_style: String,
    pub accountability_methods: Vec<String>,
    pub reaction_to_setback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excitement_about_consiliari: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadershipCapabilities {
    pub is_manage_team: bool,
    pub team_overall_performance: String,
    pub perceive_as_a_leader: String,
    pub relation_with_manager: String,
    pub self_leadership_assessment: SelfLeadershipAssessment,
}

/// Twelve self-assessed scores, each 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfLeadershipAssessment {
    pub self_awareness: u8,
    pub effective_communication: u8,
    pub interpersonal_relations: u8,
    pub vision: u8,
    pub time_management: u8,
    pub decision_making: u8,
    pub developing_team_members: u8,
    pub team_performance_leadership: u8,
    pub conflict_resolution: u8,
    pub strategic_thinking: u8,
    pub organizational_collaboration: u8,
    pub executive_presence: u8,
}
