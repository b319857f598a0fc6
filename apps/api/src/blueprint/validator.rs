//! Career blueprint validator.
//!
//! One reader per section, composed into [`validate_submission`]. Every section
//! is validated even when an earlier one fails, so the caller always receives
//! the full list of invalid fields.

use serde_json::Value;

use crate::blueprint::error::{ValidationErrors, Violation};
use crate::blueprint::models::{
    CareerBlueprint, Goals, LeadershipCapabilities, MarketView, Momentum, PersonalAlignment,
    SelfLeadershipAssessment, SeniorityPerception, WorkStyle,
};
use crate::blueprint::options::{OptionCatalog, OptionField};
use crate::blueprint::rules::{
    enum_member, non_empty_string_list, number_in_range, optional_amount, optional_string, rating,
    required_boolean, required_string,
};
use crate::blueprint::section::Section;

const TEXT_MAX: usize = 1000;
const SHORT_TEXT_MAX: usize = 500;

/// Validates a raw submission against the catalog's option sets.
pub fn validate_submission(
    raw: &Value,
    catalog: &OptionCatalog,
) -> Result<CareerBlueprint, ValidationErrors> {
    let mut root = Section::root(raw);

    let goals = root.nested("goals", "Goals", |s| goals(s, catalog));
    let momentum = root.nested("momentum", "Momentum", |s| momentum(s, catalog));
    let market_view = root.nested("market_view", "Market view", market_view);
    let work_style = root.nested("work_style", "Work style", |s| work_style(s, catalog));
    let leadership_capabilities = root.nested(
        "leadership_capabilities",
        "Leadership capabilities",
        |s| leadership_capabilities(s, catalog),
    );

    let blueprint = (|| {
        Some(CareerBlueprint {
            goals: goals?,
            momentum: momentum?,
            market_view: market_view?,
            work_style: work_style?,
            leadership_capabilities: leadership_capabilities?,
        })
    })();
    root.finish(blueprint)
}

fn goals(s: &mut Section, catalog: &OptionCatalog) -> Option<Goals> {
    let short_term_goal = s.field(
        "short_term_goal",
        optional_string("Short term goal", TEXT_MAX),
    );
    let long_term_goal = s.field("long_term_goal", required_string("Long term goal", TEXT_MAX));
    let no_goals = s.field("no_goals", required_boolean("No goals"));
    let readiness_for_next_goal = s.field(
        "readiness_for_next_goal",
        enum_member(
            "Readiness for next goal",
            catalog.allowed(OptionField::ReadinessForNextGoal),
        ),
    );
    let development_for_next_role = s.field(
        "development_for_next_role",
        required_string("Development for next role", TEXT_MAX),
    );
    let challenges_for_goals = s.field(
        "challenges_for_goals",
        required_string("Challenges for goals", TEXT_MAX),
    );
    let clarity_on_overcoming_obstacle = s.field(
        "clarity_on_overcoming_obstacle",
        rating("Clarity on overcoming obstacle", 1, 5),
    );

    let goals = Goals {
        short_term_goal: short_term_goal?,
        long_term_goal: long_term_goal?,
        no_goals: no_goals?,
        readiness_for_next_goal: readiness_for_next_goal?,
        development_for_next_role: development_for_next_role?,
        challenges_for_goals: challenges_for_goals?,
        clarity_on_overcoming_obstacle: clarity_on_overcoming_obstacle?,
    };
    refine_goals(s, &goals);
    Some(goals)
}

/// `short_term_goal` is required unless the user said they have no goals.
///
/// Only reached once every `goals` field passed its own check; its error joins
/// the same list as the field errors.
pub fn refine_goals(s: &mut Section, goals: &Goals) {
    if goals.no_goals {
        return;
    }
    let blank = goals
        .short_term_goal
        .as_deref()
        .map_or(true, |goal| goal.trim().is_empty());
    if blank {
        s.reject(
            "short_term_goal",
            Violation::required("Short term goal is required"),
        );
    }
}

fn personal_alignment(s: &mut Section) -> Option<PersonalAlignment> {
    let rating = s.field("rating", rating("Personal alignment rating", 1, 5));
    let explanation = s.field(
        "explaination",
        required_string("Personal alignment explanation", TEXT_MAX),
    );
    Some(PersonalAlignment {
        rating: rating?,
        explanation: explanation?,
    })
}

fn seniority_perception(s: &mut Section) -> Option<SeniorityPerception> {
    let is_true = s.field("isTrue", required_boolean("Seniority perception"));
    let explanation = s.field(
        "explaination",
        required_string("Seniority perception explanation", TEXT_MAX),
    );
    Some(SeniorityPerception {
        is_true: is_true?,
        explanation: explanation?,
    })
}

fn momentum(s: &mut Section, catalog: &OptionCatalog) -> Option<Momentum> {
    let growth_in_responsibility = s.field(
        "growth_in_responsibility",
        required_string("Growth in responsibility", TEXT_MAX),
    );
    let recent_skill_development = s.field(
        "recent_skill_development",
        required_string("Recent skill development", TEXT_MAX),
    );
    let proactive_career_activities = s.field(
        "proactive_career_activities",
        required_string("Proactive career activities", TEXT_MAX),
    );
    let learning_agility = s.field(
        "learning_agility",
        required_string("Learning agility", TEXT_MAX),
    );
    let proactive_learning_example = s.field(
        "proactive_learning_example",
        required_string("Proactive learning example", TEXT_MAX),
    );
    let personal_alignment_fulfilment = s.nested(
        "personal_alignment_fulfilment",
        "Personal alignment",
        personal_alignment,
    );
    let seniority_perception = s.nested(
        "seniority_perception",
        "Seniority perception",
        seniority_perception,
    );
    let industry_growth_trajectory_perception = s.field(
        "industry_growth_trajectory_perception",
        enum_member(
            "Industry growth trajectory perception",
            catalog.allowed(OptionField::IndustryGrowthTrajectoryPerception),
        ),
    );

    Some(Momentum {
        growth_in_responsibility: growth_in_responsibility?,
        recent_skill_development: recent_skill_development?,
        proactive_career_activities: proactive_career_activities?,
        learning_agility: learning_agility?,
        proactive_learning_example: proactive_learning_example?,
        personal_alignment_fulfilment: personal_alignment_fulfilment?,
        seniority_perception: seniority_perception?,
        industry_growth_trajectory_perception: industry_growth_trajectory_perception?,
    })
}

fn market_view(s: &mut Section) -> Option<MarketView> {
    let annual_salary = s.field(
        "annual_salary",
        number_in_range("Annual salary", 0.0, f64::INFINITY),
    );
    let annual_bonus = s.field("annual_bonus", optional_amount("Annual bonus"));
    let equity = s.field("equity", optional_amount("Equity"));
    let other_compensation = s.field(
        "other_compensation",
        optional_amount("Other compensation"),
    );
    let compensation_growth_trajectory = s.field(
        "compensation_growth_trajectory",
        required_string("Compensation growth trajectory", TEXT_MAX),
    );

    Some(MarketView {
        annual_salary: annual_salary?,
        annual_bonus: annual_bonus?,
        equity: equity?,
        other_compensation: other_compensation?,
        compensation_growth_trajectory: compensation_growth_trajectory?,
    })
}

fn work_style(s: &mut Section, catalog: &OptionCatalog) -> Option<WorkStyle> {
    let preferred_coaching_style = s.field(
        "preferred_coaching_style",
        enum_member(
            "Preferred coaching style",
            catalog.allowed(OptionField::PreferredCoachingStyle),
        ),
    );
    let accountability_methods = s.field(
        "accountability_methods",
        non_empty_string_list("Accountability method"),
    );
    let reaction_to_setback = s.field(
        "reaction_to_setback",
        enum_member(
            "Reaction to setback",
            catalog.allowed(OptionField::ReactionToSetback),
        ),
    );
    let excitement_about_consiliari = s.field(
        "excitement_about_consiliari",
        optional_string("Excitement about Consiliari", SHORT_TEXT_MAX),
    );

    Some(WorkStyle {
        preferred_coaching_style: preferred_coaching_style?,
        accountability_methods: accountability_methods?,
        reaction_to_setback: reaction_to_setback?,
        excitement_about_consiliari: excitement_about_consiliari?,
    })
}

fn self_leadership_assessment(s: &mut Section) -> Option<SelfLeadershipAssessment> {
    let mut score = |name: &str, label: &'static str| s.field(name, rating(label, 0, 100));

    let self_awareness = score("self_awareness", "Self-awareness");
    let effective_communication = score("effective_communication", "Effective communication");
    let interpersonal_relations = score("interpersonal_relations", "Interpersonal relations");
    let vision = score("vision", "Vision");
    let time_management = score("time_management", "Time management");
    let decision_making = score("decision_making", "Decision making");
    let developing_team_members = score("developing_team_members", "Developing team members");
    let team_performance_leadership =
        score("team_performance_leadership", "Team performance leadership");
    let conflict_resolution = score("conflict_resolution", "Conflict resolution");
    let strategic_thinking = score("strategic_thinking", "Strategic thinking");
    let organizational_collaboration =
        score("organizational_collaboration", "Organizational collaboration");
    let executive_presence = score("executive_presence", "Executive presence");

    Some(SelfLeadershipAssessment {
        self_awareness: self_awareness?,
        effective_communication: effective_communication?,
        interpersonal_relations: interpersonal_relations?,
        vision: vision?,
        time_management: time_management?,
        decision_making: decision_making?,
        developing_team_members: developing_team_members?,
        team_performance_leadership: team_performance_leadership?,
        conflict_resolution: conflict_resolution?,
        strategic_thinking: strategic_thinking?,
        organizational_collaboration: organizational_collaboration?,
        executive_presence: executive_presence?,
    })
}

fn leadership_capabilities(
    s: &mut Section,
    catalog: &OptionCatalog,
) -> Option<LeadershipCapabilities> {
    let is_manage_team = s.field("is_manage_team", required_boolean("Team management status"));
    let team_overall_performance = s.field(
        "team_overall_performance",
        enum_member(
            "Team overall performance",
            catalog.allowed(OptionField::TeamOverallPerformance),
        ),
    );
    let perceive_as_a_leader = s.field(
        "perceive_as_a_leader",
        enum_member(
            "Leadership perception",
            catalog.allowed(OptionField::PerceiveAsALeader),
        ),
    );
    let relation_with_manager = s.field(
        "relation_with_manager",
        enum_member(
            "Relation with manager",
            catalog.allowed(OptionField::RelationWithManager),
        ),
    );
    let self_leadership_assessment = s.nested(
        "self_leadership_assessment",
        "Self leadership assessment",
        self_leadership_assessment,
    );

    Some(LeadershipCapabilities {
        is_manage_team: is_manage_team?,
        team_overall_performance: team_overall_performance?,
        perceive_as_a_leader: perceive_as_a_leader?,
        relation_with_manager: relation_with_manager?,
        self_leadership_assessment: self_leadership_assessment?,
    })
}
