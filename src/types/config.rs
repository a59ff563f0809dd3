use crate::types::snapshot::{
    Course, FocusPriorities, InputSnapshot, Membership, PracticeLocation, PracticePlan,
    PriorityWeights,
};
use serde::Deserialize;

/// Contents of a `golf.toml` plan file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    pub rounds: Option<RoundsConfig>,
    pub practice: Option<PracticeConfig>,
    pub budget: Option<BudgetConfig>,
    pub weights: Option<WeightsConfig>,
    pub focus: Option<FocusConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundsConfig {
    pub nine: Option<u32>,
    pub eighteen: Option<u32>,
    pub nine_course: Option<Course>,
    pub eighteen_course: Option<Course>,
    pub membership: Option<Membership>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PracticeConfig {
    pub sessions: Option<u32>,
    pub location: Option<PracticeLocation>,
    pub plan: Option<PracticePlan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudgetConfig {
    pub monthly_cap: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    pub cost: Option<f64>,
    pub practice: Option<f64>,
    pub experience: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusConfig {
    pub full_swing: Option<f64>,
    pub ball_shape: Option<f64>,
    pub short_game: Option<f64>,
    pub putting: Option<f64>,
    pub ball_volume: Option<f64>,
}

impl PlanConfig {
    /// Builds an input snapshot, filling gaps from [`InputSnapshot::default`].
    pub fn snapshot(&self) -> InputSnapshot {
        let defaults = InputSnapshot::default();
        let rounds = self.rounds.clone().unwrap_or_default();
        let practice = self.practice.clone().unwrap_or_default();
        let budget = self.budget.clone().unwrap_or_default();
        let weights = self.weights.clone().unwrap_or_default();
        let focus = self.focus.clone().unwrap_or_default();

        InputSnapshot {
            rounds9: rounds.nine.unwrap_or(defaults.rounds9),
            rounds18: rounds.eighteen.unwrap_or(defaults.rounds18),
            course9: rounds.nine_course.unwrap_or(defaults.course9),
            course18: rounds.eighteen_course.unwrap_or(defaults.course18),
            membership: rounds.membership.unwrap_or(defaults.membership),
            practice_sessions: practice.sessions.unwrap_or(defaults.practice_sessions),
            practice_location: practice.location.unwrap_or(defaults.practice_location),
            practice_plan: practice.plan.unwrap_or(defaults.practice_plan),
            budget: budget.monthly_cap.unwrap_or(defaults.budget),
            weights: PriorityWeights {
                cost: weights.cost.unwrap_or(defaults.weights.cost),
                practice: weights.practice.unwrap_or(defaults.weights.practice),
                experience: weights.experience.unwrap_or(defaults.weights.experience),
            },
            focus: FocusPriorities {
                full_swing: focus.full_swing.unwrap_or(defaults.focus.full_swing),
                ball_shape: focus.ball_shape.unwrap_or(defaults.focus.ball_shape),
                short_game: focus.short_game.unwrap_or(defaults.focus.short_game),
                putting: focus.putting.unwrap_or(defaults.focus.putting),
                ball_volume: focus.ball_volume.unwrap_or(defaults.focus.ball_volume),
            },
        }
    }
}

/// Plan file written by `golf-planner init`.
pub const DEFAULT_PLAN_TEMPLATE: &str = r#"# Monthly golf plan.

[rounds]
nine = 4
eighteen = 0
# hornung | bcc
nine_course = "hornung"
eighteen_course = "hornung"
# none | member | prepaid
membership = "none"

[practice]
sessions = 6
# tincup | bgc
location = "tincup"
# per_session | unlimited (bgc only)
plan = "per_session"

[budget]
monthly_cap = 80.0

[weights]
cost = 50.0
practice = 30.0
experience = 20.0

[focus]
full_swing = 80.0
ball_shape = 70.0
short_game = 60.0
putting = 60.0
ball_volume = 70.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let cfg: PlanConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn template_matches_defaults() {
        let cfg: PlanConfig =
            toml::from_str(DEFAULT_PLAN_TEMPLATE).expect("template should parse");
        assert_eq!(cfg.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn parse_partial_config_overrides_only_given_keys() {
        let toml_str = r#"
[rounds]
nine_course = "bcc"
membership = "prepaid"

[practice]
location = "bgc"
plan = "unlimited"

[weights]
cost = 0.0
"#;
        let cfg: PlanConfig = toml::from_str(toml_str).expect("config should parse");
        let snapshot = cfg.snapshot();
        assert_eq!(snapshot.course9, Course::Bcc);
        assert_eq!(snapshot.course18, Course::Hornung);
        assert_eq!(snapshot.membership, Membership::Prepaid);
        assert_eq!(snapshot.practice_location, PracticeLocation::Bgc);
        assert_eq!(snapshot.practice_plan, PracticePlan::Unlimited);
        assert_eq!(snapshot.weights.cost, 0.0);
        assert_eq!(snapshot.weights.practice, 30.0);
        assert_eq!(snapshot.rounds9, 4);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let toml_str = r#"
[focus]
full_swing = 50.0
driving_distance = 90.0
"#;
        let err = toml::from_str::<PlanConfig>(toml_str).expect_err("parse should fail");
        assert!(err.to_string().contains("driving_distance"));
    }

    #[test]
    fn parse_rejects_unknown_course() {
        let toml_str = r#"
[rounds]
nine_course = "augusta"
"#;
        assert!(toml::from_str::<PlanConfig>(toml_str).is_err());
    }
}
