use crate::error::{PlannerError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Club used for a given round length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Hornung,
    /// Bulawayo Country Club.
    Bcc,
}

/// BCC membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    None,
    Member,
    /// Flat monthly fee with unlimited BCC rounds.
    Prepaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PracticeLocation {
    /// Driving range only, no short game area.
    #[serde(rename = "tincup")]
    #[value(name = "tincup")]
    TinCup,
    /// Bulawayo Golf Club.
    #[serde(rename = "bgc")]
    Bgc,
}

/// Billing plan at BGC. Ignored for TinCup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PracticePlan {
    PerSession,
    Unlimited,
}

/// Practice-focus priorities, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusPriorities {
    pub full_swing: f64,
    pub ball_shape: f64,
    pub short_game: f64,
    pub putting: f64,
    pub ball_volume: f64,
}

impl FocusPriorities {
    pub fn max(&self) -> f64 {
        [
            self.full_swing,
            self.ball_shape,
            self.short_game,
            self.putting,
            self.ball_volume,
        ]
        .into_iter()
        .fold(f64::MIN, f64::max)
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("full_swing", self.full_swing),
            ("ball_shape", self.ball_shape),
            ("short_game", self.short_game),
            ("putting", self.putting),
            ("ball_volume", self.ball_volume),
        ]
    }
}

impl Default for FocusPriorities {
    fn default() -> Self {
        Self {
            full_swing: 80.0,
            ball_shape: 70.0,
            short_game: 60.0,
            putting: 60.0,
            ball_volume: 70.0,
        }
    }
}

/// Relative priority weights. They do not need to sum to anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub cost: f64,
    pub practice: f64,
    pub experience: f64,
}

impl PriorityWeights {
    pub fn sum(&self) -> f64 {
        self.cost + self.practice + self.experience
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            cost: 50.0,
            practice: 30.0,
            experience: 20.0,
        }
    }
}

/// Everything the scoring engine needs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub rounds9: u32,
    pub rounds18: u32,
    pub course9: Course,
    pub course18: Course,
    pub membership: Membership,
    pub practice_sessions: u32,
    pub practice_location: PracticeLocation,
    pub practice_plan: PracticePlan,
    pub budget: f64,
    pub weights: PriorityWeights,
    pub focus: FocusPriorities,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            rounds9: 4,
            rounds18: 0,
            course9: Course::Hornung,
            course18: Course::Hornung,
            membership: Membership::None,
            practice_sessions: 6,
            practice_location: PracticeLocation::TinCup,
            practice_plan: PracticePlan::PerSession,
            budget: 80.0,
            weights: PriorityWeights::default(),
            focus: FocusPriorities::default(),
        }
    }
}

impl InputSnapshot {
    /// Domain check performed before handing the snapshot to the engine.
    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "budget must be a non-negative number (found {})",
                self.budget
            )));
        }

        for (name, weight) in [
            ("cost", self.weights.cost),
            ("practice", self.weights.practice),
            ("experience", self.weights.experience),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(PlannerError::InvalidInput(format!(
                    "weights.{name} must be a non-negative number (found {weight})"
                )));
            }
        }

        for (name, priority) in self.focus.named() {
            if !(0.0..=100.0).contains(&priority) {
                return Err(PlannerError::InvalidInput(format!(
                    "focus.{name} must be between 0 and 100 (found {priority})"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Suggestion {
    FullSwingAtBgc,
    ShortGameAtBgc,
    UpgradeToUnlimited,
    TinCupLacksShortGame,
    TinCupBudgetFullSwing,
    SetupMatches,
}

impl Suggestion {
    pub fn id(&self) -> &'static str {
        match self {
            Self::FullSwingAtBgc => "practice.full_swing",
            Self::ShortGameAtBgc => "practice.short_game",
            Self::UpgradeToUnlimited => "plan.upgrade_unlimited",
            Self::TinCupLacksShortGame => "location.tincup_short_game",
            Self::TinCupBudgetFullSwing => "location.tincup_budget",
            Self::SetupMatches => "practice.matches",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::FullSwingAtBgc => {
                "Focus on Bulawayo Golf Club for full swing and shot shaping practice."
            }
            Self::ShortGameAtBgc => {
                "Bulawayo Golf Club is recommended for short game and putting practice."
            }
            Self::UpgradeToUnlimited => {
                "Consider upgrading to the Unlimited ($40/mo) plan for cost efficiency."
            }
            Self::TinCupLacksShortGame => "TinCup is economical but lacks short game facilities.",
            Self::TinCupBudgetFullSwing => {
                "TinCup is suitable for basic full swing practice on a budget."
            }
            Self::SetupMatches => "Your current practice setup matches your priorities well.",
        }
    }
}

impl From<Suggestion> for String {
    fn from(suggestion: Suggestion) -> Self {
        suggestion.message().to_string()
    }
}

/// Scores for one evaluation. `suggestions` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSnapshot {
    pub total_cost: f64,
    pub practice_score: f64,
    pub experience_score: f64,
    pub overall_score: f64,
    pub suggestions: Vec<Suggestion>,
}
