use crate::types::snapshot::{Course, InputSnapshot, Membership, PracticeLocation, PracticePlan};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "golf-planner",
    version,
    about = "Golf expense and practice planner: estimate monthly cost and practice quality"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a plan and list practice suggestions
    Evaluate(EvaluateCommand),
    /// Write a default golf.toml
    Init(InitCommand),
    /// Print the green-fee and practice fee schedule
    Fees,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Directory containing golf.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// 9-hole rounds per month
    #[arg(long)]
    pub rounds9: Option<u32>,
    /// 18-hole rounds per month
    #[arg(long)]
    pub rounds18: Option<u32>,
    #[arg(long, value_enum)]
    pub course9: Option<Course>,
    #[arg(long, value_enum)]
    pub course18: Option<Course>,
    #[arg(long, value_enum)]
    pub membership: Option<Membership>,

    /// Driving range sessions per month
    #[arg(long)]
    pub sessions: Option<u32>,
    #[arg(long, value_enum)]
    pub location: Option<PracticeLocation>,
    /// Only used with --location bgc
    #[arg(long, value_enum)]
    pub plan: Option<PracticePlan>,

    /// Monthly budget cap in dollars
    #[arg(long)]
    pub budget: Option<f64>,

    #[arg(long)]
    pub cost_weight: Option<f64>,
    #[arg(long)]
    pub practice_weight: Option<f64>,
    #[arg(long)]
    pub experience_weight: Option<f64>,

    #[arg(long)]
    pub full_swing: Option<f64>,
    #[arg(long)]
    pub ball_shape: Option<f64>,
    #[arg(long)]
    pub short_game: Option<f64>,
    #[arg(long)]
    pub putting: Option<f64>,
    #[arg(long)]
    pub ball_volume: Option<f64>,
}

impl EvaluateCommand {
    /// Command-line values win over whatever the plan file set.
    pub fn apply_overrides(&self, snapshot: &mut InputSnapshot) {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut snapshot.rounds9, self.rounds9);
        set(&mut snapshot.rounds18, self.rounds18);
        set(&mut snapshot.course9, self.course9);
        set(&mut snapshot.course18, self.course18);
        set(&mut snapshot.membership, self.membership);
        set(&mut snapshot.practice_sessions, self.sessions);
        set(&mut snapshot.practice_location, self.location);
        set(&mut snapshot.practice_plan, self.plan);
        set(&mut snapshot.budget, self.budget);
        set(&mut snapshot.weights.cost, self.cost_weight);
        set(&mut snapshot.weights.practice, self.practice_weight);
        set(&mut snapshot.weights.experience, self.experience_weight);
        set(&mut snapshot.focus.full_swing, self.full_swing);
        set(&mut snapshot.focus.ball_shape, self.ball_shape);
        set(&mut snapshot.focus.short_game, self.short_game);
        set(&mut snapshot.focus.putting, self.putting);
        set(&mut snapshot.focus.ball_volume, self.ball_volume);
    }
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let cli = Cli::parse_from([
            "golf-planner",
            "evaluate",
            "--course9",
            "bcc",
            "--membership",
            "member",
            "--location",
            "bgc",
            "--plan",
            "unlimited",
            "--putting",
            "95",
        ]);
        let Commands::Evaluate(cmd) = cli.command else {
            panic!("expected evaluate command");
        };

        let mut snapshot = InputSnapshot::default();
        cmd.apply_overrides(&mut snapshot);
        assert_eq!(snapshot.course9, Course::Bcc);
        assert_eq!(snapshot.membership, Membership::Member);
        assert_eq!(snapshot.practice_location, PracticeLocation::Bgc);
        assert_eq!(snapshot.practice_plan, PracticePlan::Unlimited);
        assert_eq!(snapshot.focus.putting, 95.0);
        assert_eq!(snapshot.rounds9, 4);
        assert_eq!(snapshot.budget, 80.0);
    }

    #[test]
    fn location_accepts_tincup_name() {
        let cli = Cli::parse_from(["golf-planner", "evaluate", "--location", "tincup"]);
        let Commands::Evaluate(cmd) = cli.command else {
            panic!("expected evaluate command");
        };
        assert_eq!(cmd.location, Some(PracticeLocation::TinCup));
    }
}
