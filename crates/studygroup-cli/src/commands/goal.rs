use clap::Subcommand;
use studygroup_core::Config;

use super::{print_json, read_state, CliResult};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Split today's study minutes across your subjects
    Generate {
        /// Total minutes for today (falls back to goals.default_daily_minutes)
        #[arg(long, allow_negative_numbers = true)]
        minutes: Option<i64>,
        /// Print one line per subject instead of JSON
        #[arg(long)]
        text: bool,
    },
}

pub fn run(action: GoalAction) -> CliResult {
    match action {
        GoalAction::Generate { minutes, text } => {
            let minutes = minutes.unwrap_or_else(|| Config::load_or_default().goals.default_daily_minutes);
            let state = read_state()?;
            let goals = state.generate_goals(minutes)?;
            if text {
                for goal in &goals {
                    println!("{}: {} min / {} p", goal.name, goal.minutes, goal.pages);
                }
                Ok(())
            } else {
                print_json(&goals)
            }
        }
    }
}
