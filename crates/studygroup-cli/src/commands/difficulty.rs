use clap::Subcommand;
use studygroup_core::suggest_difficulty;

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum DifficultyAction {
    /// Suggest the next difficulty from planned vs. actual pace
    Suggest {
        /// Current difficulty (1-5)
        #[arg(long)]
        current: u32,
        #[arg(long)]
        target_minutes: u32,
        #[arg(long)]
        target_pages: u32,
        #[arg(long)]
        actual_minutes: u32,
        #[arg(long)]
        actual_pages: u32,
    },
}

pub fn run(action: DifficultyAction) -> CliResult {
    match action {
        DifficultyAction::Suggest {
            current,
            target_minutes,
            target_pages,
            actual_minutes,
            actual_pages,
        } => {
            let adjustment = suggest_difficulty(
                current,
                target_minutes,
                target_pages,
                actual_minutes,
                actual_pages,
            )?;
            print_json(&adjustment)
        }
    }
}
