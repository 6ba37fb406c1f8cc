use chrono::Datelike;
use clap::Subcommand;
use studygroup_core::WeeklySummary;

use super::{print_json, read_state, resolve_date, CliResult};

#[derive(Subcommand)]
pub enum SummaryAction {
    /// This month's mark counts and total fine
    Month {
        /// Any date in the month, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Print the settlement as JSON
        #[arg(long)]
        json: bool,
    },
    /// This week's mark counts (Monday to Sunday) with feedback
    Week {
        /// Any date in the week, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: SummaryAction) -> CliResult {
    let state = read_state()?;

    match action {
        SummaryAction::Month { date, json } => {
            let day = resolve_date(date.as_deref())?;
            let settlement = state.monthly_settlement(day.year(), day.month())?;
            if json {
                print_json(&settlement)?;
            } else {
                let tally = settlement.tally;
                println!("O {} · △ {} · X {}", tally.complete, tally.partial, tally.absent);
                println!("fine: {}", settlement.total_fine);
            }
        }
        SummaryAction::Week { date } => {
            let day = resolve_date(date.as_deref())?;
            print_json(&WeeklySummary::for_week(&state.attendance()?, day))?;
        }
    }
    Ok(())
}
