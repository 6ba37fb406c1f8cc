//! Attendance commands for CLI.

use clap::Subcommand;
use studygroup_core::state::parse_count;
use studygroup_core::{PageEntry, PageProgress};

use super::{print_json, read_state, resolve_date, with_state, CliResult};

#[derive(Subcommand)]
pub enum AttendAction {
    /// Record today's attendance from goal vs. actual progress
    Save {
        /// Planned study minutes
        #[arg(long)]
        goal: String,
        /// Minutes actually studied
        #[arg(long)]
        actual: String,
        /// Page progress lines, e.g. "goal 20 / actual 18" (repeatable)
        #[arg(long = "pages")]
        pages: Vec<String>,
        /// Structured page progress as SUBJECT:GOAL:ACTUAL (repeatable)
        #[arg(long = "entry")]
        entries: Vec<String>,
        /// Date to record, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Print your attendance record as JSON
    Show,
}

fn parse_entry(raw: &str) -> CliResult<PageEntry> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(actual), Some(goal), Some(subject)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("invalid entry '{raw}' (expected SUBJECT:GOAL:ACTUAL)").into());
    };
    Ok(PageEntry::new(
        subject.trim(),
        parse_count("goal_pages", goal)?,
        parse_count("actual_pages", actual)?,
    ))
}

pub fn run(action: AttendAction) -> CliResult {
    match action {
        AttendAction::Save {
            goal,
            actual,
            pages,
            entries,
            date,
        } => {
            let goal_minutes = parse_count("goal_minutes", &goal)?;
            let actual_minutes = parse_count("actual_minutes", &actual)?;
            let date = resolve_date(date.as_deref())?;

            let mut progress = PageProgress::parse(&pages.join("\n"));
            for raw in &entries {
                progress.entries.push(parse_entry(raw)?);
            }

            with_state(|state| {
                let event = state.save_attendance(date, goal_minutes, actual_minutes, &progress)?;
                print_json(&event)
            })
        }
        AttendAction::Show => {
            let state = read_state()?;
            print_json(&state.attendance()?)
        }
    }
}
