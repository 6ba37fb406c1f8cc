use clap::Subcommand;
use studygroup_core::{month_grid, YearMonth};

use super::{print_json, read_state, resolve_date, CliResult};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Show a month with your attendance marks
    Show {
        /// Year (default: current)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (default: current)
        #[arg(long)]
        month: Option<u32>,
        /// Step back or forward from the chosen month
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        offset: i32,
        /// Print the grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CalendarAction) -> CliResult {
    match action {
        CalendarAction::Show {
            year,
            month,
            offset,
            json,
        } => {
            let today = YearMonth::of(resolve_date(None)?);
            let mut ym = YearMonth::new(year.unwrap_or(today.year), month.unwrap_or(today.month))?;
            for _ in 0..offset.unsigned_abs() {
                ym = if offset < 0 { ym.prev() } else { ym.next() };
            }

            let state = read_state()?;
            let grid = month_grid(ym, &state.attendance()?);
            if json {
                print_json(&grid)
            } else {
                print!("{}", grid.render_text());
                Ok(())
            }
        }
    }
}
