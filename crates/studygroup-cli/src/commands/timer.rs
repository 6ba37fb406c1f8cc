use std::time::Duration;

use clap::Subcommand;
use serde_json::json;
use studygroup_core::timer::now_ms;
use studygroup_core::{format_hms, Config};

use super::{print_json, read_state, with_state, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the entered group's timer
    Start,
    /// Stop the timer, keeping the accumulated time
    Stop,
    /// Stop and clear the timer
    Reset,
    /// Print current timer state as JSON
    Status,
    /// Redraw the elapsed time until the given number of seconds passes
    Watch {
        /// How long to keep watching
        #[arg(long, default_value = "10")]
        seconds: u64,
    },
}

fn status_json(state: &studygroup_core::AppState, now: u64) -> CliResult<serde_json::Value> {
    let group_id = state.active_group()?.id.clone();
    let timer = state.timer()?;
    let elapsed = timer.elapsed(now);
    Ok(json!({
        "group_id": group_id,
        "running": timer.is_running(),
        "elapsed_ms": elapsed,
        "display": format_hms(elapsed),
    }))
}

/// Epoch ms at which `watch` stops, clamped instead of overflowing.
fn watch_deadline(now: u64, seconds: u64) -> u64 {
    now.saturating_add(seconds.saturating_mul(1000))
}

pub fn run(action: TimerAction) -> CliResult {
    match action {
        TimerAction::Start => with_state(|state| {
            match state.timer_start(now_ms())? {
                Some(event) => print_json(&event),
                None => {
                    println!("timer already running");
                    Ok(())
                }
            }
        }),
        TimerAction::Stop => with_state(|state| {
            match state.timer_stop(now_ms())? {
                Some(event) => print_json(&event),
                None => {
                    println!("timer not running");
                    Ok(())
                }
            }
        }),
        TimerAction::Reset => with_state(|state| {
            if let Some(event) = state.timer_reset()? {
                print_json(&event)?;
            }
            Ok(())
        }),
        TimerAction::Status => {
            let state = read_state()?;
            print_json(&status_json(&state, now_ms())?)
        }
        TimerAction::Watch { seconds } => {
            // Read-only; the snapshot is reloaded every tick.
            let refresh_ms = Config::load_or_default().timer.refresh_interval_ms.max(1);
            let interval = Duration::from_millis(refresh_ms);
            let until = watch_deadline(now_ms(), seconds);
            loop {
                let timer = read_state()?.timer()?;
                let now = now_ms();
                let status = if timer.is_running() { "running" } else { "stopped" };
                println!("{} {status}", format_hms(timer.elapsed(now)));
                if now >= until {
                    break;
                }
                std::thread::sleep(interval);
            }
            Ok(())
        }
    }
}
