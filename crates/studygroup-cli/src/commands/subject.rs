//! Subject commands. A created subject is optionally pushed to the remote
//! API; a failed push only warns.

use clap::Subcommand;
use studygroup_core::{AppState, Config, Subject, SubjectDraft, SyncClient};
use tracing::warn;

use super::{print_json, read_state, with_state, CliResult};

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject to your list in the entered group
    Add {
        /// Subject name
        name: String,
        /// Total pages to cover
        #[arg(long)]
        pages: String,
        /// Importance rating
        #[arg(long)]
        importance: String,
        /// Difficulty rating
        #[arg(long)]
        difficulty: String,
        /// Days to finish the subject
        #[arg(long)]
        days: String,
    },
    /// Remove a subject by its list index
    Remove {
        /// Zero-based index from `subject list`
        index: usize,
    },
    /// List your subjects in the entered group
    List,
}

fn push_remote(group_id: &str, subject: &Subject) {
    let config = Config::load_or_default();
    if !config.sync.enabled {
        return;
    }
    if let Err(e) = try_push(&config, group_id, subject) {
        warn!(%group_id, subject = %subject.name, "remote sync failed: {e}");
        eprintln!("warning: subject saved locally, remote sync failed: {e}");
    }
}

fn try_push(config: &Config, group_id: &str, subject: &Subject) -> CliResult {
    let client = SyncClient::from_config(&config.sync)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(client.create_subject(group_id, subject))?;
    Ok(())
}

fn active_group_id(state: &AppState) -> CliResult<String> {
    Ok(state.active_group()?.id.clone())
}

pub fn run(action: SubjectAction) -> CliResult {
    match action {
        SubjectAction::Add {
            name,
            pages,
            importance,
            difficulty,
            days,
        } => {
            let draft = SubjectDraft {
                name,
                total_pages: pages,
                importance,
                difficulty,
                period_days: days,
            };
            let (group_id, subject) = with_state(|state| {
                let (event, subject) = state.add_subject(&draft)?;
                print_json(&event)?;
                Ok((active_group_id(state)?, subject))
            })?;
            push_remote(&group_id, &subject);
            Ok(())
        }
        SubjectAction::Remove { index } => with_state(|state| {
            let event = state.remove_subject(index)?;
            print_json(&event)
        }),
        SubjectAction::List => {
            let state = read_state()?;
            print_json(state.subjects()?)
        }
    }
}
