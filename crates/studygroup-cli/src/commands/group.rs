//! Group management commands for CLI.

use clap::Subcommand;

use super::{print_json, read_state, with_state, CliResult};

#[derive(Subcommand)]
pub enum GroupAction {
    /// Create a group; you become its owner
    Create {
        /// Group name
        name: String,
    },
    /// Join an existing group by id
    Join {
        /// Group ID
        id: String,
    },
    /// Delete a group (owner only)
    Delete {
        /// Group ID
        id: String,
    },
    /// List all groups with your role in each
    List,
    /// Enter a group you are a member of
    Enter {
        /// Group ID
        id: String,
    },
    /// Leave the entered group view
    Leave,
    /// List members of the entered group
    Members,
    /// Rank members of the entered group by complete days, then minutes
    Ranking,
    /// Set the entered group's fines per partial and absent day (owner only)
    Fine {
        #[arg(long)]
        partial: u64,
        #[arg(long)]
        absent: u64,
    },
}

pub fn run(action: GroupAction) -> CliResult {
    match action {
        GroupAction::Create { name } => with_state(|state| {
            let event = state.create_group(&name)?;
            print_json(&event)
        }),
        GroupAction::Join { id } => with_state(|state| {
            let event = state.join_group(&id)?;
            print_json(&event)
        }),
        GroupAction::Delete { id } => with_state(|state| {
            match state.delete_group(&id)? {
                Some(event) => print_json(&event),
                None => {
                    println!("no group with id {id}");
                    Ok(())
                }
            }
        }),
        GroupAction::List => {
            let state = read_state()?;
            print_json(&state.group_summaries()?)
        }
        GroupAction::Enter { id } => with_state(|state| {
            let group = state.enter_group(&id)?;
            println!("Entered: {} ({})", group.name, group.id);
            Ok(())
        }),
        GroupAction::Leave => with_state(|state| {
            state.leave_group();
            println!("left group view");
            Ok(())
        }),
        GroupAction::Members => {
            let state = read_state()?;
            print_json(&state.members()?)
        }
        GroupAction::Ranking => {
            let state = read_state()?;
            print_json(&state.ranking()?)
        }
        GroupAction::Fine { partial, absent } => with_state(|state| {
            let event = state.set_fines(partial, absent)?;
            print_json(&event)
        }),
    }
}
