use clap::Subcommand;

use super::{print_json, read_state, with_state, CliResult};

#[derive(Subcommand)]
pub enum UserAction {
    /// Log in (no password; identifies you within this data directory)
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: String,
    },
    /// Log out and leave the current group
    Logout,
    /// Print the current user as JSON
    Whoami,
}

pub fn run(action: UserAction) -> CliResult {
    match action {
        UserAction::Login { email, name } => with_state(|state| {
            let user = state.login(&email, &name)?;
            print_json(user)
        }),
        UserAction::Logout => with_state(|state| {
            state.logout();
            println!("logged out");
            Ok(())
        }),
        UserAction::Whoami => {
            let state = read_state()?;
            print_json(state.current_user()?)
        }
    }
}
