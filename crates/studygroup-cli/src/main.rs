use clap::{Parser, Subcommand};
use studygroup_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studygroup-cli", version, about = "Study group manager CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, log out, show the current user
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },
    /// Study group management
    Group {
        #[command(subcommand)]
        action: commands::group::GroupAction,
    },
    /// Subjects of the current user in the entered group
    Subject {
        #[command(subcommand)]
        action: commands::subject::SubjectAction,
    },
    /// Daily goal allocation
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Daily attendance
    Attend {
        #[command(subcommand)]
        action: commands::attend::AttendAction,
    },
    /// Month calendar with attendance marks
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Attendance summaries
    Summary {
        #[command(subcommand)]
        action: commands::summary::SummaryAction,
    },
    /// Study timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Difficulty suggestions from study pace
    Difficulty {
        #[command(subcommand)]
        action: commands::difficulty::DifficultyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("STUDYGROUP_LOG")
        .or_else(|_| EnvFilter::try_new(Config::load_or_default().log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::User { action } => commands::user::run(action),
        Commands::Group { action } => commands::group::run(action),
        Commands::Subject { action } => commands::subject::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Attend { action } => commands::attend::run(action),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Summary { action } => commands::summary::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Difficulty { action } => commands::difficulty::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
