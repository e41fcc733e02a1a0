use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "papaquit", version, about = "PapaQuit - quit smoking, become a dad")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smoke-free dashboard: streak, savings, milestones, today's check
    Status {
        /// Print the progress snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Quit date and cigarette settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Record and review craving episodes
    Craving {
        #[command(subcommand)]
        action: commands::craving::CravingAction,
    },
    /// Daily fertility lifestyle check
    Check {
        #[command(subcommand)]
        action: commands::check::CheckAction,
    },
    /// Messages for the future child
    Diary {
        #[command(subcommand)]
        action: commands::diary::DiaryAction,
    },
    /// Milestone catalog with achievement marks
    Milestones,
    /// Cumulative savings series for charting
    Savings,
    /// Quit attempt history and relapse handling
    Attempt {
        #[command(subcommand)]
        action: commands::attempt::AttemptAction,
    },
    /// Discord notification settings
    Notify {
        #[command(subcommand)]
        action: commands::notify::NotifyAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status { json } => commands::status::run(json),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Craving { action } => commands::craving::run(action),
        Commands::Check { action } => commands::check::run(action),
        Commands::Diary { action } => commands::diary::run(action),
        Commands::Milestones => commands::milestones::run(),
        Commands::Savings => commands::savings::run(),
        Commands::Attempt { action } => commands::attempt::run(action),
        Commands::Notify { action } => commands::notify::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
