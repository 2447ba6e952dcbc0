mod app;
mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pitchside_core::Role;
use pitchside_core::schedule::EventFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::commands::event::EventArgs;

#[derive(Parser)]
#[command(name = "pitchside")]
#[command(about = "Trainings and matches for your football school")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in to your account
    Login {
        email: Option<String>,

        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Register {
        /// Full name
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// "student" or "coach"
        #[arg(long)]
        role: Option<Role>,
    },
    /// Sign out and forget the saved session
    Logout,
    /// Greeting and upcoming events
    Home,
    /// Events for a day, with the surrounding week
    Calendar {
        /// Day to show (YYYY-MM-DD, "yesterday", "today" or "tomorrow")
        #[arg(short, long)]
        date: Option<String>,

        /// all, training or match
        #[arg(short, long, default_value = "all")]
        filter: EventFilter,
    },
    /// Add a training or match (coaches only)
    Add {
        title: Option<String>,

        #[command(flatten)]
        fields: EventArgs,
    },
    /// Change an existing event (coaches only)
    Edit {
        /// Event id or a unique prefix of it
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: EventArgs,
    },
    /// Delete an event (coaches only)
    Delete {
        /// Event id or a unique prefix of it
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Your account and activity
    Profile,
    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Write the schedule as an .ics file
    Export {
        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Change a preference, e.g. `settings set dark_mode on`
    Set { key: String, value: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitchside=warn,pitchside_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(email, password).await,
        Commands::Register { name, email, role } => {
            commands::auth::register(name, email, role).await
        }
        Commands::Logout => commands::auth::logout().await,
        Commands::Home => commands::home::run().await,
        Commands::Calendar { date, filter } => commands::calendar::run(date, filter).await,
        Commands::Add { title, fields } => commands::event::add(title, fields).await,
        Commands::Edit { id, title, fields } => commands::event::edit(&id, title, fields).await,
        Commands::Delete { id, force } => commands::event::delete(&id, force).await,
        Commands::Profile => commands::profile::run().await,
        Commands::Settings { action } => match action {
            None => commands::settings::show(),
            Some(SettingsAction::Set { key, value }) => commands::settings::set(&key, &value),
        },
        Commands::Export { output } => commands::export::run(output).await,
    }
}
