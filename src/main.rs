mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use techhub_core::HubConfig;

use session::Session;

#[derive(Parser)]
#[command(name = "techhub")]
#[command(about = "Post tech events and keep personal event calendars")]
struct Cli {
    /// Data file to load and save (defaults to data_file from config)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Print this session's audit log when done
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a new event to the catalog
    Post {
        /// Event name (must be unique)
        name: String,

        /// Day of the event, counted from 0
        #[arg(short, long)]
        day: u32,

        #[arg(short, long)]
        organizer: Option<String>,

        /// Start time, e.g. "10:00"
        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        url: Option<String>,
    },
    /// Change the organizer, time or URL of a posted event
    Update {
        name: String,

        #[arg(short, long)]
        organizer: Option<String>,

        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        url: Option<String>,
    },
    /// Remove an event from the catalog and every calendar
    Remove { name: String },
    /// Show the details of one event
    Show { name: String },
    /// List posted events
    Browse {
        /// First day to include
        #[arg(long)]
        from: Option<u32>,

        /// Last day to include
        #[arg(long)]
        to: Option<u32>,
    },
    /// Create a new user
    Register {
        name: String,

        /// "Student", "Staff" or "Organizer" (defaults to default_category from config)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Log in as a user, creating a Student account on first use
    Login { name: String },
    /// Add a posted event to a user's calendar
    Add { user: String, event: String },
    /// List a user's calendar
    Calendar {
        user: String,

        /// First day to include
        #[arg(long)]
        from: Option<u32>,

        /// Last day to include
        #[arg(long)]
        to: Option<u32>,
    },
    /// Show configuration and data file paths
    Config {
        /// Save a new default category for `register`
        #[arg(long)]
        default_category: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = HubConfig::load().context("Could not load configuration")?;

    let data_path = cli.data_file.unwrap_or_else(|| config.data_path());
    let mut session = Session::open(data_path)?;

    match cli.command {
        Commands::Post {
            name,
            day,
            organizer,
            time,
            url,
        } => commands::post::run(&mut session, name, day, organizer, time, url)?,
        Commands::Update {
            name,
            organizer,
            time,
            url,
        } => commands::update::run(&mut session, &name, organizer, time, url)?,
        Commands::Remove { name } => commands::remove::run(&mut session, &name)?,
        Commands::Show { name } => commands::show::run(&session, &name)?,
        Commands::Browse { from, to } => commands::browse::run(&session, day_range(from, to))?,
        Commands::Register { name, category } => {
            let category = category.unwrap_or_else(|| config.default_category.clone());
            commands::register::run(&mut session, &name, &category)?
        }
        Commands::Login { name } => commands::login::run(&mut session, &name)?,
        Commands::Add { user, event } => commands::add::run(&mut session, &user, &event)?,
        Commands::Calendar { user, from, to } => {
            commands::calendar::run(&session, &user, day_range(from, to))?
        }
        Commands::Config { default_category } => {
            commands::config::run(&config, &session, default_category)?
        }
    }

    session.finish(cli.verbose)
}

/// `None` when neither bound is given; a missing bound is open-ended.
fn day_range(from: Option<u32>, to: Option<u32>) -> Option<(u32, u32)> {
    if from.is_none() && to.is_none() {
        return None;
    }
    Some((from.unwrap_or(0), to.unwrap_or(u32::MAX)))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
