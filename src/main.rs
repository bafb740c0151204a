use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use moneytrack::cli::{
    handle_add, handle_clear_command, handle_report, handle_settings_command, handle_status,
    handle_today, ClearCommands, SettingsCommands,
};
use moneytrack::config::MoneyTrackPaths;
use moneytrack::models::UserId;
use moneytrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moneytrack",
    version,
    about = "Window-based budget tracking from the command line",
    long_about = "MoneyTrack splits each month into fixed-size budget windows, \
                  spreads your monthly budget across them, and tracks spending \
                  against window, day and month budgets. Card spending is \
                  tracked against its own monthly budget."
)]
struct Cli {
    /// User profile to operate on
    #[arg(long, global = true, env = "MONEYTRACK_USER", default_value = "default")]
    user: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    Add {
        /// Amount spent
        amount: f64,

        /// What the money went to
        #[arg(short, long)]
        description: Option<String>,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Record against the card budget instead of the account budget
        #[arg(long)]
        card: bool,
    },

    /// Show today's expenses and daily limit
    Today,

    /// Show the current window, month and card figures
    Status,

    /// Show the monthly report
    Report {
        /// Month to report on (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },

    /// Budget settings commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Remove expense data
    #[command(subcommand)]
    Clear(ClearCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let user = UserId::from(cli.user.as_str());
    let today = Local::now().date_naive();

    let paths = MoneyTrackPaths::new()?;
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add {
            amount,
            description,
            date,
            card,
        }) => {
            handle_add(
                &storage,
                &user,
                date.unwrap_or(today),
                amount,
                description,
                card,
            )?;
        }
        Some(Commands::Today) => {
            handle_today(&storage, &user, today)?;
        }
        Some(Commands::Status) => {
            handle_status(&storage, &user, today)?;
        }
        Some(Commands::Report { month }) => {
            handle_report(&storage, &user, month, today)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&storage, &user, cmd)?;
        }
        Some(Commands::Clear(cmd)) => {
            handle_clear_command(&storage, &user, today, cmd)?;
        }
        Some(Commands::Config) => {
            println!("MoneyTrack Configuration");
            println!("========================");
            println!("Data directory: {}", storage.paths().data_dir().display());
            println!("Expenses file:  {}", storage.paths().expenses_file().display());
            println!("Settings file:  {}", storage.paths().settings_file().display());
            println!("User:           {}", user);
        }
        None => {
            println!("MoneyTrack - window-based budget tracking");
            println!();
            println!("Run 'moneytrack --help' for usage information.");
            println!("Run 'moneytrack status' to see where this window stands.");
        }
    }

    Ok(())
}
