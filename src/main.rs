use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_summary_command, handle_top_command, AddArgs, Menu, SummaryArgs,
    TopArgs,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::ChartKind;
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated expenses to a CSV file and shows daily, weekly and \
                  monthly summaries, spending by category, and simple charts. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Data directory holding expenses.csv and config.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Record a new expense
    Add(AddArgs),

    /// Show totals per day, week or month
    Summary(SummaryArgs),

    /// Show categories ranked by total spending
    #[command(alias = "categories")]
    Top(TopArgs),

    /// Draw a chart of spending by category
    Chart {
        /// Chart style
        #[arg(value_enum, default_value = "bar")]
        kind: ChartKind,
    },

    /// Create the data directory, store and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let store = ExpenseStore::new(paths.store_file());
    let load_settings = || Settings::load_or_default(&paths);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let settings = load_settings()?;
            let stdin = io::stdin();
            Menu::new(&store, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Add(args) => print!("{}", handle_add_command(&store, args)?),
        Commands::Summary(args) => {
            let settings = load_settings()?;
            print!("{}", handle_summary_command(&store, &settings, args)?);
        }
        Commands::Top(args) => {
            let settings = load_settings()?;
            print!("{}", handle_top_command(&store, &settings, args)?);
        }
        Commands::Chart { kind } => {
            let settings = load_settings()?;
            print!(
                "{}",
                expense_tracker::cli::chart_report(&store, &settings, kind)?
            );
        }
        Commands::Init => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            expense_tracker::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!("Expenses are stored in {}", paths.store_file().display());
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expense store:  {}", paths.store_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            match load_settings() {
                Ok(settings) => {
                    println!("Settings:");
                    println!("  Currency symbol:   {}", settings.currency_symbol);
                    println!("  First day of week: {}", settings.week_start());
                    println!("  Chart width:       {}", settings.chart_width);
                }
                Err(e) => {
                    log::warn!("Could not load settings: {}", e);
                    println!("Settings: unavailable ({})", e);
                }
            }
        }
    }

    Ok(())
}
