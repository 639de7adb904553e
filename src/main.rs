use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use skill_tracker::config::Config;
use skill_tracker::scoring::{DomainCatalog, ScoreCalculator};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive scoring form (default if no subcommand)
    Tui,
    /// Score items from the command line and print the results
    Score {
        /// Score assignment DOMAIN:ITEM=VALUE, e.g. "Motor Skills:2=3" or "3:2=3".
        /// Domain and item numbers are 1-based, as shown by `domains`.
        #[arg(short, long = "set", value_name = "DOMAIN:ITEM=VALUE")]
        set: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the results as JSON (same as --format json)
        #[arg(long, conflicts_with = "format")]
        json: bool,
    },
    /// List domains and their checklist items
    Domains,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "skill-tracker")]
#[command(about = "Developmental skill checklist scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/skill-tracker/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    skill_tracker::logging::init_logger(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let use_colors = skill_tracker::output::should_use_colors();

    match command {
        Commands::Tui => {
            let (config, catalog) = load_config_or_exit(config_path);
            let theme = skill_tracker::tui::resolve_theme(config.theme);
            let app = skill_tracker::tui::App::new(ScoreCalculator::new(catalog), theme);
            if let Err(e) = skill_tracker::tui::run_tui(app).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
        Commands::Score { set, format, json } => {
            let format = if json { OutputFormat::Json } else { format };
            let (_, catalog) = load_config_or_exit(config_path);
            let mut calculator = ScoreCalculator::new(catalog);

            for assignment in &set {
                let result = skill_tracker::input::parse_assignment(calculator.catalog(), assignment)
                    .and_then(|(key, value)| Ok(calculator.set_score(key, value)?));
                if let Err(e) = result {
                    eprintln!("Invalid score '{}': {:#}", assignment, e);
                    std::process::exit(EXIT_INPUT);
                }
            }

            let result = calculator.calculate();
            match format {
                OutputFormat::Text => {
                    let bar_width = skill_tracker::output::bar_width_for_terminal();
                    println!(
                        "{}",
                        skill_tracker::output::format_summary(result, use_colors, bar_width)
                    );
                }
                OutputFormat::Json => match skill_tracker::output::format_json(result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {:#}", e);
                        std::process::exit(EXIT_FAILURE);
                    }
                },
                OutputFormat::Tsv => println!("{}", skill_tracker::output::format_tsv(result)),
            }
        }
        Commands::Domains => {
            let (_, catalog) = load_config_or_exit(config_path);
            println!(
                "{}",
                skill_tracker::output::format_domain_list(&catalog, use_colors)
            );
        }
        Commands::Init { force } => {
            let path = config_path.unwrap_or_else(skill_tracker::config::get_config_path);
            if let Err(e) = skill_tracker::config::write_starter_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Config written to {}", path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load the config and resolve its catalog, exiting with EXIT_CONFIG on failure
fn load_config_or_exit(path: Option<PathBuf>) -> (Config, DomainCatalog) {
    let config = match skill_tracker::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the catalog at startup, reporting every problem at once
    let catalog = match config.catalog() {
        Ok(c) => c,
        Err(errors) => {
            eprintln!("Domain config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };

    tracing::debug!(
        domains = catalog.len(),
        items = catalog.item_count(),
        "catalog ready"
    );
    (config, catalog)
}
