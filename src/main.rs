use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use normalizer::cli::{handle_batch_command, handle_transform_command, BatchArgs, TransformArgs};
use normalizer::config::{paths::NormalizerPaths, settings::Settings};
use normalizer::display::format_formula_list;
use normalizer::models::FormulaSpecification;

#[derive(Parser)]
#[command(
    name = "normalizer",
    author = "Kaylee Beyene",
    version,
    about = "Normalize accounting CSV exports into a canonical table",
    long_about = "Applies a fixed set of field-mapping formulas to two-column \
                  (label, amount) statement exports and writes the canonical \
                  columns as CSV, for one file or a whole directory."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a single statement CSV into a one-row output CSV
    Transform(TransformArgs),

    /// Aggregate every CSV in a directory into one consolidated CSV
    #[command(alias = "dir")]
    Batch(BatchArgs),

    /// List the formulas applied to each output column
    Formulas,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = NormalizerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // The formula mapping is fixed for the lifetime of the process
    let spec = FormulaSpecification::standard();

    match cli.command {
        Some(Commands::Transform(args)) => {
            handle_transform_command(&spec, &settings, &args)?;
        }
        Some(Commands::Batch(args)) => {
            handle_batch_command(&spec, &settings, &args)?;
        }
        Some(Commands::Formulas) => {
            println!("Formulas Applied:");
            println!("{}", format_formula_list(&spec));
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Statement Normalizer Configuration");
            println!("==================================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Preview rows:           {}", settings.preview_rows);
            println!("  Default output file:    {}", settings.default_output_filename);
        }
        None => {
            println!("Statement Normalizer - canonical tables from accounting CSV exports");
            println!();
            println!("Run 'normalizer --help' for usage information.");
            println!("Run 'normalizer batch <DIR>' to process a directory of statements.");
        }
    }

    Ok(())
}
