use anyhow::{Context, Result};
use repackage::cli::{Cli, Commands, RunArgs};
use repackage::config::{load_config, CONFIG_FILE_NAME};
use repackage::formatting::FormattingConfig;
use repackage::{ConsoleReporter, RealFileSystem, RunMode};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = repackage::cli::parse_args();
    init_logging(cli.verbosity);

    match &cli.command {
        Some(Commands::Init { force }) => {
            let path = PathBuf::from(CONFIG_FILE_NAME);
            repackage::commands::init::init_config(&RealFileSystem::new(), &path, *force)?;
            println!("Created {} configuration file", CONFIG_FILE_NAME);
            Ok(())
        }
        _ => handle_run(&cli),
    }
}

// Side effect: install the env_logger backend for the `log` facade
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn handle_run(cli: &Cli) -> Result<()> {
    let args = cli.run_args().cloned().unwrap_or_default();

    let (config, source) =
        load_config(args.config.as_deref()).context("Failed to load configuration")?;
    log::info!("Using configuration from {}", source);
    let config = match &args.base_path {
        Some(base_path) => config.with_base_path(base_path),
        None => config,
    };
    log::info!("Base path: {}", config.base_path.display());

    let mut reporter = ConsoleReporter::stdout(create_formatting_config(&args));
    repackage::run(
        &RealFileSystem::new(),
        &config,
        &mut reporter,
        RunMode::from_dry_run(args.dry_run),
    )
    .context("Package rewrite aborted")?;
    Ok(())
}

// Pure function to create formatting configuration
fn create_formatting_config(args: &RunArgs) -> FormattingConfig {
    if args.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
