//! conduct - ConductR bundle client
//!
//! A command-line tool for listing, inspecting and loading bundles on a
//! ConductR cluster.

use clap::Parser;
use conductr::cli::args::{generate_completions, Cli, Commands};
use conductr::commands::{run_info, run_load};
use conductr::config::{Config, ConfigBuilder};
use conductr::error::{AppError, BundleError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    conductr::logging::init(cli.verbose, cli.quiet);

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::debug!("{:?}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Info(args) => run_info(args, &config(cli, None)?, cli.format, cli.quiet),

        Commands::Load(args) => {
            let config = config(cli, args.resolve_cache_dir.clone())?;
            run_load(args, &config, cli.format, cli.quiet)
        }

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn config(cli: &Cli, cache_dir: Option<std::path::PathBuf>) -> Result<Config, AppError> {
    Ok(ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_ip(cli.ip.clone())
        .with_port(cli.port)
        .with_api_version(cli.api_version)
        .with_cache_dir(cache_dir)
        .with_long_ids(cli.long_ids.then_some(true))
        .build())
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Api(api) if api.is_connection_error() => {
            eprintln!();
            eprintln!("Hint: Make sure ConductR is running and reachable.");
            eprintln!("      Use --ip and --port (or CONDUCTR_IP/CONDUCTR_PORT) to select the server.");
        }
        AppError::Bundle(BundleError::Malformed(_)) => {
            eprintln!();
            eprintln!("Hint: A bundle must contain a bundle.conf declaring its settings.");
        }
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Hint: Check the file given with --config (or CONDUCTR_CONFIG).");
        }
        AppError::BundleNotFound(_) => {
            eprintln!();
            eprintln!("Hint: Use 'conduct info' to list the bundles on the cluster.");
        }
        _ => {}
    }
}
