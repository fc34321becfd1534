//! Load command implementation
//!
//! Resolves the bundle and optional configuration archives, assembles the
//! upload payload for the server's protocol version, and uploads it.

use crate::api::ConductrClient;
use crate::archive::ZipArchiveReader;
use crate::cli::args::{LoadArgs, OutputFormat};
use crate::cli::output::{print_output, LoadResult};
use crate::config::Config;
use crate::domain::short_id;
use crate::error::Result;
use crate::services::{strategy_for, BundleResolver, LoadPayload, PayloadStrategy};

/// Execute the load command
pub fn run_load(args: &LoadArgs, config: &Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let client = ConductrClient::new(&config.server)?;
    let resolver = BundleResolver::new(config.resolver.cache_dir.clone());
    let strategy = strategy_for(client.api_version(), ZipArchiveReader::new());

    let payload = prepare_payload(args, &resolver, strategy.as_ref())?;

    log::info!("Loading bundle to ConductR...");
    let response = client.load(payload)?;

    let bundle_id = if config.output.long_ids {
        response.bundle_id
    } else {
        short_id(&response.bundle_id)
    };
    let result = LoadResult {
        bundle_id,
        cli_parameters: config.server.cli_parameters(),
    };

    let format = match format {
        OutputFormat::Table if quiet => OutputFormat::Compact,
        other => other,
    };
    print_output(&result, format)?;

    Ok(())
}

/// Resolve the archives named by `args` and assemble their payload
///
/// Nothing is uploaded; a malformed bundle fails here before any request.
pub fn prepare_payload(
    args: &LoadArgs,
    resolver: &BundleResolver,
    strategy: &dyn PayloadStrategy,
) -> Result<LoadPayload> {
    log::info!("Retrieving bundle...");
    let bundle = resolver.resolve(&args.bundle)?;

    let configuration = match &args.configuration {
        Some(uri) => {
            log::info!("Retrieving configuration...");
            Some(resolver.resolve(uri)?)
        }
        None => None,
    };

    Ok(strategy.assemble(&bundle, configuration.as_ref())?)
}
