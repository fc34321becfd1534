//! Info command implementation
//!
//! Shows the bundles loaded on the cluster, optionally narrowed down to the
//! ones designated by an id or name.

use crate::api::ConductrClient;
use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::output::{print_output, BundleIdList, BundleTable};
use crate::config::Config;
use crate::domain::{filter_by_id_or_name, BundleRecord};
use crate::error::{AppError, Result};

/// Execute the info command
pub fn run_info(args: &InfoArgs, config: &Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let client = ConductrClient::new(&config.server)?;
    let bundles = client.bundles()?;
    let long_ids = config.output.long_ids;

    match &args.bundle {
        Some(query) => {
            let selected = select_bundles(&bundles, query)?;
            print_output(&BundleTable::new(selected, long_ids), format)?;
        }
        None if quiet => print_output(&BundleIdList::new(&bundles, long_ids), format)?,
        None => print_output(&BundleTable::new(&bundles, long_ids), format)?,
    }

    Ok(())
}

/// Bundles designated by `query`, failing when there are none
pub fn select_bundles<'a>(bundles: &'a [BundleRecord], query: &str) -> Result<Vec<&'a BundleRecord>> {
    let selected = filter_by_id_or_name(bundles, query);
    if selected.is_empty() {
        return Err(AppError::BundleNotFound(query.to_string()));
    }

    log::debug!("{} bundle(s) match {}", selected.len(), query);
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundles() -> Vec<BundleRecord> {
        serde_json::from_str(
            r#"[
                {"bundleId": "23391d4a-3cc322b0", "attributes": {"bundleName": "visualizer"}},
                {"bundleId": "45e0c477-c52e3f8d", "attributes": {"bundleName": "cassandra"}}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_select_by_short_id() {
        let bundles = bundles();
        let selected = select_bundles(&bundles, "45e0c47-c52e").unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name(), "cassandra");
    }

    #[test]
    fn test_select_by_name_prefix() {
        let bundles = bundles();
        let selected = select_bundles(&bundles, "vis").unwrap();
        assert_eq!(selected[0].bundle_id, "23391d4a-3cc322b0");
    }

    #[test]
    fn test_select_nothing_is_not_found() {
        let bundles = bundles();
        let result = select_bundles(&bundles, "unknown");
        assert!(matches!(result, Err(AppError::BundleNotFound(q)) if q == "unknown"));
    }
}
