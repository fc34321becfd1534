//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::BundleRecord;
use serde::Serialize;
use std::io::{self, Write};

/// Spaces between table columns
const COLUMN_PADDING: usize = 2;

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// One bundle row of the info table
#[derive(Debug, Clone, Serialize)]
pub struct BundleRow {
    pub id: String,
    pub name: String,
    pub compatibility_version: String,
    pub roles: Vec<String>,
    pub replications: usize,
    pub starting: usize,
    pub executions: usize,
    pub has_error: bool,
}

impl BundleRow {
    /// Build a row, abbreviating the id unless `long_ids` is set
    pub fn new(record: &BundleRecord, long_ids: bool) -> Self {
        Self {
            id: record.display_id(long_ids).to_string(),
            name: record.name().to_string(),
            compatibility_version: format!("v{}", record.attributes.compatibility_version),
            roles: record.sorted_roles().into_iter().map(str::to_string).collect(),
            replications: record.replications(),
            starting: record.starting(),
            executions: record.running(),
            has_error: record.has_error,
        }
    }
}

/// Bundles rendered as the `conduct info` table
#[derive(Debug, Clone, Serialize)]
pub struct BundleTable {
    pub bundles: Vec<BundleRow>,
}

impl BundleTable {
    /// Build a table over the given records
    pub fn new<'a>(records: impl IntoIterator<Item = &'a BundleRecord>, long_ids: bool) -> Self {
        Self {
            bundles: records
                .into_iter()
                .map(|r| BundleRow::new(r, long_ids))
                .collect(),
        }
    }

    /// Whether any listed bundle reports an error
    pub fn has_error(&self) -> bool {
        self.bundles.iter().any(|b| b.has_error)
    }
}

impl TableDisplay for BundleTable {
    fn to_table(&self) -> String {
        let header = ["ID", "NAME", "VER", "#REP", "#STR", "#RUN", "ROLES"];
        let right_aligned = [false, false, true, true, true, true, false];

        let mut rows: Vec<Vec<String>> = vec![header.iter().map(|h| h.to_string()).collect()];
        rows.extend(self.bundles.iter().map(|b| {
            vec![
                b.id.clone(),
                b.name.clone(),
                b.compatibility_version.clone(),
                b.replications.to_string(),
                b.starting.to_string(),
                b.executions.to_string(),
                b.roles.join(", "),
            ]
        }));

        let mut output = format_columns(&rows, &right_aligned).join("\n");

        if self.has_error() {
            output.push_str(
                "\nThere are errors: use `conduct events` or `conduct logs` for further information",
            );
        }

        output
    }

    fn to_compact(&self) -> String {
        self.bundles
            .iter()
            .map(|b| format!("{}:{}", b.id, b.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Bundle ids only, one per line
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct BundleIdList {
    pub ids: Vec<String>,
}

impl BundleIdList {
    /// Collect display ids of the given records
    pub fn new<'a>(records: impl IntoIterator<Item = &'a BundleRecord>, long_ids: bool) -> Self {
        Self {
            ids: records
                .into_iter()
                .map(|r| r.display_id(long_ids).to_string())
                .collect(),
        }
    }
}

impl TableDisplay for BundleIdList {
    fn to_table(&self) -> String {
        self.ids.join("\n")
    }

    fn to_compact(&self) -> String {
        self.ids.join(" ")
    }
}

/// Result of a successful `conduct load`
#[derive(Debug, Clone, Serialize)]
pub struct LoadResult {
    pub bundle_id: String,
    #[serde(skip)]
    pub cli_parameters: String,
}

impl TableDisplay for LoadResult {
    fn to_table(&self) -> String {
        format!(
            "Bundle loaded.\n\
             Start bundle with: conduct run{params} {id}\n\
             Unload bundle with: conduct unload{params} {id}\n\
             Print ConductR info with: conduct info{params}",
            params = self.cli_parameters,
            id = self.bundle_id
        )
    }

    fn to_compact(&self) -> String {
        self.bundle_id.clone()
    }
}

/// Pad cells to their column's widest value and join them into lines
///
/// Trailing whitespace is trimmed from every line.
pub fn format_columns(rows: &[Vec<String>], right_aligned: &[bool]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let padding = " ".repeat(COLUMN_PADDING);
    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let width = widths[col];
                    if right_aligned.get(col).copied().unwrap_or(false) {
                        format!("{cell:>width$}")
                    } else {
                        format!("{cell:<width$}")
                    }
                })
                .collect::<Vec<_>>()
                .join(&padding);
            line.trim_end().to_string()
        })
        .collect()
}
