//! `scan` command: discover the numbered items of a category.

use crate::cli::common::{print_json, CliError, CliResult, SourceArgs};
use crate::models::Category;
use crate::services::{AssetOracle, Scanner};
use clap::Args;
use serde::Serialize;
use tokio::runtime::Runtime;

/// Discover which items of a category exist
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Category to scan (hair, eyes, dress, cloth-1, cloth-2, shoes, necklace, hair-band)
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Override the highest serial probed
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScanResponse {
    category: String,
    source: String,
    items: Vec<String>,
    count: usize,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self, runtime: &Runtime) -> CliResult<()> {
        let category: Category = self
            .category
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let mut config = self.source.resolve_config()?;
        if let Some(limit) = self.limit {
            config.scan.max_search_limit = limit;
            config
                .validate()
                .map_err(|e| CliError::validation(format!("Invalid --limit: {e}")))?;
        }

        let source = config
            .asset_source()
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        let oracle = AssetOracle::from_source(&source)
            .map_err(|e| CliError::io(format!("Failed to set up asset source: {e:#}")))?;
        let scanner = Scanner::new(oracle, config.scan_settings());

        let items = runtime.block_on(scanner.scan(category));

        let response = ScanResponse {
            category: category.to_string(),
            source: source.to_string(),
            count: items.len(),
            items: items.iter().map(|p| p.as_str().to_string()).collect(),
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No items found for '{}'.", response.category);
        } else {
            println!("{} items for '{}':", response.count, response.category);
            println!();
            for item in &response.items {
                println!("  {item}");
            }
        }

        Ok(())
    }
}
