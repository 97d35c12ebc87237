//! `categories` command: list wearable categories and their layers.

use crate::cli::common::{print_json, CliResult};
use crate::models::Category;
use clap::Args;
use serde::Serialize;

/// List wearable categories
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryItem {
    id: String,
    name: String,
    layer: String,
    z_order: u8,
    excludes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let categories: Vec<CategoryItem> = Category::ALL
            .iter()
            .map(|c| {
                let slot = c.layer_slot();
                CategoryItem {
                    id: c.as_str().to_string(),
                    name: c.display_name().to_string(),
                    layer: slot.id.to_string(),
                    z_order: slot.z_order,
                    excludes: c.excludes().iter().map(|e| e.as_str().to_string()).collect(),
                }
            })
            .collect();

        let response = ListCategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Categories ({}):", response.count);
        println!();
        for cat in &response.categories {
            let excludes = if cat.excludes.is_empty() {
                String::new()
            } else {
                format!("excludes {}", cat.excludes.join(", "))
            };
            println!(
                "  {:<12} {:<12} {:<18} z={:<3} {}",
                cat.id, cat.name, cat.layer, cat.z_order, excludes
            );
        }
        Ok(())
    }
}
