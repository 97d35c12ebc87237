//! `themes` commands: inspect the curated theme manifest.

use crate::cli::common::{print_json, CliError, CliResult, SourceArgs};
use crate::models::{Category, ThemeCatalog};
use crate::services::filter_theme;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect curated themes
#[derive(Debug, Clone, Args)]
pub struct ThemesArgs {
    /// Themes subcommand
    #[command(subcommand)]
    pub command: ThemesCommand,
}

/// Theme subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ThemesCommand {
    /// List all themes in the manifest
    List(ListThemesArgs),
    /// Show the items of one theme for a category
    Items(ThemeItemsArgs),
}

/// List all themes in the manifest
#[derive(Debug, Clone, Args)]
pub struct ListThemesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show the items of one theme for a category
#[derive(Debug, Clone, Args)]
pub struct ThemeItemsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Theme index (wraps around; negative counts from the end)
    #[arg(long, value_name = "N", allow_negative_numbers = true, default_value = "0")]
    pub theme: isize,

    /// Category to filter by
    #[arg(long, value_name = "CATEGORY")]
    pub category: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ThemeSummary {
    index: usize,
    name: String,
    thumb: String,
    item_count: usize,
}

#[derive(Debug, Serialize)]
struct ListThemesResponse {
    themes: Vec<ThemeSummary>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct ThemeItemsResponse {
    theme: Option<String>,
    index: usize,
    category: String,
    items: Vec<String>,
    count: usize,
}

impl ThemesArgs {
    /// Execute the themes command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ThemesCommand::List(args) => args.execute(),
            ThemesCommand::Items(args) => args.execute(),
        }
    }
}

fn load_catalog(source: &SourceArgs) -> CliResult<(crate::config::Config, ThemeCatalog)> {
    let config = source.resolve_config()?;
    let Some(manifest) = &config.assets.manifest else {
        return Err(CliError::validation(
            "No theme manifest configured. Pass --manifest or set assets.manifest in config.toml",
        ));
    };
    if !manifest.is_file() {
        return Err(CliError::io(format!(
            "Theme manifest not found: {}",
            manifest.display()
        )));
    }
    let catalog = config
        .load_themes()
        .map_err(|e| CliError::validation(format!("Failed to load themes: {e:#}")))?;
    Ok((config, catalog))
}

impl ListThemesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (_, catalog) = load_catalog(&self.source)?;

        let themes: Vec<ThemeSummary> = catalog
            .iter()
            .enumerate()
            .map(|(index, t)| ThemeSummary {
                index,
                name: t.name.clone(),
                thumb: t.thumb.clone(),
                item_count: t.items.len(),
            })
            .collect();

        let response = ListThemesResponse {
            count: themes.len(),
            themes,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No themes defined.");
        } else {
            println!("Themes ({}):", response.count);
            println!();
            for t in &response.themes {
                println!("  {:>3}  {:<30} {:>3} items", t.index, t.name, t.item_count);
            }
        }

        Ok(())
    }
}

impl ThemeItemsArgs {
    /// Execute the items command
    pub fn execute(&self) -> CliResult<()> {
        let category: Category = self
            .category
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let (config, catalog) = load_catalog(&self.source)?;

        let index = catalog.wrap_index(0, self.theme);
        let theme = catalog.get(index);
        let items = filter_theme(theme, category, &config.asset_layout());

        let response = ThemeItemsResponse {
            theme: theme.map(|t| t.name.clone()),
            index,
            category: category.to_string(),
            count: items.len(),
            items: items.iter().map(|p| p.as_str().to_string()).collect(),
        };

        if self.json {
            print_json(&response)?;
        } else {
            match &response.theme {
                Some(name) => println!("Theme {} '{}', {}:", response.index, name, response.category),
                None => println!("No themes defined."),
            }
            if response.count == 0 {
                println!("  No items.");
            }
            for item in &response.items {
                println!("  {item}");
            }
        }

        Ok(())
    }
}
