//! `compose` command: try on a sequence of items and print the result.
//!
//! Nothing is persisted; the command only shows what the layer stack looks
//! like after applying the given selections in order.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{Category, ItemPath, LayerStack};
use crate::services::{ApplyOutcome, Compositor};
use clap::Args;
use serde::Serialize;

/// Apply items to the character in order and show the resulting layers
#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    /// Item to select, as CATEGORY=PATH (repeatable, applied in order)
    #[arg(long = "wear", value_name = "CATEGORY=PATH", required = true)]
    pub wear: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StepOutput {
    category: String,
    path: String,
    outcome: String,
}

#[derive(Debug, Serialize)]
struct LayerOutput {
    category: String,
    layer: String,
    z_order: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

#[derive(Debug, Serialize)]
struct ComposeResponse {
    steps: Vec<StepOutput>,
    layers: Vec<LayerOutput>,
    worn: usize,
}

/// Parses a `CATEGORY=PATH` selection.
fn parse_selection(raw: &str) -> CliResult<(Category, ItemPath)> {
    let (category, path) = raw.split_once('=').ok_or_else(|| {
        CliError::validation(format!("Invalid selection '{raw}'. Expected CATEGORY=PATH"))
    })?;
    let category: Category = category
        .parse()
        .map_err(|e| CliError::validation(format!("{e}")))?;
    if path.trim().is_empty() {
        return Err(CliError::validation(format!(
            "Invalid selection '{raw}'. Path cannot be empty"
        )));
    }
    Ok((category, ItemPath::new(path.trim())))
}

impl ComposeArgs {
    /// Execute the compose command
    pub fn execute(&self) -> CliResult<()> {
        let selections = self
            .wear
            .iter()
            .map(|raw| parse_selection(raw))
            .collect::<CliResult<Vec<_>>>()?;

        let mut compositor = Compositor::new(LayerStack::full(), ());
        let steps = selections
            .iter()
            .map(|(category, path)| {
                let outcome = match compositor.apply_item(*category, path) {
                    ApplyOutcome::Worn => "worn",
                    ApplyOutcome::Removed => "removed",
                    ApplyOutcome::Ignored => "ignored",
                };
                StepOutput {
                    category: category.to_string(),
                    path: path.to_string(),
                    outcome: outcome.to_string(),
                }
            })
            .collect();

        let stack = compositor.stack();
        let layers = stack
            .in_z_order()
            .into_iter()
            .map(|(category, path)| LayerOutput {
                category: category.to_string(),
                layer: category.layer_slot().id.to_string(),
                z_order: category.layer_slot().z_order,
                path: path.map(ToString::to_string),
            })
            .collect();

        let response = ComposeResponse {
            steps,
            layers,
            worn: stack.worn_count(),
        };

        if self.json {
            return print_json(&response);
        }

        for step in &response.steps {
            println!("{:<8} {:<10} {}", step.outcome, step.category, step.path);
        }
        println!();
        println!("Layers (bottom to top), {} worn:", response.worn);
        for layer in &response.layers {
            println!(
                "  {:<10} {}",
                layer.category,
                layer.path.as_deref().unwrap_or("-")
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        let (category, path) = parse_selection("cloth-1=assets/character/cloth-1/cloth-1_002.png").unwrap();
        assert_eq!(category, Category::Top);
        assert_eq!(path.as_str(), "assets/character/cloth-1/cloth-1_002.png");
    }

    #[test]
    fn test_parse_selection_errors() {
        assert!(parse_selection("dress").is_err());
        assert!(parse_selection("hat=x.png").is_err());
        assert!(parse_selection("dress= ").is_err());
    }
}
