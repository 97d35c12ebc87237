//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the mystyle binary (set by cargo at compile time)
pub fn mystyle_bin() -> &'static str {
    env!("CARGO_BIN_EXE_mystyle")
}

/// Creates a Command with an isolated config directory.
pub fn mystyle(config_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(mystyle_bin());
    cmd.env("MYSTYLE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Creates an empty config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a site root with `assets/character/<category>/<category>_NNN.png`
/// files for serials `1..=count` of each category.
///
/// # Arguments
/// * `counts` - Category identifier and number of items
pub fn create_asset_tree(counts: &[(&str, u32)]) -> TempDir {
    let root = TempDir::new().expect("Failed to create temp asset root");
    for (category, count) in counts {
        for serial in 1..=*count {
            write_item(root.path(), category, serial);
        }
    }
    root
}

/// Writes a single item file into an asset tree.
pub fn write_item(root: &Path, category: &str, serial: u32) -> PathBuf {
    let dir = root.join("assets/character").join(category);
    fs::create_dir_all(&dir).expect("Failed to create category dir");
    let path = dir.join(format!("{category}_{serial:03}.png"));
    fs::write(&path, b"\x89PNG").expect("Failed to write item");
    path
}

/// A manifest with three themes.
pub const SAMPLE_MANIFEST: &str = r#"[
    {
        "name": "Spring Picnic",
        "thumb": "assets/themes/spring.png",
        "items": ["dress_001.png", "hair_002.png", "shoes_001.png"]
    },
    {
        "name": "Night Out",
        "thumb": "assets/themes/night.png",
        "items": ["cloth-1_003.png", "cloth-2_001.png", "Necklace_002.png"]
    },
    {
        "name": "Casual",
        "thumb": "assets/themes/casual.png",
        "items": ["hair_001.png", "hair-band_001.png"]
    }
]"#;

/// Writes a manifest file into `dir` and returns its path.
pub fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("themes.json");
    fs::write(&path, content).expect("Failed to write manifest");
    path
}

/// Converts a path to a `&str` argument.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("Temp paths should be UTF-8")
}
