//! End-to-end tests for `mystyle scan`.

use serde::Deserialize;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct ScanResponse {
    category: String,
    source: String,
    items: Vec<String>,
    count: usize,
}

fn scan_json(config_dir: &std::path::Path, args: &[&str]) -> ScanResponse {
    let output = mystyle(config_dir, args)
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "Scan should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Scan output should be valid JSON")
}

#[test]
fn test_scan_lists_contiguous_items() {
    let root = create_asset_tree(&[("hair", 3), ("eyes", 1)]);
    let config = temp_config_dir();

    let response = scan_json(
        config.path(),
        &["scan", "hair", "--root", arg(root.path()), "--json"],
    );

    assert_eq!(response.category, "hair");
    assert_eq!(response.count, 3);
    assert_eq!(
        response.items,
        vec![
            "assets/character/hair/hair_001.png",
            "assets/character/hair/hair_002.png",
            "assets/character/hair/hair_003.png",
        ]
    );
    assert!(response.source.contains(arg(root.path())));
}

#[test]
fn test_scan_stops_at_first_gap() {
    let root = create_asset_tree(&[("shoes", 2)]);
    write_item(root.path(), "shoes", 4);
    let config = temp_config_dir();

    let response = scan_json(
        config.path(),
        &["scan", "shoes", "--root", arg(root.path()), "--json"],
    );

    assert_eq!(response.count, 2);
    assert!(!response.items.iter().any(|i| i.ends_with("shoes_004.png")));
}

#[test]
fn test_scan_respects_limit() {
    let root = create_asset_tree(&[("dress", 5)]);
    let config = temp_config_dir();

    let response = scan_json(
        config.path(),
        &["scan", "dress", "--root", arg(root.path()), "--limit", "2", "--json"],
    );

    assert_eq!(response.count, 2);
}

#[test]
fn test_scan_empty_category() {
    let root = create_asset_tree(&[("hair", 1)]);
    let config = temp_config_dir();

    let output = mystyle(config.path(), &["scan", "necklace", "--root", arg(root.path())])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("No items found for 'necklace'"),
        "Output should report no items: {stdout}"
    );
}

#[test]
fn test_scan_wire_names() {
    let root = create_asset_tree(&[("cloth-1", 2), ("hair-band", 1)]);
    let config = temp_config_dir();

    let top = scan_json(
        config.path(),
        &["scan", "cloth-1", "--root", arg(root.path()), "--json"],
    );
    assert_eq!(top.count, 2);
    assert_eq!(top.items[0], "assets/character/cloth-1/cloth-1_001.png");

    let band = scan_json(
        config.path(),
        &["scan", "hair-band", "--root", arg(root.path()), "--json"],
    );
    assert_eq!(band.count, 1);
}

#[test]
fn test_scan_unknown_category_is_validation_error() {
    let root = create_asset_tree(&[]);
    let config = temp_config_dir();

    let output = mystyle(config.path(), &["scan", "hat", "--root", arg(root.path())])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown category"), "stderr: {stderr}");
}

#[test]
fn test_scan_missing_root_is_validation_error() {
    let config = temp_config_dir();
    let missing = config.path().join("does-not-exist");

    let output = mystyle(config.path(), &["scan", "hair", "--root", arg(&missing)])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_scan_uses_configured_root() {
    let root = create_asset_tree(&[("eyes", 2)]);
    let config = temp_config_dir();

    let set = mystyle(config.path(), &["config", "set", "--root", arg(root.path())])
        .output()
        .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    let response = scan_json(config.path(), &["scan", "eyes", "--json"]);
    assert_eq!(response.count, 2);
}

#[test]
fn test_scan_root_before_subcommand() {
    let root = create_asset_tree(&[("hair", 3)]);
    let config = temp_config_dir();

    let response = scan_json(
        config.path(),
        &["--root", arg(root.path()), "scan", "hair", "--json"],
    );

    assert_eq!(response.count, 3);
    assert!(response.source.contains(arg(root.path())));
}

#[test]
fn test_scan_root_after_subcommand_wins() {
    let outer = create_asset_tree(&[("hair", 1)]);
    let inner = create_asset_tree(&[("hair", 2)]);
    let config = temp_config_dir();

    let response = scan_json(
        config.path(),
        &[
            "--root",
            arg(outer.path()),
            "scan",
            "hair",
            "--root",
            arg(inner.path()),
            "--json",
        ],
    );

    assert_eq!(response.count, 2);
}

#[test]
fn test_scan_root_flag_replaces_deleted_configured_root() {
    let stale = create_asset_tree(&[]);
    let config = temp_config_dir();

    let set = mystyle(config.path(), &["config", "set", "--root", arg(stale.path())])
        .output()
        .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));
    drop(stale);

    let root = create_asset_tree(&[("eyes", 2)]);
    let response = scan_json(
        config.path(),
        &["scan", "eyes", "--root", arg(root.path()), "--json"],
    );
    assert_eq!(response.count, 2);
}

#[test]
fn test_source_flags_rejected_for_commands_without_a_source() {
    let root = create_asset_tree(&[]);
    let config = temp_config_dir();

    for command in [
        vec!["categories"],
        vec!["compose", "--wear", "hair=h/hair_001.png"],
        vec!["config", "show"],
    ] {
        let mut args = vec!["--root", arg(root.path())];
        args.extend(command);
        let output = mystyle(config.path(), &args)
            .output()
            .expect("Failed to execute command");

        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(output.stdout.is_empty(), "args: {args:?}");
    }
}
