//! End-to-end tests for `mystyle categories`.

use serde::Deserialize;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct CategoryItem {
    id: String,
    name: String,
    layer: String,
    z_order: u8,
    excludes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

#[test]
fn test_categories_json() {
    let config = temp_config_dir();

    let output = mystyle(config.path(), &["categories", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let response: ListCategoriesResponse =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    assert_eq!(response.count, 8);
    let ids: Vec<_> = response.categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["hair", "eyes", "dress", "cloth-1", "cloth-2", "shoes", "necklace", "hair-band"]
    );

    let dress = &response.categories[2];
    assert_eq!(dress.layer, "layer-dress");
    assert_eq!(dress.excludes, vec!["cloth-1", "cloth-2"]);

    let top = &response.categories[3];
    assert_eq!(top.name, "Top");
    assert_eq!(top.excludes, vec!["dress"]);

    let hair = &response.categories[0];
    assert!(hair.excludes.is_empty());
    assert!(hair.z_order > dress.z_order);
}

#[test]
fn test_categories_human_readable() {
    let config = temp_config_dir();

    let output = mystyle(config.path(), &["categories"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Categories (8)"));
    assert!(stdout.contains("excludes cloth-1, cloth-2"));
}
