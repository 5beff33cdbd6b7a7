// Catalog loader tests: partial-failure tolerance, ordering, filtering

mod common;

use common::{stats_line, write_snapshot};
use dockstats_viewer::stats_repo::{LoadError, load_catalog};
use tempfile::TempDir;

#[test]
fn load_catalog_keeps_well_formed_drops_malformed() {
    let dir = TempDir::new().unwrap();
    write_snapshot(
        dir.path(),
        "2024-01-01_10-00-00_x.json",
        &stats_line("abc", "web", "10.00%", "20.00%"),
    );
    write_snapshot(
        dir.path(),
        "2024-01-01_11-00-00_x.json",
        &stats_line("abc", "web", "30.00%", "40.00%"),
    );
    // Scenario B: one line of invalid JSON drops the whole file, nothing else
    write_snapshot(dir.path(), "2024-01-01_12-00-00_x.json", "not json at all\n");

    let catalog = load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn load_catalog_sorts_newest_first() {
    let dir = TempDir::new().unwrap();
    for name in [
        "2024-01-02_09-00-00_x.json",
        "2024-01-01_10-00-00_x.json",
        "2024-01-03_08-30-00_x.json",
    ] {
        write_snapshot(dir.path(), name, &stats_line("abc", "web", "1.00%", "1.00%"));
    }

    let catalog = load_catalog(dir.path()).unwrap();
    let names: Vec<&str> = catalog.snapshots.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "2024-01-03_08-30-00_x.json",
            "2024-01-02_09-00-00_x.json",
            "2024-01-01_10-00-00_x.json",
        ]
    );
    for pair in catalog.snapshots.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
}

#[test]
fn load_catalog_skips_subdirs_and_other_extensions() {
    let dir = TempDir::new().unwrap();
    write_snapshot(
        dir.path(),
        "2024-01-01_10-00-00_x.json",
        &stats_line("abc", "web", "1.00%", "1.00%"),
    );
    write_snapshot(dir.path(), "notes.txt", "not a snapshot");
    std::fs::create_dir(dir.path().join("2024-01-01_11-00-00_x.json.d")).unwrap();

    let catalog = load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn load_catalog_drops_files_without_timestamp_prefix() {
    let dir = TempDir::new().unwrap();
    write_snapshot(
        dir.path(),
        "latest.json",
        &stats_line("abc", "web", "1.00%", "1.00%"),
    );
    write_snapshot(
        dir.path(),
        "2024-01-01_10-00-00_x.json",
        &stats_line("abc", "web", "1.00%", "1.00%"),
    );

    let catalog = load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.snapshots[0].name, "2024-01-01_10-00-00_x.json");
}

#[test]
fn load_catalog_empty_dir_is_valid_empty_result() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(dir.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn load_catalog_missing_dir_is_error_with_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = load_catalog(&missing).unwrap_err();
    assert!(matches!(err, LoadError::ReadDir { .. }));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn load_catalog_blank_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let body = format!(
        "\n{}\n\n{}\n",
        stats_line("aaa", "web", "1.00%", "2.00%"),
        stats_line("bbb", "db", "3.00%", "4.00%")
    );
    write_snapshot(dir.path(), "2024-01-01_10-00-00_x.json", &body);

    let catalog = load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.snapshots[0].records.len(), 2);
}
