// Parse one snapshot file: newline-delimited docker-stats JSON records,
// logical timestamp taken from the filename.

use std::path::Path;

use chrono::NaiveDateTime;

use super::LoadError;
use crate::models::{Record, Snapshot};

/// Timestamp prefix the collector puts on every snapshot file name,
/// e.g. `2024-01-01_10-00-00_docker_stats.json`.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Extract the logical timestamp from a snapshot file's base name: the
/// first two `_`-delimited segments, parsed as `YYYY-MM-DD_HH-MM-SS`.
pub fn timestamp_from_filename(basename: &str) -> Option<NaiveDateTime> {
    let mut parts = basename.split('_');
    let date = parts.next()?;
    let time = parts.next()?;
    NaiveDateTime::parse_from_str(&format!("{date}_{time}"), FILENAME_TIMESTAMP_FORMAT).ok()
}

/// Parse one snapshot file whole. Blank lines are skipped; any non-blank
/// line that fails to decode as a Record fails the entire file, as does a
/// file name without a parseable timestamp prefix. A file that sorts by
/// the wrong time is worse than a dropped one, so there is no wall-clock
/// fallback here.
pub fn parse_snapshot_file(path: &Path) -> Result<Snapshot, LoadError> {
    let basename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let timestamp =
        timestamp_from_filename(&basename).ok_or_else(|| LoadError::FilenameTimestamp {
            name: basename.clone(),
        })?;

    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Record =
            serde_json::from_str(line).map_err(|source| LoadError::Decode {
                path: path.to_path_buf(),
                line: i + 1,
                source,
            })?;
        records.push(record);
    }

    Ok(Snapshot {
        name: basename,
        timestamp,
        records,
    })
}
