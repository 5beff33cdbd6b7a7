// Snapshot catalog loading from the collector's output directory

pub mod aggregation;
mod parser;

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::models::Catalog;

pub use parser::{FILENAME_TIMESTAMP_FORMAT, parse_snapshot_file, timestamp_from_filename};

/// Why a snapshot file or the whole directory failed to load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading snapshot directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading snapshot file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decoding record at {}:{line}", path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("no YYYY-MM-DD_HH-MM-SS timestamp prefix in file name {name:?}")]
    FilenameTimestamp { name: String },
}

/// Load every `*.json` snapshot file in `dir` into a Catalog, newest
/// first. A file that fails to parse is logged and skipped; one corrupt
/// file never prevents the rest from loading. Failing to read the
/// directory itself is an error. An empty Catalog is a valid result; the
/// caller decides whether that is fatal (startup) or a no-op (refresh).
pub fn load_catalog(dir: &Path) -> Result<Catalog, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut snapshots = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match parser::parse_snapshot_file(&path) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "skipping unparseable snapshot file");
            }
        }
    }

    Ok(Catalog::new(snapshots))
}
