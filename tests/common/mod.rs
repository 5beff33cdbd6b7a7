// Shared test helpers

use std::path::{Path, PathBuf};

/// Write one snapshot file into `dir` with the given base name and raw
/// contents, returning its path.
pub fn write_snapshot(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// One docker-stats JSON line for a container.
pub fn stats_line(id: &str, name: &str, cpu: &str, mem: &str) -> String {
    format!(
        r#"{{"BlockIO":"0B / 0B","CPUPerc":"{cpu}","Container":"{id}","ID":"{id}","MemPerc":"{mem}","MemUsage":"10MiB / 1GiB","Name":"{name}","NetIO":"1kB / 2kB","PIDs":"3"}}"#
    )
}
