// Raw snapshot models: one record per `docker stats --format json` line

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One container's readings at one instant, exactly as the collector wrote
/// them. All fields are raw strings; percentages keep their trailing `%`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Container", default)]
    pub container: String,
    #[serde(rename = "CPUPerc", default)]
    pub cpu_perc: String,
    #[serde(rename = "MemPerc", default)]
    pub mem_perc: String,
    #[serde(rename = "MemUsage", default)]
    pub mem_usage: String,
    #[serde(rename = "NetIO", default)]
    pub net_io: String,
    #[serde(rename = "BlockIO", default)]
    pub block_io: String,
    #[serde(rename = "PIDs", default)]
    pub pids: String,
}

impl Record {
    /// CPU percentage as a number; malformed text reads as 0.0 (the raw
    /// string stays available either way).
    pub fn cpu_percent(&self) -> f64 {
        parse_percent(&self.cpu_perc)
    }

    /// Memory percentage as a number; malformed text reads as 0.0.
    pub fn mem_percent(&self) -> f64 {
        parse_percent(&self.mem_perc)
    }
}

/// Strip a trailing `%` and parse; anything unparseable is 0.0.
pub fn parse_percent(s: &str) -> f64 {
    s.trim().trim_end_matches('%').parse::<f64>().unwrap_or(0.0)
}

/// One parsed snapshot file: all containers' records at one instant.
/// Records keep file order (not sorted by any field).
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub name: String,
    pub timestamp: NaiveDateTime,
    pub records: Vec<Record>,
}

/// All currently-loaded snapshots, sorted by timestamp descending
/// (newest first). Contains only files that parsed whole; a structurally
/// invalid file is never partially included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub snapshots: Vec<Snapshot>,
}

impl Catalog {
    pub fn new(mut snapshots: Vec<Snapshot>) -> Self {
        snapshots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { snapshots }
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_percent_strips_suffix() {
        assert_eq!(parse_percent("12.50%"), 12.5);
        assert_eq!(parse_percent("0.00%"), 0.0);
        assert_eq!(parse_percent(" 3.7% "), 3.7);
    }

    #[test]
    fn parse_percent_malformed_is_zero() {
        assert_eq!(parse_percent(""), 0.0);
        assert_eq!(parse_percent("--"), 0.0);
        assert_eq!(parse_percent("N/A"), 0.0);
    }

    #[test]
    fn record_deserializes_docker_stats_line() {
        let line = r#"{"BlockIO":"1MB / 2MB","CPUPerc":"0.15%","Container":"abc123","ID":"abc123","MemPerc":"1.20%","MemUsage":"10MiB / 1GiB","Name":"web","NetIO":"5kB / 3kB","PIDs":"12"}"#;
        let r: Record = serde_json::from_str(line).unwrap();
        assert_eq!(r.id, "abc123");
        assert_eq!(r.name, "web");
        assert_eq!(r.cpu_percent(), 0.15);
        assert_eq!(r.mem_percent(), 1.2);
        assert_eq!(r.pids, "12");
    }

    #[test]
    fn catalog_new_sorts_newest_first() {
        let ts = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        let snap = |name: &str, t| Snapshot {
            name: name.to_string(),
            timestamp: t,
            records: vec![],
        };
        let catalog = Catalog::new(vec![
            snap("old", ts("2024-01-01 10:00:00")),
            snap("new", ts("2024-01-01 12:00:00")),
            snap("mid", ts("2024-01-01 11:00:00")),
        ]);
        let names: Vec<&str> = catalog.snapshots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["new", "mid", "old"]);
    }
}
