// Derived models: per-container history and aggregate statistics

use serde::{Deserialize, Serialize};

/// Format used for data point timestamps and first/last-seen fields.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One container reading stamped with its snapshot's timestamp.
/// Percentages are parsed; the remaining metrics stay verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: String,
    pub cpu_perc: f64,
    pub mem_perc: f64,
    pub mem_usage: String,
    pub net_io: String,
    pub block_io: String,
    pub pids: String,
}

/// One container's reconstructed history across the whole catalog,
/// sorted oldest first (timeline order, the reverse of catalog order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSeries {
    pub container_id: String,
    pub container_name: String,
    pub data: Vec<DataPoint>,
}

impl ContainerSeries {
    /// Absence of history is a normal outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Aggregate statistics over one container's full series.
/// `data_points == 0` marks an empty summary; min/max are meaningless then.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub container_id: String,
    pub container_name: String,
    pub data_points: usize,
    pub avg_cpu: f64,
    pub max_cpu: f64,
    pub min_cpu: f64,
    pub avg_mem: f64,
    pub max_mem: f64,
    pub min_mem: f64,
    pub first_seen: String,
    pub last_seen: String,
}

/// Series plus its derived statistics, for the container detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerReport {
    #[serde(flatten)]
    pub series: ContainerSeries,
    pub summary: ContainerSummary,
}
