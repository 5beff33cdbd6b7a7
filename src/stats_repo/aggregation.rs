// Pure functions over an immutable Catalog: per-container series
// reconstruction and summary statistics. Nothing here caches; every call
// recomputes from the Catalog it was handed, so results are consistent
// with exactly one catalog generation.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{
    Catalog, ContainerReport, ContainerSeries, ContainerSummary, DISPLAY_TIMESTAMP_FORMAT,
    DataPoint, Record,
};

/// Reconstruct one container's history across every snapshot, oldest
/// first. The short ID is the join key; the display name is the first
/// non-empty name encountered. No match anywhere is an empty series.
pub fn container_series(catalog: &Catalog, container_id: &str) -> ContainerSeries {
    let mut data = Vec::new();
    let mut container_name = String::new();

    for snapshot in &catalog.snapshots {
        let ts = snapshot.timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string();
        for record in &snapshot.records {
            if record.id != container_id {
                continue;
            }
            data.push(data_point(record, &ts));
            if container_name.is_empty() {
                container_name = record.name.clone();
            }
        }
    }

    data.sort_by(|a, b| cmp_point_timestamps(&a.timestamp, &b.timestamp));

    ContainerSeries {
        container_id: container_id.to_string(),
        container_name,
        data,
    }
}

/// Series plus its derived statistics, for the detail endpoint.
pub fn container_report(catalog: &Catalog, container_id: &str) -> ContainerReport {
    let series = container_series(catalog, container_id);
    let summary = summarize(&series);
    ContainerReport { series, summary }
}

/// Aggregate statistics over one series. An empty series yields the zero
/// Summary with `data_points == 0`; callers check the count before
/// trusting min/max.
pub fn summarize(series: &ContainerSeries) -> ContainerSummary {
    let mut summary = ContainerSummary {
        container_id: series.container_id.clone(),
        container_name: series.container_name.clone(),
        ..ContainerSummary::default()
    };
    let Some(first) = series.data.first() else {
        return summary;
    };

    let mut cpu_sum = 0.0;
    let mut mem_sum = 0.0;
    let mut max_cpu = first.cpu_perc;
    let mut min_cpu = first.cpu_perc;
    let mut max_mem = first.mem_perc;
    let mut min_mem = first.mem_perc;
    for point in &series.data {
        cpu_sum += point.cpu_perc;
        mem_sum += point.mem_perc;
        max_cpu = max_cpu.max(point.cpu_perc);
        min_cpu = min_cpu.min(point.cpu_perc);
        max_mem = max_mem.max(point.mem_perc);
        min_mem = min_mem.min(point.mem_perc);
    }

    let n = series.data.len();
    summary.data_points = n;
    summary.avg_cpu = cpu_sum / n as f64;
    summary.max_cpu = max_cpu;
    summary.min_cpu = min_cpu;
    summary.avg_mem = mem_sum / n as f64;
    summary.max_mem = max_mem;
    summary.min_mem = min_mem;
    summary.first_seen = first.timestamp.clone();
    summary.last_seen = series.data[n - 1].timestamp.clone();
    summary
}

/// Summaries for every container in the catalog, ranked by average CPU
/// descending. Ties break by container ID ascending so the ranking is
/// deterministic across runs.
pub fn all_summaries(catalog: &Catalog) -> Vec<ContainerSummary> {
    let mut by_id: HashMap<String, ContainerSeries> = HashMap::new();

    for snapshot in &catalog.snapshots {
        let ts = snapshot.timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string();
        for record in &snapshot.records {
            let series = by_id
                .entry(record.id.clone())
                .or_insert_with(|| ContainerSeries {
                    container_id: record.id.clone(),
                    container_name: String::new(),
                    data: Vec::new(),
                });
            series.data.push(data_point(record, &ts));
            if series.container_name.is_empty() {
                series.container_name = record.name.clone();
            }
        }
    }

    let mut summaries: Vec<ContainerSummary> = by_id
        .into_values()
        .map(|mut series| {
            series
                .data
                .sort_by(|a, b| cmp_point_timestamps(&a.timestamp, &b.timestamp));
            summarize(&series)
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.avg_cpu
            .partial_cmp(&a.avg_cpu)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.container_id.cmp(&b.container_id))
    });
    summaries
}

fn data_point(record: &Record, timestamp: &str) -> DataPoint {
    DataPoint {
        timestamp: timestamp.to_string(),
        cpu_perc: record.cpu_percent(),
        mem_perc: record.mem_percent(),
        mem_usage: record.mem_usage.clone(),
        net_io: record.net_io.clone(),
        block_io: record.block_io.clone(),
        pids: record.pids.clone(),
    }
}

/// Timeline order for data points. The strings here are our own formatted
/// output, so a re-parse failure only happens on internal breakage; such
/// points compare Equal and keep their relative order under the stable
/// sort.
fn cmp_point_timestamps(a: &str, b: &str) -> Ordering {
    let parse = |s| NaiveDateTime::parse_from_str(s, DISPLAY_TIMESTAMP_FORMAT);
    match (parse(a), parse(b)) {
        (Ok(ta), Ok(tb)) => ta.cmp(&tb),
        _ => Ordering::Equal,
    }
}
