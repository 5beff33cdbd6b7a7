// Domain models (ported from the original Go viewer)

mod record;
mod series;

pub use record::{Catalog, Record, Snapshot, parse_percent};
pub use series::{
    ContainerReport, ContainerSeries, ContainerSummary, DISPLAY_TIMESTAMP_FORMAT, DataPoint,
};
