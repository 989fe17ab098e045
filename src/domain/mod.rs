mod cell;
mod grid;
mod metrics;

pub use cell::Cell;
pub use grid::{Grid, Topology};
pub use metrics::{Metric, MetricsHistory, Sample};
