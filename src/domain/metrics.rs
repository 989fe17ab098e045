//! Per-generation metrics feeding the live plot.
//!
//! Three series are tracked: live cell count, occupancy percentage and the
//! growth delta from the previous generation. Samples live in a rolling
//! window so long sessions keep a bounded history.

use std::collections::VecDeque;

use super::Grid;

/// The plotted series
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    LiveCells,
    Occupancy,
    Growth,
}

impl Metric {
    /// All series in legend order
    pub const fn all() -> [Metric; 3] {
        [Metric::LiveCells, Metric::Occupancy, Metric::Growth]
    }

    /// Legend label
    pub const fn label(self) -> &'static str {
        match self {
            Metric::LiveCells => "Live Cells",
            Metric::Occupancy => "Occupancy %",
            Metric::Growth => "Growth delta",
        }
    }

    /// One-line explanation shown under the plot
    pub const fn description(self) -> &'static str {
        match self {
            Metric::LiveCells => "total live cells per generation",
            Metric::Occupancy => "percentage of grid filled",
            Metric::Growth => "live cell difference from previous gen",
        }
    }
}

/// One recorded generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub generation: u64,
    pub live_cells: usize,
    pub occupancy: f64,
    pub delta: i64,
}

impl Sample {
    /// Value of a single series for this sample
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::LiveCells => self.live_cells as f64,
            Metric::Occupancy => self.occupancy,
            Metric::Growth => self.delta as f64,
        }
    }
}

/// Rolling window of samples, oldest first
#[derive(Clone, Debug)]
pub struct MetricsHistory {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl MetricsHistory {
    /// Create an empty history holding at most `capacity` samples (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Record the grid's state for `generation`, evicting the oldest sample when full.
    /// The first sample after a reset has a delta of 0.
    pub fn record(&mut self, generation: u64, grid: &Grid) -> Sample {
        let live_cells = grid.live_count();
        let delta = self
            .latest()
            .map_or(0, |prev| live_cells as i64 - prev.live_cells as i64);

        let sample = Sample {
            generation,
            live_cells,
            occupancy: grid.occupancy(),
            delta,
        };

        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
        sample
    }

    /// Drop every sample
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Iterate samples oldest first
    pub fn samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// (generation, value) points for one series
    pub fn series(&self, metric: Metric) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.samples.iter().map(move |s| (s.generation, s.value(metric)))
    }
}

impl Default for MetricsHistory {
    fn default() -> Self {
        Self::new(1000)
    }
}
