use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::{LifeConfig, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS};
use crate::domain::{Cell, Grid, MetricsHistory, Sample};
use crate::error::GridError;

/// Upper bound on generations computed in one frame
pub const MAX_STEPS_PER_FRAME: u32 = 8;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub metrics: MetricsHistory,
    pub is_running: bool,
    pub generation: u64,
    pub step_interval_ms: u32,
    pub last_step_time_ms: f32, // Step performance metric
    step_timer: f32,
    initial_density: f64,
    parallel_threshold: usize,
    rng: StdRng,
}

impl GameState {
    /// Build the initial state: a randomized grid with a baseline sample
    pub fn new(config: &LifeConfig) -> Result<Self, GridError> {
        let grid = Grid::new(config.grid.width, config.grid.height, config.grid.topology)?;
        let rng = match config.grid.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let state = Self {
            grid,
            metrics: MetricsHistory::new(config.metrics.history_capacity),
            is_running: false,
            generation: 0,
            step_interval_ms: config
                .simulation
                .step_interval_ms
                .clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS),
            last_step_time_ms: 0.0,
            step_timer: 0.0,
            initial_density: config.grid.initial_density,
            parallel_threshold: config.simulation.parallel_threshold,
            rng,
        };
        Ok(state.randomize())
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.step_timer = 0.0;
        info!(running = self.is_running, generation = self.generation, "simulation toggled");
        self
    }

    /// Kill every cell, restart the generation counter and metrics
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.restart_history();
        info!("grid cleared");
        self
    }

    /// Re-seed every cell independently, restart the generation counter and metrics
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(&mut self.rng, self.initial_density);
        self.restart_history();
        info!(
            density = self.initial_density,
            live_cells = self.grid.live_count(),
            "grid randomized"
        );
        self
    }

    fn restart_history(&mut self) {
        self.generation = 0;
        self.step_timer = 0.0;
        self.metrics.reset();
        self.metrics.record(0, &self.grid);
    }

    /// Set the step interval, clamped to the slider range
    pub fn set_step_interval(&mut self, interval_ms: u32) {
        self.step_interval_ms = interval_ms.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
    }

    /// Shift the step interval by `delta_ms` (negative is faster)
    pub fn adjust_interval(mut self, delta_ms: i32) -> Self {
        let next = self.step_interval_ms.saturating_add_signed(delta_ms);
        self.set_step_interval(next);
        debug!(interval_ms = self.step_interval_ms, "step interval adjusted");
        self
    }

    /// Flip one cell, returning its new state
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Option<Cell> {
        let cell = self.grid.toggle(x, y)?;
        debug!(x, y, alive = cell.is_alive(), "cell toggled");
        Some(cell)
    }

    /// Advance exactly one generation while paused
    pub fn single_step(mut self) -> Self {
        if !self.is_running {
            self.advance();
        }
        self
    }

    /// Latest recorded sample
    pub fn latest_sample(&self) -> Option<&Sample> {
        self.metrics.latest()
    }

    /// Update simulation by one frame.
    /// Runs every generation that came due, up to MAX_STEPS_PER_FRAME.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.step_timer += delta_time;
        let update_interval = self.step_interval_ms as f32 / 1000.0;

        let mut steps = 0;
        while self.step_timer >= update_interval && steps < MAX_STEPS_PER_FRAME {
            self.advance();
            self.step_timer -= update_interval;
            steps += 1;
        }

        // Drop the backlog instead of catching up on later frames
        if steps == MAX_STEPS_PER_FRAME {
            self.step_timer = 0.0;
        }

        self
    }

    /// Compute the next generation and record its metrics
    fn advance(&mut self) {
        let start = Instant::now();

        self.grid = if self.grid.cell_count() >= self.parallel_threshold {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };

        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        let sample = self.metrics.record(self.generation, &self.grid);
        debug!(
            generation = self.generation,
            live_cells = sample.live_cells,
            delta = sample.delta,
            step_ms = self.last_step_time_ms,
            "generation stepped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Topology;

    fn config(width: usize, height: usize, seed: u64) -> LifeConfig {
        let mut config = LifeConfig::default();
        config.grid.width = width;
        config.grid.height = height;
        config.grid.seed = Some(seed);
        config.simulation.step_interval_ms = 100;
        config
    }

    #[test]
    fn test_new_records_baseline() {
        let state = GameState::new(&config(20, 20, 3)).unwrap();
        assert_eq!(state.generation, 0);
        assert!(!state.is_running);
        assert_eq!(state.metrics.len(), 1);
        let baseline = state.latest_sample().unwrap();
        assert_eq!(baseline.generation, 0);
        assert_eq!(baseline.live_cells, state.grid.live_count());
        assert_eq!(baseline.delta, 0);
    }

    #[test]
    fn test_new_rejects_zero_grid() {
        let err = GameState::new(&config(0, 20, 3)).err();
        assert_eq!(err, Some(GridError::InvalidDimensions { width: 0, height: 20 }));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = GameState::new(&config(30, 30, 11)).unwrap();
        let b = GameState::new(&config(30, 30, 11)).unwrap();
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_clear_resets_generation_and_metrics() {
        let mut state = GameState::new(&config(20, 20, 5)).unwrap().toggle_running();
        state = state.tick(0.15);
        assert_eq!(state.generation, 1);

        let state = state.clear();
        assert!(state.grid.is_empty());
        assert_eq!(state.grid.dimensions(), (20, 20));
        assert_eq!(state.generation, 0);
        assert_eq!(state.metrics.len(), 1);
        assert_eq!(state.latest_sample().map(|s| s.live_cells), Some(0));
        // Clearing does not stop a running simulation
        assert!(state.is_running);
    }

    #[test]
    fn test_randomize_resets_history() {
        let mut state = GameState::new(&config(20, 20, 5)).unwrap().toggle_running();
        state = state.tick(0.1).tick(0.1);
        assert_eq!(state.generation, 2);

        let state = state.randomize();
        assert_eq!(state.generation, 0);
        assert_eq!(state.metrics.len(), 1);
        assert!(state.is_running);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let state = GameState::new(&config(20, 20, 5)).unwrap();
        let before = state.grid.clone();
        let state = state.tick(10.0);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid, before);
    }

    #[test]
    fn test_tick_accumulates_frame_time() {
        let state = GameState::new(&config(20, 20, 5)).unwrap().toggle_running();
        let state = state.tick(0.05);
        assert_eq!(state.generation, 0);
        let state = state.tick(0.06);
        assert_eq!(state.generation, 1);
        assert_eq!(state.metrics.len(), 2);
    }

    #[test]
    fn test_tick_caps_steps_per_frame() {
        let state = GameState::new(&config(20, 20, 5)).unwrap().toggle_running();
        let state = state.tick(5.0);
        assert_eq!(state.generation, u64::from(MAX_STEPS_PER_FRAME));
        // Backlog dropped: a short frame afterwards does not step
        let state = state.tick(0.01);
        assert_eq!(state.generation, u64::from(MAX_STEPS_PER_FRAME));
    }

    #[test]
    fn test_single_step_only_when_paused() {
        let state = GameState::new(&config(20, 20, 5)).unwrap();
        let expected = state.grid.step();
        let state = state.single_step();
        assert_eq!(state.generation, 1);
        assert_eq!(state.grid, expected);

        let state = state.toggle_running().single_step();
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_step_records_delta() {
        let mut cfg = config(5, 5, 1);
        cfg.grid.topology = Topology::Bounded;
        let mut state = GameState::new(&cfg).unwrap().clear();
        state.toggle_cell(2, 2);
        let state = state.single_step();
        // Isolated cell died: live went 0 (baseline) -> 0
        let sample = state.latest_sample().unwrap();
        assert_eq!(sample.generation, 1);
        assert_eq!(sample.live_cells, 0);
        assert_eq!(sample.delta, 0);
    }

    #[test]
    fn test_toggle_cell() {
        let mut state = GameState::new(&config(10, 10, 1)).unwrap().clear();
        assert_eq!(state.toggle_cell(3, 4), Some(Cell::Alive));
        assert_eq!(state.grid.live_count(), 1);
        assert_eq!(state.toggle_cell(10, 0), None);
    }

    #[test]
    fn test_interval_clamped() {
        let state = GameState::new(&config(10, 10, 1)).unwrap();
        let state = state.adjust_interval(-1000);
        assert_eq!(state.step_interval_ms, MIN_STEP_INTERVAL_MS);
        let mut state = state.adjust_interval(5000);
        assert_eq!(state.step_interval_ms, MAX_STEP_INTERVAL_MS);
        state.set_step_interval(250);
        assert_eq!(state.step_interval_ms, 250);
    }

    #[test]
    fn test_parallel_path_matches_serial() {
        let mut cfg = config(40, 40, 9);
        cfg.simulation.parallel_threshold = 1;
        let state = GameState::new(&cfg).unwrap();
        let expected = state.grid.step();
        assert_eq!(state.single_step().grid, expected);
    }
}
