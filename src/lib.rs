// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Ambient - configuration and errors
pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, Metric, MetricsHistory, Sample, Topology};
pub use application::{GameState, GridView};
pub use config::LifeConfig;
pub use error::{AppError, GridError};
pub use ui::Button;
