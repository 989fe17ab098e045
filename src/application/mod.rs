mod game_state;
mod grid_view;

pub use game_state::{GameState, MAX_STEPS_PER_FRAME};
pub use grid_view::GridView;
