pub mod layout;
mod solver;
mod state;

pub use solver::solve;
pub use state::{Disk, GameState, MoveRecord};
