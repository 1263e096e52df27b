//! Minimal grid-world model read by the feature extractors.
//!
//! Only the parts of a Pacman game the extractors look at are modelled:
//! walls, food, capsules, Pacman's cell, and ghost positions with their
//! scared timers.

pub mod error;
pub mod grid;
pub mod layout;
pub mod state;
pub mod types;

pub use error::{LayoutError, ParseDirectionError};
pub use grid::{legal_neighbors, Grid};
pub use layout::{Layout, RandomLayoutParams};
pub use state::{GameState, GhostState};
pub use types::{Cell, Direction, Position};
