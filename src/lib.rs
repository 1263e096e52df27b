//! pacfeat - hand-crafted state-action features for grid-world Pacman
//!
//! Maps a game state and a candidate action to a sparse feature vector
//! suitable for a linear Q-function approximator.

pub mod features;
pub mod game;

pub use features::{
    closest_food, CoordinateExtractor, ExtractorConfig, FeatureError, FeatureExtractor,
    FeatureVector, IdentityExtractor, SimpleExtractor, SimpleFeature,
};
pub use game::{
    Cell, Direction, GameState, GhostState, Grid, Layout, LayoutError,
    ParseDirectionError, Position,
};
