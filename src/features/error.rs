use thiserror::Error;

use crate::game::{Cell, Direction};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Moving {action} from {from} leaves the {width}x{height} grid")]
    OutOfBounds {
        from: Cell,
        action: Direction,
        width: usize,
        height: usize,
    },
}
