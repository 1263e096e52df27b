use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout contains no rows")]
    Empty,

    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown layout character {ch:?} at row {row}, column {col}")]
    UnknownChar { ch: char, row: usize, col: usize },

    #[error("Layout has no Pacman start position")]
    MissingPacman,

    #[error("Layout has more than one Pacman start position")]
    MultiplePacmen,

    #[error("Layout dimensions must be at least 3x3, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown direction: {0}")]
pub struct ParseDirectionError(pub String);
