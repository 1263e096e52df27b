//! Grid-world baseline: indicator features for position and action.

use super::trait_::FeatureExtractor;
use crate::features::{FeatureError, FeatureVector};
use crate::game::{Cell, Direction};

/// Indicator features for a grid-world state that is just a [`Cell`].
///
/// Emits `state=(x, y)`, `x=<x>`, `y=<y>` and `action=<Direction>`, each 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateExtractor;

impl FeatureExtractor<Cell> for CoordinateExtractor {
    type Key = String;

    fn features(
        &self,
        state: &Cell,
        action: Direction,
    ) -> Result<FeatureVector<Self::Key>, FeatureError> {
        let mut feats = FeatureVector::new();
        feats.set(format!("state={}", state), 1.0);
        feats.set(format!("x={}", state.x), 1.0);
        feats.set(format!("y={}", state.y), 1.0);
        feats.set(format!("action={}", action), 1.0);
        Ok(feats)
    }

    fn name(&self) -> &str {
        "coordinate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_four_indicators() {
        let feats = CoordinateExtractor
            .features(&Cell::new(3, 7), Direction::West)
            .unwrap();
        assert_eq!(feats.len(), 4);
        assert_eq!(feats.get("state=(3, 7)"), 1.0);
        assert_eq!(feats.get("x=3"), 1.0);
        assert_eq!(feats.get("y=7"), 1.0);
        assert_eq!(feats.get("action=West"), 1.0);
    }

    #[test]
    fn diagonal_cell_keeps_axis_keys_distinct() {
        // x=2 and y=2 are distinct keys even when the coordinates match.
        let feats = CoordinateExtractor
            .features(&Cell::new(2, 2), Direction::Stop)
            .unwrap();
        assert_eq!(feats.len(), 4);
        assert_eq!(feats.total(), 4.0);
    }
}
