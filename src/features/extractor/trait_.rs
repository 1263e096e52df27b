//! Feature extractor trait.

use std::hash::Hash;

use crate::features::{FeatureError, FeatureVector};
use crate::game::Direction;

/// Maps a `(state, action)` pair to a sparse feature vector.
///
/// `S` is the state type the extractor understands. Implementations are
/// pure functions of their inputs and configuration.
pub trait FeatureExtractor<S>: Send + Sync {
    /// Key type of the produced features.
    type Key: Eq + Hash;

    /// Computes the features of taking `action` in `state`.
    fn features(
        &self,
        state: &S,
        action: Direction,
    ) -> Result<FeatureVector<Self::Key>, FeatureError>;

    /// Returns a human-readable name for this extractor.
    fn name(&self) -> &str;
}
