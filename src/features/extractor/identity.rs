//! Tabular baseline: one indicator feature per `(state, action)` pair.

use std::hash::Hash;

use super::trait_::FeatureExtractor;
use crate::features::{FeatureError, FeatureVector};
use crate::game::Direction;

/// Emits a single feature keyed by the whole `(state, action)` pair.
///
/// A linear approximator over these features is exactly a Q-table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl<S> FeatureExtractor<S> for IdentityExtractor
where
    S: Clone + Eq + Hash,
{
    type Key = (S, Direction);

    fn features(
        &self,
        state: &S,
        action: Direction,
    ) -> Result<FeatureVector<Self::Key>, FeatureError> {
        let mut feats = FeatureVector::new();
        feats.set((state.clone(), action), 1.0);
        Ok(feats)
    }

    fn name(&self) -> &str {
        "identity"
    }
}
