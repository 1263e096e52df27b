//! Sparse feature vectors.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A sparse map from feature key to value.
///
/// Keys that were never set read as `0.0`. Setting a key to `0.0` still
/// records it, so [`FeatureVector::contains`] distinguishes "computed as
/// zero" from "not computed".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: serde::Serialize + Eq + Hash",
        deserialize = "K: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct FeatureVector<K: Eq + Hash> {
    values: HashMap<K, f64>,
}

impl<K: Eq + Hash> Default for FeatureVector<K> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> FeatureVector<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    /// Adds `delta` to the value of `key` (missing keys start at `0.0`).
    pub fn add(&mut self, key: K, delta: f64) {
        *self.values.entry(key).or_insert(0.0) += delta;
    }

    /// Value of `key`, or `0.0` if it was never set.
    pub fn get<Q>(&self, key: &Q) -> f64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    /// Divides every value by `divisor`.
    pub fn divide_all(&mut self, divisor: f64) {
        for v in self.values.values_mut() {
            *v /= divisor;
        }
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Dot product over the keys both vectors share.
    ///
    /// With `self` as features and `weights` as the learned weights this is
    /// the linear Q-value estimate.
    pub fn dot(&self, weights: &FeatureVector<K>) -> f64 {
        let (small, large) = if self.len() <= weights.len() {
            (self, weights)
        } else {
            (weights, self)
        };
        small
            .values
            .iter()
            .map(|(k, v)| v * large.get(k))
            .sum()
    }
}

impl<K: Eq + Hash> FromIterator<(K, f64)> for FeatureVector<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> IntoIterator for FeatureVector<K> {
    type Item = (K, f64);
    type IntoIter = std::collections::hash_map::IntoIter<K, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_zero() {
        let fv: FeatureVector<&str> = FeatureVector::new();
        assert_eq!(fv.get("bias"), 0.0);
        assert!(!fv.contains("bias"));
        assert!(fv.is_empty());
    }

    #[test]
    fn zero_values_are_recorded() {
        let mut fv = FeatureVector::new();
        fv.set("eats-capsule", 0.0);
        assert!(fv.contains("eats-capsule"));
        assert_eq!(fv.len(), 1);
    }

    #[test]
    fn add_accumulates() {
        let mut fv = FeatureVector::new();
        fv.add("a", 1.5);
        fv.add("a", 2.0);
        assert!((fv.get("a") - 3.5).abs() < 1e-12);
    }

    #[test]
    fn divide_all_scales_every_value() {
        let mut fv: FeatureVector<&str> = [("a", 1.0), ("b", 15.0)].into_iter().collect();
        fv.divide_all(10.0);
        assert!((fv.get("a") - 0.1).abs() < 1e-12);
        assert!((fv.get("b") - 1.5).abs() < 1e-12);
        assert!((fv.total() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn dot_uses_shared_keys_only() {
        let features: FeatureVector<String> =
            [("a".to_string(), 2.0), ("b".to_string(), 3.0)].into_iter().collect();
        let weights: FeatureVector<String> = [
            ("a".to_string(), 0.5),
            ("c".to_string(), 100.0),
        ]
        .into_iter()
        .collect();
        assert!((features.dot(&weights) - 1.0).abs() < 1e-12);
        assert!((weights.dot(&features) - 1.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let fv: FeatureVector<String> = [("bias".to_string(), 0.1)].into_iter().collect();
        let json = serde_json::to_string(&fv).unwrap();
        let back: FeatureVector<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(fv, back);
    }
}
