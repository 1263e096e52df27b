//! Tuning constants for the reflex feature extractor.

/// Configuration for [`SimpleExtractor`](super::SimpleExtractor).
///
/// The defaults reproduce the reference weighting; changing them changes
/// the scale of the features a trained weight vector expects.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractorConfig {
    // --- Normalization ---
    /// Every feature is divided by this at the end.
    pub normalizer: f64,

    // --- Scared-ghost chasing ---
    /// Raw `eats-ghost` value when chasing a scared ghost is judged safe.
    pub eats_ghost_value: f64,
    /// Maximum Manhattan distance to a scared ghost for `eats-ghost` to fire.
    pub scared_ghost_reach: f64,
    /// An unscared ghost strictly closer than this makes chasing unsafe.
    pub danger_radius: f64,
    /// Ghost distances are capped at this value.
    pub distance_cap: f64,

    // --- Capsule shaping ---
    /// Base `eats-capsule` value whenever any ghost is scared.
    pub capsule_base: f64,
    /// Added per remaining capsule.
    pub capsule_per_capsule: f64,
    /// Added when exactly one capsule remains.
    pub capsule_last_bonus: f64,
    /// Added per scared ghost.
    pub capsule_per_scared_ghost: f64,
    /// Weight of `(distance_cap - nearest ghost distance)`.
    pub capsule_proximity_weight: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            normalizer: 10.0,
            eats_ghost_value: 15.0,
            scared_ghost_reach: 2.0,
            danger_radius: 5.0,
            distance_cap: 10.0,
            capsule_base: 0.5,
            capsule_per_capsule: 1.5,
            capsule_last_bonus: 5.0,
            capsule_per_scared_ghost: 0.5,
            capsule_proximity_weight: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ExtractorConfig::default();
        assert!(cfg.normalizer > 0.0);
        assert!(cfg.scared_ghost_reach < cfg.danger_radius);
        assert!(cfg.danger_radius <= cfg.distance_cap);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: ExtractorConfig = serde_json::from_str(r#"{ "normalizer": 4.0 }"#).unwrap();
        assert_eq!(cfg.normalizer, 4.0);
        assert_eq!(cfg.eats_ghost_value, 15.0);
    }
}
