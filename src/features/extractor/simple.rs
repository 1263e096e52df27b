//! Reflex-agent features.
//!
//! Describes the cell Pacman would move into: whether it eats food, how far
//! the next food is, how many ghosts threaten it, and whether chasing a
//! scared ghost or heading for a capsule looks worthwhile.

use std::fmt;

use super::trait_::FeatureExtractor;
use crate::features::config::ExtractorConfig;
use crate::features::search::closest_food;
use crate::features::{FeatureError, FeatureVector};
use crate::game::{legal_neighbors, Cell, Direction, GameState, GhostState, Position};

/// Keys produced by [`SimpleExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimpleFeature {
    Bias,
    GhostsOneStepAway,
    EatsFood,
    ClosestFood,
    EatsGhost,
    EatsCapsule,
}

impl SimpleFeature {
    /// Returns all feature keys in order.
    pub fn all() -> [SimpleFeature; 6] {
        [
            SimpleFeature::Bias,
            SimpleFeature::GhostsOneStepAway,
            SimpleFeature::EatsFood,
            SimpleFeature::ClosestFood,
            SimpleFeature::EatsGhost,
            SimpleFeature::EatsCapsule,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleFeature::Bias => "bias",
            SimpleFeature::GhostsOneStepAway => "#-of-ghosts-1-step-away",
            SimpleFeature::EatsFood => "eats-food",
            SimpleFeature::ClosestFood => "closest-food",
            SimpleFeature::EatsGhost => "eats-ghost",
            SimpleFeature::EatsCapsule => "eats-capsule",
        }
    }
}

impl fmt::Display for SimpleFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hand-crafted features for a reflex Pacman.
///
/// All values are divided by [`ExtractorConfig::normalizer`] before being
/// returned, so `bias` reads `0.1` under the default configuration.
#[derive(Debug, Clone, Default)]
pub struct SimpleExtractor {
    config: ExtractorConfig,
}

impl SimpleExtractor {
    /// Creates an extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Minimum Manhattan distance from `from` to any ghost matching
    /// `include`, starting from the distance cap.
    fn nearest_ghost_distance(
        &self,
        ghosts: &[GhostState],
        from: &Position,
        include: impl Fn(&GhostState) -> bool,
    ) -> f64 {
        ghosts
            .iter()
            .filter(|g| include(*g))
            .map(|g| from.manhattan_to(&g.position))
            .fold(self.config.distance_cap, f64::min)
    }

    /// True when no unscared ghost is strictly inside the danger radius.
    fn is_safe(&self, ghosts: &[GhostState], from: &Position) -> bool {
        ghosts
            .iter()
            .filter(|g| !g.is_scared())
            .all(|g| from.manhattan_to(&g.position) >= self.config.danger_radius)
    }

    fn capsule_incentive(&self, state: &GameState, from: &Position) -> f64 {
        let cfg = &self.config;
        let scared = state.scared_ghost_count();
        if scared == 0 {
            return 0.0;
        }
        let capsules = state.capsules().len();

        let mut value = cfg.capsule_base;
        value += capsules as f64 * cfg.capsule_per_capsule;
        if capsules == 1 {
            value += cfg.capsule_last_bonus;
        }
        value += scared as f64 * cfg.capsule_per_scared_ghost;
        let nearest = self.nearest_ghost_distance(state.ghost_states(), from, |_| true);
        value += (cfg.distance_cap - nearest) * cfg.capsule_proximity_weight;
        value
    }
}

impl FeatureExtractor<GameState> for SimpleExtractor {
    type Key = SimpleFeature;

    fn features(
        &self,
        state: &GameState,
        action: Direction,
    ) -> Result<FeatureVector<Self::Key>, FeatureError> {
        let walls = state.walls();
        let food = state.food();
        let ghosts = state.ghost_states();
        let pacman = state.pacman_position();

        let next: Cell = pacman
            .step(action)
            .filter(|c| walls.contains(*c))
            .ok_or(FeatureError::OutOfBounds {
                from: pacman,
                action,
                width: walls.width(),
                height: walls.height(),
            })?;
        let next_pos = Position::from(next);

        let mut features = FeatureVector::new();
        features.set(SimpleFeature::Bias, 1.0);

        let ghosts_near = ghosts
            .iter()
            .filter_map(|g| g.position.nearest_cell())
            .filter(|g| legal_neighbors(*g, walls).contains(&next))
            .count();
        features.set(SimpleFeature::GhostsOneStepAway, ghosts_near as f64);

        if ghosts_near == 0 && food.is_set(next) {
            features.set(SimpleFeature::EatsFood, 1.0);
        }

        if let Some(dist) = closest_food(next, food, walls) {
            // Normalized by maze area, so always below one.
            features.set(SimpleFeature::ClosestFood, dist as f64 / walls.area() as f64);
        }

        if state.scared_ghost_count() > 0
            && self.nearest_ghost_distance(ghosts, &next_pos, GhostState::is_scared)
                <= self.config.scared_ghost_reach
            && self.is_safe(ghosts, &next_pos)
        {
            features.set(SimpleFeature::EatsGhost, self.config.eats_ghost_value);
            features.set(SimpleFeature::GhostsOneStepAway, 0.0);
            features.set(SimpleFeature::EatsFood, 0.0);
        }

        features.set(
            SimpleFeature::EatsCapsule,
            self.capsule_incentive(state, &next_pos),
        );

        features.divide_all(self.config.normalizer);
        log::debug!(
            "features for {} from {}: {:?}",
            action,
            pacman,
            SimpleFeature::all()
                .iter()
                .filter(|k| features.contains(*k))
                .map(|k| (k.as_str(), features.get(k)))
                .collect::<Vec<_>>()
        );
        Ok(features)
    }

    fn name(&self) -> &str {
        "simple"
    }
}
