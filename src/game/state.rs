//! Snapshot of a game as seen by the feature extractors.

use std::hash::{Hash, Hasher};

use super::grid::{legal_neighbors, Grid};
use super::layout::Layout;
use super::types::{Cell, Direction, Position};

/// A ghost's position and how long it stays scared.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostState {
    pub position: Position,
    /// Remaining scared moves. Zero means the ghost is dangerous.
    pub scared_timer: u32,
}

impl GhostState {
    /// Creates a dangerous (unscared) ghost.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            scared_timer: 0,
        }
    }

    /// Creates a ghost that stays scared for `timer` moves.
    pub fn scared(position: Position, timer: u32) -> Self {
        Self {
            position,
            scared_timer: timer,
        }
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

// Positions compare by bit pattern so that states can key hash maps.
impl PartialEq for GhostState {
    fn eq(&self, other: &Self) -> bool {
        self.position.x.to_bits() == other.position.x.to_bits()
            && self.position.y.to_bits() == other.position.y.to_bits()
            && self.scared_timer == other.scared_timer
    }
}

impl Eq for GhostState {}

impl Hash for GhostState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.x.to_bits().hash(state);
        self.position.y.to_bits().hash(state);
        self.scared_timer.hash(state);
    }
}

/// Everything the extractors read about the current game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    walls: Grid<bool>,
    food: Grid<bool>,
    capsules: Vec<Cell>,
    pacman: Cell,
    ghosts: Vec<GhostState>,
}

impl GameState {
    /// Creates a state from its parts.
    pub fn new(
        walls: Grid<bool>,
        food: Grid<bool>,
        capsules: Vec<Cell>,
        pacman: Cell,
        ghosts: Vec<GhostState>,
    ) -> Self {
        Self {
            walls,
            food,
            capsules,
            pacman,
            ghosts,
        }
    }

    /// Initial state of a layout: every ghost on its start cell, unscared.
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            walls: layout.walls.clone(),
            food: layout.food.clone(),
            capsules: layout.capsules.clone(),
            pacman: layout.pacman_start,
            ghosts: layout
                .ghost_starts
                .iter()
                .map(|c| GhostState::new(Position::from(*c)))
                .collect(),
        }
    }

    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    pub fn food(&self) -> &Grid<bool> {
        &self.food
    }

    pub fn capsules(&self) -> &[Cell] {
        &self.capsules
    }

    pub fn pacman_position(&self) -> Cell {
        self.pacman
    }

    pub fn ghost_states(&self) -> &[GhostState] {
        &self.ghosts
    }

    pub fn ghost_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.ghosts.iter().map(|g| g.position)
    }

    /// Number of ghosts with a positive scared timer.
    pub fn scared_ghost_count(&self) -> usize {
        self.ghosts.iter().filter(|g| g.is_scared()).count()
    }

    /// Scares every ghost for `timer` moves, as eating a capsule does.
    pub fn with_scared_ghosts(mut self, timer: u32) -> Self {
        for ghost in &mut self.ghosts {
            ghost.scared_timer = timer;
        }
        self
    }

    /// Directions Pacman can take from its current cell. `Stop` is always legal.
    pub fn legal_actions(&self) -> Vec<Direction> {
        let neighbors = legal_neighbors(self.pacman, &self.walls);
        Direction::all()
            .into_iter()
            .filter(|d| {
                *d == Direction::Stop
                    || self
                        .pacman
                        .step(*d)
                        .is_some_and(|next| neighbors.contains(&next))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CORRIDOR: &str = "\
%%%%%%
%P. G%
%%%%%%
";

    fn corridor() -> GameState {
        GameState::from_layout(&Layout::parse(CORRIDOR).unwrap())
    }

    #[test]
    fn from_layout_copies_positions() {
        let state = corridor();
        assert_eq!(state.pacman_position(), Cell::new(1, 1));
        let ghosts: Vec<_> = state.ghost_positions().collect();
        assert_eq!(ghosts, vec![Position::new(4.0, 1.0)]);
        assert_eq!(state.scared_ghost_count(), 0);
        assert_eq!(state.food().count(), 1);
    }

    #[test]
    fn legal_actions_in_corridor() {
        let state = corridor();
        assert_eq!(state.legal_actions(), vec![Direction::East, Direction::Stop]);
    }

    #[test]
    fn scaring_ghosts() {
        let state = corridor().with_scared_ghosts(40);
        assert_eq!(state.scared_ghost_count(), 1);
        assert!(state.ghost_states()[0].is_scared());
    }

    #[test]
    fn states_are_hashable() {
        let mut set = HashSet::new();
        set.insert(corridor());
        set.insert(corridor());
        set.insert(corridor().with_scared_ghosts(3));
        assert_eq!(set.len(), 2);
    }
}
