//! Breadth-first search for the nearest food pellet.

use std::collections::VecDeque;

use crate::game::{legal_neighbors, Cell, Grid};

/// Maze distance from `start` to the nearest cell holding food.
///
/// Expands cells in BFS order through [`legal_neighbors`], so walls block
/// the search. Returns `Some(0)` when `start` itself holds food and `None`
/// when no food is reachable or `start` lies outside the grid.
pub fn closest_food(start: Cell, food: &Grid<bool>, walls: &Grid<bool>) -> Option<usize> {
    if !walls.contains(start) {
        return None;
    }

    let mut fringe = VecDeque::from([(start, 0usize)]);
    let mut expanded = Grid::new(walls.width(), walls.height(), false);

    while let Some((cell, dist)) = fringe.pop_front() {
        if expanded.is_set(cell) {
            continue;
        }
        expanded.set(cell, true);

        if food.is_set(cell) {
            log::trace!("closest food from {} is {} steps away at {}", start, dist, cell);
            return Some(dist);
        }

        for next in legal_neighbors(cell, walls) {
            if !expanded.is_set(next) {
                fringe.push_back((next, dist + 1));
            }
        }
    }

    log::trace!(
        "no reachable food from {} ({} cells expanded)",
        start,
        expanded.count()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Layout;

    fn search(text: &str) -> Option<usize> {
        let layout = Layout::parse(text).unwrap();
        closest_food(layout.pacman_start, &layout.food, &layout.walls)
    }

    #[test]
    fn straight_corridor() {
        assert_eq!(search("%%%%%%\n%P  .%\n%%%%%%\n"), Some(3));
    }

    #[test]
    fn food_under_start_is_zero() {
        let layout = Layout::parse("%%%%\n%P %\n%%%%\n").unwrap();
        let mut food = layout.food.clone();
        food.set(layout.pacman_start, true);
        assert_eq!(closest_food(layout.pacman_start, &food, &layout.walls), Some(0));
    }

    #[test]
    fn walls_force_a_detour() {
        // Straight-line distance is 2, but the wall forces a path of 6.
        let text = "\
%%%%%
%P%.%
% % %
%   %
%%%%%
";
        assert_eq!(search(text), Some(6));
    }

    #[test]
    fn picks_nearest_of_several() {
        assert_eq!(search("%%%%%%%%\n%.  P .%\n%%%%%%%%\n"), Some(2));
    }

    #[test]
    fn unreachable_food_is_none() {
        assert_eq!(search("%%%%%%\n%P %.%\n%%%%%%\n"), None);
    }

    #[test]
    fn no_food_is_none() {
        assert_eq!(search("%%%%\n%P %\n%%%%\n"), None);
    }

    #[test]
    fn start_outside_grid_is_none() {
        let layout = Layout::parse("%%%%\n%P.%\n%%%%\n").unwrap();
        assert_eq!(
            closest_food(Cell::new(10, 1), &layout.food, &layout.walls),
            None
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::game::{Layout, RandomLayoutParams};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Shortest distances from `start` by repeated relaxation, independent of BFS order.
    fn flood_distances(start: Cell, walls: &Grid<bool>) -> Grid<Option<usize>> {
        let mut dist = Grid::new(walls.width(), walls.height(), None);
        dist.set(start, Some(0));
        let mut changed = true;
        while changed {
            changed = false;
            for x in 0..walls.width() {
                for y in 0..walls.height() {
                    let cell = Cell::new(x, y);
                    let Some(d) = dist.get(cell).copied().flatten() else {
                        continue;
                    };
                    for next in legal_neighbors(cell, walls) {
                        let current = dist.get(next).copied().flatten();
                        if current.map_or(true, |c| d + 1 < c) {
                            dist.set(next, Some(d + 1));
                            changed = true;
                        }
                    }
                }
            }
        }
        dist
    }

    proptest! {
        #[test]
        fn bfs_matches_flood_fill(
            seed in any::<u64>(),
            width in 3usize..12,
            height in 3usize..12,
            wall_density in 0.0f64..0.5,
            food_density in 0.0f64..0.3,
        ) {
            let params = RandomLayoutParams { wall_density, food_density, capsules: 0, ghosts: 0 };
            let layout = Layout::random(width, height, &params, &mut StdRng::seed_from_u64(seed)).unwrap();
            let dist = flood_distances(layout.pacman_start, &layout.walls);
            let expected = layout
                .food
                .cells()
                .filter_map(|c| dist.get(c).copied().flatten())
                .min();
            prop_assert_eq!(
                closest_food(layout.pacman_start, &layout.food, &layout.walls),
                expected
            );
        }

        #[test]
        fn zero_iff_start_has_food(seed in any::<u64>(), width in 3usize..10, height in 3usize..10) {
            let mut layout = Layout::random(
                width,
                height,
                &RandomLayoutParams::default(),
                &mut StdRng::seed_from_u64(seed),
            ).unwrap();
            let start = layout.pacman_start;
            prop_assert_ne!(closest_food(start, &layout.food, &layout.walls), Some(0));
            layout.food.set(start, true);
            prop_assert_eq!(closest_food(start, &layout.food, &layout.walls), Some(0));
        }
    }
}
