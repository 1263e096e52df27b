//! Static maze layouts.
//!
//! Parses the classic text format (`%` walls, `.` food, `o` capsules,
//! `P` Pacman, `G`/`1`-`4` ghosts) and generates random bordered layouts
//! for demos and tests.

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::LayoutError;
use super::grid::Grid;
use super::types::Cell;

/// Walls, food, capsules, and start positions of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub walls: Grid<bool>,
    pub food: Grid<bool>,
    pub capsules: Vec<Cell>,
    pub pacman_start: Cell,
    pub ghost_starts: Vec<Cell>,
}

/// Parameters for [`Layout::random`].
#[derive(Debug, Clone)]
pub struct RandomLayoutParams {
    /// Probability that an interior cell is a wall.
    pub wall_density: f64,
    /// Probability that an open cell (other than Pacman's) holds food.
    pub food_density: f64,
    /// Number of capsules to place on open cells.
    pub capsules: usize,
    /// Number of ghosts to place on open cells.
    pub ghosts: usize,
}

impl Default for RandomLayoutParams {
    fn default() -> Self {
        Self {
            wall_density: 0.2,
            food_density: 0.3,
            capsules: 1,
            ghosts: 1,
        }
    }
}

impl Layout {
    /// Parses a layout from text. The first line is the top row.
    ///
    /// Blank lines are ignored; every remaining row must have the same width.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();

        let height = rows.len();
        let width = rows.first().map(|r| r.len()).ok_or(LayoutError::Empty)?;

        let mut walls = Grid::new(width, height, false);
        let mut food = Grid::new(width, height, false);
        let mut capsules = Vec::new();
        let mut pacman = None;
        let mut ghosts = Vec::new();

        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found: chars.len(),
                });
            }
            let y = height - 1 - row;
            for (x, &ch) in chars.iter().enumerate() {
                let cell = Cell::new(x, y);
                match ch {
                    '%' => {
                        walls.set(cell, true);
                    }
                    '.' => {
                        food.set(cell, true);
                    }
                    'o' => capsules.push(cell),
                    'P' => {
                        if pacman.replace(cell).is_some() {
                            return Err(LayoutError::MultiplePacmen);
                        }
                    }
                    'G' | '1'..='4' => ghosts.push(cell),
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownChar { ch, row, col: x }),
                }
            }
        }

        let pacman_start = pacman.ok_or(LayoutError::MissingPacman)?;
        capsules.sort();
        log::debug!(
            "parsed {}x{} layout: {} food, {} capsules, {} ghosts",
            width,
            height,
            food.count(),
            capsules.len(),
            ghosts.len()
        );

        Ok(Self {
            walls,
            food,
            capsules,
            pacman_start,
            ghost_starts: ghosts,
        })
    }

    /// Generates a random layout enclosed by a wall border.
    ///
    /// Pacman, ghosts and capsules are placed on distinct open cells; if
    /// there are not enough open cells, fewer capsules and ghosts are placed.
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        params: &RandomLayoutParams,
        rng: &mut R,
    ) -> Result<Self, LayoutError> {
        if width < 3 || height < 3 {
            return Err(LayoutError::TooSmall { width, height });
        }

        let wall_p = probability(params.wall_density);
        let food_p = probability(params.food_density);

        let mut walls = Grid::new(width, height, false);
        let mut open = Vec::new();
        for x in 0..width {
            for y in 0..height {
                let cell = Cell::new(x, y);
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if border || rng.gen_bool(wall_p) {
                    walls.set(cell, true);
                } else {
                    open.push(cell);
                }
            }
        }

        // Guarantee a spot for Pacman.
        if open.is_empty() {
            let cell = Cell::new(1, 1);
            walls.set(cell, false);
            open.push(cell);
        }

        open.shuffle(rng);
        let pacman_start = open[0];
        let rest = &open[1..];

        let mut capsules: Vec<Cell> = rest.iter().take(params.capsules).copied().collect();
        capsules.sort();
        let ghost_starts = rest
            .iter()
            .skip(params.capsules)
            .take(params.ghosts)
            .copied()
            .collect();

        // Food only on cells left after the capsule and ghost slots.
        let mut food = Grid::new(width, height, false);
        for &cell in rest.iter().skip(params.capsules + params.ghosts) {
            if rng.gen_bool(food_p) {
                food.set(cell, true);
            }
        }

        Ok(Self {
            walls,
            food,
            capsules,
            pacman_start,
            ghost_starts,
        })
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }
}

/// Clamps a density to `[0, 1]`; non-finite values count as zero.
fn probability(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
