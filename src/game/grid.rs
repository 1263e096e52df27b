//! Column-major boolean/value grids and wall-aware neighbor expansion.

use super::types::{Cell, Direction};

/// A `width × height` grid indexed by [`Cell`], stored column by column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width × height`).
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Value at `cell`, or `None` if it is outside the grid.
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.index(cell).map(|i| &self.data[i])
    }

    /// Overwrites the value at `cell`. Returns false if `cell` is outside the grid.
    pub fn set(&mut self, cell: Cell, value: T) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.x * self.height + cell.y)
    }
}

impl Grid<bool> {
    /// True if `cell` is inside the grid and set. Out-of-range reads as false.
    pub fn is_set(&self, cell: Cell) -> bool {
        self.get(cell).copied().unwrap_or(false)
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|v| **v).count()
    }

    /// Iterates the set cells in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let height = self.height;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(i, _)| Cell::new(i / height, i % height))
    }
}

/// Open cells reachable from `cell` in one move, `Stop` included.
///
/// Directions are tried in [`Direction::all`] order. Targets outside the
/// grid or on a wall are skipped, so an open `cell` is its own neighbor.
pub fn legal_neighbors(cell: Cell, walls: &Grid<bool>) -> Vec<Cell> {
    Direction::all()
        .iter()
        .filter_map(|d| cell.step(*d))
        .filter(|next| walls.contains(*next) && !walls.is_set(*next))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set() {
        let mut g = Grid::new(3, 2, 0u8);
        assert!(g.set(Cell::new(2, 1), 7));
        assert_eq!(g.get(Cell::new(2, 1)), Some(&7));
        assert_eq!(g.get(Cell::new(3, 0)), None);
        assert!(!g.set(Cell::new(0, 2), 1));
        assert_eq!(g.area(), 6);
    }

    #[test]
    fn bool_grid_count_and_cells() {
        let mut g = Grid::new(4, 4, false);
        g.set(Cell::new(1, 2), true);
        g.set(Cell::new(3, 0), true);
        assert_eq!(g.count(), 2);
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells, vec![Cell::new(1, 2), Cell::new(3, 0)]);
        assert!(!g.is_set(Cell::new(9, 9)));
    }

    #[test]
    fn neighbors_include_stop_and_skip_walls() {
        let mut walls = Grid::new(3, 3, false);
        walls.set(Cell::new(1, 2), true);
        let n = legal_neighbors(Cell::new(1, 1), &walls);
        assert_eq!(
            n,
            vec![
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(0, 1),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_out_of_range() {
        let walls = Grid::new(2, 2, false);
        let n = legal_neighbors(Cell::new(0, 0), &walls);
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(0, 0)]);
    }
}
