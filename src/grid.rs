use core::fmt;
use grid_util::grid::{BoolGrid, Grid as _};
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;

/// A grid position. `x` is the row and `y` the column, so offsets such as [DOWN] grow `x`.
pub type Cell = Point;

pub const UP: Point = Point { x: -1, y: 0 };
pub const RIGHT: Point = Point { x: 0, y: 1 };
pub const DOWN: Point = Point { x: 1, y: 0 };
pub const DOWN_RIGHT: Point = Point { x: 1, y: 1 };
pub const LEFT: Point = Point { x: 0, y: -1 };
pub const UP_LEFT: Point = Point { x: -1, y: -1 };

/// Neighbour order used by every search. Down-left and up-right are never offered.
/// Changing the order changes which of several equally long paths is discovered first.
pub const DIRECTIONS: [Point; 6] = [UP, RIGHT, DOWN, DOWN_RIGHT, LEFT, UP_LEFT];

/// A square occupancy grid with a fixed start and goal. Walls are stored as [true].
///
/// Like any search input it is cloned per run: obstacles spawned during one search must not
/// leak into another. Connected components are kept in a [UnionFind] and only serve as a static
/// reachability oracle; the searches themselves never consult them.
#[derive(Clone, Debug)]
pub struct Grid {
    pub grid: BoolGrid,
    pub start: Cell,
    pub goal: Cell,
    pub directions: Vec<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Creates an obstacle-free grid of `size`×`size` cells using [DIRECTIONS].
    pub fn new(size: usize, start: Cell, goal: Cell) -> Grid {
        let mut grid = Grid {
            grid: BoolGrid::new(size, size, false),
            start,
            goal,
            directions: DIRECTIONS.to_vec(),
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// The default 15×15 grid with the static wall layout used by the demo driver.
    pub fn with_demo_walls() -> Grid {
        let mut grid = Grid::new(crate::GRID_SIZE, crate::START, crate::GOAL);
        for i in 4..12 {
            grid.set_wall(Cell::new(8, i), true);
            grid.set_wall(Cell::new(i, 12), true);
        }
        for i in 5..15 {
            grid.set_wall(Cell::new(i, 5), true);
        }
        grid.generate_components();
        grid
    }

    pub fn size(&self) -> usize {
        self.grid.width
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.grid.point_in_bounds(cell)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.size() as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    /// Out-of-bounds cells count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.grid.get_point(cell)
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// Sets or clears a wall. Returns whether the cell changed. Blocking a cell may split a
    /// component, so the components are flagged as dirty; unblocking joins the cell with its
    /// free neighbours directly.
    pub fn set_wall(&mut self, cell: Cell, wall: bool) -> bool {
        if !self.in_bounds(cell) || self.is_wall(cell) == wall {
            return false;
        }
        self.grid.set_point(cell, wall);
        if wall {
            self.components_dirty = true;
        } else {
            let ix = self.grid.get_ix_point(&cell);
            for n in self.neighbours(cell) {
                let n_ix = self.grid.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
        true
    }

    /// The free cells adjacent to `cell`, in the order of [Grid::directions].
    pub fn neighbours(&self, cell: Cell) -> Vec<Cell> {
        self.directions
            .iter()
            .map(|&dir| cell + dir)
            .filter(|&n| self.is_free(n))
            .collect()
    }

    /// Whether `to` is one direction step away from `from`, ignoring walls.
    pub fn is_step(&self, from: &Cell, to: &Cell) -> bool {
        self.directions.contains(&(*to - *from))
    }

    /// Free cells other than start and goal, in row-major order.
    pub fn open_cells(&self) -> Vec<Cell> {
        self.cells()
            .filter(|&c| self.is_free(c) && c != self.start && c != self.goal)
            .collect()
    }

    pub fn wall_count(&self) -> usize {
        self.cells().filter(|&c| self.is_wall(c)).count()
    }

    /// Whether start and goal are in bounds and free.
    pub fn endpoints_valid(&self) -> bool {
        self.is_free(self.start) && self.is_free(self.goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components. Adjacency is treated as undirected, which holds for [DIRECTIONS] since it is
    /// closed under reversal.
    pub fn generate_components(&mut self) {
        let n = self.size();
        self.components = UnionFind::new(n * n);
        self.components_dirty = false;
        let free: Vec<Cell> = self.cells().filter(|&c| self.is_free(c)).collect();
        for cell in free {
            let ix = self.grid.get_ix_point(&cell);
            for neighbour in self.neighbours(cell) {
                let n_ix = self.grid.get_ix_point(&neighbour);
                self.components.union(ix, n_ix);
            }
        }
    }

    /// Checks if `a` and `b` are free and on the same component. Assumes components are up to
    /// date, see [Grid::update].
    pub fn reachable(&self, a: &Cell, b: &Cell) -> bool {
        self.is_free(*a)
            && self.is_free(*b)
            && self
                .components
                .equiv(self.grid.get_ix_point(a), self.grid.get_ix_point(b))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.size() as i32;
        for row in 0..n {
            for col in 0..n {
                let cell = Cell::new(row, col);
                let c = if cell == self.start {
                    'S'
                } else if cell == self.goal {
                    'G'
                } else if self.is_wall(cell) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_order_is_fixed() {
        let grid = Grid::new(5, Cell::new(0, 0), Cell::new(4, 4));
        let n = grid.neighbours(Cell::new(2, 2));
        assert_eq!(
            n,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 3),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 1),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn neighbours_exclude_walls_and_bounds() {
        let mut grid = Grid::new(3, Cell::new(0, 0), Cell::new(2, 2));
        grid.set_wall(Cell::new(0, 1), true);
        // Up, up-left and left fall outside the grid; right is walled.
        assert_eq!(
            grid.neighbours(Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    #[test]
    fn set_wall_reports_change() {
        let mut grid = Grid::new(3, Cell::new(0, 0), Cell::new(2, 2));
        assert!(grid.set_wall(Cell::new(1, 1), true));
        assert!(!grid.set_wall(Cell::new(1, 1), true));
        assert!(!grid.set_wall(Cell::new(5, 5), true));
        assert_eq!(grid.wall_count(), 1);
        assert!(grid.components_dirty);
    }

    /// A wall column separates the two halves; the six-direction set cannot cut corners through
    /// a missing down-left or up-right move.
    #[test]
    fn components_follow_walls() {
        //  ___
        // |S#.|
        // |.#.|
        // |.#G|
        //  ___
        let mut grid = Grid::new(3, Cell::new(0, 0), Cell::new(2, 2));
        for row in 0..3 {
            grid.set_wall(Cell::new(row, 1), true);
        }
        grid.update();
        assert!(!grid.reachable(&grid.start, &grid.goal));
        assert!(grid.reachable(&Cell::new(0, 0), &Cell::new(2, 0)));
        grid.set_wall(Cell::new(1, 1), false);
        assert!(grid.reachable(&grid.start, &grid.goal));
    }

    #[test]
    fn anti_diagonal_is_not_adjacent() {
        //  __
        // |.#|
        // |#.|
        //  __
        let mut grid = Grid::new(2, Cell::new(0, 1), Cell::new(1, 0));
        grid.set_wall(Cell::new(0, 0), true);
        grid.set_wall(Cell::new(1, 1), true);
        grid.update();
        assert!(grid.neighbours(grid.start).is_empty());
        assert!(!grid.reachable(&grid.start, &grid.goal));

        // The main diagonal is adjacent.
        let mut diag = Grid::new(2, Cell::new(0, 0), Cell::new(1, 1));
        diag.set_wall(Cell::new(0, 1), true);
        diag.set_wall(Cell::new(1, 0), true);
        diag.update();
        assert!(diag.reachable(&diag.start, &diag.goal));
    }

    #[test]
    fn cells_and_steps() {
        let mut grid = Grid::new(3, Cell::new(0, 0), Cell::new(2, 2));
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert!(grid.is_wall(Cell::new(-1, 0)));
        assert!(grid.is_wall(Cell::new(0, 3)));

        assert!(grid.is_step(&Cell::new(1, 1), &Cell::new(2, 2)));
        assert!(!grid.is_step(&Cell::new(1, 1), &Cell::new(2, 0)));
        assert!(!grid.is_step(&Cell::new(1, 1), &Cell::new(1, 1)));

        // Row and column are not interchangeable.
        grid.set_wall(Cell::new(0, 1), true);
        assert!(grid.is_wall(Cell::new(0, 1)));
        assert!(grid.is_free(Cell::new(1, 0)));
        assert_eq!(grid.open_cells().len(), 6);
    }

    #[test]
    fn demo_walls_layout() {
        let grid = Grid::with_demo_walls();
        assert_eq!(grid.wall_count(), 25);
        assert!(grid.is_wall(Cell::new(8, 4)));
        assert!(grid.is_wall(Cell::new(4, 12)));
        assert!(grid.is_wall(Cell::new(14, 5)));
        assert!(grid.endpoints_valid());
        assert!(grid.reachable(&grid.start, &grid.goal));
        assert_eq!(format!("{}", grid).lines().count(), 15);
    }
}
