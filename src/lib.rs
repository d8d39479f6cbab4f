//! # grid_uninformed
//!
//! Uninformed search on a square grid whose walls keep growing while the search runs.
//! Implements [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search), uniform-cost (run as
//! breadth-first search, since every move costs 1), depth-limited,
//! [iterative deepening](https://en.wikipedia.org/wiki/Iterative_deepening_depth-first_search)
//! and [bidirectional](https://en.wikipedia.org/wiki/Bidirectional_search) search.
//!
//! Moves follow six of the eight compass directions, see [DIRECTIONS]. Before every expansion
//! an [ObstacleSpawner] may wall off one free cell, so a path found under obstacles is only
//! valid for the grid as it was when each cell was reached. Every search can be driven step by
//! step through [Algorithm::steps] or run to completion with [Algorithm::search], which shows
//! each step to a [Visualizer].
pub mod frontier;
pub mod grid;
pub mod obstacles;
pub mod parents;
pub mod solver;
pub mod visualizer;

pub use grid::{Cell, Grid, DIRECTIONS};
pub use grid_util::point::Point;
pub use obstacles::{NoObstacles, ObstacleSpawner, RandomObstacles};
pub use solver::{Algorithm, Outcome, Path, SearchReport, SearchSteps, Step};
pub use visualizer::{LogVisualizer, NoopVisualizer, Recorder, Visualizer};

use rand::Rng;

pub const GRID_SIZE: usize = 15;
pub const START: Cell = Point { x: 2, y: 2 };
pub const GOAL: Cell = Point {
    x: GRID_SIZE as i32 - 3,
    y: GRID_SIZE as i32 - 3,
};
/// Chance per expansion step that a new wall appears.
pub const DEFAULT_OBSTACLE_PROBABILITY: f64 = 0.015;
pub const DEFAULT_DEPTH_LIMIT: usize = 18;

/// Everything needed to set up a batch of runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub grid_size: usize,
    pub start: Cell,
    pub goal: Cell,
    /// Neighbour order, see [DIRECTIONS].
    pub directions: Vec<Point>,
    pub obstacle_probability: f64,
    /// Limit for [Algorithm::DepthLimited].
    pub depth_limit: usize,
    /// Ceiling for [Algorithm::IterativeDeepening]; twice the grid size if [None].
    pub max_depth: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            grid_size: GRID_SIZE,
            start: START,
            goal: GOAL,
            directions: DIRECTIONS.to_vec(),
            obstacle_probability: DEFAULT_OBSTACLE_PROBABILITY,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    /// An obstacle-free grid with the configured size, endpoints and directions.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new(self.grid_size, self.start, self.goal);
        grid.directions = self.directions.clone();
        grid.generate_components();
        grid
    }

    pub fn spawner<R: Rng>(&self, rng: R) -> RandomObstacles<R> {
        RandomObstacles::new(self.obstacle_probability, rng)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(2 * self.grid_size)
    }

    /// The six searches in the order a full comparison runs them.
    pub fn algorithms(&self) -> [Algorithm; 6] {
        [
            Algorithm::BreadthFirst,
            Algorithm::DepthFirst,
            Algorithm::UniformCost,
            Algorithm::DepthLimited(self.depth_limit),
            Algorithm::IterativeDeepening(self.max_depth()),
            Algorithm::Bidirectional,
        ]
    }
}
