//! Dynamic obstacles injected into the grid while a search is running.
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};

/// Mutates the grid once per expansion step. Implementations must never wall off the start or
/// the goal of the grid.
pub trait ObstacleSpawner {
    /// Possibly converts one free cell into a wall, returning the converted cell.
    fn spawn(&mut self, grid: &mut Grid) -> Option<Cell>;
}

/// Leaves the grid untouched, giving fully deterministic searches.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObstacles;

impl ObstacleSpawner for NoObstacles {
    fn spawn(&mut self, _: &mut Grid) -> Option<Cell> {
        None
    }
}

/// With a fixed probability per call, walls off one uniformly chosen free cell that is neither
/// start nor goal. Seed the random source for reproducible runs.
#[derive(Clone, Debug)]
pub struct RandomObstacles<R> {
    probability: f64,
    rng: R,
}

impl<R: Rng> RandomObstacles<R> {
    /// Probabilities outside [0, 1] are clamped; NaN is treated as 0.
    pub fn new(probability: f64, rng: R) -> RandomObstacles<R> {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        RandomObstacles { probability, rng }
    }
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<R: Rng> ObstacleSpawner for RandomObstacles<R> {
    fn spawn(&mut self, grid: &mut Grid) -> Option<Cell> {
        if !self.rng.gen_bool(self.probability) {
            return None;
        }
        let cell = *grid.open_cells().choose(&mut self.rng)?;
        grid.set_wall(cell, true);
        debug!("Dynamic obstacle placed at {}", cell);
        Some(cell)
    }
}
