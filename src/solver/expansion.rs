use fxhash::FxHashSet;
use log::info;

use crate::frontier::{Fifo, Frontier, Lifo, Node};
use crate::grid::{Cell, Grid};
use crate::obstacles::ObstacleSpawner;
use crate::parents::ParentMap;
use crate::solver::{Advance, Outcome, Step, Strategy};

/// Frontier, explored set and parent map of a search rooted at one cell.
#[derive(Clone, Debug)]
pub struct Expansion<F> {
    pub frontier: F,
    pub explored: FxHashSet<Cell>,
    pub parents: ParentMap,
    limit: Option<usize>,
    cut_off: bool,
}

impl<F: Frontier> Expansion<F> {
    /// Entries deeper than `limit`, if given, are never expanded.
    pub fn new(root: Cell, limit: Option<usize>) -> Expansion<F> {
        let mut frontier = F::default();
        frontier.push(Node::root(root));
        Expansion {
            frontier,
            explored: FxHashSet::default(),
            parents: ParentMap::new(root),
            limit,
            cut_off: false,
        }
    }

    /// Pops the next entry worth exploring. Entries already explored, or walled off after they
    /// were queued, are dropped.
    pub fn pop_live(&mut self, grid: &Grid) -> Option<Node> {
        while let Some(node) = self.frontier.pop() {
            if !self.explored.contains(&node.cell) && grid.is_free(node.cell) {
                return Some(node);
            }
        }
        None
    }

    /// Queues every free neighbour that has not been discovered yet. Entries at the depth limit
    /// are leaves.
    pub fn expand(&mut self, grid: &Grid, node: Node) {
        if self.limit.map_or(false, |limit| node.depth >= limit) {
            self.cut_off = true;
            return;
        }
        for neighbour in grid.neighbours(node.cell) {
            if self.parents.insert(neighbour, &node.cell) {
                self.frontier.push(node.child(neighbour));
            }
        }
    }

    /// The outcome once the frontier is empty.
    pub fn exhausted(&self) -> Outcome {
        if self.cut_off {
            Outcome::CutOff
        } else {
            Outcome::Exhausted
        }
    }
}

/// Single-frontier search: breadth-first with a [Fifo], depth-first with a [Lifo], and
/// depth-limited when a limit is set.
#[derive(Clone, Debug)]
pub struct FrontierSearch<F> {
    expansion: Expansion<F>,
    goal: Cell,
    label: String,
}

impl FrontierSearch<Fifo> {
    pub fn breadth_first(grid: &Grid, label: String) -> FrontierSearch<Fifo> {
        FrontierSearch::new(grid, label, None)
    }
}

impl FrontierSearch<Lifo> {
    pub fn depth_first(grid: &Grid, label: String) -> FrontierSearch<Lifo> {
        FrontierSearch::new(grid, label, None)
    }
    pub fn depth_limited(grid: &Grid, label: String, limit: usize) -> FrontierSearch<Lifo> {
        FrontierSearch::new(grid, label, Some(limit))
    }
}

impl<F: Frontier> FrontierSearch<F> {
    pub fn new(grid: &Grid, label: String, limit: Option<usize>) -> FrontierSearch<F> {
        FrontierSearch {
            expansion: Expansion::new(grid.start, limit),
            goal: grid.goal,
            label,
        }
    }

    fn snapshot(&self, obstacle: Option<Cell>) -> Step {
        Step {
            frontier: self.expansion.frontier.cells(),
            explored: self.expansion.explored.clone(),
            obstacle,
            message: format!(
                "{} | Frontier: {} | Explored: {}",
                self.label,
                self.expansion.frontier.len(),
                self.expansion.explored.len()
            ),
        }
    }
}

impl<F: Frontier> Strategy for FrontierSearch<F> {
    fn advance(&mut self, grid: &mut Grid, spawner: &mut dyn ObstacleSpawner) -> Advance {
        let Some(node) = self.expansion.pop_live(grid) else {
            return Advance::Finished {
                step: None,
                outcome: self.expansion.exhausted(),
            };
        };
        self.expansion.explored.insert(node.cell);
        let obstacle = spawner.spawn(grid);
        let step = self.snapshot(obstacle);
        if node.cell == self.goal {
            info!("{} reached the goal at depth {}", self.label, node.depth);
            let outcome = self
                .expansion
                .parents
                .path_to(&self.goal)
                .map_or(Outcome::Exhausted, Outcome::Found);
            return Advance::Finished {
                step: Some(step),
                outcome,
            };
        }
        self.expansion.expand(grid, node);
        Advance::Step(step)
    }
}
