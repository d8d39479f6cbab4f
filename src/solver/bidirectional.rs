use log::info;

use crate::frontier::{Fifo, Frontier};
use crate::grid::{Cell, Grid};
use crate::obstacles::ObstacleSpawner;
use crate::solver::expansion::Expansion;
use crate::solver::{Advance, Outcome, Path, Step, Strategy};

/// Two breadth-first searches, one rooted at the start and one at the goal, each popping a
/// single cell per step. The searches meet when a popped cell already has a parent on the
/// other side, which can happen before that cell is explored there.
pub struct Bidirectional {
    forward: Expansion<Fifo>,
    backward: Expansion<Fifo>,
}

impl Bidirectional {
    pub fn new(grid: &Grid) -> Bidirectional {
        Bidirectional {
            forward: Expansion::new(grid.start, None),
            backward: Expansion::new(grid.goal, None),
        }
    }

    /// Start to meeting cell, then meeting cell back to goal. The meeting cell appears once.
    fn splice(&self, meeting: &Cell) -> Option<Path> {
        let mut path = self.forward.parents.path_to(meeting)?;
        let tail = self.backward.parents.path_to(meeting)?;
        path.pop();
        path.extend(tail.into_iter().rev());
        Some(path)
    }

    fn meet(&self, meeting: Cell) -> Advance {
        info!("Bidirectional search met at {}", meeting);
        Advance::Finished {
            step: None,
            outcome: self
                .splice(&meeting)
                .map_or(Outcome::Exhausted, Outcome::Found),
        }
    }

    fn snapshot(&self, obstacle: Option<Cell>) -> Step {
        let mut frontier = self.forward.frontier.cells();
        frontier.extend(self.backward.frontier.cells());
        let explored = self
            .forward
            .explored
            .union(&self.backward.explored)
            .copied()
            .collect();
        Step {
            frontier,
            explored,
            obstacle,
            message: format!(
                "Bidirectional | Start frontier: {} | Goal frontier: {}",
                self.forward.frontier.len(),
                self.backward.frontier.len()
            ),
        }
    }
}

const EXHAUSTED: Advance = Advance::Finished {
    step: None,
    outcome: Outcome::Exhausted,
};

impl Strategy for Bidirectional {
    fn advance(&mut self, grid: &mut Grid, spawner: &mut dyn ObstacleSpawner) -> Advance {
        if self.forward.frontier.is_empty() || self.backward.frontier.is_empty() {
            return EXHAUSTED;
        }

        let Some(node) = self.forward.pop_live(grid) else {
            return EXHAUSTED;
        };
        self.forward.explored.insert(node.cell);
        if self.backward.parents.contains(&node.cell) {
            return self.meet(node.cell);
        }
        self.forward.expand(grid, node);

        let Some(node) = self.backward.pop_live(grid) else {
            return EXHAUSTED;
        };
        self.backward.explored.insert(node.cell);
        if self.forward.parents.contains(&node.cell) {
            return self.meet(node.cell);
        }
        self.backward.expand(grid, node);

        let obstacle = spawner.spawn(grid);
        Advance::Step(self.snapshot(obstacle))
    }
}
