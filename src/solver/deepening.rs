use log::info;

use crate::frontier::Lifo;
use crate::grid::Grid;
use crate::obstacles::ObstacleSpawner;
use crate::solver::expansion::FrontierSearch;
use crate::solver::{Advance, Outcome, Step, Strategy};

/// Runs depth-limited search with limits 1, 2, ... up to and including `max_depth`, each time
/// from scratch but on the same grid, so obstacles placed during a shallow pass remain for the
/// deeper ones. Every pass is announced by a banner step.
pub struct IterativeDeepening {
    limit: usize,
    max_depth: usize,
    current: Option<FrontierSearch<Lifo>>,
    cut_off: bool,
}

impl IterativeDeepening {
    pub fn new(max_depth: usize) -> IterativeDeepening {
        IterativeDeepening {
            limit: 0,
            max_depth,
            current: None,
            cut_off: false,
        }
    }
}

impl Strategy for IterativeDeepening {
    fn advance(&mut self, grid: &mut Grid, spawner: &mut dyn ObstacleSpawner) -> Advance {
        if let Some(pass) = self.current.as_mut() {
            match pass.advance(grid, spawner) {
                Advance::Finished {
                    step,
                    outcome: Outcome::Found(path),
                } => {
                    return Advance::Finished {
                        step,
                        outcome: Outcome::Found(path),
                    }
                }
                Advance::Finished { step, outcome } => {
                    self.cut_off = outcome == Outcome::CutOff;
                    self.current = None;
                    if let Some(step) = step {
                        return Advance::Step(step);
                    }
                }
                step => return step,
            }
        }
        if self.limit >= self.max_depth {
            info!("IDDFS gave up at depth limit {}", self.limit);
            let outcome = if self.cut_off {
                Outcome::CutOff
            } else {
                Outcome::Exhausted
            };
            return Advance::Finished {
                step: None,
                outcome,
            };
        }
        self.limit += 1;
        info!("IDDFS depth limit = {}", self.limit);
        self.current = Some(FrontierSearch::depth_limited(
            grid,
            format!("IDDFS (limit={})", self.limit),
            self.limit,
        ));
        Advance::Step(Step::banner(format!("IDDFS | depth limit = {}", self.limit)))
    }
}
