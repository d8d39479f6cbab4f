use core::fmt;
use fxhash::FxHashSet;
use log::{info, warn};

use crate::grid::{Cell, Grid};
use crate::obstacles::ObstacleSpawner;
use crate::visualizer::Visualizer;

pub mod bidirectional;
pub mod deepening;
pub mod expansion;

use bidirectional::Bidirectional;
use deepening::IterativeDeepening;
use expansion::FrontierSearch;

/// Cells from start to goal, both included.
pub type Path = Vec<Cell>;

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(Path),
    /// Nothing found, but some cells were left unexpanded because of the depth limit.
    CutOff,
    /// Nothing found and the frontier ran dry, or the endpoints were unusable.
    Exhausted,
    /// Stopped from outside before finishing.
    Cancelled,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(path) => Some(path),
            _ => None,
        }
    }
    pub fn into_path(self) -> Option<Path> {
        match self {
            Outcome::Found(path) => Some(path),
            _ => None,
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// Snapshot taken after one expansion step, including the obstacle placed during it.
#[derive(Clone, Debug)]
pub struct Step {
    pub frontier: FxHashSet<Cell>,
    pub explored: FxHashSet<Cell>,
    pub obstacle: Option<Cell>,
    pub message: String,
}

impl Step {
    /// A step that expands nothing and only carries a message.
    pub fn banner(message: String) -> Step {
        Step {
            frontier: FxHashSet::default(),
            explored: FxHashSet::default(),
            obstacle: None,
            message,
        }
    }
}

pub enum Advance {
    Step(Step),
    /// The search is over. The step, if any, is the last one to show.
    Finished {
        step: Option<Step>,
        outcome: Outcome,
    },
}

/// The per-algorithm policy driven one step at a time. Implementations own their frontier,
/// explored set and parent map; the grid and the obstacle source are lent for each step.
pub trait Strategy {
    fn advance(&mut self, grid: &mut Grid, spawner: &mut dyn ObstacleSpawner) -> Advance;
}

/// The six uninformed searches. Uniform-cost search runs breadth-first search: with unit edge
/// costs a priority queue would pop in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    DepthLimited(usize),
    IterativeDeepening(usize),
    Bidirectional,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "BFS",
            Algorithm::DepthFirst => "DFS",
            Algorithm::UniformCost => "UCS",
            Algorithm::DepthLimited(_) => "DLS",
            Algorithm::IterativeDeepening(_) => "IDDFS",
            Algorithm::Bidirectional => "Bidirectional",
        }
    }

    /// Fresh search state rooted at the start and goal of `grid`.
    pub fn strategy(&self, grid: &Grid) -> Box<dyn Strategy> {
        let label = self.to_string();
        match *self {
            Algorithm::BreadthFirst | Algorithm::UniformCost => {
                Box::new(FrontierSearch::breadth_first(grid, label))
            }
            Algorithm::DepthFirst => Box::new(FrontierSearch::depth_first(grid, label)),
            Algorithm::DepthLimited(limit) => {
                Box::new(FrontierSearch::depth_limited(grid, label, limit))
            }
            Algorithm::IterativeDeepening(max_depth) => {
                Box::new(IterativeDeepening::new(max_depth))
            }
            Algorithm::Bidirectional => Box::new(Bidirectional::new(grid)),
        }
    }

    /// Lazily runs the search, one [Step] per expansion. The grid is mutated by `spawner` as the
    /// steps are pulled.
    pub fn steps<'g>(
        &self,
        grid: &'g mut Grid,
        spawner: &'g mut dyn ObstacleSpawner,
    ) -> SearchSteps<'g> {
        let strategy = self.strategy(grid);
        let outcome = if grid.endpoints_valid() {
            None
        } else {
            warn!(
                "{}: start {} or goal {} is out of bounds or walled",
                self, grid.start, grid.goal
            );
            Some(Outcome::Exhausted)
        };
        SearchSteps {
            grid,
            spawner,
            strategy,
            outcome,
        }
    }

    /// Runs the search to completion on a grid it owns, showing every step to `visualizer`
    /// followed by one closing frame. The grid is handed back in the report with all obstacles
    /// spawned during the run.
    pub fn search<S, V>(&self, mut grid: Grid, spawner: &mut S, visualizer: &mut V) -> SearchReport
    where
        S: ObstacleSpawner,
        V: Visualizer + ?Sized,
    {
        info!("Running {}", self);
        let mut n_steps = 0;
        let outcome = {
            let mut steps = self.steps(&mut grid, spawner);
            while visualizer.keep_going() {
                let Some(step) = steps.next() else {
                    break;
                };
                n_steps += 1;
                visualizer.render(
                    steps.grid(),
                    &step.frontier,
                    &step.explored,
                    None,
                    &step.message,
                );
            }
            steps.into_outcome()
        };
        let empty = FxHashSet::default();
        let message = match &outcome {
            Outcome::Found(path) => {
                info!("{} found a path of length {}", self, path.len());
                format!("{} | found path (length: {})", self.name(), path.len())
            }
            Outcome::Cancelled => {
                info!("{} was cancelled after {} steps", self, n_steps);
                format!("{} | cancelled", self.name())
            }
            _ => {
                info!("{} found no path", self);
                format!("{} | no path found", self.name())
            }
        };
        visualizer.render(
            &grid,
            &empty,
            &empty,
            outcome.path().map(|p| p.as_slice()),
            &message,
        );
        SearchReport {
            algorithm: *self,
            outcome,
            grid,
            steps: n_steps,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::DepthLimited(limit) => write!(f, "DLS (limit={})", limit),
            Algorithm::IterativeDeepening(max) => write!(f, "IDDFS (max depth={})", max),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Iterator over the expansion steps of one run. Once it returns [None], [SearchSteps::outcome]
/// tells how the search ended. Dropping it early cancels the search.
pub struct SearchSteps<'g> {
    grid: &'g mut Grid,
    spawner: &'g mut dyn ObstacleSpawner,
    strategy: Box<dyn Strategy>,
    outcome: Option<Outcome>,
}

impl<'g> SearchSteps<'g> {
    /// The grid as of the last step.
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }
    /// [None] while the search is still running.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
    /// The final outcome, or [Outcome::Cancelled] if the search had not finished.
    pub fn into_outcome(self) -> Outcome {
        self.outcome.unwrap_or(Outcome::Cancelled)
    }
    /// Runs the remaining steps without observing them.
    pub fn finish(mut self) -> Outcome {
        while self.next().is_some() {}
        self.into_outcome()
    }
}

impl<'g> Iterator for SearchSteps<'g> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.outcome.is_some() {
            return None;
        }
        match self.strategy.advance(self.grid, self.spawner) {
            Advance::Step(step) => Some(step),
            Advance::Finished { step, outcome } => {
                self.outcome = Some(outcome);
                step
            }
        }
    }
}

/// Result of [Algorithm::search].
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    /// The grid after the run, including dynamic obstacles.
    pub grid: Grid,
    /// Number of steps shown to the visualizer, not counting the closing frame.
    pub steps: usize,
}

impl SearchReport {
    pub fn path(&self) -> Option<&Path> {
        self.outcome.path()
    }
}
