//! Observers of a running search. A visualizer sees every expansion step but has no say in the
//! outcome, apart from asking the search to stop between steps.
use fxhash::FxHashSet;
use log::{debug, log_enabled, trace, Level};

use crate::grid::{Cell, Grid};

pub trait Visualizer {
    /// Called once per expansion step, after that step's obstacle was placed, and once more
    /// when the search has finished, then with the path if one was found.
    fn render(
        &mut self,
        grid: &Grid,
        frontier: &FxHashSet<Cell>,
        explored: &FxHashSet<Cell>,
        path: Option<&[Cell]>,
        message: &str,
    );

    /// Polled between steps. Returning [false] cancels the search.
    fn keep_going(&mut self) -> bool {
        true
    }
}

/// Ignores every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {
    fn render(
        &mut self,
        _: &Grid,
        _: &FxHashSet<Cell>,
        _: &FxHashSet<Cell>,
        _: Option<&[Cell]>,
        _: &str,
    ) {
    }
}

/// A copy of everything a [Recorder] was shown in one call.
#[derive(Clone, Debug)]
pub struct Frame {
    pub frontier: FxHashSet<Cell>,
    pub explored: FxHashSet<Cell>,
    pub path: Option<Vec<Cell>>,
    pub message: String,
    pub walls: usize,
}

/// Keeps every frame, optionally cancelling the search once a number of frames was seen.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Frame>,
    pub stop_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }
    pub fn stopping_after(frames: usize) -> Recorder {
        Recorder {
            frames: Vec::new(),
            stop_after: Some(frames),
        }
    }
}

impl Visualizer for Recorder {
    fn render(
        &mut self,
        grid: &Grid,
        frontier: &FxHashSet<Cell>,
        explored: &FxHashSet<Cell>,
        path: Option<&[Cell]>,
        message: &str,
    ) {
        self.frames.push(Frame {
            frontier: frontier.clone(),
            explored: explored.clone(),
            path: path.map(|p| p.to_vec()),
            message: message.to_owned(),
            walls: grid.wall_count(),
        });
    }

    fn keep_going(&mut self) -> bool {
        self.stop_after.map_or(true, |n| self.frames.len() < n)
    }
}

/// Writes the status line of each frame at debug level and the full board at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogVisualizer;

impl Visualizer for LogVisualizer {
    fn render(
        &mut self,
        grid: &Grid,
        frontier: &FxHashSet<Cell>,
        explored: &FxHashSet<Cell>,
        path: Option<&[Cell]>,
        message: &str,
    ) {
        debug!("{}", message);
        if log_enabled!(Level::Trace) {
            trace!("\n{}", draw_board(grid, frontier, explored, path));
        }
    }
}

/// Text rendering of a frame: `#` wall, `S` start, `G` goal, `*` path, `o` frontier,
/// `x` explored, `.` free.
pub fn draw_board(
    grid: &Grid,
    frontier: &FxHashSet<Cell>,
    explored: &FxHashSet<Cell>,
    path: Option<&[Cell]>,
) -> String {
    let n = grid.size() as i32;
    let mut out = String::with_capacity((grid.size() + 1) * grid.size());
    for row in 0..n {
        for col in 0..n {
            let cell = Cell::new(row, col);
            let c = if grid.is_wall(cell) {
                '#'
            } else if cell == grid.start {
                'S'
            } else if cell == grid.goal {
                'G'
            } else if path.map_or(false, |p| p.contains(&cell)) {
                '*'
            } else if frontier.contains(&cell) {
                'o'
            } else if explored.contains(&cell) {
                'x'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
