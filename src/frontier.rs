//! Frontier containers. The queue discipline is what tells the searches apart.
use fxhash::FxHashSet;
use std::collections::VecDeque;

use crate::grid::Cell;

/// A frontier entry: a discovered cell and the number of steps from the root at which it was
/// discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub cell: Cell,
    pub depth: usize,
}

impl Node {
    pub fn root(cell: Cell) -> Node {
        Node { cell, depth: 0 }
    }
    pub fn child(&self, cell: Cell) -> Node {
        Node {
            cell,
            depth: self.depth + 1,
        }
    }
}

/// The container discipline of a search. The order in which entries leave the frontier is what
/// tells breadth-first and depth-first search apart.
pub trait Frontier: Default {
    fn push(&mut self, node: Node);
    fn pop(&mut self) -> Option<Node>;
    fn len(&self) -> usize;
    /// The distinct cells currently waiting, as handed to a visualizer.
    fn cells(&self) -> FxHashSet<Cell>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Clone, Debug, Default)]
pub struct Fifo(VecDeque<Node>);

impl Frontier for Fifo {
    fn push(&mut self, node: Node) {
        self.0.push_back(node);
    }
    fn pop(&mut self) -> Option<Node> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
    fn cells(&self) -> FxHashSet<Cell> {
        self.0.iter().map(|n| n.cell).collect()
    }
}

/// Last in, first out.
#[derive(Clone, Debug, Default)]
pub struct Lifo(Vec<Node>);

impl Frontier for Lifo {
    fn push(&mut self, node: Node) {
        self.0.push(node);
    }
    fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
    fn cells(&self) -> FxHashSet<Cell> {
        self.0.iter().map(|n| n.cell).collect()
    }
}
