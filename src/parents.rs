//! Parent bookkeeping for path reconstruction. Parents are stored by index into an insertion
//! ordered map, which keeps the first recorded predecessor of every cell and lets the walk back
//! to the root avoid rehashing.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use crate::grid::Cell;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const ROOT: usize = usize::MAX;

#[derive(Clone, Debug)]
pub struct ParentMap {
    parents: FxIndexMap<Cell, usize>,
}

fn reverse_path(parents: &FxIndexMap<Cell, usize>, start: usize) -> Vec<Cell> {
    let mut path: Vec<Cell> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(&cell, &parent)| {
            *i = parent;
            cell
        })
    })
    .collect();
    path.reverse();
    path
}

impl ParentMap {
    /// A map holding only `root`, which has no parent.
    pub fn new(root: Cell) -> ParentMap {
        let mut parents = FxIndexMap::default();
        parents.insert(root, ROOT);
        ParentMap { parents }
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.parents.contains_key(cell)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Records `parent` as the predecessor of `cell` unless `cell` already has one. Returns
    /// whether the cell was newly inserted. A parent that is not itself in the map is ignored.
    pub fn insert(&mut self, cell: Cell, parent: &Cell) -> bool {
        let Some(parent_ix) = self.parents.get_index_of(parent) else {
            return false;
        };
        match self.parents.entry(cell) {
            Vacant(e) => {
                e.insert(parent_ix);
                true
            }
            Occupied(_) => false,
        }
    }

    pub fn parent(&self, cell: &Cell) -> Option<Cell> {
        let &ix = self.parents.get(cell)?;
        self.parents.get_index(ix).map(|(&p, _)| p)
    }

    /// The chain of predecessors from the root to `terminal`, both included. [None] if
    /// `terminal` was never reached.
    pub fn path_to(&self, terminal: &Cell) -> Option<Vec<Cell>> {
        self.parents
            .get_index_of(terminal)
            .map(|ix| reverse_path(&self.parents, ix))
    }
}
