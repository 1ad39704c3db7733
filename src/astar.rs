//! A generic A* core over an arena of [SearchNode]s. Nodes refer to their parent by index into
//! the arena, so the parent links always form a tree rooted at the start node.
//!
//! The open set is a binary heap ordered by `f_cost`, with ties resolved in favour of the entry
//! that was inserted first. A best-known `g_cost` is kept per node so candidates that do not
//! improve on an earlier one are never inserted.
use fxhash::{FxBuildHasher, FxHashMap};
use indexmap::IndexSet;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Index of a node in the arena of a [SearchContext].
pub type NodeId = usize;

/// One state of the search, either on the frontier or already expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<N, C> {
    pub position: N,
    pub parent: Option<NodeId>,
    pub g_cost: C,
    pub h_cost: C,
    /// Fixed to `g_cost + h_cost` when the node is created.
    pub f_cost: C,
}

impl<N, C: Zero + Copy> SearchNode<N, C> {
    pub fn new(position: N, parent: Option<NodeId>, g_cost: C, h_cost: C) -> Self {
        SearchNode {
            position,
            parent,
            g_cost,
            h_cost,
            f_cost: g_cost + h_cost,
        }
    }
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    sequence: usize,
    index: NodeId,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smallest estimate first, then the oldest entry
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Counters describing the last search run by a [SearchContext].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes placed in the arena, the start node included.
    pub created: usize,
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Frontier entries dropped because their position was already closed.
    pub stale: usize,
}

/// Buffers of a single search. Reusing a context between searches avoids reallocating them;
/// the `&mut` receiver keeps two searches from ever sharing one.
pub struct SearchContext<N, C> {
    nodes: Vec<SearchNode<N, C>>,
    open: BinaryHeap<SmallestCostHolder<C>>,
    best_cost: FxHashMap<N, C>,
    closed: FxIndexSet<N>,
    sequence: usize,
    stats: SearchStats,
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> Self {
        SearchContext {
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            best_cost: FxHashMap::default(),
            closed: FxIndexSet::default(),
            sequence: 0,
            stats: SearchStats::default(),
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.best_cost.clear();
        self.closed.clear();
        self.sequence = 0;
        self.stats = SearchStats::default();
    }

    fn push(&mut self, node: SearchNode<N, C>) {
        let index = self.nodes.len();
        self.best_cost.insert(node.position.clone(), node.g_cost);
        self.open.push(SmallestCostHolder {
            estimated_cost: node.f_cost,
            sequence: self.sequence,
            index,
        });
        self.sequence += 1;
        self.nodes.push(node);
        self.stats.created += 1;
    }

    fn reverse_path(&self, goal: NodeId) -> Vec<N> {
        let mut path: Vec<N> =
            std::iter::successors(Some(goal), |&ix| self.nodes[ix].parent)
                .map(|ix| self.nodes[ix].position.clone())
                .collect();
        path.reverse();
        path
    }

    /// Nodes created by the last search.
    pub fn nodes(&self) -> &[SearchNode<N, C>] {
        &self.nodes
    }

    /// Positions in the order the last search expanded them.
    pub fn expanded(&self) -> impl Iterator<Item = &N> {
        self.closed.iter()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Runs A* from `start` until `success` accepts an expanded node. `successors` yields the
    /// neighbours of a node with their move cost and `heuristic` estimates the remaining cost.
    /// The start node gets a zero heuristic. Returns the path from start to goal, both
    /// included, and its cost.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.clear();
        self.push(SearchNode::new(start.clone(), None, Zero::zero(), Zero::zero()));
        while let Some(SmallestCostHolder { index, .. }) = self.open.pop() {
            let (position, cost) = {
                let node = &self.nodes[index];
                (node.position.clone(), node.g_cost)
            };
            // A cheaper copy of this position was expanded already
            if !self.closed.insert(position.clone()) {
                self.stats.stale += 1;
                continue;
            }
            self.stats.expanded += 1;
            if success(&position) {
                debug!("Search finished: {:?}", self.stats);
                return Some((self.reverse_path(index), cost));
            }
            for (successor, move_cost) in successors(&position) {
                if self.closed.contains(&successor) {
                    continue;
                }
                let new_cost = cost + move_cost;
                if let Some(&known) = self.best_cost.get(&successor) {
                    if known <= new_cost {
                        continue;
                    }
                }
                let h = heuristic(&successor);
                self.push(SearchNode::new(successor, Some(index), new_cost, h));
            }
        }
        debug!("Frontier exhausted: {:?}", self.stats);
        None
    }
}
