//! Graph search over puzzle states.
//!
//! Breadth-first, depth-first and A* share one loop and differ only in the
//! [`Frontier`] they plug into it. Every search owns its frontier, explored set
//! and node tree, all dropped when it returns.
//!
//! Termination on unsolvable input comes from the puzzle itself: a start state
//! reaches exactly 9!/2 = 181440 states, so the explored set eventually covers all
//! of them and the frontier runs dry. That bound is specific to this puzzle.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use fxhash::FxHashSet;

use crate::heuristic::Heuristic;
use crate::node::{Node, NodeId, Tree};
use crate::{successors, Move, State};

pub type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    AStar(Heuristic),
}

impl Strategy {
    pub const ALL: [Self; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::AStar(Heuristic::Hamming),
        Self::AStar(Heuristic::Manhattan),
        Self::AStar(Heuristic::LinearConflict),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::AStar(Heuristic::Hamming) => "astar-hamming",
            Strategy::AStar(Heuristic::Manhattan) => "astar-manhattan",
            Strategy::AStar(Heuristic::LinearConflict) => "astar-linear-conflict",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Nodes taken off the frontier and expanded. The goal node is not counted.
    pub expanded: usize,
    /// Nodes pushed onto the frontier, the root excluded.
    pub generated: usize,
    pub max_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    /// `None` when the goal is unreachable from the start state.
    pub path: Option<Vec<Move>>,
    pub stats: Stats,
}

/// Runs `strategy` from `start`, calling `on_step` once per expanded node.
pub fn search(strategy: Strategy, start: State, on_step: impl FnMut()) -> Search {
    match strategy {
        Strategy::Bfs => graph_search(start, Fifo::default(), on_step),
        Strategy::Dfs => graph_search(start, Lifo::default(), on_step),
        Strategy::AStar(h) => {
            graph_search(start, Priority::new(|s: &State| h.estimate(s)), on_step)
        }
    }
}

/// Shortest solution.
pub fn search_bfs(start: State) -> Option<Vec<Move>> {
    search(Strategy::Bfs, start, || {}).path
}

/// Some solution, usually a very long one.
pub fn search_dfs(start: State) -> Option<Vec<Move>> {
    search(Strategy::Dfs, start, || {}).path
}

/// Shortest solution, guided by `heuristic`.
///
/// Explored states are never reopened. That keeps the result optimal only because
/// every move costs one and `heuristic` is expected to be consistent, as all of
/// [`Heuristic`] are. An inconsistent estimate may yield a longer path.
pub fn search_astar(start: State, heuristic: impl Fn(&State) -> u32) -> Option<Vec<Move>> {
    graph_search(start, Priority::new(heuristic), || {}).path
}

/// Exact move distance from `start` to every state it can reach, in breadth-first
/// order.
pub fn distances(start: State) -> IndexMap<State, u32> {
    let mut dist = IndexMap::default();
    dist.insert(start, 0);
    let mut cursor = 0;
    while let Some((&state, &d)) = dist.get_index(cursor) {
        for (_, next) in successors(&state) {
            dist.entry(next).or_insert(d + 1);
        }
        cursor += 1;
    }
    dist
}

/// Order in which generated nodes get expanded.
trait Frontier {
    /// Skip children whose state is already waiting in the frontier. Without it a
    /// state may be queued several times and later copies are dropped when popped.
    const DEDUP: bool;
    /// Test children against the goal as they are generated instead of when popped.
    const EARLY_GOAL: bool;

    fn push(&mut self, id: NodeId, node: &Node);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
}

#[derive(Default)]
struct Fifo(VecDeque<NodeId>);

impl Frontier for Fifo {
    const DEDUP: bool = true;
    const EARLY_GOAL: bool = true;

    fn push(&mut self, id: NodeId, _: &Node) {
        self.0.push_back(id);
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Default)]
struct Lifo(Vec<NodeId>);

impl Frontier for Lifo {
    const DEDUP: bool = true;
    const EARLY_GOAL: bool = false;

    fn push(&mut self, id: NodeId, _: &Node) {
        self.0.push(id);
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Min-heap on `cost + heuristic`, earlier pushes first among equals.
struct Priority<H> {
    heap: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    seq: u64,
    heuristic: H,
}

impl<H: Fn(&State) -> u32> Priority<H> {
    fn new(heuristic: H) -> Self {
        Priority {
            heap: BinaryHeap::new(),
            seq: 0,
            heuristic,
        }
    }
}

impl<H: Fn(&State) -> u32> Frontier for Priority<H> {
    const DEDUP: bool = false;
    const EARLY_GOAL: bool = false;

    fn push(&mut self, id: NodeId, node: &Node) {
        let f = node.cost + (self.heuristic)(&node.state);
        self.heap.push(Reverse((f, self.seq, id)));
        self.seq += 1;
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, id))| id)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

fn graph_search<F: Frontier>(start: State, mut frontier: F, mut on_step: impl FnMut()) -> Search {
    let mut stats = Stats {
        max_frontier: 1,
        ..Stats::default()
    };
    let mut tree = Tree::new(start);
    if F::EARLY_GOAL && start.is_goal() {
        return Search {
            path: Some(Vec::new()),
            stats,
        };
    }

    let mut explored = FxHashSet::default();
    // States currently in the frontier, tracked only with `F::DEDUP`.
    let mut queued = FxHashSet::default();
    frontier.push(Tree::ROOT, &tree[Tree::ROOT]);
    if F::DEDUP {
        queued.insert(start);
    }

    while let Some(id) = frontier.pop() {
        #[cfg(feature = "coz")]
        coz::scope!("Expand");

        let state = tree[id].state;
        if F::DEDUP {
            queued.remove(&state);
        } else if explored.contains(&state) {
            // Stale copy of a state reached earlier along a cheaper path.
            continue;
        }

        if !F::EARLY_GOAL && state.is_goal() {
            return Search {
                path: Some(tree.path(id)),
                stats,
            };
        }

        explored.insert(state);
        stats.expanded += 1;
        on_step();

        #[cfg(feature = "coz")]
        coz::progress!("Step");

        for child in tree.expand(id) {
            if F::EARLY_GOAL && child.state.is_goal() {
                let id = tree.push(child);
                return Search {
                    path: Some(tree.path(id)),
                    stats,
                };
            }
            if explored.contains(&child.state) {
                continue;
            }
            if F::DEDUP && !queued.insert(child.state) {
                continue;
            }
            let child_id = tree.push(child);
            frontier.push(child_id, &tree[child_id]);
            stats.generated += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    Search { path: None, stats }
}
