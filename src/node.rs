//! Search tree storage.
//!
//! Nodes live in an append-only arena and point at their parent by index, so the
//! tree needs no shared ownership and is dropped in one piece with its search.

use std::hash::{Hash, Hasher};
use std::ops::Index;

use arrayvec::ArrayVec;

use crate::{successors, Move, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// A state together with the edge that first reached it.
///
/// Equality and hashing only look at `state`: two nodes reached along different
/// paths are the same node as far as frontier and explored-set membership go.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub state: State,
    pub parent: Option<NodeId>,
    /// Move taken from the parent, `None` for the root.
    pub action: Option<Move>,
    /// Edges from the root.
    pub cost: u32,
}

impl Node {
    pub fn root(state: State) -> Self {
        Node {
            state,
            parent: None,
            action: None,
            cost: 0,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}
impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Children of `node`, which is stored under `id`.
pub fn expand(id: NodeId, node: &Node) -> ArrayVec<Node, 4> {
    successors(&node.state)
        .into_iter()
        .map(|(action, state)| Node {
            state,
            parent: Some(id),
            action: Some(action),
            cost: node.cost + 1,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Index<NodeId> for Tree {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0 as usize]
    }
}

impl Tree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(start: State) -> Self {
        Tree {
            nodes: vec![Node::root(start)],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        debug_assert!(node.parent.map_or(false, |p| (p.0 as usize) < self.nodes.len()));
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn expand(&self, id: NodeId) -> ArrayVec<Node, 4> {
        expand(id, &self[id])
    }

    /// `id` and its ancestors, up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(Some(&self[id]), |node| Some(&self[node.parent?]))
    }

    /// Moves leading from the root to `id`.
    pub fn path(&self, id: NodeId) -> Vec<Move> {
        let mut steps = self
            .ancestors(id)
            .filter_map(|node| node.action)
            .collect::<Vec<_>>();
        steps.reverse();
        steps
    }
}
