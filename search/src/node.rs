//! Search nodes, the node arena, and the frontier ordering key.

use std::ops::Index;

use tileslide_kernel::carrier::grid::{GridV1, Position};
use tileslide_kernel::operators::slide::{Move, SlideAction};

use crate::heuristic::{GoalIndex, HeuristicFn};

/// An immutable search node.
///
/// `score = depth + h(grid)` is computed once at construction. Parent links
/// are arena handles, never references, so the tree has no ownership cycles.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    node_id: u64,
    parent_id: Option<u64>,
    producing_move: Option<Move>,
    grid: GridV1,
    blank: Position,
    depth: u32,
    h_cost: u64,
}

impl SearchNodeV1 {
    /// The root node: depth 0, no parent, no move.
    #[must_use]
    pub fn root(
        node_id: u64,
        grid: GridV1,
        blank: Position,
        evaluate: HeuristicFn,
        goal: &GoalIndex,
    ) -> Self {
        let h_cost = evaluate(&grid, goal);
        Self {
            node_id,
            parent_id: None,
            producing_move: None,
            grid,
            blank,
            depth: 0,
            h_cost,
        }
    }

    /// A child of `parent` reached by `action`; `grid` is the slid result.
    #[must_use]
    pub fn child(
        node_id: u64,
        parent: &Self,
        action: &SlideAction,
        grid: GridV1,
        evaluate: HeuristicFn,
        goal: &GoalIndex,
    ) -> Self {
        let h_cost = evaluate(&grid, goal);
        Self {
            node_id,
            parent_id: Some(parent.node_id),
            producing_move: Some(action.direction()),
            grid,
            blank: action.blank_to(),
            depth: parent.depth + 1,
            h_cost,
        }
    }

    /// Arena handle, equal to the node's insertion sequence.
    #[must_use]
    pub const fn node_id(&self) -> u64 {
        self.node_id
    }

    #[must_use]
    pub const fn parent_id(&self) -> Option<u64> {
        self.parent_id
    }

    /// The move that produced this node (`None` for the root).
    #[must_use]
    pub const fn producing_move(&self) -> Option<Move> {
        self.producing_move
    }

    #[must_use]
    pub const fn grid(&self) -> &GridV1 {
        &self.grid
    }

    /// Blank position in [`Self::grid`].
    #[must_use]
    pub const fn blank(&self) -> Position {
        self.blank
    }

    /// Path cost `g`: moves from the root.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Heuristic estimate `h`.
    #[must_use]
    pub const fn h_cost(&self) -> u64 {
        self.h_cost
    }

    /// Frontier priority `f = g + h`.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.depth as u64 + self.h_cost
    }
}

/// Owner of every node created during one search, indexed by `node_id`.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNodeV1>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the next pushed node must carry.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.nodes.len() as u64
    }

    /// Store a node. Its `node_id` must equal [`Self::next_id`].
    pub fn push(&mut self, node: SearchNodeV1) {
        debug_assert_eq!(node.node_id, self.next_id());
        self.nodes.push(node);
    }

    #[must_use]
    pub fn get(&self, node_id: u64) -> Option<&SearchNodeV1> {
        usize::try_from(node_id)
            .ok()
            .and_then(|i| self.nodes.get(i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNodeV1> {
        self.nodes.iter()
    }

    /// Moves from the root to `node_id`, in root-to-node order.
    #[must_use]
    pub fn steps_sequence(&self, node_id: u64) -> Vec<Move> {
        let mut steps = Vec::new();
        let mut current = self.get(node_id);
        while let Some(node) = current {
            if let Some(m) = node.producing_move {
                steps.push(m);
            }
            current = node.parent_id.and_then(|id| self.get(id));
        }
        steps.reverse();
        steps
    }
}

impl Index<u64> for NodeArena {
    type Output = SearchNodeV1;

    fn index(&self, node_id: u64) -> &SearchNodeV1 {
        match self.get(node_id) {
            Some(node) => node,
            None => panic!("node {node_id} not in arena of {}", self.nodes.len()),
        }
    }
}

/// The frontier ordering key: `(score, node_id)`.
///
/// Lower score first; equal scores pop in insertion order. Because node ids
/// are assigned in insertion order this matches a stable sort of the whole
/// frontier by score on every pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub score: u64,
    pub node_id: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .cmp(&other.score)
            .then(self.node_id.cmp(&other.node_id))
    }
}

impl From<&SearchNodeV1> for FrontierKey {
    fn from(node: &SearchNodeV1) -> Self {
        Self {
            score: node.score(),
            node_id: node.node_id,
        }
    }
}
