use super::{Action, SearchOutcome, Successor};
use super::frontier::SearchStats;


/// Node of the search tree
/// - parent is an index into the owning SearchTree, usize::MAX for the root
/// - nodes are never modified after insertion
#[derive(Debug, Clone)]
pub(crate) struct SearchNode<S> {
    pub state: S,
    pub parent: usize,
    pub action: Option<Action>,
    pub path_cost: u64,
    pub depth: usize,
    pub heuristic: f64,
}


/// Index of the root node in every SearchTree
pub(crate) const ROOT: usize = 0;


/// Arena holding every node created during one search run
#[derive(Debug)]
pub(crate) struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> SearchTree<S> {

    /// Tree containing only the root node for `start`
    pub fn new(start: S, heuristic: f64) -> Self {
        Self {
            nodes: vec![SearchNode {
                state: start,
                parent: usize::MAX,
                action: None,
                path_cost: 0,
                depth: 0,
                heuristic,
            }],
        }
    }

    pub fn node(&self, index: usize) -> &SearchNode<S> {
        &self.nodes[index]
    }

    /// Add the child of `parent` reached through `successor`, returns its index
    pub fn add_child(&mut self, parent: usize, successor: Successor<S>, heuristic: f64) -> usize {
        let (path_cost, depth) = {
            let parent_node = &self.nodes[parent];
            (parent_node.path_cost + u64::from(successor.step_cost), parent_node.depth + 1)
        };
        self.nodes.push(SearchNode {
            state: successor.state,
            parent,
            action: Some(successor.action),
            path_cost,
            depth,
            heuristic,
        });
        self.nodes.len() - 1
    }

    /// Actions from the root to the node at `index`
    pub fn actions_to(&self, index: usize) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.nodes[index].depth);
        let mut current_index = index;

        // Trace back from the node to the root
        while current_index != usize::MAX {
            let node = &self.nodes[current_index];
            if let Some(action) = node.action {
                actions.push(action);
            }
            current_index = node.parent;
        }

        actions.reverse();
        actions
    }

    /// Successful outcome ending at the node at `index`
    pub fn outcome(&self, index: usize, stats: SearchStats) -> SearchOutcome {
        SearchOutcome::found(
            self.actions_to(index),
            self.nodes[index].path_cost,
            stats,
        )
    }
}
