use float_ord::FloatOrd;

use super::frontier::{PriorityFrontier, SearchStats};
use super::node::{SearchNode, SearchTree, ROOT};
use super::{Heuristic, InformedProblem, SearchOutcome};
use crate::collections::{FxHashMap, FxHashSet};


/// A* ordering: path cost so far plus estimate
fn priority<S>(node: &SearchNode<S>) -> FloatOrd<f64> {
    FloatOrd(node.path_cost as f64 + node.heuristic)
}


/// A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Returns a cheapest path when the heuristic never overestimates the remaining cost.
/// Uses the same best-known-cost bookkeeping as uniform-cost search.
pub fn a_star<P: InformedProblem>(problem: &P, heuristic: Heuristic) -> SearchOutcome {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return SearchOutcome::already_at_goal();
    }

    let mut best_costs: FxHashMap<P::State, u64> = FxHashMap::default();
    best_costs.insert(start.clone(), 0);

    let start_estimate = problem.estimate(&start, heuristic);
    let mut tree = SearchTree::new(start, start_estimate);
    let mut frontier = PriorityFrontier::new();
    frontier.push(priority(tree.node(ROOT)), ROOT);
    let mut explored: FxHashSet<P::State> = FxHashSet::default();
    let mut stats = SearchStats::default();

    while !frontier.is_empty() {
        stats.observe(frontier.len() + explored.len());

        let Some(index) = frontier.pop() else { break };
        stats.nodes_expanded += 1;

        let node = tree.node(index);
        if problem.is_goal(&node.state) {
            return tree.outcome(index, stats);
        }

        let state = node.state.clone();
        let path_cost = node.path_cost;
        if !explored.insert(state.clone()) {
            continue;
        }

        for successor in problem.successors(&state) {
            let new_cost = path_cost + u64::from(successor.step_cost);

            if best_costs.get(&successor.state).is_none_or(|&known| new_cost < known) {
                best_costs.insert(successor.state.clone(), new_cost);
                let estimate = problem.estimate(&successor.state, heuristic);
                let child = tree.add_child(index, successor, estimate);
                frontier.push(priority(tree.node(child)), child);
            }
        }
    }

    SearchOutcome::no_path(stats)
}
