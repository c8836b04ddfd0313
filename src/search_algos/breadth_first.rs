use std::collections::VecDeque;

use super::frontier::SearchStats;
use super::node::{SearchTree, ROOT};
use super::{SearchOutcome, SearchProblem};
use crate::collections::FxHashSet;


/// Breadth-first search
/// Goal test happens when a child is generated, so the first hit has the fewest actions.
/// Step costs are ignored: the returned path is not necessarily the cheapest one.
pub fn breadth_first<P: SearchProblem>(problem: &P) -> SearchOutcome {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return SearchOutcome::already_at_goal();
    }

    let mut tree = SearchTree::new(start, 0.0);
    let mut frontier: VecDeque<usize> = VecDeque::from([ROOT]);
    let mut explored: FxHashSet<P::State> = FxHashSet::default();
    let mut stats = SearchStats::default();

    while !frontier.is_empty() {
        stats.observe(frontier.len() + explored.len());

        let Some(index) = frontier.pop_front() else { break };
        stats.nodes_expanded += 1;

        let state = tree.node(index).state.clone();
        if !explored.insert(state.clone()) {
            continue;
        }

        for successor in problem.successors(&state) {
            if explored.contains(&successor.state) {
                continue;
            }

            let is_goal = problem.is_goal(&successor.state);
            let child = tree.add_child(index, successor, 0.0);
            if is_goal {
                return tree.outcome(child, stats);
            }
            frontier.push_back(child);
        }
    }

    SearchOutcome::no_path(stats)
}
