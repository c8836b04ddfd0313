use super::frontier::SearchStats;
use super::node::{SearchTree, ROOT};
use super::{SearchOutcome, SearchProblem};
use crate::collections::FxHashSet;


/// Depth-first search, optionally bounded by `depth_limit`
///
/// Goal test happens when a node is popped. Successors are pushed in reverse so the
/// first generated action is explored first. A popped node is marked explored before
/// the depth check, so nodes sitting on the limit are recorded but not expanded.
pub fn depth_first<P: SearchProblem>(problem: &P, depth_limit: Option<usize>) -> SearchOutcome {
    let mut tree = SearchTree::new(problem.start_state(), 0.0);
    let mut frontier: Vec<usize> = vec![ROOT];
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
        let depth = node.depth;
        if !explored.insert(state.clone()) {
            continue;
        }
        if depth_limit.is_some_and(|limit| depth >= limit) {
            continue;
        }

        let mut successors = problem.successors(&state);
        successors.reverse();

        for successor in successors {
            if explored.contains(&successor.state) {
                continue;
            }
            let child = tree.add_child(index, successor, 0.0);
            frontier.push(child);
        }
    }

    SearchOutcome::no_path(stats)
}
