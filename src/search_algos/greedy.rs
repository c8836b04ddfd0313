use float_ord::FloatOrd;

use super::frontier::{PriorityFrontier, SearchStats};
use super::node::{SearchNode, SearchTree, ROOT};
use super::{Heuristic, InformedProblem, SearchOutcome};
use crate::collections::FxHashSet;


/// Greedy ordering: smallest estimate first, path cost ignored
fn priority<S>(node: &SearchNode<S>) -> FloatOrd<f64> {
    FloatOrd(node.heuristic)
}


/// Greedy best-first search
/// Follows the heuristic alone, so the path found may be far from the cheapest.
pub fn greedy<P: InformedProblem>(problem: &P, heuristic: Heuristic) -> SearchOutcome {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return SearchOutcome::already_at_goal();
    }

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
        if !explored.insert(state.clone()) {
            continue;
        }

        for successor in problem.successors(&state) {
            if explored.contains(&successor.state) {
                continue;
            }
            let estimate = problem.estimate(&successor.state, heuristic);
            let child = tree.add_child(index, successor, estimate);
            frontier.push(priority(tree.node(child)), child);
        }
    }

    SearchOutcome::no_path(stats)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::search_algos::test_grids::{detour_grid, open_grid};
    use crate::search_algos::DeliveryProblem;

    #[test]
    fn test_follows_estimate_into_expensive_segment() {
        let grid = detour_grid();
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(1, 0));

        let outcome = greedy(&problem, Heuristic::Manhattan);
        assert_eq!(outcome.plan_string(), "right");
        assert_eq!(outcome.cost(), 4.0);
        assert_eq!(outcome.nodes_expanded(), 2);
    }

    #[test]
    fn test_heads_straight_for_goal() {
        let grid = open_grid(5, 5, 1);
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(4, 0));

        let outcome = greedy(&problem, Heuristic::Diagonal);
        assert_eq!(outcome.plan_string(), "right,right,right,right");
        assert_eq!(outcome.nodes_expanded(), 5);
    }
}
