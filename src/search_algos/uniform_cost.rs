use super::frontier::{PriorityFrontier, SearchStats};
use super::node::{SearchNode, SearchTree, ROOT};
use super::{SearchOutcome, SearchProblem};
use crate::collections::{FxHashMap, FxHashSet};


/// Uniform-cost ordering: cheapest path so far first
fn priority<S>(node: &SearchNode<S>) -> u64 {
    node.path_cost
}


/// Uniform-cost search (Dijkstra's algorithm over the action graph)
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// A successor is queued only when it improves on the best known cost of its state.
pub fn uniform_cost<P: SearchProblem>(problem: &P) -> SearchOutcome {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return SearchOutcome::already_at_goal();
    }

    let mut best_costs: FxHashMap<P::State, u64> = FxHashMap::default();
    best_costs.insert(start.clone(), 0);

    let mut tree = SearchTree::new(start, 0.0);
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

            // Only queue the successor if it is the cheapest way found so far
            if best_costs.get(&successor.state).is_none_or(|&known| new_cost < known) {
                best_costs.insert(successor.state.clone(), new_cost);
                let child = tree.add_child(index, successor, 0.0);
                frontier.push(priority(tree.node(child)), child);
            }
        }
    }

    SearchOutcome::no_path(stats)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::search_algos::test_grids::{detour_grid, line_grid, walled_in_customer};
    use crate::search_algos::DeliveryProblem;

    #[test]
    fn test_finds_cheapest_path() {
        let grid = detour_grid();
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(1, 0));

        let outcome = uniform_cost(&problem);
        assert_eq!(outcome.plan_string(), "down,right,up");
        assert_eq!(outcome.cost(), 3.0);
        assert_eq!(outcome.nodes_expanded(), 4);
    }

    #[test]
    fn test_peak_memory_counts_nodes() {
        let grid = line_grid(3, 1);
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(2, 0));

        // last pop: (2,0) in the frontier, (0,0) and (1,0) explored
        let outcome = uniform_cost(&problem);
        assert_eq!(outcome.nodes_expanded(), 3);
        assert_eq!(outcome.peak_memory(), 3);
    }

    #[test]
    fn test_unreachable_customer() {
        let (grid, store, customer) = walled_in_customer();
        let problem = DeliveryProblem::new(&grid, store, customer);

        let outcome = uniform_cost(&problem);
        assert!(!outcome.is_found());
        assert!(outcome.cost().is_infinite());
        assert!(outcome.nodes_expanded() > 0);
    }
}
