use log::trace;

use super::depth_first::depth_first;
use super::frontier::SearchStats;
use super::{SearchOutcome, SearchProblem};


/// Deepest depth limit tried before giving up
pub const MAX_DEPTH: usize = 1000;


/// Iterative deepening: depth-limited depth-first search with limits 0, 1, 2, ... MAX_DEPTH
/// Node counts are summed over every iteration
pub fn iterative_deepening<P: SearchProblem>(problem: &P) -> SearchOutcome {
    let mut totals = SearchStats::default();

    for limit in 0..=MAX_DEPTH {
        let outcome = depth_first(problem, Some(limit));
        totals.absorb(SearchStats {
            nodes_expanded: outcome.nodes_expanded(),
            peak_memory: outcome.peak_memory(),
        });

        if outcome.is_found() {
            trace!("iterative deepening found a path at depth limit {limit}");
            return outcome.with_stats(totals);
        }
    }

    SearchOutcome::no_path(totals)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::search_algos::test_grids::{line_grid, walled_in_customer};
    use crate::search_algos::DeliveryProblem;

    #[test]
    fn test_counts_accumulate_over_iterations() {
        let grid = line_grid(3, 2);
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(2, 0));

        // limit 0: root only, limit 1: root + one child, limit 2: root, (1,0), (2,0)
        let outcome = iterative_deepening(&problem);
        assert_eq!(outcome.plan_string(), "right,right");
        assert_eq!(outcome.cost(), 4.0);
        assert_eq!(outcome.nodes_expanded(), 1 + 2 + 3);
    }

    #[test]
    fn test_gives_up_at_max_depth() {
        let (grid, store, customer) = walled_in_customer();
        let problem = DeliveryProblem::new(&grid, store, customer);

        let outcome = iterative_deepening(&problem);
        assert!(!outcome.is_found());
        assert!(outcome.cost().is_infinite());
        assert!(outcome.nodes_expanded() > MAX_DEPTH);
    }
}
