use getset::{CopyGetters, Getters};
use log::trace;
use serde::Serialize;

use super::analysis::PairwiseAnalysis;
use crate::search_algos::Strategy;


/// Which recorded costs the assignment passes may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostSource {
    /// Cheapest cost any strategy reported for a pair
    /// Non-optimal strategies take part too, so a pair can end up cheaper than
    /// what A* alone reported for it
    BestOfAll,
    /// Costs reported by one strategy only
    Only(Strategy),
}


/// Customer served by a store
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize)]
#[getset(get_copy = "pub")]
pub struct Assignment {
    store_idx: usize,
    customer_idx: usize,
    cost: f64,
    strategy: Strategy, // strategy whose cost was used
    forced: bool, // placed by the fallback pass, ignoring the load limit
}


/// Outcome of one assignment pass
#[derive(Debug, Clone, PartialEq, Default, Getters, CopyGetters, Serialize)]
pub struct AssignmentPlan {
    #[getset(get = "pub")]
    assignments: Vec<Assignment>,
    #[getset(get_copy = "pub")]
    total_cost: f64,
    /// Customers per store, one slot per store
    #[getset(get = "pub")]
    store_loads: Vec<usize>,
    /// Customers no store can reach
    #[getset(get = "pub")]
    unserved: Vec<usize>,
}

impl AssignmentPlan {

    fn new(store_count: usize) -> Self {
        Self {
            store_loads: vec![0; store_count],
            ..Default::default()
        }
    }

    fn assign(&mut self, candidate: &Assignment, forced: bool) {
        self.store_loads[candidate.store_idx] += 1;
        self.total_cost += candidate.cost;
        self.assignments.push(Assignment { forced, ..*candidate });
    }

    /// Number of customers assigned
    pub fn customer_count(&self) -> usize {
        self.assignments.len()
    }

    /// Store serving `customer_idx`
    pub fn store_for(&self, customer_idx: usize) -> Option<usize> {
        self.assignments
            .iter()
            .find(|assignment| assignment.customer_idx == customer_idx)
            .map(|assignment| assignment.store_idx)
    }

    /// Difference between the most and least loaded store
    pub fn imbalance(&self) -> usize {
        let max = self.store_loads.iter().max().copied().unwrap_or(0);
        let min = self.store_loads.iter().min().copied().unwrap_or(0);
        max - min
    }
}


/// Usable (store, customer, cost) triples in store-major pair order
/// Pairs without a path under `source` are left out
fn candidates(analysis: &PairwiseAnalysis, source: CostSource) -> Vec<Assignment> {
    analysis
        .pairs()
        .iter()
        .filter_map(|pair| {
            let metrics = match source {
                CostSource::BestOfAll => pair.best(),
                CostSource::Only(strategy) => pair.metrics(strategy).filter(|m| m.path_found()),
            }?;
            Some(Assignment {
                store_idx: pair.store_idx(),
                customer_idx: pair.customer_idx(),
                cost: metrics.cost(),
                strategy: metrics.strategy(),
                forced: false,
            })
        })
        .collect()
}

/// First strictly cheapest candidate for `customer_idx`
fn cheapest_for(candidates: &[Assignment], customer_idx: usize) -> Option<&Assignment> {
    candidates
        .iter()
        .filter(|candidate| candidate.customer_idx == customer_idx)
        .fold(None, |best: Option<&Assignment>, candidate| match best {
            Some(current) if current.cost <= candidate.cost => Some(current),
            _ => Some(candidate),
        })
}


/// Send every customer to its cheapest store, ignoring store loads
pub fn cheapest_assignment(analysis: &PairwiseAnalysis, source: CostSource) -> AssignmentPlan {
    let candidates = candidates(analysis, source);
    let mut plan = AssignmentPlan::new(analysis.store_count());

    for customer_idx in 0..analysis.customer_count() {
        match cheapest_for(&candidates, customer_idx) {
            Some(candidate) => plan.assign(candidate, false),
            None => plan.unserved.push(customer_idx),
        }
    }

    plan
}


/// Greedy load-balanced assignment
///
/// Candidates are taken cheapest first. One is accepted only if its store's load
/// afterwards stays within `max_load_diff` of the least loaded store. Customers
/// still unassigned after that go to their cheapest store regardless of load.
/// This is a heuristic, not an optimal balanced assignment.
pub fn balanced_assignment(
    analysis: &PairwiseAnalysis,
    source: CostSource,
    max_load_diff: usize,
) -> AssignmentPlan {
    let mut candidates = candidates(analysis, source);
    // stable: equal costs keep store-major order
    candidates.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    let mut plan = AssignmentPlan::new(analysis.store_count());
    let mut assigned = vec![false; analysis.customer_count()];

    for candidate in &candidates {
        if assigned[candidate.customer_idx] {
            continue;
        }

        let min_load = plan.store_loads.iter().min().copied().unwrap_or(0);
        if plan.store_loads[candidate.store_idx] + 1 <= min_load + max_load_diff {
            plan.assign(candidate, false);
            assigned[candidate.customer_idx] = true;
        }
    }

    // Fallback - serve everyone left over, even if the loads drift apart
    for customer_idx in 0..analysis.customer_count() {
        if assigned[customer_idx] {
            continue;
        }
        match cheapest_for(&candidates, customer_idx) {
            Some(candidate) => {
                trace!(
                    "customer {customer_idx} forced onto store {} (load {})",
                    candidate.store_idx,
                    plan.store_loads[candidate.store_idx]
                );
                plan.assign(candidate, true);
                assigned[customer_idx] = true;
            }
            None => plan.unserved.push(customer_idx),
        }
    }

    plan
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{DeliveryPlanner, PlannerConfig};
    use crate::geometry::Position;
    use crate::grid::Grid;
    use crate::search_algos::test_grids::open_grid;
    use crate::search_algos::Heuristic;

    fn planner_config(strategies: Vec<Strategy>) -> PlannerConfig {
        PlannerConfig {
            strategies,
            ..Default::default()
        }
    }

    /// Row of 7 cells, stores at both ends, customers bunched up near the left store
    fn lopsided_grid() -> Grid {
        let mut grid = open_grid(7, 1, 1);
        grid.add_store(Position::new(0, 0));
        grid.add_store(Position::new(6, 0));
        for x in [1, 2, 3, 4] {
            grid.add_customer(Position::new(x, 0));
        }
        grid
    }

    #[test]
    fn test_cheapest_ignores_loads() {
        let grid = lopsided_grid();
        let planner = DeliveryPlanner::with_config(&grid, planner_config(vec![Strategy::UniformCost]));
        let analysis = planner.analyze_all_pairs();

        let plan = cheapest_assignment(&analysis, CostSource::BestOfAll);
        // customer at x=3 is 3 from both stores, the first store wins the tie
        assert_eq!(plan.store_loads(), &vec![3, 1]);
        assert_eq!(plan.total_cost(), 1.0 + 2.0 + 3.0 + 2.0);
        assert_eq!(plan.store_for(3), Some(1));
        assert_eq!(plan.imbalance(), 2);
        assert!(plan.unserved().is_empty());
    }

    #[test]
    fn test_balanced_respects_load_limit() {
        let grid = lopsided_grid();
        let planner = DeliveryPlanner::with_config(&grid, planner_config(vec![Strategy::UniformCost]));
        let analysis = planner.analyze_all_pairs();

        let plan = balanced_assignment(&analysis, CostSource::BestOfAll, 1);
        assert_eq!(plan.store_loads(), &vec![2, 2]);
        assert_eq!(plan.customer_count(), 4);
        // customer at x=2 moves to the right store, 4 instead of 2
        assert_eq!(plan.store_for(1), Some(1));
        assert_eq!(plan.total_cost(), 1.0 + 4.0 + 3.0 + 2.0);
        assert!(plan.assignments().iter().all(|a| !a.forced()));
    }

    #[test]
    fn test_zero_difference_forces_fallback() {
        let grid = lopsided_grid();
        let planner = DeliveryPlanner::with_config(&grid, planner_config(vec![Strategy::UniformCost]));
        let analysis = planner.analyze_all_pairs();

        // load + 1 <= min + 0 never holds, everyone goes through the fallback
        let plan = balanced_assignment(&analysis, CostSource::BestOfAll, 0);
        assert_eq!(plan.customer_count(), 4);
        assert!(plan.assignments().iter().all(|a| a.forced()));
        assert_eq!(plan, {
            let mut expected = cheapest_assignment(&analysis, CostSource::BestOfAll);
            expected.assignments.iter_mut().for_each(|a| a.forced = true);
            expected
        });
    }

    #[test]
    fn test_unreachable_customer_is_unserved() {
        let mut grid = open_grid(4, 1, 1);
        grid.add_store(Position::new(0, 0));
        grid.add_customer(Position::new(1, 0));
        grid.add_customer(Position::new(3, 0));
        grid.set_traffic(Position::new(2, 0), Position::new(3, 0), 0);

        let planner = DeliveryPlanner::with_config(&grid, planner_config(vec![Strategy::BreadthFirst]));
        let analysis = planner.analyze_all_pairs();

        let cheapest = cheapest_assignment(&analysis, CostSource::BestOfAll);
        let balanced = balanced_assignment(&analysis, CostSource::BestOfAll, 1);
        for plan in [cheapest, balanced] {
            assert_eq!(plan.customer_count(), 1);
            assert_eq!(plan.unserved(), &vec![1]);
            assert_eq!(plan.store_loads(), &vec![1]);
        }
    }

    #[test]
    fn test_best_of_all_can_beat_single_strategy() {
        // breadth-first takes the direct expensive segment, uniform-cost the detour
        let mut grid = open_grid(2, 2, 1);
        grid.set_traffic(Position::new(0, 0), Position::new(1, 0), 4);
        grid.add_store(Position::new(0, 0));
        grid.add_customer(Position::new(1, 0));

        let planner = DeliveryPlanner::with_config(
            &grid,
            planner_config(vec![Strategy::BreadthFirst, Strategy::UniformCost]),
        );
        let analysis = planner.analyze_all_pairs();

        let best = cheapest_assignment(&analysis, CostSource::BestOfAll);
        let bf_only = cheapest_assignment(&analysis, CostSource::Only(Strategy::BreadthFirst));
        let missing = cheapest_assignment(&analysis, CostSource::Only(Strategy::AStar(Heuristic::Zero)));

        assert_eq!(best.total_cost(), 3.0);
        assert_eq!(best.assignments()[0].strategy(), Strategy::UniformCost);
        assert_eq!(bf_only.total_cost(), 4.0);
        assert_eq!(bf_only.assignments()[0].strategy(), Strategy::BreadthFirst);
        // strategy never ran, nothing to assign with
        assert_eq!(missing.unserved(), &vec![0]);
    }
}
