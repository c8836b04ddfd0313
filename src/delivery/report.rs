use std::fmt;

use getset::{CopyGetters, Getters};
use serde::Serialize;

use super::analysis::PairwiseAnalysis;
use super::assignment::AssignmentPlan;
use super::summary::StrategySummary;
use crate::search_algos::Strategy;


const RULE_WIDTH: usize = 70;


/// Both assignment passes restricted to one strategy's costs
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Serialize)]
pub struct StrategyAssignments {
    #[getset(get_copy = "pub")]
    strategy: Strategy,
    #[getset(get = "pub")]
    cheapest: AssignmentPlan,
    #[getset(get = "pub")]
    balanced: AssignmentPlan,
}

impl StrategyAssignments {

    pub(crate) fn new(strategy: Strategy, cheapest: AssignmentPlan, balanced: AssignmentPlan) -> Self {
        Self { strategy, cheapest, balanced }
    }

    /// Extra cost of balancing the loads, negative if balancing came out cheaper
    pub fn cost_delta(&self) -> f64 {
        self.balanced.total_cost() - self.cheapest.total_cost()
    }
}


/// Best-of-all-strategies cheapest plan next to balanced plans for several load limits
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct AssignmentComparison {
    cheapest: AssignmentPlan,
    /// (max load difference, plan)
    balanced: Vec<(usize, AssignmentPlan)>,
}

impl AssignmentComparison {

    pub(crate) fn new(cheapest: AssignmentPlan, balanced: Vec<(usize, AssignmentPlan)>) -> Self {
        Self { cheapest, balanced }
    }

    pub fn balanced_for(&self, max_load_diff: usize) -> Option<&AssignmentPlan> {
        self.balanced
            .iter()
            .find(|(diff, _)| *diff == max_load_diff)
            .map(|(_, plan)| plan)
    }
}


/// Everything one planning run produces
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct DeliveryPlan {
    analysis: PairwiseAnalysis,
    strategy_summary: StrategySummary,
    by_strategy: Vec<StrategyAssignments>,
    comparison: AssignmentComparison,
}

impl DeliveryPlan {

    pub(crate) fn new(
        analysis: PairwiseAnalysis,
        strategy_summary: StrategySummary,
        by_strategy: Vec<StrategyAssignments>,
        comparison: AssignmentComparison,
    ) -> Self {
        Self { analysis, strategy_summary, by_strategy, comparison }
    }

    pub fn for_strategy(&self, strategy: Strategy) -> Option<&StrategyAssignments> {
        self.by_strategy.iter().find(|entry| entry.strategy == strategy)
    }
}


fn loads_label(plan: &AssignmentPlan) -> String {
    format!("{:?}", plan.store_loads())
}

fn strategy_codes<'a>(strategies: impl IntoIterator<Item = &'a Strategy>) -> String {
    strategies
        .into_iter()
        .map(Strategy::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &StrategySummary) -> fmt::Result {
    writeln!(
        f,
        "{:<10} {:<10} {:<12} {:<12} {:<14} {:<10}",
        "Strategy", "Success", "Avg Cost", "Avg Nodes", "Avg Time (ms)", "Peak Nodes"
    )?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

    for stats in summary.by_strategy() {
        writeln!(
            f,
            "{:<10} {:<10} {:<12.1} {:<12.1} {:<14.3} {:<10}",
            stats.strategy().to_string(),
            format!("{}/{}", stats.success_count(), stats.pair_count()),
            stats.avg_cost(),
            stats.avg_nodes_expanded(),
            stats.avg_elapsed().as_secs_f64() * 1000.0,
            stats.max_peak_memory()
        )?;
    }

    if !summary.optimal_strategies().is_empty() {
        writeln!(
            f,
            "Lowest average cost: {:.1} ({})",
            summary.optimal_cost(),
            strategy_codes(summary.optimal_strategies())
        )?;
    }
    if !summary.efficiency_ranking().is_empty() {
        writeln!(
            f,
            "Efficiency ranking: {}",
            strategy_codes(summary.efficiency_ranking().iter().map(|(strategy, _)| strategy))
        )?;
    }
    writeln!(f)
}

fn write_plan_row(f: &mut fmt::Formatter<'_>, label: &str, kind: &str, plan: &AssignmentPlan) -> fmt::Result {
    writeln!(
        f,
        "{:<10} {:<10} {:<12.1} {:<20} {:<10}",
        label,
        kind,
        plan.total_cost(),
        loads_label(plan),
        plan.customer_count()
    )
}

/// Strategy statistics, per-strategy assignment table, then the overall comparison
impl fmt::Display for DeliveryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.analysis.summary();
        writeln!(
            f,
            "Grid {}x{}: {} stores, {} customers",
            summary.width(),
            summary.height(),
            summary.store_count(),
            summary.customer_count()
        )?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        write_summary(f, &self.strategy_summary)?;
        writeln!(
            f,
            "{:<10} {:<10} {:<12} {:<20} {:<10}",
            "Strategy", "Type", "Total Cost", "Store Loads", "Customers"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for entry in &self.by_strategy {
            let code = entry.strategy.to_string();
            write_plan_row(f, &code, "Cheapest", &entry.cheapest)?;
            write_plan_row(f, "", "Balanced", &entry.balanced)?;

            let delta = entry.cost_delta();
            let base = entry.cheapest.total_cost();
            if delta > 0.0 && base > 0.0 {
                writeln!(f, "{:<10} {:<10} {:<+12.1} ({:+.1}%)", "", "Δ", delta, delta / base * 100.0)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{:<15} {:<12} {:<20} {:<10}", "Assignment", "Total Cost", "Store Loads", "Imbalance")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        let cheapest = &self.comparison.cheapest;
        writeln!(
            f,
            "{:<15} {:<12.1} {:<20} {:<10}",
            "Pure Cost",
            cheapest.total_cost(),
            loads_label(cheapest),
            cheapest.imbalance()
        )?;
        for (diff, plan) in &self.comparison.balanced {
            writeln!(
                f,
                "{:<15} {:<12.1} {:<20} {:<10}",
                format!("Balanced ({diff})"),
                plan.total_cost(),
                loads_label(plan),
                plan.imbalance()
            )?;
        }

        let unserved = cheapest.unserved();
        if !unserved.is_empty() {
            writeln!(f, "Unreachable customers: {unserved:?}")?;
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use crate::delivery::{DeliveryPlanner, PlannerConfig};
    use crate::geometry::Position;
    use crate::search_algos::test_grids::open_grid;
    use crate::search_algos::{Heuristic, Strategy};

    #[test]
    fn test_report_table() {
        let mut grid = open_grid(7, 1, 1);
        grid.add_store(Position::new(0, 0));
        grid.add_store(Position::new(6, 0));
        for x in [1, 2, 3, 4] {
            grid.add_customer(Position::new(x, 0));
        }

        let config = PlannerConfig {
            strategies: vec![Strategy::UniformCost, Strategy::AStar(Heuristic::Manhattan)],
            ..Default::default()
        };
        let plan = DeliveryPlanner::with_config(&grid, config).plan();
        let uc = plan.for_strategy(Strategy::UniformCost).unwrap();
        assert_eq!(uc.cost_delta(), 2.0);
        assert!(plan.for_strategy(Strategy::BreadthFirst).is_none());

        let report = plan.to_string();
        assert!(report.starts_with("Grid 7x1: 2 stores, 4 customers"));
        // path costs over all 8 pairs: 1+2+3+4 from the left store, 5+4+3+2 from the right
        assert!(report.contains("UC         8/8        3.0"));
        assert!(report.contains("Lowest average cost: 3.0 (UC, AS1)"));
        assert!(report.contains("Efficiency ranking: "));
        assert_eq!(plan.strategy_summary().optimal_strategies().len(), 2);
        assert!(report.contains("UC         Cheapest   8.0          [3, 1]"));
        assert!(report.contains("           Balanced   10.0         [2, 2]"));
        assert!(report.contains("+2.0         (+25.0%)"));
        assert!(report.contains("AS1"));
        assert!(report.contains("Pure Cost       8.0          [3, 1]               2"));
        assert!(report.contains("Balanced (1)"));
        assert!(report.contains("Balanced (2)    8.0          [3, 1]               2"));
        assert!(!report.contains("Unreachable"));
    }

    #[test]
    fn test_no_delta_line_when_balancing_is_free() {
        let mut grid = open_grid(3, 1, 1);
        grid.add_store(Position::new(0, 0));
        grid.add_store(Position::new(2, 0));
        grid.add_customer(Position::new(0, 0));
        grid.add_customer(Position::new(2, 0));

        let plan = DeliveryPlanner::new(&grid).plan();
        let report = plan.to_string();
        assert!(!report.contains('Δ'));
        for entry in plan.by_strategy() {
            assert_eq!(entry.cost_delta(), 0.0);
            assert_eq!(entry.balanced().store_loads(), &vec![1, 1]);
        }
    }
}
