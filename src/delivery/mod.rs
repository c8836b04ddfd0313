mod analysis;
mod assignment;
mod report;
mod summary;

use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub use analysis::{PairAnalysis, PairMetrics, PairwiseAnalysis};
pub use assignment::{balanced_assignment, cheapest_assignment, Assignment, AssignmentPlan, CostSource};
pub use report::{AssignmentComparison, DeliveryPlan, StrategyAssignments};
pub use summary::{StrategyStats, StrategySummary};

use crate::grid::Grid;
use crate::search_algos::{find_path, Strategy, DEFAULT_STRATEGIES};


/// Planner settings
/// Missing fields fall back to the defaults, strategies are given by code (`"BF"`, `"AS1"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Strategies run on every pair, in this order
    pub strategies: Vec<Strategy>,
    /// Load limit of the balanced pass in the per-strategy plans
    pub max_load_diff: usize,
    /// Load limits tried in the overall comparison
    pub comparison_load_diffs: Vec<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategies: DEFAULT_STRATEGIES.to_vec(),
            max_load_diff: 1,
            comparison_load_diffs: vec![1, 2],
        }
    }
}


/// Runs every strategy over every (store, customer) pair of a grid and assigns
/// customers to stores from the results
pub struct DeliveryPlanner<'g> {
    grid: &'g Grid,
    config: PlannerConfig,
}

impl<'g> DeliveryPlanner<'g> {

    pub fn new(grid: &'g Grid) -> Self {
        Self::with_config(grid, PlannerConfig::default())
    }

    pub fn with_config(grid: &'g Grid, config: PlannerConfig) -> Self {
        Self { grid, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Run every configured strategy from store `store_idx` to customer `customer_idx`
    /// None if either index is out of range
    pub fn analyze_pair(&self, store_idx: usize, customer_idx: usize) -> Option<PairAnalysis> {
        let store = *self.grid.stores().get(store_idx)?;
        let customer = *self.grid.customers().get(customer_idx)?;

        let mut pair = PairAnalysis::new(store_idx, customer_idx, store, customer);
        for &strategy in &self.config.strategies {
            let started = Instant::now();
            let outcome = find_path(self.grid, store, customer, strategy);
            pair.record(PairMetrics::new(strategy, outcome, started.elapsed()));
        }

        debug!(
            "pair store {store_idx} {store} -> customer {customer_idx} {customer}: best cost {:?}",
            pair.best().map(PairMetrics::cost)
        );
        Some(pair)
    }

    /// Analyse every (store, customer) pair, store-major
    pub fn analyze_all_pairs(&self) -> PairwiseAnalysis {
        let stores = self.grid.stores();
        let customers = self.grid.customers();
        info!(
            "analysing {} stores x {} customers with {} strategies",
            stores.len(),
            customers.len(),
            self.config.strategies.len()
        );

        let pairs = (0..stores.len())
            .flat_map(|s| (0..customers.len()).map(move |c| (s, c)))
            .filter_map(|(s, c)| self.analyze_pair(s, c))
            .collect();

        PairwiseAnalysis::new(
            self.grid.summary(),
            stores.to_vec(),
            customers.to_vec(),
            self.config.strategies.clone(),
            pairs,
        )
    }

    /// Cheapest plan from the best of all strategies, plus one balanced plan
    /// per configured comparison load limit
    pub fn compare_assignment_strategies(&self, analysis: &PairwiseAnalysis) -> AssignmentComparison {
        let cheapest = cheapest_assignment(analysis, CostSource::BestOfAll);
        let balanced = self
            .config
            .comparison_load_diffs
            .iter()
            .map(|&diff| (diff, balanced_assignment(analysis, CostSource::BestOfAll, diff)))
            .collect();
        AssignmentComparison::new(cheapest, balanced)
    }

    /// Both assignment passes on one strategy's costs
    pub fn assign_with(&self, analysis: &PairwiseAnalysis, strategy: Strategy) -> StrategyAssignments {
        let source = CostSource::Only(strategy);
        StrategyAssignments::new(
            strategy,
            cheapest_assignment(analysis, source),
            balanced_assignment(analysis, source, self.config.max_load_diff),
        )
    }

    /// Full planning run: pairwise analysis, strategy summary, per-strategy
    /// assignments and the comparison
    pub fn plan(&self) -> DeliveryPlan {
        let analysis = self.analyze_all_pairs();
        let strategy_summary = StrategySummary::from_analysis(&analysis);
        debug!(
            "lowest average cost {:.1} reached by {:?}",
            strategy_summary.optimal_cost(),
            strategy_summary.optimal_strategies()
        );

        let by_strategy: Vec<_> = self
            .config
            .strategies
            .iter()
            .map(|&strategy| self.assign_with(&analysis, strategy))
            .collect();
        let comparison = self.compare_assignment_strategies(&analysis);

        info!(
            "planned {} customers: cheapest cost {:.1}, {} unreachable",
            analysis.customer_count(),
            comparison.cheapest().total_cost(),
            comparison.cheapest().unserved().len()
        );
        DeliveryPlan::new(analysis, strategy_summary, by_strategy, comparison)
    }
}
