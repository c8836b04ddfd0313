use std::time::Duration;

use getset::{CopyGetters, Getters};
use serde::Serialize;

use crate::collections::FxIndexMap;
use crate::geometry::Position;
use crate::grid::GridSummary;
use crate::search_algos::{SearchOutcome, Strategy};


/// One search run for one (store, customer) pair
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Serialize)]
pub struct PairMetrics {
    #[getset(get_copy = "pub")]
    strategy: Strategy,
    #[getset(get = "pub")]
    outcome: SearchOutcome,
    /// Wall-clock time of the search run
    #[getset(get_copy = "pub")]
    elapsed: Duration,
}

impl PairMetrics {

    pub(crate) fn new(strategy: Strategy, outcome: SearchOutcome, elapsed: Duration) -> Self {
        Self { strategy, outcome, elapsed }
    }

    pub fn cost(&self) -> f64 {
        self.outcome.cost()
    }

    pub fn path_found(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn path_length(&self) -> usize {
        self.outcome.path_length()
    }

    pub fn nodes_expanded(&self) -> usize {
        self.outcome.nodes_expanded()
    }

    /// Peak number of nodes held by the search, not bytes
    pub fn peak_memory(&self) -> usize {
        self.outcome.peak_memory()
    }
}


/// Every strategy's result for one (store, customer) pair
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Serialize)]
pub struct PairAnalysis {
    #[getset(get_copy = "pub")]
    store_idx: usize,
    #[getset(get_copy = "pub")]
    customer_idx: usize,
    #[getset(get_copy = "pub")]
    store: Position,
    #[getset(get_copy = "pub")]
    customer: Position,
    /// Baseline: distance ignoring traffic, obstacles and tunnels
    #[getset(get_copy = "pub")]
    manhattan_distance: u32,
    /// Results in the order the strategies were run
    #[getset(get = "pub")]
    metrics_by_strategy: FxIndexMap<Strategy, PairMetrics>,
}

impl PairAnalysis {

    pub(crate) fn new(store_idx: usize, customer_idx: usize, store: Position, customer: Position) -> Self {
        Self {
            store_idx,
            customer_idx,
            store,
            customer,
            manhattan_distance: store.manhattan_distance(&customer),
            metrics_by_strategy: FxIndexMap::default(),
        }
    }

    pub(crate) fn record(&mut self, metrics: PairMetrics) {
        self.metrics_by_strategy.insert(metrics.strategy, metrics);
    }

    pub fn metrics(&self, strategy: Strategy) -> Option<&PairMetrics> {
        self.metrics_by_strategy.get(&strategy)
    }

    /// Cheapest successful run across all strategies
    /// Ties go to the strategy that ran first
    pub fn best(&self) -> Option<&PairMetrics> {
        self.metrics_by_strategy
            .values()
            .filter(|metrics| metrics.path_found())
            .fold(None, |best: Option<&PairMetrics>, metrics| match best {
                Some(current) if current.cost() <= metrics.cost() => Some(current),
                _ => Some(metrics),
            })
    }
}


/// Results of every strategy over every (store, customer) pair
/// Pairs are stored store-major: all customers of store 0, then store 1, ...
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct PairwiseAnalysis {
    summary: GridSummary,
    stores: Vec<Position>,
    customers: Vec<Position>,
    strategies: Vec<Strategy>,
    pairs: Vec<PairAnalysis>,
}

impl PairwiseAnalysis {

    pub(crate) fn new(
        summary: GridSummary,
        stores: Vec<Position>,
        customers: Vec<Position>,
        strategies: Vec<Strategy>,
        pairs: Vec<PairAnalysis>,
    ) -> Self {
        debug_assert_eq!(pairs.len(), stores.len() * customers.len());
        Self { summary, stores, customers, strategies, pairs }
    }

    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn pair(&self, store_idx: usize, customer_idx: usize) -> Option<&PairAnalysis> {
        if store_idx >= self.stores.len() || customer_idx >= self.customers.len() {
            return None;
        }
        self.pairs.get(store_idx * self.customers.len() + customer_idx)
    }

    /// Lookup by (store index, customer index, strategy)
    pub fn metrics(&self, store_idx: usize, customer_idx: usize, strategy: Strategy) -> Option<&PairMetrics> {
        self.pair(store_idx, customer_idx)?.metrics(strategy)
    }
}
