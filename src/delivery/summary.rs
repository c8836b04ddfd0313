use std::time::Duration;

use getset::{CopyGetters, Getters};
use serde::Serialize;

use super::analysis::PairwiseAnalysis;
use crate::search_algos::Strategy;


/// One strategy's results folded over every analysed pair
/// Averages and peak memory only count runs that found a path
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize)]
#[getset(get_copy = "pub")]
pub struct StrategyStats {
    strategy: Strategy,
    pair_count: usize,
    success_count: usize,
    avg_cost: f64, // infinite when no run succeeded
    avg_nodes_expanded: f64,
    avg_elapsed: Duration,
    max_peak_memory: usize, // in nodes
}

impl StrategyStats {

    fn collect(strategy: Strategy, analysis: &PairwiseAnalysis) -> Self {
        let mut stats = Self {
            strategy,
            pair_count: 0,
            success_count: 0,
            avg_cost: f64::INFINITY,
            avg_nodes_expanded: 0.0,
            avg_elapsed: Duration::ZERO,
            max_peak_memory: 0,
        };
        let mut total_cost = 0.0;
        let mut total_nodes = 0;
        let mut total_elapsed = Duration::ZERO;

        for metrics in analysis.pairs().iter().filter_map(|pair| pair.metrics(strategy)) {
            stats.pair_count += 1;
            if !metrics.path_found() {
                continue;
            }
            stats.success_count += 1;
            total_cost += metrics.cost();
            total_nodes += metrics.nodes_expanded();
            total_elapsed += metrics.elapsed();
            stats.max_peak_memory = stats.max_peak_memory.max(metrics.peak_memory());
        }

        if stats.success_count > 0 {
            let successes = stats.success_count as f64;
            stats.avg_cost = total_cost / successes;
            stats.avg_nodes_expanded = total_nodes as f64 / successes;
            stats.avg_elapsed = total_elapsed / u32::try_from(stats.success_count).unwrap_or(u32::MAX);
        }
        stats
    }

    /// Share of pairs where a path was found, 0 when nothing ran
    pub fn success_rate(&self) -> f64 {
        if self.pair_count == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.pair_count as f64
    }

    /// Average nodes expanded times average milliseconds / 1000, i.e. nodes x seconds
    /// Lower is better, None when the strategy never succeeded
    pub fn efficiency_score(&self) -> Option<f64> {
        (self.success_count > 0).then(|| self.avg_nodes_expanded * self.avg_elapsed.as_secs_f64())
    }
}


/// Cross-strategy comparison of a pairwise analysis
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Serialize)]
pub struct StrategySummary {
    /// In the order the strategies were run
    #[getset(get = "pub")]
    by_strategy: Vec<StrategyStats>,
    /// Lowest average cost, infinite when no strategy found any path
    #[getset(get_copy = "pub")]
    optimal_cost: f64,
    /// Every strategy whose average cost equals `optimal_cost`
    #[getset(get = "pub")]
    optimal_strategies: Vec<Strategy>,
    /// (strategy, efficiency score), best first; strategies without a path are left out
    #[getset(get = "pub")]
    efficiency_ranking: Vec<(Strategy, f64)>,
}

impl StrategySummary {

    pub fn from_analysis(analysis: &PairwiseAnalysis) -> Self {
        let by_strategy: Vec<StrategyStats> = analysis
            .strategies()
            .iter()
            .map(|&strategy| StrategyStats::collect(strategy, analysis))
            .collect();

        let succeeded = || by_strategy.iter().filter(|stats| stats.success_count > 0);
        let optimal_cost = succeeded().map(|stats| stats.avg_cost).fold(f64::INFINITY, f64::min);
        let optimal_strategies = succeeded()
            .filter(|stats| stats.avg_cost == optimal_cost)
            .map(|stats| stats.strategy)
            .collect();

        let mut efficiency_ranking: Vec<(Strategy, f64)> = by_strategy
            .iter()
            .filter_map(|stats| Some((stats.strategy, stats.efficiency_score()?)))
            .collect();
        efficiency_ranking.sort_by(|a, b| a.1.total_cmp(&b.1));

        Self { by_strategy, optimal_cost, optimal_strategies, efficiency_ranking }
    }

    pub fn stats(&self, strategy: Strategy) -> Option<&StrategyStats> {
        self.by_strategy.iter().find(|stats| stats.strategy == strategy)
    }
}
