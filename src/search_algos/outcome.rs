use std::fmt;

use getset::{CopyGetters, Getters};
use serde::Serialize;

use super::Action;
use super::frontier::SearchStats;


/// Result of one search run
///
/// A run that exhausts its frontier is a normal outcome: `actions` is `None`
/// and `cost` is infinite, `nodes_expanded` still reports the work done.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Serialize)]
pub struct SearchOutcome {
    #[getset(get = "pub")]
    actions: Option<Vec<Action>>,
    #[getset(get_copy = "pub")]
    cost: f64,
    #[getset(get_copy = "pub")]
    nodes_expanded: usize,
    /// Most nodes held at once in the frontier and explored set during the run
    /// This is a node count, not a size in bytes
    #[getset(get_copy = "pub")]
    peak_memory: usize,
}

impl SearchOutcome {

    pub(crate) fn found(actions: Vec<Action>, cost: u64, stats: SearchStats) -> Self {
        Self {
            actions: Some(actions),
            cost: cost as f64,
            nodes_expanded: stats.nodes_expanded,
            peak_memory: stats.peak_memory,
        }
    }

    pub(crate) fn no_path(stats: SearchStats) -> Self {
        Self {
            actions: None,
            cost: f64::INFINITY,
            nodes_expanded: stats.nodes_expanded,
            peak_memory: stats.peak_memory,
        }
    }

    /// Empty plan for a start state that already satisfies the goal test
    pub(crate) fn already_at_goal() -> Self {
        Self::found(Vec::new(), 0, SearchStats::default())
    }

    /// Same result with the counters replaced, used to report totals across iterations
    pub(crate) fn with_stats(self, stats: SearchStats) -> Self {
        Self {
            nodes_expanded: stats.nodes_expanded,
            peak_memory: stats.peak_memory,
            ..self
        }
    }

    pub fn is_found(&self) -> bool {
        self.actions.is_some()
    }

    /// Number of actions, 0 when no path was found
    pub fn path_length(&self) -> usize {
        self.actions.as_ref().map_or(0, Vec::len)
    }

    /// Comma separated action labels, or `NO_PATH`
    pub fn plan_string(&self) -> String {
        match &self.actions {
            Some(actions) => actions
                .iter()
                .map(Action::as_str)
                .collect::<Vec<_>>()
                .join(","),
            None => "NO_PATH".to_string(),
        }
    }
}

/// `plan;cost;nodes_expanded`, e.g. `right,down;2;5` or `NO_PATH;inf;17`
impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.plan_string(), self.cost, self.nodes_expanded)
    }
}
