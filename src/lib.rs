//! Route search over weighted grids with tunnels, and greedy store-to-customer
//! assignment built on top of the search results.

pub mod collections;
pub mod delivery;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod search_algos;

pub use delivery::{
    Assignment, AssignmentPlan, CostSource, DeliveryPlan, DeliveryPlanner, PairMetrics,
    PairwiseAnalysis, PlannerConfig, StrategyStats, StrategySummary,
};
pub use errors::SearchError;
pub use geometry::{Edge, Position};
pub use grid::Grid;
pub use search_algos::{
    find_path, search, Action, DeliveryProblem, Heuristic, SearchOutcome, SearchProblem, Strategy,
};
