mod a_star;
mod breadth_first;
mod depth_first;
mod frontier;
mod greedy;
mod heuristics;
mod iterative_deepening;
mod node;
mod outcome;
mod problem;
mod strategy;
mod uniform_cost;

#[cfg(test)]
pub(crate) mod test_grids;

use log::debug;

pub use a_star::a_star;
pub use breadth_first::breadth_first;
pub use depth_first::depth_first;
pub use greedy::greedy;
pub use heuristics::Heuristic;
pub use iterative_deepening::{iterative_deepening, MAX_DEPTH};
pub use outcome::SearchOutcome;
pub use problem::{
    Action, DeliveryProblem, DeliveryState, InformedProblem, SearchProblem, Successor, MOVES,
};
pub use strategy::{Strategy, DEFAULT_STRATEGIES};
pub use uniform_cost::uniform_cost;

use crate::geometry::Position;
use crate::grid::Grid;


/// Run `strategy` on `problem`
/// Every run owns its own tree, frontier and explored set, so runs over a shared
/// problem or grid can happen in parallel
pub fn search<P: InformedProblem>(problem: &P, strategy: Strategy) -> SearchOutcome {
    let outcome = match strategy {
        Strategy::BreadthFirst => breadth_first(problem),
        Strategy::DepthFirst => depth_first(problem, None),
        Strategy::IterativeDeepening => iterative_deepening(problem),
        Strategy::UniformCost => uniform_cost(problem),
        Strategy::Greedy(heuristic) => greedy(problem, heuristic),
        Strategy::AStar(heuristic) => a_star(problem, heuristic),
    };
    debug!(
        "{strategy}: found={} cost={} expanded={}",
        outcome.is_found(),
        outcome.cost(),
        outcome.nodes_expanded()
    );
    outcome
}

/// Path query from `store` to `customer` over `grid`
pub fn find_path(grid: &Grid, store: Position, customer: Position, strategy: Strategy) -> SearchOutcome {
    search(&DeliveryProblem::new(grid, store, customer), strategy)
}
