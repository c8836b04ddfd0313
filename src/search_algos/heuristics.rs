use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;
use crate::geometry::Position;


/// Estimates of the remaining cost from a position to the goal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Zero,
    Diagonal, // Chebyshev distance
    DoubleManhattan, // overestimates on purpose
}

impl Heuristic {

    pub const ALL: [Heuristic; 5] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Zero,
        Heuristic::Diagonal,
        Heuristic::DoubleManhattan,
    ];

    pub fn estimate(self, from: &Position, goal: &Position) -> f64 {
        match self {
            Heuristic::Manhattan => from.manhattan_distance(goal) as f64,
            Heuristic::Euclidean => from.euclidean_distance(goal),
            Heuristic::Zero => 0.0,
            Heuristic::Diagonal => from.chebyshev_distance(goal) as f64,
            Heuristic::DoubleManhattan => 2.0 * from.manhattan_distance(goal) as f64,
        }
    }

    /// Heuristics under which A* results are treated as cost-optimal
    pub fn is_admissible(self) -> bool {
        matches!(self, Heuristic::Manhattan | Heuristic::Zero | Heuristic::Diagonal)
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Zero => "zero",
            Heuristic::Diagonal => "diagonal",
            Heuristic::DoubleManhattan => "double_manhattan",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|heuristic| heuristic.name() == s)
            .ok_or_else(|| SearchError::UnknownHeuristic(s.to_string()))
    }
}
