use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Heuristic;
use crate::errors::SearchError;


/// Search strategies understood by the engine
///
/// Short codes: `BF`, `DF`, `ID`, `UC`, `GR1`, `GR2`, `AS1`, `AS2`.
/// The greedy and A* suffix picks the heuristic: 1 is Manhattan, 2 is diagonal.
/// Other heuristics are written `GR[euclidean]`, `AS[double_manhattan]` and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    UniformCost,
    Greedy(Heuristic),
    AStar(Heuristic),
}

/// Strategies run by the delivery planner unless configured otherwise
pub const DEFAULT_STRATEGIES: [Strategy; 8] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::IterativeDeepening,
    Strategy::UniformCost,
    Strategy::Greedy(Heuristic::Manhattan),
    Strategy::Greedy(Heuristic::Diagonal),
    Strategy::AStar(Heuristic::Manhattan),
    Strategy::AStar(Heuristic::Diagonal),
];

impl Strategy {

    /// Human readable name
    pub fn description(&self) -> String {
        match self {
            Strategy::BreadthFirst => "Breadth-First Search".to_string(),
            Strategy::DepthFirst => "Depth-First Search".to_string(),
            Strategy::IterativeDeepening => "Iterative Deepening".to_string(),
            Strategy::UniformCost => "Uniform Cost Search".to_string(),
            Strategy::Greedy(h) => format!("Greedy Search ({h})"),
            Strategy::AStar(h) => format!("A* Search ({h})"),
        }
    }

    pub fn heuristic(&self) -> Option<Heuristic> {
        match self {
            Strategy::Greedy(h) | Strategy::AStar(h) => Some(*h),
            _ => None,
        }
    }

    /// True for strategies that always return a cheapest path when one exists
    pub fn is_cost_optimal(&self) -> bool {
        match self {
            Strategy::UniformCost => true,
            Strategy::AStar(h) => h.is_admissible(),
            _ => false,
        }
    }
}

fn heuristic_suffix(heuristic: Heuristic) -> Option<char> {
    match heuristic {
        Heuristic::Manhattan => Some('1'),
        Heuristic::Diagonal => Some('2'),
        _ => None,
    }
}

fn parse_heuristic_suffix(code: &str, suffix: &str) -> Result<Heuristic, SearchError> {
    match suffix {
        "" | "1" => Ok(Heuristic::Manhattan),
        "2" => Ok(Heuristic::Diagonal),
        _ => suffix
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| SearchError::UnknownStrategy(code.to_string()))?
            .parse()
            .map_err(|_| SearchError::UnknownStrategy(code.to_string())),
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "BF" => Ok(Strategy::BreadthFirst),
            "DF" => Ok(Strategy::DepthFirst),
            "ID" => Ok(Strategy::IterativeDeepening),
            "UC" => Ok(Strategy::UniformCost),
            _ => {
                if let Some(suffix) = code.strip_prefix("GR") {
                    parse_heuristic_suffix(code, suffix).map(Strategy::Greedy)
                } else if let Some(suffix) = code.strip_prefix("AS") {
                    parse_heuristic_suffix(code, suffix).map(Strategy::AStar)
                } else {
                    Err(SearchError::UnknownStrategy(code.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, heuristic) = match self {
            Strategy::BreadthFirst => return f.write_str("BF"),
            Strategy::DepthFirst => return f.write_str("DF"),
            Strategy::IterativeDeepening => return f.write_str("ID"),
            Strategy::UniformCost => return f.write_str("UC"),
            Strategy::Greedy(h) => ("GR", *h),
            Strategy::AStar(h) => ("AS", *h),
        };
        match heuristic_suffix(heuristic) {
            Some(suffix) => write!(f, "{prefix}{suffix}"),
            None => write!(f, "{prefix}[{heuristic}]"),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = SearchError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codes() {
        let codes: Vec<String> = DEFAULT_STRATEGIES.iter().map(|s| s.to_string()).collect();
        assert_eq!(codes, vec!["BF", "DF", "ID", "UC", "GR1", "GR2", "AS1", "AS2"]);
        for strategy in DEFAULT_STRATEGIES {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_suffix_defaults_to_manhattan() {
        assert_eq!("GR".parse::<Strategy>(), Ok(Strategy::Greedy(Heuristic::Manhattan)));
        assert_eq!("AS".parse::<Strategy>(), Ok(Strategy::AStar(Heuristic::Manhattan)));
    }

    #[test]
    fn test_named_heuristics() {
        let strategy = Strategy::AStar(Heuristic::DoubleManhattan);
        assert_eq!(strategy.to_string(), "AS[double_manhattan]");
        assert_eq!("AS[double_manhattan]".parse::<Strategy>(), Ok(strategy));
        assert_eq!("GR[zero]".parse::<Strategy>(), Ok(Strategy::Greedy(Heuristic::Zero)));
    }

    #[test]
    fn test_unknown_codes_fail() {
        for code in ["XX", "bf", "AS3", "GR[octile]", "AS[manhattan", ""] {
            assert_eq!(
                code.parse::<Strategy>(),
                Err(SearchError::UnknownStrategy(code.to_string())),
                "{code} should be rejected"
            );
        }
    }

    #[test]
    fn test_cost_optimal() {
        assert!(Strategy::UniformCost.is_cost_optimal());
        assert!(Strategy::AStar(Heuristic::Diagonal).is_cost_optimal());
        assert!(!Strategy::AStar(Heuristic::DoubleManhattan).is_cost_optimal());
        assert!(!Strategy::BreadthFirst.is_cost_optimal());
        assert_eq!(Strategy::Greedy(Heuristic::Zero).heuristic(), Some(Heuristic::Zero));
        assert_eq!(Strategy::DepthFirst.heuristic(), None);
    }
}
