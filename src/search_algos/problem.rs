use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::Heuristic;
use crate::errors::SearchError;
use crate::geometry::Position;
use crate::grid::Grid;


/// Move labels produced by a search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Tunnel,
}

/// Directional moves in generation order, with their (dx, dy)
/// Depth-first tie-breaking depends on this order
pub const MOVES: [(Action, i32, i32); 4] = [
    (Action::Up, 0, -1),
    (Action::Down, 0, 1),
    (Action::Left, -1, 0),
    (Action::Right, 1, 0),
];

impl Action {

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Tunnel => "tunnel",
        }
    }

    /// Grid offset of a directional move, None for a tunnel
    pub fn delta(&self) -> Option<(i32, i32)> {
        MOVES
            .iter()
            .find(|(action, _, _)| action == self)
            .map(|&(_, dx, dy)| (dx, dy))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Action::Up),
            "down" => Ok(Action::Down),
            "left" => Ok(Action::Left),
            "right" => Ok(Action::Right),
            "tunnel" => Ok(Action::Tunnel),
            other => Err(SearchError::UnknownAction(other.to_string())),
        }
    }
}


/// One outgoing transition of a state
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<S> {
    pub state: S,
    pub action: Action,
    pub step_cost: u32,
}


/// Contract between the search engine and a concrete problem
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Transitions out of `state`, in a fixed order
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State>>;

    /// Replay `actions` from the start state
    /// Returns f64::INFINITY if any step is not allowed
    fn cost_of_actions(&self, actions: &[Action]) -> f64;
}

/// Search problem that can estimate the remaining cost of a state
pub trait InformedProblem: SearchProblem {
    fn estimate(&self, state: &Self::State, heuristic: Heuristic) -> f64;
}


/// Truck position on the way to one customer
/// Equality and hashing ignore `cost_so_far`: two paths reaching the same
/// position are the same state for the explored set
#[derive(Clone, Copy, Debug)]
pub struct DeliveryState {
    pub current: Position,
    pub target: Position,
    pub cost_so_far: u64,
}

impl DeliveryState {

    pub fn new(current: Position, target: Position, cost_so_far: u64) -> Self {
        Self { current, target, cost_so_far }
    }

    pub fn is_goal(&self) -> bool {
        self.current == self.target
    }
}

impl PartialEq for DeliveryState {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.target == other.target
    }
}
impl Eq for DeliveryState {}

impl Hash for DeliveryState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.current.hash(state);
        self.target.hash(state);
    }
}


/// Delivery from one store to one customer over a grid
#[derive(Clone, Copy, Debug)]
pub struct DeliveryProblem<'g> {
    grid: &'g Grid,
    start: Position,
    goal: Position,
}

impl<'g> DeliveryProblem<'g> {

    pub fn new(grid: &'g Grid, start: Position, goal: Position) -> Self {
        Self { grid, start, goal }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Cost of moving from `from` in direction (dx, dy)
    /// None when the move leaves the grid, the segment is blocked or has no traffic data
    fn step(&self, from: Position, dx: i32, dy: i32) -> Option<(Position, u32)> {
        let to = from.offset(dx, dy);
        if !self.grid.in_bounds(&to) {
            return None;
        }
        match self.grid.traffic_level(from, to) {
            Some(0) | None => None,
            Some(level) => Some((to, level)),
        }
    }

    /// Replay textual action labels, unknown labels cost f64::INFINITY
    pub fn cost_of_labels<S: AsRef<str>>(&self, labels: &[S]) -> f64 {
        let actions: Result<Vec<Action>, _> = labels.iter().map(|label| label.as_ref().parse()).collect();
        match actions {
            Ok(actions) => self.cost_of_actions(&actions),
            Err(_) => f64::INFINITY,
        }
    }
}

impl SearchProblem for DeliveryProblem<'_> {
    type State = DeliveryState;

    fn start_state(&self) -> DeliveryState {
        DeliveryState::new(self.start, self.goal, 0)
    }

    fn is_goal(&self, state: &DeliveryState) -> bool {
        state.current == self.goal
    }

    fn successors(&self, state: &DeliveryState) -> Vec<Successor<DeliveryState>> {
        let mut successors = Vec::with_capacity(5);

        for (action, dx, dy) in MOVES {
            if let Some((next, level)) = self.step(state.current, dx, dy) {
                successors.push(Successor {
                    state: DeliveryState::new(next, self.goal, state.cost_so_far + u64::from(level)),
                    action,
                    step_cost: level,
                });
            }
        }

        // tunnel goes last
        if let Some(exit) = self.grid.tunnel_exit(state.current) {
            let distance = state.current.manhattan_distance(&exit);
            successors.push(Successor {
                state: DeliveryState::new(exit, self.goal, state.cost_so_far + u64::from(distance)),
                action: Action::Tunnel,
                step_cost: distance,
            });
        }

        successors
    }

    fn cost_of_actions(&self, actions: &[Action]) -> f64 {
        let mut current = self.start;
        let mut total: u64 = 0;

        for action in actions {
            let (next, cost) = match action.delta() {
                Some((dx, dy)) => {
                    let next = current.offset(dx, dy);
                    match self.grid.traffic_level(current, next) {
                        Some(0) | None => return f64::INFINITY,
                        Some(level) => (next, level),
                    }
                }
                None => match self.grid.tunnel_exit(current) {
                    Some(exit) => (exit, current.manhattan_distance(&exit)),
                    None => return f64::INFINITY,
                },
            };
            total += u64::from(cost);
            current = next;
        }

        total as f64
    }
}

impl InformedProblem for DeliveryProblem<'_> {
    fn estimate(&self, state: &DeliveryState, heuristic: Heuristic) -> f64 {
        heuristic.estimate(&state.current, &self.goal)
    }
}
