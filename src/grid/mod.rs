use getset::CopyGetters;
use serde::Serialize;

use crate::collections::FxHashMap;
use crate::geometry::{Edge, Position};


/// Traffic level of a grid segment
/// 0 blocks the segment, anything above is the cost of crossing it
pub type TrafficLevel = u32;


/// City grid: stores, customers, per-segment traffic and tunnel pairs
/// Built once by a loader, then only read while searching
#[derive(Clone, Debug, Default)]
pub struct Grid {
    width: i32,
    height: i32,
    stores: Vec<Position>,
    customers: Vec<Position>,
    traffic: FxHashMap<Edge, TrafficLevel>,
    tunnels: FxHashMap<Position, Position>, // entrance -> exit, inserted both ways
}

impl Grid {

    /// Create an empty `width` x `height` grid
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn stores(&self) -> &[Position] {
        &self.stores
    }

    pub fn customers(&self) -> &[Position] {
        &self.customers
    }

    pub fn add_store(&mut self, pos: Position) {
        self.stores.push(pos);
    }

    pub fn add_customer(&mut self, pos: Position) {
        self.customers.push(pos);
    }

    /// Set the traffic level of the segment between two adjacent positions
    pub fn set_traffic(&mut self, a: Position, b: Position, level: TrafficLevel) {
        debug_assert!(a.is_adjacent(&b), "{a} and {b} are not adjacent");
        debug_assert!(self.in_bounds(&a) && self.in_bounds(&b), "segment {a}-{b} out of bounds");
        self.traffic.insert(Edge::new(a, b), level);
    }

    /// Traffic level of a segment, None if no level was ever set
    /// None is not the same as blocked - callers decide what missing data means
    pub fn traffic_level(&self, a: Position, b: Position) -> Option<TrafficLevel> {
        self.traffic.get(&Edge::new(a, b)).copied()
    }

    /// Blocked means an explicit level of 0
    pub fn is_blocked(&self, a: Position, b: Position) -> bool {
        self.traffic_level(a, b) == Some(0)
    }

    /// Link two positions with a tunnel, usable in both directions
    pub fn add_tunnel(&mut self, a: Position, b: Position) {
        debug_assert!(
            !self.tunnels.contains_key(&a) && !self.tunnels.contains_key(&b),
            "a position can only be part of one tunnel"
        );
        self.tunnels.insert(a, b);
        self.tunnels.insert(b, a);
    }

    pub fn tunnel_exit(&self, pos: Position) -> Option<Position> {
        self.tunnels.get(&pos).copied()
    }

    /// Number of segments with a traffic level set
    pub fn traffic_segment_count(&self) -> usize {
        self.traffic.len()
    }

    /// Number of blocked segments
    pub fn obstacle_count(&self) -> usize {
        self.traffic.values().filter(|&&level| level == 0).count()
    }

    /// Number of tunnel pairs
    pub fn tunnel_count(&self) -> usize {
        self.tunnels.len() / 2
    }

    pub fn summary(&self) -> GridSummary {
        GridSummary {
            width: self.width,
            height: self.height,
            store_count: self.stores.len(),
            customer_count: self.customers.len(),
            traffic_segments: self.traffic_segment_count(),
            obstacles: self.obstacle_count(),
            tunnels: self.tunnel_count(),
        }
    }
}


/// Size and contents of a grid, reported alongside analysis results
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters, Serialize)]
#[getset(get_copy = "pub")]
pub struct GridSummary {
    width: i32,
    height: i32,
    store_count: usize,
    customer_count: usize,
    traffic_segments: usize,
    obstacles: usize,
    tunnels: usize,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_is_undirected() {
        let mut grid = Grid::new(3, 3);
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        grid.set_traffic(a, b, 3);

        assert_eq!(grid.traffic_level(a, b), Some(3));
        assert_eq!(grid.traffic_level(b, a), Some(3));
        assert!(!grid.is_blocked(b, a));
    }

    #[test]
    fn test_undefined_is_not_blocked() {
        let mut grid = Grid::new(3, 3);
        let a = Position::new(1, 1);
        let b = Position::new(1, 2);
        assert_eq!(grid.traffic_level(a, b), None);
        assert!(!grid.is_blocked(a, b));

        grid.set_traffic(a, b, 0);
        assert_eq!(grid.traffic_level(a, b), Some(0));
        assert!(grid.is_blocked(a, b));
    }

    #[test]
    fn test_tunnels_are_bidirectional() {
        let mut grid = Grid::new(5, 5);
        let a = Position::new(0, 0);
        let b = Position::new(4, 3);
        grid.add_tunnel(a, b);

        assert_eq!(grid.tunnel_exit(a), Some(b));
        assert_eq!(grid.tunnel_exit(b), Some(a));
        assert_eq!(grid.tunnel_exit(Position::new(2, 2)), None);
        assert_eq!(grid.tunnel_count(), 1);
    }

    #[test]
    fn test_summary() {
        let mut grid = Grid::new(4, 2);
        grid.add_store(Position::new(0, 0));
        grid.add_customer(Position::new(3, 1));
        grid.add_customer(Position::new(2, 0));
        grid.set_traffic(Position::new(0, 0), Position::new(1, 0), 2);
        grid.set_traffic(Position::new(1, 0), Position::new(1, 1), 0);
        grid.add_tunnel(Position::new(0, 1), Position::new(3, 0));

        let summary = grid.summary();
        assert_eq!(summary.width(), 4);
        assert_eq!(summary.height(), 2);
        assert_eq!(summary.store_count(), 1);
        assert_eq!(summary.customer_count(), 2);
        assert_eq!(summary.traffic_segments(), 2);
        assert_eq!(summary.obstacles(), 1);
        assert_eq!(summary.tunnels(), 1);
        assert!(grid.in_bounds(&Position::new(3, 1)));
        assert!(!grid.in_bounds(&Position::new(4, 1)));
        assert!(!grid.in_bounds(&Position::new(0, -1)));
    }
}
