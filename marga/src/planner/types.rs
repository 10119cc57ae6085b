//! Search and result types.

use std::cmp::Ordering;

use crate::core::{NodeId, PathNode};

/// A frontier entry in the best-first search
#[derive(Clone, Copy, Debug)]
pub(super) struct FrontierEntry {
    pub id: NodeId,
    pub f_cost: f32, // g_cost + heuristic
    pub seq: u64,    // insertion order, breaks ties
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior, earlier insertion wins ties
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Why a state was judged infeasible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Not inside any region
    OutsideRegions,
    /// Below the walkable surface
    BelowSurface,
    /// Too high above the walkable surface
    AboveSurface,
    /// Collision sphere hit an obstacle
    Obstructed,
    /// Terrain or obstacle service failed for this position
    ServiceUnavailable,
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start position is not inside any region
    StartOutsideRegions,
    /// Goal position is not inside any region
    GoalOutsideRegions,
    /// Start state failed the feasibility check
    StartInfeasible(Rejection),
    /// No chain of adjacent regions leads to the goal region
    RegionUnreachable,
    /// Frontier exhausted before a goal state was found
    NoPath,
    /// Expansion budget used up
    MaxExpansionsExceeded,
}

/// Result of a search or route request
#[derive(Clone, Debug)]
pub struct PathResult {
    /// States from start to the goal state (empty if no path, or if the start
    /// already satisfied the goal)
    pub waypoints: Vec<PathNode>,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Number of nodes stored in the search tree
    pub nodes_generated: usize,
    /// Whether the goal condition was met
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub fn failed(reason: PathFailure, nodes_expanded: usize, nodes_generated: usize) -> Self {
        Self {
            waypoints: Vec::new(),
            nodes_expanded,
            nodes_generated,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Successful result for a start that already satisfies the goal
    pub fn already_there() -> Self {
        Self::found(Vec::new(), 0, 0)
    }

    pub(crate) fn found(
        waypoints: Vec<PathNode>,
        nodes_expanded: usize,
        nodes_generated: usize,
    ) -> Self {
        Self {
            waypoints,
            nodes_expanded,
            nodes_generated,
            success: true,
            failure_reason: None,
        }
    }

    /// Number of states in the path
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Last state of the path
    pub fn final_node(&self) -> Option<&PathNode> {
        self.waypoints.last()
    }

    /// Travelled distance along the path (meters)
    pub fn length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }

    /// Time from the first to the last state (seconds)
    pub fn duration(&self) -> f32 {
        match (self.waypoints.first(), self.waypoints.last()) {
            (Some(first), Some(last)) => last.time_moment - first.time_moment,
            _ => 0.0,
        }
    }

    /// The waypoints on success, `None` otherwise
    pub fn into_path(self) -> Option<Vec<PathNode>> {
        self.success.then_some(self.waypoints)
    }
}
