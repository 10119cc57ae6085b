//! Best-first search over kinematic states.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashSet};

use crate::config::{MovementProperties, PlannerSettings};
use crate::core::{GridKey, NodeId, PathNode};
use crate::world::World;

use super::heuristic::estimate;
use super::oracle::{FeasibilityOracle, Resolution};
use super::successors::SuccessorGenerator;
use super::types::{FrontierEntry, PathFailure, PathResult};

/// Arena holding every state created by one search.
struct SearchTree {
    nodes: Vec<PathNode>,
}

impl SearchTree {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, node: PathNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn get(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.0]
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Predecessor chain from the root to `id`.
    fn path_to(&self, id: NodeId) -> Vec<PathNode> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            path.push(node.clone());
            current = node.parent;
        }
        path.reverse();
        path
    }
}

/// Local planner
///
/// The goal test is supplied per call, so the same search drives both
/// point-proximity and region-membership planning.
pub struct LocalPlanner<'a> {
    world: &'a World,
    settings: &'a PlannerSettings,
}

impl<'a> LocalPlanner<'a> {
    pub fn new(world: &'a World, settings: &'a PlannerSettings) -> Self {
        Self { world, settings }
    }

    /// Search from `start` until `is_goal(state, target)` holds.
    ///
    /// `target` steers the heuristic. Uses the configured expansion budget.
    pub fn search<G>(
        &self,
        start: &PathNode,
        target: &PathNode,
        profile: &MovementProperties,
        is_goal: G,
    ) -> PathResult
    where
        G: Fn(&PathNode, &PathNode) -> bool,
    {
        self.search_with_budget(start, target, profile, is_goal, self.settings.max_expansions)
    }

    /// [`LocalPlanner::search`] with an explicit expansion budget.
    pub fn search_with_budget<G>(
        &self,
        start: &PathNode,
        target: &PathNode,
        profile: &MovementProperties,
        is_goal: G,
        max_expansions: usize,
    ) -> PathResult
    where
        G: Fn(&PathNode, &PathNode) -> bool,
    {
        let s = start.position;
        let t = target.position;
        trace!(
            "[Search] start=({:.2},{:.2},{:.2}) target=({:.2},{:.2},{:.2})",
            s.x, s.y, s.z, t.x, t.y, t.z
        );

        if is_goal(start, target) {
            trace!("[Search] start already satisfies the goal");
            return PathResult::already_there();
        }

        let oracle = FeasibilityOracle::new(self.world, self.settings);
        let mut root = start.clone();
        root.parent = None;
        match oracle.try_resolve(&root) {
            Resolution::Feasible { region } => root.region = Some(region),
            Resolution::Infeasible(rejection) => {
                debug!("[Search] FAILED: start infeasible ({:?})", rejection);
                return PathResult::failed(PathFailure::StartInfeasible(rejection), 0, 0);
            }
        }

        let generator = SuccessorGenerator::new(oracle);
        let key = |node: &PathNode| -> GridKey {
            node.to_grid_key(profile.delta_dist, profile.delta_time)
        };
        let priority = |node: &PathNode| -> f32 {
            // g is the elapsed time of the state
            node.time_moment + estimate(node, target, profile, self.settings.heuristic)
        };

        let mut tree = SearchTree::new();
        let mut open_set = BinaryHeap::new();
        let mut closed_set: HashSet<GridKey> = HashSet::new();
        let mut seq: u64 = 0;

        closed_set.insert(key(&root));
        let h_start = estimate(&root, target, profile, self.settings.heuristic);
        let root_id = tree.push(root);
        open_set.push(FrontierEntry {
            id: root_id,
            f_cost: h_start,
            seq,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            if is_goal(tree.get(current.id), target) {
                let path = tree.path_to(current.id);
                trace!(
                    "[Search] SUCCESS: {} states, nodes_expanded={}, nodes_generated={}",
                    path.len(),
                    nodes_expanded,
                    tree.len()
                );
                return PathResult::found(path, nodes_expanded, tree.len());
            }

            nodes_expanded += 1;
            if nodes_expanded > max_expansions {
                debug!(
                    "[Search] FAILED: MaxExpansionsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(
                    PathFailure::MaxExpansionsExceeded,
                    nodes_expanded,
                    tree.len(),
                );
            }

            let children = generator.expand(tree.get(current.id), current.id, profile);
            for child in children {
                if !closed_set.insert(key(&child)) {
                    continue;
                }
                let f_cost = priority(&child);
                seq += 1;
                let id = tree.push(child);
                open_set.push(FrontierEntry { id, f_cost, seq });
            }
        }

        debug!(
            "[Search] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded, tree.len())
    }
}
