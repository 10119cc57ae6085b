//! Hierarchical router.
//!
//! Decides between single-region and cross-region planning and delivers the
//! outcome through a one-shot callback:
//!
//! ```text
//!   route(start, finish, profile, on_ready)
//!        │ validate profile + settings ──► Err(Config)   (no callback)
//!        │ resolve start region ─────────► Ok(false)     (callback: StartOutsideRegions)
//!        ▼
//!   ┌──────────────┐  same region   ┌──────────────────────────────┐
//!   │ resolve goal │ ─────────────► │ search: distance ≤ epsilon   │
//!   │    region    │                └──────────────────────────────┘
//!   └──────┬───────┘  different     ┌──────────────────────────────┐
//!          └──────────────────────► │ Dijkstra next hop, search:   │
//!                                   │ region_of(state) == hop      │
//!                                   └──────────────────────────────┘
//! ```

use crossbeam_channel::{Receiver, bounded};
use log::{debug, trace};
use std::thread;
use std::time::Duration;

use crate::config::{Dispatch, MovementProperties, PlannerSettings, RoutingMode};
use crate::core::PathNode;
use crate::error::Result;
use crate::planner::{LocalPlanner, PathFailure, PathResult};
use crate::world::World;

use super::graph::RegionGraph;

/// Planning service bound to one world.
///
/// Cheap to clone; every clone shares the world services.
#[derive(Clone, Debug)]
pub struct Router {
    world: World,
    settings: PlannerSettings,
}

impl Router {
    pub fn new(world: World, settings: PlannerSettings) -> Self {
        Self { world, settings }
    }

    /// Create with default settings
    pub fn with_defaults(world: World) -> Self {
        Self::new(world, PlannerSettings::default())
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Plan on the calling thread and return the result.
    ///
    /// Fails only on an invalid profile or settings; every planning outcome,
    /// including "no path", is a [`PathResult`].
    pub fn plan(
        &self,
        start: &PathNode,
        finish: &PathNode,
        profile: &MovementProperties,
    ) -> Result<PathResult> {
        self.validate(profile)?;
        Ok(match self.world.resolve_region(start) {
            Some(start_region) => self.plan_from(start, start_region, finish, profile),
            None => {
                debug!("[Router] start is outside every region");
                PathResult::failed(PathFailure::StartOutsideRegions, 0, 0)
            }
        })
    }

    /// Plan a route and hand the result to `on_ready`.
    ///
    /// Returns `Ok(false)` when the start lies in no region; the callback
    /// still fires once, synchronously, with
    /// [`PathFailure::StartOutsideRegions`]. Otherwise returns `Ok(true)` and
    /// the callback fires exactly once, on the worker thread or before this
    /// call returns depending on [`Dispatch`]. Configuration errors are
    /// returned without invoking the callback.
    pub fn route<F>(
        &self,
        start: PathNode,
        finish: PathNode,
        profile: &MovementProperties,
        on_ready: F,
    ) -> Result<bool>
    where
        F: FnOnce(PathResult) + Send + 'static,
    {
        self.validate(profile)?;

        let Some(start_region) = self.world.resolve_region(&start) else {
            debug!("[Router] rejected: start is outside every region");
            on_ready(PathResult::failed(PathFailure::StartOutsideRegions, 0, 0));
            return Ok(false);
        };

        match self.settings.dispatch {
            Dispatch::Inline => {
                on_ready(self.plan_from(&start, start_region, &finish, profile));
            }
            Dispatch::Worker => {
                let router = self.clone();
                let profile = profile.clone();
                thread::Builder::new()
                    .name("marga-route".into())
                    .spawn(move || {
                        let result = router.plan_from(&start, start_region, &finish, &profile);
                        on_ready(result);
                    })?;
            }
        }
        Ok(true)
    }

    /// [`Router::route`] delivering into a [`RouteTicket`].
    pub fn route_channel(
        &self,
        start: PathNode,
        finish: PathNode,
        profile: &MovementProperties,
    ) -> Result<RouteTicket> {
        let (tx, rx) = bounded(1);
        let accepted = self.route(start, finish, profile, move |result| {
            // The ticket may have been dropped; nobody is waiting then
            let _ = tx.send(result);
        })?;
        Ok(RouteTicket { rx, accepted })
    }

    fn validate(&self, profile: &MovementProperties) -> Result<()> {
        profile.validate()?;
        self.settings.validate()?;
        Ok(())
    }

    fn plan_from(
        &self,
        start: &PathNode,
        start_region: usize,
        finish: &PathNode,
        profile: &MovementProperties,
    ) -> PathResult {
        let Some(finish_region) = self.world.resolve_region(finish) else {
            debug!("[Router] goal is outside every region");
            return PathResult::failed(PathFailure::GoalOutsideRegions, 0, 0);
        };

        let mut start = start.clone();
        start.region = Some(start_region);

        if start_region == finish_region {
            trace!("[Router] same region {}, local search", start_region);
            return self.local_leg(&start, finish, profile, self.settings.max_expansions);
        }

        match self.settings.routing {
            RoutingMode::NextHop => {
                match RegionGraph::new(self.world.regions.as_ref())
                    .next_hop(start_region, finish_region)
                {
                    Some(hop) => {
                        trace!(
                            "[Router] region {} -> {}, heading for hop {}",
                            start_region, finish_region, hop
                        );
                        self.region_leg(&start, hop, profile, self.settings.max_expansions)
                    }
                    None => {
                        debug!(
                            "[Router] FAILED: region {} unreachable from {}",
                            finish_region, start_region
                        );
                        PathResult::failed(PathFailure::RegionUnreachable, 0, 0)
                    }
                }
            }
            RoutingMode::Complete => {
                self.complete_route(start, start_region, finish, finish_region, profile)
            }
        }
    }

    /// Search until within `epsilon` of `finish`.
    fn local_leg(
        &self,
        start: &PathNode,
        finish: &PathNode,
        profile: &MovementProperties,
        budget: usize,
    ) -> PathResult {
        let epsilon = profile.epsilon;
        LocalPlanner::new(&self.world, &self.settings).search_with_budget(
            start,
            finish,
            profile,
            move |cur, goal| cur.distance(goal) <= epsilon,
            budget,
        )
    }

    /// Search toward the center of `hop` until a state lies in `hop`.
    fn region_leg(
        &self,
        start: &PathNode,
        hop: usize,
        profile: &MovementProperties,
        budget: usize,
    ) -> PathResult {
        let regions = self.world.regions.as_ref();
        let Some(region) = regions.region(hop) else {
            return PathResult::failed(PathFailure::RegionUnreachable, 0, 0);
        };
        let target = PathNode::at(region.center());
        LocalPlanner::new(&self.world, &self.settings).search_with_budget(
            start,
            &target,
            profile,
            |cur, _| regions.region_of(cur.position) == Some(hop),
            budget,
        )
    }

    /// Chain region legs until the goal region, then finish with a local leg.
    ///
    /// All legs share the expansion budget. Waypoints are concatenated with
    /// each leg's first state dropped, as it repeats the previous leg's last.
    fn complete_route(
        &self,
        start: PathNode,
        start_region: usize,
        finish: &PathNode,
        finish_region: usize,
        profile: &MovementProperties,
    ) -> PathResult {
        let graph = RegionGraph::new(self.world.regions.as_ref());
        let mut budget = self.settings.max_expansions;
        let mut waypoints: Vec<PathNode> = Vec::new();
        let mut expanded = 0;
        let mut generated = 0;
        let mut current = start;
        let mut region = start_region;

        // Each leg moves one region closer, so the region count bounds the legs
        for _ in 0..=self.world.regions.region_count() {
            let (leg, reached) = if region == finish_region {
                (self.local_leg(&current, finish, profile, budget), None)
            } else {
                let Some(hop) = graph.next_hop(region, finish_region) else {
                    debug!(
                        "[Router] FAILED: region {} unreachable from {}",
                        finish_region, region
                    );
                    return PathResult::failed(PathFailure::RegionUnreachable, expanded, generated);
                };
                trace!("[Router] leg {} -> hop {}", region, hop);
                (self.region_leg(&current, hop, profile, budget), Some(hop))
            };

            expanded += leg.nodes_expanded;
            generated += leg.nodes_generated;
            if !leg.success {
                let reason = leg.failure_reason.unwrap_or(PathFailure::NoPath);
                return PathResult::failed(reason, expanded, generated);
            }
            budget = budget.saturating_sub(leg.nodes_expanded);

            let skip = usize::from(!waypoints.is_empty());
            if let Some(last) = leg.waypoints.last() {
                current = last.clone();
                current.parent = None;
            }
            waypoints.extend(leg.waypoints.into_iter().skip(skip));

            match reached {
                Some(hop) => {
                    region = hop;
                    current.region = Some(hop);
                }
                None => return PathResult::found(waypoints, expanded, generated),
            }
        }

        debug!("[Router] FAILED: route did not converge on region {}", finish_region);
        PathResult::failed(PathFailure::RegionUnreachable, expanded, generated)
    }
}

/// Receiving end of a [`Router::route_channel`] request.
#[derive(Debug)]
pub struct RouteTicket {
    rx: Receiver<PathResult>,
    accepted: bool,
}

impl RouteTicket {
    /// Whether the router accepted the request.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Block until the result arrives.
    ///
    /// `None` only if the planning worker died without publishing.
    pub fn wait(self) -> Option<PathResult> {
        self.rx.recv().ok()
    }

    /// Block for at most `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<PathResult> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Take the result if it is already there.
    pub fn try_take(&self) -> Option<PathResult> {
        self.rx.try_recv().ok()
    }
}
