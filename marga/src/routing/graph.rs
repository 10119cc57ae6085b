//! Shortest paths over the region-adjacency graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::world::RegionService;

/// Node in the Dijkstra search.
#[derive(Clone, Copy, Debug)]
struct RegionEntry {
    region: usize,
    cost: f32,
}

impl PartialEq for RegionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RegionEntry {}

impl Ord for RegionEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap, lower index first on ties
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.region.cmp(&self.region))
    }
}

impl PartialOrd for RegionEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Region-level router.
///
/// Edges come from [`RegionService::neighbours`]; an edge costs the distance
/// between the two region centers, read at query time so moved dynamic
/// regions are priced where they are now.
pub struct RegionGraph<'a> {
    regions: &'a dyn RegionService,
}

impl<'a> RegionGraph<'a> {
    pub fn new(regions: &'a dyn RegionService) -> Self {
        Self { regions }
    }

    fn edge_cost(&self, a: usize, b: usize) -> Option<f32> {
        let ca = self.regions.region(a)?.center();
        let cb = self.regions.region(b)?.center();
        Some(ca.distance(&cb))
    }

    /// Cheapest region sequence from `from` to `to`, both included.
    ///
    /// Returns `None` if either index is invalid or `to` cannot be reached.
    pub fn shortest_route(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let count = self.regions.region_count();
        if from >= count || to >= count {
            return None;
        }

        let mut dist = vec![f32::INFINITY; count];
        let mut prev: Vec<Option<usize>> = vec![None; count];
        let mut heap = BinaryHeap::new();

        dist[from] = 0.0;
        heap.push(RegionEntry {
            region: from,
            cost: 0.0,
        });

        while let Some(RegionEntry { region, cost }) = heap.pop() {
            if region == to {
                break;
            }
            if cost > dist[region] {
                continue;
            }
            for &next in self.regions.neighbours(region) {
                if next >= count {
                    continue;
                }
                let Some(edge) = self.edge_cost(region, next) else {
                    continue;
                };
                let candidate = cost + edge;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    prev[next] = Some(region);
                    heap.push(RegionEntry {
                        region: next,
                        cost: candidate,
                    });
                }
            }
        }

        if !dist[to].is_finite() {
            return None;
        }

        let mut route = vec![to];
        let mut current = to;
        while let Some(p) = prev[current] {
            route.push(p);
            current = p;
        }
        route.reverse();
        Some(route)
    }

    /// First region to enter on the way from `from` to `to`.
    ///
    /// Equals `to` when the regions are adjacent or identical.
    pub fn next_hop(&self, from: usize, to: usize) -> Option<usize> {
        let route = self.shortest_route(from, to)?;
        route.get(1).or(route.first()).copied()
    }
}
