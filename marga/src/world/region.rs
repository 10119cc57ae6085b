//! Box-shaped regions and the region collection.

use log::debug;
use parking_lot::RwLock;

use crate::core::{Aabb, Vec3};

use super::{Region, RegionService};

/// Static axis-aligned region.
#[derive(Clone, Debug)]
pub struct BoxRegion {
    bounds: Aabb,
}

impl BoxRegion {
    pub fn new(bounds: Aabb) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }
}

impl Region for BoxRegion {
    fn contains(&self, position: Vec3) -> bool {
        self.bounds.contains(position)
    }

    fn center(&self) -> Vec3 {
        self.bounds.center()
    }
}

/// Axis-aligned region whose box can move, e.g. a lift or a ferry deck.
///
/// Geometry sits behind a lock so it can be moved from the simulation thread
/// while searches hold a shared reference. Callers must not move it while a
/// search that depends on it is running if they need reproducible results.
#[derive(Debug)]
pub struct DynamicBoxRegion {
    bounds: RwLock<Aabb>,
}

impl DynamicBoxRegion {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds: RwLock::new(bounds),
        }
    }

    /// Current bounds.
    pub fn bounds(&self) -> Aabb {
        *self.bounds.read()
    }

    /// Shift the region by `offset`.
    pub fn translate(&self, offset: Vec3) {
        let mut bounds = self.bounds.write();
        *bounds = bounds.translated(offset);
    }

    /// Replace the region geometry.
    pub fn set_bounds(&self, bounds: Aabb) {
        *self.bounds.write() = bounds;
    }
}

impl Region for DynamicBoxRegion {
    fn contains(&self, position: Vec3) -> bool {
        self.bounds.read().contains(position)
    }

    fn center(&self) -> Vec3 {
        self.bounds.read().center()
    }

    fn is_dynamic(&self) -> bool {
        true
    }
}

/// Ordered region collection with an undirected adjacency relation.
///
/// Region indices are insertion order. Point lookup returns the lowest index
/// that contains the point, so overlapping regions resolve deterministically.
#[derive(Default)]
pub struct RegionMap {
    regions: Vec<Box<dyn Region>>,
    adjacency: Vec<Vec<usize>>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region and return its index.
    pub fn add(&mut self, region: impl Region + 'static) -> usize {
        self.regions.push(Box::new(region));
        self.adjacency.push(Vec::new());
        self.regions.len() - 1
    }

    /// Builder-style [`RegionMap::add`].
    pub fn with_region(mut self, region: impl Region + 'static) -> Self {
        self.add(region);
        self
    }

    /// Mark two regions as adjacent (both directions).
    ///
    /// Unknown indices and self-links are ignored.
    pub fn connect(&mut self, a: usize, b: usize) {
        if a == b || a >= self.regions.len() || b >= self.regions.len() {
            debug!("[RegionMap] ignoring link {} <-> {}", a, b);
            return;
        }
        if !self.adjacency[a].contains(&b) {
            self.adjacency[a].push(b);
        }
        if !self.adjacency[b].contains(&a) {
            self.adjacency[b].push(a);
        }
    }

    /// Builder-style [`RegionMap::connect`].
    pub fn with_link(mut self, a: usize, b: usize) -> Self {
        self.connect(a, b);
        self
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl RegionService for RegionMap {
    fn region_count(&self) -> usize {
        self.regions.len()
    }

    fn region(&self, index: usize) -> Option<&dyn Region> {
        self.regions.get(index).map(|r| r.as_ref())
    }

    fn region_of(&self, position: Vec3) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(position))
    }

    fn neighbours(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}
