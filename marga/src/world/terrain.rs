//! Terrain height providers.

use crate::error::WorldError;

use super::TerrainSampler;

/// Infinite plane at a fixed height.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatTerrain {
    pub height: f32,
}

impl FlatTerrain {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl TerrainSampler for FlatTerrain {
    fn sample_height(&self, _x: f32, _z: f32) -> Result<f32, WorldError> {
        Ok(self.height)
    }
}

/// Regular height grid over the X/Z plane.
///
/// Cell `(i, j)` covers `[origin_x + i·res, origin_x + (i+1)·res)` by
/// `[origin_z + j·res, origin_z + (j+1)·res)`. Sampling returns the height of
/// the containing cell; positions off the grid are an error.
#[derive(Clone, Debug)]
pub struct HeightGrid {
    origin_x: f32,
    origin_z: f32,
    resolution: f32,
    width: usize,
    depth: usize,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Create a grid filled with `height`.
    pub fn filled(
        origin_x: f32,
        origin_z: f32,
        resolution: f32,
        width: usize,
        depth: usize,
        height: f32,
    ) -> Self {
        Self {
            origin_x,
            origin_z,
            resolution,
            width,
            depth,
            heights: vec![height; width * depth],
        }
    }

    /// Set the height of one cell. Out-of-range cells are ignored.
    pub fn set(&mut self, i: usize, j: usize, height: f32) {
        if i < self.width && j < self.depth {
            self.heights[j * self.width + i] = height;
        }
    }

    /// Set every cell whose center lies in the X/Z rectangle.
    pub fn fill_rect(&mut self, min_x: f32, min_z: f32, max_x: f32, max_z: f32, height: f32) {
        for j in 0..self.depth {
            for i in 0..self.width {
                let cx = self.origin_x + (i as f32 + 0.5) * self.resolution;
                let cz = self.origin_z + (j as f32 + 0.5) * self.resolution;
                if cx >= min_x && cx <= max_x && cz >= min_z && cz <= max_z {
                    self.heights[j * self.width + i] = height;
                }
            }
        }
    }

    fn cell(&self, x: f32, z: f32) -> Option<(usize, usize)> {
        let fx = ((x - self.origin_x) / self.resolution).floor();
        let fz = ((z - self.origin_z) / self.resolution).floor();
        if !fx.is_finite() || !fz.is_finite() || fx < 0.0 || fz < 0.0 {
            return None;
        }
        let (i, j) = (fx as usize, fz as usize);
        (i < self.width && j < self.depth).then_some((i, j))
    }
}

impl TerrainSampler for HeightGrid {
    fn sample_height(&self, x: f32, z: f32) -> Result<f32, WorldError> {
        self.cell(x, z)
            .map(|(i, j)| self.heights[j * self.width + i])
            .ok_or(WorldError::OutOfBounds { x, z })
    }
}
