//! Ocean vertex buffers owned by the driver, not by the simulation.

use bevy::prelude::*;
use sim::water::SurfaceGrid;
use sim::IslandScene;

#[derive(Resource, Debug, Clone)]
pub struct OceanSurface {
    /// Undisplaced, faceted grid
    pub base: Vec<[f32; 3]>,
    pub displaced: Vec<[f32; 3]>,
}

impl OceanSurface {
    pub fn new(size: f32, subdivisions: u32) -> Self {
        let grid = SurfaceGrid::flat(size, subdivisions).flat_shaded();
        debug!("Ocean surface has {} vertices", grid.vertex_count());
        Self {
            displaced: grid.positions.clone(),
            base: grid.positions,
        }
    }

    /// Displaced height of the first vertex, handy for progress logs.
    pub fn sample_height(&self) -> Option<f32> {
        self.displaced.first().map(|p| p[1])
    }
}

pub fn displace_ocean_surface(scene: Res<IslandScene>, mut surface: ResMut<OceanSurface>) {
    if !scene.toggles.ocean {
        return;
    }

    let OceanSurface { base, displaced } = &mut *surface;
    scene
        .field()
        .apply_to_grid(base, displaced, scene.ocean_time());
}
