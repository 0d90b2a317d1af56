//! Flat base grid for the ocean surface.
//!
//! The grid is built once and handed to the rendering layer, which keeps it
//! as the undisplaced reference for [`WaveField::apply_to_grid`].
//!
//! [`WaveField::apply_to_grid`]: super::WaveField::apply_to_grid

/// Base vertex positions (y = 0) and triangle indices.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl SurfaceGrid {
    /// Square grid of side `size` centred on the origin, with `subdivisions`
    /// cells per side.
    pub fn flat(size: f32, subdivisions: u32) -> Self {
        let subdivisions = subdivisions.max(1);
        let verts_per_side = subdivisions + 1;
        let step = size / subdivisions as f32;
        let half = size * 0.5;

        let mut data = Self {
            positions: Vec::with_capacity(verts_per_side as usize * verts_per_side as usize),
            indices: Vec::with_capacity(subdivisions as usize * subdivisions as usize * 6),
        };

        for row in 0..verts_per_side {
            for col in 0..verts_per_side {
                let x = -half + col as f32 * step;
                let z = -half + row as f32 * step;
                data.positions.push([x, 0.0, z]);
            }
        }

        // Two triangles per cell
        for row in 0..subdivisions {
            for col in 0..subdivisions {
                let tl = row * verts_per_side + col;
                let tr = tl + 1;
                let bl = tl + verts_per_side;
                let br = bl + 1;

                data.indices.extend_from_slice(&[tl, bl, tr]);
                data.indices.extend_from_slice(&[tr, bl, br]);
            }
        }

        data
    }

    /// Unshare vertices so every triangle owns its three corners (faceted look).
    pub fn flat_shaded(&self) -> Self {
        let positions: Vec<[f32; 3]> = self
            .indices
            .iter()
            .map(|&i| self.positions[i as usize])
            .collect();
        let indices = (0..positions.len() as u32).collect();
        Self { positions, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_grid_counts_and_extent() {
        let grid = SurfaceGrid::flat(100.0, 4);
        assert_eq!(grid.vertex_count(), 25);
        assert_eq!(grid.indices.len(), 4 * 4 * 6);
        assert_eq!(grid.positions[0], [-50.0, 0.0, -50.0]);
        assert_eq!(grid.positions[24], [50.0, 0.0, 50.0]);
        assert!(grid.positions.iter().all(|p| p[1] == 0.0));
    }

    #[test]
    fn test_flat_shaded_unshares_vertices() {
        let grid = SurfaceGrid::flat(10.0, 2);
        let faceted = grid.flat_shaded();
        assert_eq!(faceted.vertex_count(), grid.indices.len());
        assert_eq!(faceted.indices, (0..faceted.vertex_count() as u32).collect::<Vec<_>>());
        assert_eq!(faceted.positions[0], grid.positions[grid.indices[0] as usize]);
    }

    #[test]
    fn test_zero_subdivisions_is_one_cell() {
        let grid = SurfaceGrid::flat(1.0, 0);
        assert_eq!(grid.vertex_count(), 4);
        assert_eq!(grid.indices.len(), 6);
    }
}
