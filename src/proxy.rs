/*

    Visual proxy for a bounding cylinder: a triangle mesh of the
    cylinder surface plus a wireframe style, placed by translation
    only. The proxy is a disposable snapshot; it does not follow
    later updates of the descriptor it was built from.

    @date: 30 Nov, 2025
    @author: Bartu

*/

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cylinder::CylinderBounding;
use crate::prelude::*;

/// Angular resolution of the proxy silhouette. Visual fidelity knob,
/// not a correctness parameter; anything >= 16 reads as a cylinder.
pub const RADIAL_SEGMENTS: usize = 128;

/// Accent red, to stand apart from whatever the cylinder encloses.
pub const ACCENT_COLOR: Vector3 = Vector3::new(1.0, 0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeStyle {
    pub color: Vector3,
    pub wireframe: bool,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            color: ACCENT_COLOR,
            wireframe: true,
        }
    }
}

/// Renderable stand-in for a `CylinderBounding` snapshot. Geometry is
/// centered at the local origin; `position` carries the parent-space
/// translation, and no rotation is ever applied since the descriptor's
/// direction is always the upright axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyMesh {
    pub positions: Vec<Vector3>,
    pub indices: Vec<[usize; 3]>,
    pub style: WireframeStyle,
    pub position: Vector3,
}

impl ProxyMesh {

    /// Build the proxy from a descriptor snapshot. Deterministic:
    /// equal descriptors give identical proxies.
    pub fn new_from(bounding: &CylinderBounding) -> Self {
        let (positions, indices) = cylinder_geometry(bounding.radius, bounding.height, RADIAL_SEGMENTS);
        debug!(
            "Built proxy mesh with {} vertices / {} triangles at {:?}",
            positions.len(),
            indices.len(),
            bounding.position
        );

        Self {
            positions,
            indices,
            style: WireframeStyle::default(),
            position: bounding.position,
        }
    }

    /// Write the proxy as a Wavefront OBJ so the overlay can be opened
    /// in any mesh viewer. The translation is baked into the vertices
    /// since OBJ carries no transform of its own.
    pub fn save_obj(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "o bounding_cylinder")?;
        for p in &self.positions {
            let world = *p + self.position;
            writeln!(out, "v {} {} {}", world.x, world.y, world.z)?;
        }
        for [a, b, c] in &self.indices {
            // OBJ indices are 1-based
            writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
        }
        out.flush()?;

        info!("Saved proxy mesh to {:?}", path);
        Ok(())
    }
}

/// Upright cylinder surface centered at the origin: two vertex rings
/// for the side, a center vertex per cap. Matches the usual
/// CylinderGeometry(top_r = bottom_r = radius, height, segments) layout.
fn cylinder_geometry(radius: Float, height: Float, segments: usize) -> (Vec<Vector3>, Vec<[usize; 3]>) {
    debug_assert!(segments >= 3);

    let half_h = height / 2.0;
    let mut positions = Vec::with_capacity(2 * segments + 2);

    // Ring vertices: top ring first, then bottom ring.
    for ring_y in [half_h, -half_h] {
        for i in 0..segments {
            let theta = (i as Float) / (segments as Float) * 2.0 * std::f64::consts::PI;
            positions.push(Vector3::new(radius * theta.cos(), ring_y, radius * theta.sin()));
        }
    }
    let top_center = positions.len();
    positions.push(Vector3::new(0.0, half_h, 0.0));
    let bottom_center = positions.len();
    positions.push(Vector3::new(0.0, -half_h, 0.0));

    let mut indices = Vec::with_capacity(4 * segments);
    for i in 0..segments {
        let next = (i + 1) % segments;
        let (top_i, top_next) = (i, next);
        let (bot_i, bot_next) = (segments + i, segments + next);

        // Side quad split into two triangles
        indices.push([top_i, bot_i, bot_next]);
        indices.push([top_i, bot_next, top_next]);

        // Cap fans
        indices.push([top_center, top_next, top_i]);
        indices.push([bottom_center, bot_i, bot_next]);
    }

    (positions, indices)
}
