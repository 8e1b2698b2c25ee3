/*

    Bounding cylinder of a mesh group.

    The cylinder is always upright: direction is the Y axis and is
    never derived from the data. Radius uses the larger of the two
    horizontal spans, so an asymmetric XZ footprint is fully enclosed
    at the cost of looseness on the narrower axis. This is a
    conservative approximation, not a minimal bounding cylinder.

    @date: 30 Nov, 2025
    @author: Bartu

*/

use thiserror::Error;

use crate::extents::Extents;
use crate::group::GroupNode;
use crate::prelude::*;

/// Fixed cylinder axis. Orientation is never recomputed from geometry.
pub const UP_AXIS: Vector3 = Vector3::new(0.0, 1.0, 0.0);

#[derive(Debug, Error, PartialEq)]
pub enum BoundingError {
    #[error("group contains no renderable leaf with geometry")]
    EmptyGroup,
}

/// Caller-owned bounding descriptor. It holds no reference back to the
/// source group: after the group's geometry or position changes, the
/// descriptor is stale until `update` is called on it, and any proxy
/// mesh built earlier stays stale until rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderBounding {
    /// Local-space centroid of the combined extents.
    pub center: Vector3,
    /// Half of the larger of the X and Z spans.
    pub radius: Float,
    /// The Y span.
    pub height: Float,
    /// Always `UP_AXIS`.
    pub direction: Vector3,
    /// Parent-space placement: group.position + center. Ancestor
    /// rotations/scales are not accounted for.
    pub position: Vector3,
}

impl CylinderBounding {

    /// Compute a fresh descriptor for `group`.
    ///
    /// Fails with `EmptyGroup` when no leaf carries geometry; the
    /// extents stay unset in that case and no arithmetic runs on them,
    /// so a descriptor with NaN fields can never escape.
    pub fn derive(group: &GroupNode) -> Result<Self, BoundingError> {
        let extents = Extents::of_group(group);
        if extents.is_unset() {
            return Err(BoundingError::EmptyGroup);
        }

        let center = extents.center();
        let height = extents.y.size();
        let radius = extents.x.size().max(extents.z.size()) / 2.0;

        debug!("Derived bounding cylinder: center {:?}, radius {}, height {}", center, radius, height);

        Ok(Self {
            center,
            radius,
            height,
            direction: UP_AXIS,
            position: group.position + center,
        })
    }

    /// Refresh `center`, `height` and `position` in place from the
    /// group's current state.
    ///
    /// WARNING: `radius` and `direction` are intentionally NOT
    /// recomputed. The intended use case is a model whose horizontal
    /// footprint is fixed after load, so update only tracks vertical
    /// and positional drift and is cheaper than a full re-derive.
    /// Callers whose footprint actually changes must call `derive`
    /// again instead.
    pub fn update(&mut self, group: &GroupNode) -> Result<(), BoundingError> {
        let extents = Extents::of_group(group);
        if extents.is_unset() {
            return Err(BoundingError::EmptyGroup);
        }

        self.center = extents.center();
        self.height = extents.y.size();
        self.position = group.position + self.center;
        Ok(())
    }
}
