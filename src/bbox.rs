/*

    Axis Aligned Bounding Box of a single renderable leaf.

    @author: bartu
    @date: 9 Nov, 2025
*/


use crate::prelude::*;

use crate::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub xmin: Float,
    pub xmax: Float,
    pub ymin: Float,
    pub ymax: Float,
    pub zmin: Float,
    pub zmax: Float,

    pub width: Float,
    pub height: Float,
    pub depth: Float,
}

impl BBox {
    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {

        assert!(xint.validate() && yint.validate() && zint.validate(), "Invalid interval, found max < min");
        Self {
            xmin: xint.min,
            xmax: xint.max,
            ymin: yint.min,
            ymax: yint.max,
            zmin: zint.min,
            zmax: zint.max,
            width: xint.max - xint.min,
            height: yint.max - yint.min,
            depth: zint.max - zint.min,
        }
    }

    /// Box of a non-empty vertex set. Returns None when the iterator
    /// yields nothing, so leaves without geometry never produce a box.
    pub fn new_from_verts<'a>(verts: impl IntoIterator<Item = &'a Vector3>) -> Option<Self> {
        let (mut xint, mut yint, mut zint) = (Interval::EMPTY, Interval::EMPTY, Interval::EMPTY);
        let mut seen_any = false;
        for v in verts {
            xint.expand(v.x);
            yint.expand(v.y);
            zint.expand(v.z);
            seen_any = true;
        }

        if seen_any {
            Some(BBox::new_from(&xint, &yint, &zint))
        } else {
            None
        }
    }

    pub fn xint(&self) -> Interval {
        Interval::new(self.xmin, self.xmax)
    }

    pub fn yint(&self) -> Interval {
        Interval::new(self.ymin, self.ymax)
    }

    pub fn zint(&self) -> Interval {
        Interval::new(self.zmin, self.zmax)
    }
}

/// Seam between the scene graph and the extent aggregation: anything that
/// can report a local-space bounding box (or decline, for geometry-less
/// nodes) can be folded into combined extents.
pub trait BBoxable {
    fn bounding_box(&self) -> Option<&BBox>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_from_verts_covers_all_points() {
        let verts = vec![
            Vector3::new(-1.0, 0.0, 2.0),
            Vector3::new(3.0, -2.0, 0.5),
            Vector3::new(0.0, 1.0, -1.0),
        ];
        let bbox = BBox::new_from_verts(&verts).unwrap();
        assert_eq!(bbox.xmin, -1.0);
        assert_eq!(bbox.xmax, 3.0);
        assert_eq!(bbox.ymin, -2.0);
        assert_eq!(bbox.ymax, 1.0);
        assert_eq!(bbox.zmin, -1.0);
        assert_eq!(bbox.zmax, 2.0);
        assert_eq!(bbox.width, 4.0);
        assert_eq!(bbox.height, 3.0);
        assert_eq!(bbox.depth, 3.0);
    }

    #[test]
    fn box_from_no_verts_is_none() {
        let verts: Vec<Vector3> = vec![];
        assert!(BBox::new_from_verts(&verts).is_none());
    }

    #[test]
    fn single_vertex_gives_degenerate_but_valid_box() {
        let verts = vec![Vector3::new(1.0, 2.0, 3.0)];
        let bbox = BBox::new_from_verts(&verts).unwrap();
        assert_eq!(bbox.width, 0.0);
        assert_eq!(bbox.height, 0.0);
        assert_eq!(bbox.depth, 0.0);
        assert_eq!(bbox.xmin, bbox.xmax);
    }
}
