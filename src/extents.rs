/*

    Combined axis-aligned extents of a whole group: every renderable
    leaf's bounding box folded together with component-wise min/max.

    The fold step is a pure function (extents, box) -> extents rather
    than a traversal callback mutating captured min/max variables, so
    it can be tested in isolation and the result is independent of
    traversal order.

    @date: 29 Nov, 2025
    @author: Bartu

*/

use crate::bbox::{BBox, BBoxable};
use crate::group::GroupNode;
use crate::interval::Interval;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Extents {

    /// All three axes at the EMPTY sentinel, i.e. no leaf folded in yet.
    pub const UNSET: Self = Self {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// True until the first leaf box has been folded in. Downstream
    /// derivation must reject unset extents instead of letting the
    /// infinities turn into NaN.
    pub fn is_unset(&self) -> bool {
        !(self.x.validate() && self.y.validate() && self.z.validate())
    }

    /// Pure fold step: smallest extents covering both operands.
    /// Commutative and associative, UNSET is the identity.
    pub fn fold(self, bbox: &BBox) -> Self {
        Self {
            x: self.x.union(&bbox.xint()),
            y: self.y.union(&bbox.yint()),
            z: self.z.union(&bbox.zint()),
        }
    }

    /// Walk every descendant leaf of `group` and fold the boxes of the
    /// renderable ones. Leaves without geometry are skipped.
    pub fn of_group(group: &GroupNode) -> Self {
        group
            .leaves()
            .filter_map(|leaf| {
                let bbox = leaf.bounding_box();
                if bbox.is_none() {
                    debug!("Skipping leaf {} with no geometry", leaf._id);
                }
                bbox
            })
            .fold(Extents::UNSET, |acc, bbox| acc.fold(bbox))
    }

    pub fn center(&self) -> Vector3 {
        Vector3::new(self.x.center(), self.y.center(), self.z.center())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{GroupNode, MeshLeaf};
    use rstest::rstest;

    fn leaf_from_box(id: usize, min: [Float; 3], max: [Float; 3]) -> MeshLeaf {
        // Two corner vertices are enough to pin the AABB.
        let verts = vec![
            Vector3::new(min[0], min[1], min[2]),
            Vector3::new(max[0], max[1], max[2]),
        ];
        MeshLeaf::new_from(id, verts)
    }

    #[test]
    fn unset_until_first_fold() {
        let e = Extents::UNSET;
        assert!(e.is_unset());

        let bbox = BBox::new_from_verts(&[Vector3::ZERO]).unwrap();
        assert!(!e.fold(&bbox).is_unset());
    }

    #[test]
    fn two_leaf_extents_match_reference_case() {
        let mut group = GroupNode::default();
        group.push_leaf(leaf_from_box(1, [-2.0, 0.0, -1.0], [2.0, 1.0, 1.0]));
        group.push_leaf(leaf_from_box(2, [-1.0, -1.0, -1.0], [1.0, 3.0, 1.0]));

        let e = Extents::of_group(&group);
        assert_eq!(e.x, Interval::new(-2.0, 2.0));
        assert_eq!(e.y, Interval::new(-1.0, 3.0));
        assert_eq!(e.z, Interval::new(-1.0, 1.0));
        assert_eq!(e.center(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[rstest]
    #[case(&[0, 1, 2])]
    #[case(&[0, 2, 1])]
    #[case(&[1, 0, 2])]
    #[case(&[1, 2, 0])]
    #[case(&[2, 0, 1])]
    #[case(&[2, 1, 0])]
    fn fold_is_order_independent(#[case] order: &[usize]) {
        let boxes = [
            ([-2.0, 0.0, -1.0], [2.0, 1.0, 1.0]),
            ([-1.0, -1.0, -1.0], [1.0, 3.0, 1.0]),
            ([0.5, -0.5, -3.0], [0.6, 0.5, 4.0]),
        ];

        let mut group = GroupNode::default();
        for (id, &i) in order.iter().enumerate() {
            group.push_leaf(leaf_from_box(id, boxes[i].0, boxes[i].1));
        }

        let e = Extents::of_group(&group);
        assert_eq!(e.x, Interval::new(-2.0, 2.0));
        assert_eq!(e.y, Interval::new(-1.0, 3.0));
        assert_eq!(e.z, Interval::new(-3.0, 4.0));
    }

    #[test]
    fn nested_groups_contribute_to_extents() {
        let mut inner = GroupNode::default();
        inner.push_leaf(leaf_from_box(2, [5.0, 5.0, 5.0], [6.0, 6.0, 6.0]));

        let mut root = GroupNode::default();
        root.push_leaf(leaf_from_box(1, [-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]));
        root.push_group(inner);

        let e = Extents::of_group(&root);
        assert_eq!(e.x, Interval::new(-1.0, 6.0));
        assert_eq!(e.y, Interval::new(-1.0, 6.0));
        assert_eq!(e.z, Interval::new(-1.0, 6.0));
    }

    #[test]
    fn geometry_less_leaves_are_skipped_not_folded() {
        let mut group = GroupNode::default();
        group.push_leaf(MeshLeaf::new_from(1, vec![]));
        group.push_leaf(leaf_from_box(2, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]));

        let e = Extents::of_group(&group);
        assert_eq!(e.x, Interval::new(0.0, 1.0));
    }

    #[test]
    fn group_of_only_empty_leaves_stays_unset() {
        let mut group = GroupNode::default();
        group.push_leaf(MeshLeaf::new_from(1, vec![]));

        assert!(Extents::of_group(&group).is_unset());
    }
}
