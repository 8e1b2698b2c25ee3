/*

    Declare the hierarchical scene graph the bounding logic walks:
    groups carry a local translation and children, leaves carry
    vertex geometry. Only leaves with at least one vertex count as
    renderable; empty leaves and pure grouping nodes are traversed
    but contribute nothing to the extents.

    @date: 29 Nov, 2025
    @author: Bartu

*/

use std::sync::OnceLock;

use crate::bbox::{BBox, BBoxable};
use crate::prelude::*;


// =======================================================================================================
// MeshLeaf (impl BBoxable)
// =======================================================================================================

/// A renderable leaf: raw vertex positions in the group's local space.
/// The bounding box is computed lazily on first request and cached;
/// recomputation is idempotent so the cache needs no invalidation
/// discipline beyond rebuilding the leaf.
#[derive(Debug, Default)]
pub struct MeshLeaf {
    pub _id: usize,
    pub vertices: Vec<Vector3>,

    bbox: OnceLock<Option<BBox>>,
}

impl MeshLeaf {
    pub fn new_from(_id: usize, vertices: Vec<Vector3>) -> Self {
        Self {
            _id,
            vertices,
            bbox: OnceLock::new(),
        }
    }

    /// Renderable-leaf predicate: a leaf without geometry is traversed
    /// but never folded into the extents.
    pub fn has_geometry(&self) -> bool {
        !self.vertices.is_empty()
    }
}

impl BBoxable for MeshLeaf {
    fn bounding_box(&self) -> Option<&BBox> {
        self.bbox
            .get_or_init(|| BBox::new_from_verts(&self.vertices))
            .as_ref()
    }
}

impl Clone for MeshLeaf {
    fn clone(&self) -> Self {
        // Cache starts cold on the clone; it's cheap to refill.
        Self::new_from(self._id, self.vertices.clone())
    }
}


// =======================================================================================================
// Scene graph nodes
// =======================================================================================================

#[derive(Debug, Clone)]
pub enum SceneNode {
    Group(GroupNode),
    Leaf(MeshLeaf),
}

/// A grouping node with its own local translation. Mirrors the usual
/// scene-graph contract: `position` is the group's translation in its
/// parent space, not a full world transform.
#[derive(Debug, Clone, Default)]
pub struct GroupNode {
    pub position: Vector3,
    pub children: Vec<SceneNode>,
}

impl GroupNode {
    pub fn new_at(position: Vector3) -> Self {
        Self {
            position,
            children: Vec::new(),
        }
    }

    pub fn push_leaf(&mut self, leaf: MeshLeaf) {
        self.children.push(SceneNode::Leaf(leaf));
    }

    pub fn push_group(&mut self, group: GroupNode) {
        self.children.push(SceneNode::Group(group));
    }

    /// Iterate every descendant leaf, any depth. Order is an
    /// implementation detail; callers fold with commutative ops.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: self.children.iter().collect(),
        }
    }

    pub fn count_leaves(&self) -> usize {
        self.leaves().count()
    }
}

/// Depth-first iterator over the leaves of a group.
pub struct Leaves<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a MeshLeaf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                SceneNode::Leaf(leaf) => return Some(leaf),
                SceneNode::Group(group) => {
                    self.stack.extend(group.children.iter());
                }
            }
        }
        None
    }
}
