use alloc::boxed::Box;
use core::{array, mem};

use arrayvec::ArrayVec;
use glam::DVec3;
use log::{debug, error, trace};
use slab::Slab;

use crate::{Aabb, Element, OctreeError, MAX_ELEMENTS_PER_NODE};

/// Offset direction of each child's center from its parent's center
///
/// Matches the index computed by [`OctreeNode::best_fit_child`].
const CHILD_OFFSETS: [DVec3; 8] = [
    DVec3::new(-1.0, 1.0, -1.0),
    DVec3::new(1.0, 1.0, -1.0),
    DVec3::new(-1.0, 1.0, 1.0),
    DVec3::new(1.0, 1.0, 1.0),
    DVec3::new(-1.0, -1.0, -1.0),
    DVec3::new(1.0, -1.0, -1.0),
    DVec3::new(-1.0, -1.0, 1.0),
    DVec3::new(1.0, -1.0, 1.0),
];

/// A cubic region of an octree, holding elements directly or through 8 children
#[derive(Debug)]
pub struct OctreeNode {
    center: DVec3,
    side_length: f64,
    /// Shared by every node in a tree
    min_size: f64,
    bounds: Aabb,
    child_bounds: [Aabb; 8],
    /// Length of the element list rooted at `first_element`
    elements: usize,
    first_element: Option<usize>,
    children: Option<Box<[OctreeNode; 8]>>,
}

impl OctreeNode {
    pub(crate) fn new(side_length: f64, min_size: f64, center: DVec3) -> Self {
        Self::with_bounds(
            center,
            Aabb::from_center_size(center, side_length),
            side_length,
            min_size,
        )
    }

    /// Construct a node covering exactly `bounds`, split into octants at `center`
    pub(crate) fn with_bounds(
        center: DVec3,
        bounds: Aabb,
        side_length: f64,
        min_size: f64,
    ) -> Self {
        Self {
            center,
            side_length,
            min_size,
            bounds,
            child_bounds: octants(&bounds, center),
            elements: 0,
            first_element: None,
            children: None,
        }
    }

    /// An empty node covering octant `index` of this one
    pub(crate) fn octant(&self, index: usize) -> OctreeNode {
        let bounds = self.child_bounds[index];
        Self::with_bounds(
            bounds.center(),
            bounds,
            self.side_length / 2.0,
            self.min_size,
        )
    }

    /// Reinitialize this node's geometry
    fn set_geometry(&mut self, center: DVec3, bounds: Aabb, side_length: f64) {
        self.center = center;
        self.bounds = bounds;
        self.side_length = side_length;
        self.child_bounds = octants(&bounds, center);
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Bounds of the 8 children this node has or would have after splitting
    pub fn child_bounds(&self) -> &[Aabb; 8] {
        &self.child_bounds
    }

    /// Number of elements stored directly in this node, excluding descendants
    pub fn local_len(&self) -> usize {
        self.elements
    }

    pub fn children(&self) -> Option<&[OctreeNode; 8]> {
        self.children.as_deref()
    }

    pub(crate) fn first_element(&self) -> Option<usize> {
        self.first_element
    }

    /// Whether this node or any descendant stores an element
    pub fn has_any_elements(&self) -> bool {
        self.elements > 0
            || self
                .children
                .as_ref()
                .is_some_and(|children| children.iter().any(OctreeNode::has_any_elements))
    }

    /// Index of the child whose octant contains `position`
    ///
    /// Points on a splitting plane go to the low side on x and z, and the high side on y.
    pub fn best_fit_child(&self, position: DVec3) -> usize {
        let x = if position.x <= self.center.x { 0 } else { 1 };
        let y = if position.y >= self.center.y { 0 } else { 4 };
        let z = if position.z <= self.center.z { 0 } else { 2 };
        x + y + z
    }

    /// Store the already-allocated element `id` in this subtree
    ///
    /// Returns `false`, leaving the tree untouched, if the element's position lies outside this
    /// node.
    pub(crate) fn add<T>(&mut self, elements: &mut Slab<Element<T>>, id: usize) -> bool {
        if !self.bounds.contains(elements[id].position) {
            return false;
        }
        self.place(elements, id);
        true
    }

    fn place<T>(&mut self, elements: &mut Slab<Element<T>>, id: usize) {
        if self.children.is_none() {
            // Children would be smaller than the minimum size, so overflow is tolerated here
            if self.elements < MAX_ELEMENTS_PER_NODE || self.side_length / 2.0 < self.min_size {
                link(elements, self, id);
                return;
            }
            self.split(elements);
        }
        let index = self.best_fit_child(elements[id].position);
        let Some(children) = self.children.as_mut() else {
            unreachable!("split always produces children");
        };
        children[index].place(elements, id);
    }

    /// Create 8 children and move every local element into the one it fits best
    fn split<T>(&mut self, elements: &mut Slab<Element<T>>) {
        trace!(
            "splitting node at {} with {} elements",
            self.center,
            self.elements
        );
        let mut children: Box<[OctreeNode; 8]> = Box::new(array::from_fn(|i| self.octant(i)));

        let mut next_elt = self.first_element.take();
        self.elements = 0;
        while let Some(element) = next_elt {
            next_elt = elements[element].next.take();
            let index = self.best_fit_child(elements[element].position);
            children[index].place(elements, element);
        }
        self.children = Some(children);
    }

    /// Replace this node's children
    ///
    /// Anything other than exactly 8 nodes is rejected, leaving the node unchanged.
    pub(crate) fn set_children(
        &mut self,
        children: impl IntoIterator<Item = OctreeNode>,
    ) -> Result<(), OctreeError> {
        debug_assert!(
            self.children.is_none(),
            "replacing children would orphan their elements"
        );
        let mut collected = ArrayVec::<OctreeNode, 8>::new();
        let mut len = 0;
        for child in children {
            len += 1;
            // Extra children are only counted, for the error
            let _ = collected.try_push(child);
        }
        match collected.into_inner() {
            Ok(children) if len == 8 => {
                self.children = Some(Box::new(children));
                Ok(())
            }
            _ => {
                error!("child node array must be length 8, was length {len}");
                Err(OctreeError::ChildCount(len))
            }
        }
    }

    /// Remove the first element equal to `value` found anywhere in this subtree
    ///
    /// Returns the removed element's index. Its slab entry is left for the caller to free.
    pub(crate) fn remove<T: PartialEq>(
        &mut self,
        elements: &mut Slab<Element<T>>,
        value: &T,
    ) -> Option<usize> {
        let removed = self.unlink_value(elements, value).or_else(|| {
            self.children
                .as_mut()?
                .iter_mut()
                .find_map(|child| child.remove(elements, value))
        })?;
        self.merge_if_sparse(elements);
        Some(removed)
    }

    /// Remove an element equal to `value`, searching only where `position` would be stored
    pub(crate) fn remove_at<T: PartialEq>(
        &mut self,
        elements: &mut Slab<Element<T>>,
        value: &T,
        position: DVec3,
    ) -> Option<usize> {
        if !self.bounds.contains(position) {
            return None;
        }
        self.remove_near(elements, value, position)
    }

    fn remove_near<T: PartialEq>(
        &mut self,
        elements: &mut Slab<Element<T>>,
        value: &T,
        position: DVec3,
    ) -> Option<usize> {
        let removed = match self.unlink_value(elements, value) {
            Some(removed) => removed,
            None => {
                let index = self.best_fit_child(position);
                self.children.as_mut()?[index].remove_near(elements, value, position)?
            }
        };
        self.merge_if_sparse(elements);
        Some(removed)
    }

    /// Unlink the first local element equal to `value`
    fn unlink_value<T: PartialEq>(
        &mut self,
        elements: &mut Slab<Element<T>>,
        value: &T,
    ) -> Option<usize> {
        let mut cursor = self.first_element;
        while let Some(element) = cursor {
            if elements[element].value == *value {
                unlink(elements, self, element);
                return Some(element);
            }
            cursor = elements[element].next;
        }
        None
    }

    fn merge_if_sparse<T>(&mut self, elements: &mut Slab<Element<T>>) {
        if self.children.is_some() && self.should_merge() {
            self.merge(elements);
        }
    }

    /// Whether this node and its children together are sparse enough to become one leaf
    ///
    /// Never true when any child has children of its own.
    pub fn should_merge(&self) -> bool {
        let mut total = self.elements;
        if let Some(children) = &self.children {
            for child in children.iter() {
                if child.children.is_some() {
                    return false;
                }
                total += child.elements;
            }
        }
        total <= MAX_ELEMENTS_PER_NODE
    }

    /// Move every child's elements into this node and discard the children
    fn merge<T>(&mut self, elements: &mut Slab<Element<T>>) {
        let Some(children) = self.children.take() else {
            return;
        };
        for child in children.iter() {
            let mut next_elt = child.first_element;
            while let Some(element) = next_elt {
                next_elt = elements[element].next;
                link(elements, self, element);
            }
        }
        trace!(
            "merged children of node at {} into {} elements",
            self.center,
            self.elements
        );
    }

    /// Reduce this node to one of its octants if everything it holds lies there
    ///
    /// A childless node is resized in place; otherwise the only non-empty child takes this
    /// node's place. Nodes shorter than `2 * min_length` are left alone. Returns whether
    /// anything changed.
    pub(crate) fn shrink_if_possible<T>(
        &mut self,
        elements: &Slab<Element<T>>,
        min_length: f64,
    ) -> bool {
        if self.side_length < 2.0 * min_length {
            return false;
        }
        if self.elements == 0 && self.children.is_none() {
            return false;
        }

        // Every local element must share one octant
        let mut best_fit = None;
        let mut cursor = self.first_element;
        while let Some(element) = cursor {
            let fit = self.best_fit_child(elements[element].position);
            match best_fit {
                None => best_fit = Some(fit),
                Some(existing) if existing != fit => return false,
                Some(_) => {}
            }
            cursor = elements[element].next;
        }

        // At most one child may hold anything, and it must be in that same octant
        if let Some(children) = &self.children {
            let mut occupied = None;
            for (i, child) in children.iter().enumerate() {
                if !child.has_any_elements() {
                    continue;
                }
                if occupied.is_some() || best_fit.is_some_and(|fit| fit != i) {
                    return false;
                }
                occupied = Some(i);
            }
            best_fit = best_fit.or(occupied);
        }

        let Some(best_fit) = best_fit else {
            // Only empty children; no octant to shrink towards
            return false;
        };

        match self.children.take() {
            None => {
                let bounds = self.child_bounds[best_fit];
                let center = bounds.center();
                debug!(
                    "shrinking childless root from {} to {} around {}",
                    self.side_length,
                    self.side_length / 2.0,
                    center
                );
                self.set_geometry(center, bounds, self.side_length / 2.0);
            }
            Some(children) => {
                let children: [OctreeNode; 8] = *children;
                let Some(child) = children.into_iter().nth(best_fit) else {
                    unreachable!("octant index out of range");
                };
                debug!(
                    "promoting child {} of root at {} to root",
                    best_fit, self.center
                );
                *self = child;
            }
        }
        true
    }
}

/// Split `bounds` into the octants meeting at `center`
///
/// Faces are copied from `bounds` and `center` rather than computed, so every point `bounds`
/// contains lies inside the octant [`OctreeNode::best_fit_child`] picks for it.
fn octants(bounds: &Aabb, center: DVec3) -> [Aabb; 8] {
    CHILD_OFFSETS.map(|offset| {
        let high = offset.cmpgt(DVec3::ZERO);
        Aabb {
            min: DVec3::select(high, center, bounds.min),
            max: DVec3::select(high, bounds.max, center),
        }
    })
}

/// Add `element` to `node`
fn link<T>(elements: &mut Slab<Element<T>>, node: &mut OctreeNode, element: usize) {
    let prev = mem::replace(&mut node.first_element, Some(element));
    elements[element].next = prev;
    node.elements += 1;
}

/// Remove `element` from `node`
fn unlink<T>(elements: &mut Slab<Element<T>>, node: &mut OctreeNode, element: usize) {
    let successor = elements[element].next.take();
    let mut link = &mut node.first_element;
    loop {
        let i = link.expect("element missing from node list");
        if i == element {
            *link = successor;
            break;
        }
        link = &mut elements[i].next;
    }
    node.elements -= 1;
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;
    use crate::{
        query::{Everything, WithinDistance},
        Nearby,
    };

    fn node() -> OctreeNode {
        OctreeNode::new(16.0, 1.0, DVec3::ZERO)
    }

    fn insert(
        node: &mut OctreeNode,
        elements: &mut Slab<Element<u32>>,
        value: u32,
        position: DVec3,
    ) -> bool {
        let id = elements.insert(Element {
            value,
            position,
            next: None,
        });
        let added = node.add(elements, id);
        if !added {
            elements.remove(id);
        }
        added
    }

    fn total(node: &OctreeNode) -> usize {
        node.local_len()
            + node
                .children()
                .map_or(0, |children| children.iter().map(total).sum())
    }

    fn values(node: &OctreeNode, elements: &Slab<Element<u32>>) -> Vec<u32> {
        let mut out = Nearby::new(elements, node, Everything)
            .map(|(_, &x)| x)
            .collect::<Vec<_>>();
        out.sort_unstable();
        out
    }

    /// One point in each octant, plus an extra in octant 3
    fn spread() -> [DVec3; 9] {
        let mut out = [DVec3::splat(2.0); 9];
        out[..8].copy_from_slice(&CHILD_OFFSETS.map(|offset| offset * 4.0));
        out
    }

    #[test]
    fn child_bounds_partition_parent() {
        let n = node();
        let mut volume = 0.0;
        for (i, child) in n.child_bounds().iter().enumerate() {
            assert_eq!(child.size(), DVec3::splat(8.0));
            assert_eq!((child.center() - n.center()).abs(), DVec3::splat(4.0));
            assert_eq!(n.best_fit_child(child.center()), i);
            assert!(n.bounds().contains(child.min) && n.bounds().contains(child.max));
            volume += child.size().x * child.size().y * child.size().z;
        }
        assert_eq!(volume, 16.0 * 16.0 * 16.0);
    }

    fn assert_contained(node: &OctreeNode, elements: &Slab<Element<u32>>) {
        let mut cursor = node.first_element();
        while let Some(element) = cursor {
            let position = elements[element].position;
            assert!(
                node.bounds().contains(position),
                "{position} stored outside {}",
                node.bounds()
            );
            cursor = elements[element].next;
        }
        for child in node.children().into_iter().flatten() {
            assert_contained(child, elements);
        }
    }

    #[test]
    fn child_faces_meet_at_center() {
        let n = OctreeNode::new(0.8, 0.01, DVec3::splat(0.1));
        let bounds = n.child_bounds();
        assert_eq!(bounds[3].min.x, n.center().x);
        assert_eq!(bounds[3].min.z, n.center().z);
        assert_eq!(bounds[3].max.y, n.bounds().max.y);
        assert_eq!(bounds[4].max.x, n.center().x);
        assert_eq!(bounds[4].max.y, n.center().y);
        assert_eq!(bounds[4].min, n.bounds().min);
        assert_eq!(bounds[7].min.y, n.bounds().min.y);
        assert_eq!(bounds[7].max.y, n.center().y);
    }

    #[test]
    fn split_off_binary_grid_keeps_elements_inside() {
        let mut elements = Slab::new();
        let center = DVec3::splat(0.1);
        let mut n = OctreeNode::new(0.8, 0.01, center);
        for (i, offset) in CHILD_OFFSETS.into_iter().enumerate() {
            assert!(insert(&mut n, &mut elements, i as u32, center + offset * 0.2));
        }
        // Just past the splitting plane on every axis
        let p = DVec3::splat(f64::from_bits(0.1f64.to_bits() + 1));
        assert!(insert(&mut n, &mut elements, 8, p));
        assert!(n.children().is_some());
        assert_contained(&n, &elements);
        let found = Nearby::new(&elements, &n, WithinDistance::new(p, 0.0))
            .map(|(_, &x)| x)
            .collect::<Vec<_>>();
        assert_eq!(found, [8]);
    }

    #[test]
    fn deep_splits_off_binary_grid_keep_elements_inside() {
        let mut rng = SmallRng::seed_from_u64(17);
        let mut elements = Slab::new();
        let mut n = OctreeNode::new(0.7, 0.001, DVec3::new(0.1, -0.3, 1.7));
        let points = (0..500)
            .map(|_| {
                DVec3::new(
                    rng.gen_range(-0.24..-0.15),
                    rng.gen_range(-0.64..0.04),
                    rng.gen_range(1.69..1.71),
                )
            })
            .collect::<Vec<_>>();
        for (i, &p) in points.iter().enumerate() {
            assert!(insert(&mut n, &mut elements, i as u32, p));
        }
        assert_contained(&n, &elements);
        for (i, &p) in points.iter().enumerate() {
            assert!(Nearby::new(&elements, &n, WithinDistance::new(p, 0.0))
                .any(|(_, &x)| x == i as u32));
        }
    }

    #[test]
    fn best_fit_tie_breaks() {
        let n = node();
        assert_eq!(n.best_fit_child(DVec3::ZERO), 0);
        assert_eq!(n.best_fit_child(DVec3::new(0.0, -0.5, 0.0)), 4);
        assert_eq!(n.best_fit_child(DVec3::new(1.0, 0.0, 1.0)), 3);
        assert_eq!(n.best_fit_child(DVec3::new(0.0, 0.0, 3.0)), 2);
        assert_eq!(n.best_fit_child(DVec3::new(3.0, -3.0, 3.0)), 7);
        for _ in 0..3 {
            assert_eq!(n.best_fit_child(DVec3::new(0.0, 0.0, 0.0)), 0);
        }
    }

    #[test]
    fn rejects_outside_bounds() {
        let mut elements = Slab::new();
        let mut n = node();
        assert!(!insert(&mut n, &mut elements, 1, DVec3::new(8.5, 0.0, 0.0)));
        assert_eq!(n.local_len(), 0);
        assert!(n.first_element().is_none());
        assert!(elements.is_empty());
        assert!(insert(&mut n, &mut elements, 2, DVec3::splat(8.0)));
        assert_eq!(n.local_len(), 1);
    }

    #[test]
    fn split_preserves_count() {
        let mut elements = Slab::new();
        let mut n = node();
        for (i, p) in spread().into_iter().enumerate() {
            assert!(insert(&mut n, &mut elements, i as u32, p));
            if i < 8 {
                assert!(n.children().is_none());
            }
        }
        assert_eq!(n.local_len(), 0);
        let children = n.children().unwrap();
        assert_eq!(children.iter().map(|c| c.local_len()).sum::<usize>(), 9);
        assert_eq!(children[3].local_len(), 2);
        assert!(children.iter().all(|c| c.children().is_none()));
    }

    #[test]
    fn min_size_allows_overflow() {
        let mut elements = Slab::new();
        // Children would be 0.75 < 1.0
        let mut n = OctreeNode::new(1.5, 1.0, DVec3::ZERO);
        for i in 0..20 {
            assert!(insert(&mut n, &mut elements, i, DVec3::splat(0.01 * i as f64)));
        }
        assert!(n.children().is_none());
        assert_eq!(n.local_len(), 20);
    }

    #[test]
    fn merge_preserves_count() {
        let mut elements = Slab::new();
        let mut n = node();
        for (i, p) in spread().into_iter().enumerate() {
            insert(&mut n, &mut elements, i as u32, p);
        }
        assert!(n.children().is_some());
        let id = n.remove(&mut elements, &4).unwrap();
        assert_eq!(elements.remove(id).value, 4);
        assert!(n.children().is_none());
        assert_eq!(n.local_len(), 8);
        assert_eq!(values(&n, &elements), [0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn no_merge_with_grandchildren() {
        let mut elements = Slab::new();
        let mut n = node();
        // 9 points in octant 3 split it twice over
        for i in 0..9 {
            let p = DVec3::new(1.0 + 0.5 * i as f64, 1.0, 1.0);
            insert(&mut n, &mut elements, i, p);
        }
        assert!(n.children().unwrap()[3].children().is_some());
        assert!(!n.should_merge());
        assert!(!n.children().unwrap()[3].should_merge());
        assert_eq!(total(&n), 9);
    }

    #[test]
    fn remove_missing() {
        let mut elements = Slab::new();
        let mut n = node();
        insert(&mut n, &mut elements, 1, DVec3::ONE);
        assert_eq!(n.remove(&mut elements, &2), None);
        assert_eq!(n.remove_at(&mut elements, &1, DVec3::splat(100.0)), None);
        assert_eq!(n.local_len(), 1);
    }

    #[test]
    fn remove_at_follows_position() {
        let mut elements = Slab::new();
        let mut n = node();
        for (i, p) in spread().into_iter().enumerate() {
            insert(&mut n, &mut elements, i as u32, p);
        }
        // Wrong octant: not found
        assert_eq!(n.remove_at(&mut elements, &0, DVec3::new(4.0, -4.0, 4.0)), None);
        let id = n.remove_at(&mut elements, &0, spread()[0]).unwrap();
        assert_eq!(elements.remove(id).value, 0);
        assert!(n.children().is_none());
        assert_eq!(values(&n, &elements), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn set_children_requires_eight() {
        let mut n = node();
        let result = n.set_children((0..7).map(|i| OctreeNode::new(8.0, 1.0, n_center(i))));
        assert_eq!(result, Err(OctreeError::ChildCount(7)));
        assert!(n.children().is_none());
        let result = n.set_children((0..9).map(|i| OctreeNode::new(8.0, 1.0, n_center(i % 8))));
        assert_eq!(result, Err(OctreeError::ChildCount(9)));
        assert!(n.children().is_none());
        let result = n.set_children((0..8).map(|i| OctreeNode::new(8.0, 1.0, n_center(i))));
        assert_eq!(result, Ok(()));
        assert!(n.children().is_some());
    }

    fn n_center(i: usize) -> DVec3 {
        CHILD_OFFSETS[i] * 4.0
    }

    #[test]
    fn shrink_childless_in_place() {
        let mut elements = Slab::new();
        let mut n = node();
        insert(&mut n, &mut elements, 1, DVec3::new(5.0, -5.0, 1.0));
        insert(&mut n, &mut elements, 2, DVec3::new(2.0, -1.0, 7.0));
        assert!(n.shrink_if_possible(&elements, 1.0));
        assert_eq!(n.side_length(), 8.0);
        assert_eq!(n.center(), DVec3::new(4.0, -4.0, 4.0));
        assert_eq!(n.child_bounds()[0].center(), DVec3::new(2.0, -2.0, 2.0));
        for (_, elt) in elements.iter() {
            assert!(n.bounds().contains(elt.position));
        }
        assert_eq!(values(&n, &elements), [1, 2]);
    }

    #[test]
    fn shrink_refuses_spread_or_small() {
        let mut elements = Slab::new();
        let mut n = node();
        assert!(!n.shrink_if_possible(&elements, 1.0));
        insert(&mut n, &mut elements, 1, DVec3::new(5.0, 5.0, 5.0));
        insert(&mut n, &mut elements, 2, DVec3::new(-5.0, 5.0, 5.0));
        assert!(!n.shrink_if_possible(&elements, 1.0));
        assert_eq!(n.side_length(), 16.0);

        let mut elements = Slab::new();
        let mut n = node();
        insert(&mut n, &mut elements, 1, DVec3::new(5.0, 5.0, 5.0));
        assert!(!n.shrink_if_possible(&elements, 9.0));
        assert_eq!(n.side_length(), 16.0);
    }

    #[test]
    fn shrink_promotes_only_occupied_child() {
        let mut elements = Slab::new();
        let mut n = node();
        for i in 0..9 {
            let p = DVec3::new(1.0 + 0.5 * i as f64, 1.0, 1.0);
            insert(&mut n, &mut elements, i, p);
        }
        assert!(n.shrink_if_possible(&elements, 1.0));
        assert_eq!(n.side_length(), 8.0);
        assert_eq!(n.center(), DVec3::splat(4.0));
        assert_eq!(values(&n, &elements), (0..9).collect::<Vec<_>>());
        for (_, elt) in elements.iter() {
            assert!(n.bounds().contains(elt.position));
        }
    }

    #[test]
    fn shrink_refuses_two_occupied_children() {
        let mut elements = Slab::new();
        let mut n = node();
        for (i, p) in spread().into_iter().enumerate() {
            insert(&mut n, &mut elements, i as u32, p);
        }
        assert!(!n.shrink_if_possible(&elements, 1.0));
        assert_eq!(n.side_length(), 16.0);
        assert!(n.children().is_some());
    }
}
