//! A dynamic octree of points that splits dense regions and collapses sparse ones
//!
//! [`PointOctree`] stores values at positions in 3D space, and answers "what is near this point"
//! and "what is near this ray" queries by skipping regions of space that can't contain a match.
//! The root cube grows to admit points outside it and shrinks back when its contents recede
//! into a single octant.
#![no_std]

extern crate alloc;

mod bounds;
mod config;
mod error;
mod node;
pub mod query;
mod ray;
mod traversal;

use core::{array, mem};

use glam::DVec3;
use log::{debug, error, warn};
use slab::Slab;

pub use bounds::Aabb;
pub use config::OctreeConfig;
pub use error::OctreeError;
pub use node::OctreeNode;
pub use ray::Ray;
pub use traversal::{Nearby, Nodes};

use query::{Everything, NearLine, Query, WithinDistance};

/// Number of elements a node may hold before it is split
pub const MAX_ELEMENTS_PER_NODE: usize = 8;

/// Maximum number of levels a traversal can descend through
pub const MAX_DEPTH: usize = 64;

/// A collection of values located at points in 3D space
#[derive(Debug)]
pub struct PointOctree<T> {
    config: OctreeConfig,
    root: OctreeNode,
    elements: Slab<Element<T>>,
}

impl<T> PointOctree<T> {
    /// Create an empty tree covering the cube described by `config`
    ///
    /// A `min_size` larger than `initial_size` is reduced to `initial_size`.
    pub fn new(mut config: OctreeConfig) -> Result<Self, OctreeError> {
        if config.min_size > config.initial_size {
            warn!(
                "minimum node size must be at most the initial world size, was {}, adjusted to {}",
                config.min_size, config.initial_size
            );
            config.min_size = config.initial_size;
        }
        config.validate()?;
        Ok(Self {
            root: OctreeNode::new(config.initial_size, config.min_size, config.center),
            config,
            elements: Slab::new(),
        })
    }

    /// Insert `value` at `position`, returning an ID that can be used to access it directly
    ///
    /// If `position` lies outside the tree, the root is repeatedly doubled towards it, up to
    /// [`OctreeConfig::max_grow_attempts`] times. On error the tree is left unchanged.
    pub fn insert(&mut self, value: T, position: DVec3) -> Result<usize, OctreeError> {
        if !position.is_finite() {
            return Err(OctreeError::NonFinitePosition(position));
        }
        // Work out every growth step before applying any
        let mut attempts = 0;
        let mut bounds = *self.root.bounds();
        let mut center = self.root.center();
        let mut length = self.root.side_length();
        while !bounds.contains(position) {
            if attempts == self.config.max_grow_attempts {
                error!(
                    "aborted insert at {position} after {attempts} attempts at growing the octree"
                );
                return Err(OctreeError::GrowLimit(attempts));
            }
            length *= 2.0;
            config::check_extent(length, self.config.min_size)?;
            (bounds, center) = bounds.doubled_towards(center, position);
            attempts += 1;
        }
        for _ in 0..attempts {
            self.grow(position)?;
        }

        let id = self.elements.insert(Element {
            value,
            position,
            next: None,
        });
        let added = self.root.add(&mut self.elements, id);
        debug_assert!(added, "root must contain {position} after growing");
        Ok(id)
    }

    /// Double the root's size, extending it towards `target`
    fn grow(&mut self, target: DVec3) -> Result<(), OctreeError> {
        let old_length = self.root.side_length();
        let new_length = old_length * 2.0;
        let (new_bounds, new_center) = self
            .root
            .bounds()
            .doubled_towards(self.root.center(), target);
        debug!(
            "growing octree from {} to {} around {}",
            old_length, new_length, new_center
        );

        let old_root = mem::replace(
            &mut self.root,
            OctreeNode::with_bounds(new_center, new_bounds, new_length, self.config.min_size),
        );
        if !old_root.has_any_elements() {
            return Ok(());
        }

        // The old root becomes one of the new root's children, alongside 7 empty siblings
        let root_index = self.root.best_fit_child(old_root.center());
        let mut old_root = Some(old_root);
        let children: [OctreeNode; 8] = array::from_fn(|i| {
            match old_root.take_if(|_| i == root_index) {
                Some(old_root) => old_root,
                None => self.root.octant(i),
            }
        });
        self.root.set_children(children)
    }

    /// Remove an element equal to `value`, searching the whole tree
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let id = self.root.remove(&mut self.elements, value)?;
        Some(self.finish_removal(id))
    }

    /// Remove an element equal to `value` stored at `position`
    ///
    /// Faster than [`remove`](Self::remove), but only finds the value if `position` is where it
    /// was inserted.
    pub fn remove_at(&mut self, value: &T, position: DVec3) -> Option<T>
    where
        T: PartialEq,
    {
        let id = self
            .root
            .remove_at(&mut self.elements, value, position)?;
        Some(self.finish_removal(id))
    }

    fn finish_removal(&mut self, id: usize) -> T {
        let elt = self.elements.remove(id);
        self.shrink();
        elt.value
    }

    /// Shrink the root towards its contents, never going below the initial size
    ///
    /// Called automatically after each removal. Returns whether the root changed.
    pub fn shrink(&mut self) -> bool {
        self.root
            .shrink_if_possible(&self.elements, self.config.initial_size)
    }

    /// Number of elements in the tree
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow the value associated with `id`
    pub fn get(&self, id: usize) -> Option<&T> {
        self.elements.get(id).map(|elt| &elt.value)
    }

    /// Uniquely borrow the value associated with `id`
    pub fn get_mut(&mut self, id: usize) -> Option<&mut T> {
        self.elements.get_mut(id).map(|elt| &mut elt.value)
    }

    /// Position the value associated with `id` was inserted at
    pub fn position(&self, id: usize) -> Option<DVec3> {
        self.elements.get(id).map(|elt| elt.position)
    }

    /// Region currently covered by the root node
    pub fn bounds(&self) -> Aabb {
        *self.root.bounds()
    }

    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Traverse all elements, in no particular order
    pub fn iter(&self) -> Nearby<'_, T, Everything> {
        self.query(Everything)
    }

    /// Traverse all elements no further than `max_distance` from `point`
    pub fn within_distance(
        &self,
        point: DVec3,
        max_distance: f64,
    ) -> Nearby<'_, T, WithinDistance> {
        self.query(WithinDistance::new(point, max_distance))
    }

    /// Traverse all elements no further than `max_distance` from the line through `ray`
    pub fn near_ray(&self, ray: Ray, max_distance: f64) -> Nearby<'_, T, NearLine> {
        self.query(NearLine::new(ray, max_distance))
    }

    /// Traverse all elements selected by a custom [`Query`]
    pub fn query<Q: Query>(&self, query: Q) -> Nearby<'_, T, Q> {
        Nearby::new(&self.elements, &self.root, query)
    }

    /// Traverse every node with its depth below the root, e.g. to draw node boundaries
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.root)
    }
}

impl<T> Default for PointOctree<T> {
    fn default() -> Self {
        Self::new(OctreeConfig::default()).expect("default configuration is valid")
    }
}

#[derive(Debug)]
pub(crate) struct Element<T> {
    pub(crate) value: T,
    pub(crate) position: DVec3,
    /// Next element stored in the same node
    pub(crate) next: Option<usize>,
}
