use alloc::{vec, vec::Vec};
use core::slice;

use arrayvec::ArrayVec;
use slab::Slab;

use crate::{query::Query, Element, OctreeNode, MAX_DEPTH};

struct DepthFirstTraversal<'a> {
    // One iterator over a group of siblings per level, so the stack never exceeds the depth of
    // the tree. Roots larger than `MAX_DEPTH` levels are rejected at construction and growth.
    queue: ArrayVec<slice::Iter<'a, OctreeNode>, MAX_DEPTH>,
}

impl<'a> DepthFirstTraversal<'a> {
    fn new(root: &'a OctreeNode) -> Self {
        let mut queue = ArrayVec::new();
        queue.push(slice::from_ref(root).iter());
        Self { queue }
    }

    /// Find the next node accepted by `query`, skipping rejected subtrees
    fn next(&mut self, query: &impl Query) -> Option<&'a OctreeNode> {
        loop {
            let siblings = self.queue.last_mut()?;
            let Some(node) = siblings.next() else {
                self.queue.pop();
                continue;
            };
            if !query.visit(node.bounds()) {
                continue;
            }
            if let Some(children) = node.children() {
                self.queue.push(children.iter());
            }
            return Some(node);
        }
    }
}

/// Iterator over elements selected by a [`Query`]
pub struct Nearby<'a, T, Q> {
    query: Q,
    elements: &'a Slab<Element<T>>,
    traversal: DepthFirstTraversal<'a>,
    next_element: Option<usize>,
}

impl<'a, T, Q: Query> Nearby<'a, T, Q> {
    pub(crate) fn new(elements: &'a Slab<Element<T>>, root: &'a OctreeNode, query: Q) -> Self {
        Self {
            query,
            elements,
            traversal: DepthFirstTraversal::new(root),
            next_element: None,
        }
    }
}

impl<'a, T, Q: Query> Iterator for Nearby<'a, T, Q> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Traverse the current node's elements
            while let Some(index) = self.next_element {
                let elt = &self.elements[index];
                self.next_element = elt.next;
                if self.query.accept(elt.position) {
                    return Some((index, &elt.value));
                }
            }
            // Out of elements, find a new node
            let node = self.traversal.next(&self.query)?;
            self.next_element = node.first_element();
        }
    }
}

/// Iterator over every node in a tree and its depth below the root, for debug drawing
pub struct Nodes<'a> {
    stack: Vec<(u32, &'a OctreeNode)>,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(root: &'a OctreeNode) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (u32, &'a OctreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack
                .extend(children.iter().rev().map(|child| (depth + 1, child)));
        }
        Some((depth, node))
    }
}
