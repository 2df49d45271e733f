// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary search tree node: insertion, subtree bounds, and child placement.
//!
//! ## Bounds
//!
//! [`TreeNode::compute_bounds`] walks the subtree post-order and stores the size of
//! the box needed to draw it, with `d` the diameter, `sep` the child separation and
//! `level` the level height:
//!
//! - leaf: `d × d`
//! - both children: `(lw + rw + sep) × (level + max(lh, rh))`
//! - one child: `(cw + (sep + d) / 2) × (ch + level)`
//!
//! A lone child hugs its parent's side instead of being centered against a
//! sibling, so it only reserves half the usual separation plus half a marker.
//!
//! ## Placement
//!
//! With both children, the parent's box is centered under it and split into a left
//! box of the left child's width and a right box of the right child's width.
//! Each child is then positioned inside its box by [its own shape](TreeNode::branches):
//! centered when it has two children or none, pushed to the right edge (minus a
//! radius) when it leans left, pushed to the left edge (plus a radius) when it
//! leans right. A lone child sits `(sep + d) / 2` to its side of the parent.
//! Children are always one `level` below.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use kurbo::{Point, Size};

use crate::types::{Branches, LayoutParams};

/// A node in an unbalanced binary search tree.
///
/// Values strictly less than the node go left; everything else, duplicates
/// included, goes right. Each node owns its children outright.
///
/// Every walk over a subtree uses an explicit stack, so sorted input, which
/// degenerates into a chain as deep as it is long, is safe to lay out, clone,
/// and drop.
pub struct TreeNode<T> {
    value: T,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
    bounds: Size,
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Self>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        // Post-order, so both children are on `built` when their parent is reached.
        let mut built: Vec<Box<Self>> = Vec::new();
        let mut order = self.post_order();
        order.pop();
        for node in order {
            let copy = node.clone_shallow(&mut built);
            built.push(Box::new(copy));
        }
        self.clone_shallow(&mut built)
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value)
            .field("branches", &self.branches())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl<T> TreeNode<T> {
    /// Create a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            bounds: Size::ZERO,
        }
    }

    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Left child, holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Right child, holding greater or equal values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Subtree bounding box from the last [`compute_bounds`](Self::compute_bounds).
    ///
    /// Stale after any insertion until bounds are recomputed.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Which children are present.
    pub fn branches(&self) -> Branches {
        match (&self.left, &self.right) {
            (None, None) => Branches::Leaf,
            (Some(_), None) => Branches::LeftOnly,
            (None, Some(_)) => Branches::RightOnly,
            (Some(_), Some(_)) => Branches::Both,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[allow(
        clippy::len_without_is_empty,
        reason = "A node always counts at least itself."
    )]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.left().map(|n| (n, level + 1)));
            stack.extend(node.right().map(|n| (n, level + 1)));
        }
        deepest
    }

    /// Recompute and store the bounding box of every node in this subtree.
    pub fn compute_bounds(&mut self, params: &LayoutParams) -> Size {
        let d = params.diameter;

        // Pre-order, collecting each node's bounds slot and shape.
        let mut slots: Vec<(&mut Size, Branches)> = Vec::new();
        let mut stack = vec![&mut *self];
        while let Some(node) = stack.pop() {
            let branches = node.branches();
            let Self {
                left,
                right,
                bounds,
                ..
            } = node;
            slots.push((bounds, branches));
            stack.extend(right.as_deref_mut());
            stack.extend(left.as_deref_mut());
        }

        // Reversed pre-order reaches every child before its parent; the left
        // child's size is on top of the right child's.
        let mut sizes: Vec<Size> = Vec::new();
        for (slot, branches) in slots.into_iter().rev() {
            let size = match branches {
                Branches::Leaf => Size::new(d, d),
                Branches::Both => {
                    let l = sizes.pop().unwrap_or_default();
                    let r = sizes.pop().unwrap_or_default();
                    Size::new(
                        l.width + r.width + params.child_separation,
                        params.level_height + l.height.max(r.height),
                    )
                }
                Branches::LeftOnly | Branches::RightOnly => {
                    let c = sizes.pop().unwrap_or_default();
                    Size::new(
                        c.width + params.single_child_offset(),
                        c.height + params.level_height,
                    )
                }
            };
            *slot = size;
            sizes.push(size);
        }
        self.bounds
    }

    /// Centers of the left and right children when `self` is centered on `center`.
    ///
    /// Relies on bounds from the last [`compute_bounds`](Self::compute_bounds).
    pub fn child_centers(
        &self,
        center: Point,
        params: &LayoutParams,
    ) -> (Option<Point>, Option<Point>) {
        let y = center.y + params.level_height;
        match (self.left(), self.right()) {
            (None, None) => (None, None),
            (Some(left), Some(right)) => {
                let x0 = center.x - self.bounds.width / 2.0;
                let x1 = center.x + self.bounds.width / 2.0;
                let lx = left.anchor_within(x0, x0 + left.bounds.width, params);
                let rx = right.anchor_within(x1 - right.bounds.width, x1, params);
                (Some(Point::new(lx, y)), Some(Point::new(rx, y)))
            }
            (Some(_), None) => (
                Some(Point::new(center.x - params.single_child_offset(), y)),
                None,
            ),
            (None, Some(_)) => (
                None,
                Some(Point::new(center.x + params.single_child_offset(), y)),
            ),
        }
    }

    /// Walk the subtree pre-order, handing each node its center and its parent's center.
    ///
    /// Left children are visited before right children. Bounds must be current.
    pub fn visit<'a, F>(&'a self, center: Point, params: &LayoutParams, f: &mut F)
    where
        F: FnMut(&'a Self, Point, Option<Point>, usize),
    {
        let mut stack: Vec<(&'a Self, Point, Option<Point>, usize)> =
            vec![(self, center, None, 0)];
        while let Some((node, center, parent, depth)) = stack.pop() {
            f(node, center, parent, depth);
            let (lc, rc) = node.child_centers(center, params);
            if let (Some(right), Some(rc)) = (node.right(), rc) {
                stack.push((right, rc, Some(center), depth + 1));
            }
            if let (Some(left), Some(lc)) = (node.left(), lc) {
                stack.push((left, lc, Some(center), depth + 1));
            }
        }
    }

    /// Horizontal center for this node inside the box `[x0, x1]` reserved for it.
    fn anchor_within(&self, x0: f64, x1: f64, params: &LayoutParams) -> f64 {
        match self.branches() {
            Branches::Both | Branches::Leaf => (x0 + x1) / 2.0,
            Branches::LeftOnly => x1 - params.radius(),
            Branches::RightOnly => x0 + params.radius(),
        }
    }

    /// Every node of the subtree, children before their parent, left before right.
    fn post_order(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        out.reverse();
        out
    }
}

impl<T: Clone> TreeNode<T> {
    /// Copy this node, taking its already-copied children off the top of `built`.
    fn clone_shallow(&self, built: &mut Vec<Box<Self>>) -> Self {
        let right = if self.right.is_some() { built.pop() } else { None };
        let left = if self.left.is_some() { built.pop() } else { None };
        Self {
            value: self.value.clone(),
            left,
            right,
            bounds: self.bounds,
        }
    }
}

impl<T: PartialOrd> TreeNode<T> {
    /// Insert `value` below this node.
    ///
    /// Never rebalances: the tree's shape is fixed by insertion order.
    pub fn insert(&mut self, value: T) {
        let mut slot = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Self::new(value)));
    }
}
