// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree container: insertion, parameters, dirty tracking, and rendering.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::Display;
use kurbo::{Circle, Line, Point};

use crate::error::ParamError;
use crate::node::TreeNode;
use crate::surface::{DisplayList, Surface};
use crate::types::{Dirty, LayoutParams, Theme};

/// A laid-out node, as returned by [`Tree::layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<'a, T> {
    /// The node's value.
    pub value: &'a T,
    /// Center of the node marker.
    pub center: Point,
    /// Center of the parent marker; `None` for the root.
    pub parent: Option<Point>,
    /// Distance from the root; the root is `0`.
    pub depth: usize,
}

/// An unbalanced binary search tree drawn onto a [`Surface`].
///
/// Insertions redraw immediately. Parameter and theme setters only mark the
/// tree [dirty](Tree::is_dirty); call [`render`](Tree::render) or
/// [`render_if_dirty`](Tree::render_if_dirty) once the batch of changes is done.
pub struct Tree<T, S = DisplayList> {
    root: Option<Box<TreeNode<T>>>,
    len: usize,
    params: LayoutParams,
    theme: Theme,
    surface: Option<S>,
    dirty: Dirty,
    epoch: u64,
}

impl<T, S> Default for Tree<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> core::fmt::Debug for Tree<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("params", &self.params)
            .field("has_surface", &self.surface.is_some())
            .field("dirty", &self.dirty)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl<T, S> Tree<T, S> {
    /// Create an empty tree with default parameters and no surface.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            params: LayoutParams::default(),
            theme: Theme::default(),
            surface: None,
            dirty: Dirty::empty(),
            epoch: 0,
        }
    }

    /// Create an empty tree with the given parameters.
    pub fn with_params(params: LayoutParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::new()
        })
    }

    /// The root node, if anything has been inserted.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Number of values inserted since creation or the last [`reset`](Tree::reset).
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; `0` for an empty tree.
    pub fn depth(&self) -> usize {
        self.root().map_or(0, TreeNode::depth)
    }

    /// Values in ascending order. Equal values come out in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Current layout parameters.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// What changed since the last render.
    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    /// True if anything changed since the last render.
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Number of completed renders.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The attached surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The attached surface, mutably.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Detach and return the surface. Later renders are no-ops until another is attached.
    pub fn take_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Replace all layout parameters at once.
    pub fn set_params(&mut self, params: LayoutParams) -> Result<(), ParamError> {
        params.validate()?;
        if params != self.params {
            self.params = params;
            self.dirty |= Dirty::PARAMS;
        }
        Ok(())
    }

    /// Move the root center.
    pub fn set_center(&mut self, center: Point) -> Result<(), ParamError> {
        self.set_params(LayoutParams {
            center,
            ..self.params
        })
    }

    /// Move the root center horizontally.
    pub fn set_center_x(&mut self, x: f64) -> Result<(), ParamError> {
        self.set_center(Point::new(x, self.params.center.y))
    }

    /// Move the root center vertically.
    pub fn set_center_y(&mut self, y: f64) -> Result<(), ParamError> {
        self.set_center(Point::new(self.params.center.x, y))
    }

    /// Set the node marker diameter. Must be greater than zero.
    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), ParamError> {
        self.set_params(LayoutParams {
            diameter,
            ..self.params
        })
    }

    /// Set the vertical distance between levels.
    pub fn set_level_height(&mut self, level_height: f64) -> Result<(), ParamError> {
        self.set_params(LayoutParams {
            level_height,
            ..self.params
        })
    }

    /// Set the minimum gap between sibling subtrees.
    pub fn set_child_separation(&mut self, child_separation: f64) -> Result<(), ParamError> {
        self.set_params(LayoutParams {
            child_separation,
            ..self.params
        })
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            self.theme = theme;
            self.dirty |= Dirty::THEME;
        }
    }

    /// Recompute bounds and return every node's position, pre-order, left before right.
    ///
    /// This is the same placement [`render`](Tree::render) draws, without a surface.
    pub fn layout(&mut self) -> Vec<Placement<'_, T>> {
        let params = self.params;
        let mut out = Vec::with_capacity(self.len);
        let Some(root) = self.root.as_deref_mut() else {
            return out;
        };
        root.compute_bounds(&params);
        let root: &TreeNode<T> = root;
        root.visit(params.center, &params, &mut |node, center, parent, depth| {
            out.push(Placement {
                value: node.value(),
                center,
                parent,
                depth,
            });
        });
        out
    }
}

impl<T: PartialOrd + Display, S: Surface> Tree<T, S> {
    /// Insert a value and redraw.
    pub fn insert(&mut self, value: T) {
        self.insert_node(value);
        self.render();
    }

    /// Insert values in order, then redraw once.
    ///
    /// The resulting shape and drawing match calling [`insert`](Tree::insert) for each value.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert_node(value);
        }
        self.render();
    }

    /// Drop every node and clear the surface.
    pub fn reset(&mut self) {
        self.root = None;
        self.len = 0;
        self.dirty |= Dirty::STRUCTURE;
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("tree reset");
    }

    /// Attach a surface and draw onto it. Returns the previous surface, if any.
    pub fn set_surface(&mut self, surface: S) -> Option<S> {
        let previous = self.surface.replace(surface);
        self.dirty |= Dirty::SURFACE;
        self.render();
        previous
    }

    /// Clear the surface and redraw the whole tree.
    ///
    /// Does nothing without a surface. With a surface but no nodes, the surface
    /// is only cleared if nodes were removed since the last render, so a surface
    /// detached across a [`reset`](Tree::reset) does not keep the old drawing.
    pub fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            #[cfg(feature = "tracing")]
            tracing::trace!("render skipped: no surface");
            return;
        };
        let Some(root) = self.root.as_deref_mut() else {
            if self.dirty.contains(Dirty::STRUCTURE) {
                surface.clear();
            }
            self.dirty = Dirty::empty();
            return;
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "tree_render",
            nodes = self.len,
            epoch = self.epoch,
            dirty = ?self.dirty
        )
        .entered();

        let params = self.params;
        let theme = self.theme;
        surface.clear();
        root.compute_bounds(&params);
        let radius = params.radius();
        root.visit(params.center, &params, &mut |node, center, parent, _| {
            if let Some(parent) = parent {
                surface.draw_line(Line::new(parent, center), theme.edge);
            }
            surface.draw_circle(
                Circle::new(center, radius),
                theme.node_fill,
                theme.node_stroke,
            );
            surface.draw_label(center, &node.value().to_string(), theme.label);
        });

        self.dirty = Dirty::empty();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Redraw only if something changed since the last render.
    ///
    /// Returns true if a render ran.
    pub fn render_if_dirty(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }
        let before = self.epoch;
        self.render();
        self.epoch != before
    }

    fn insert_node(&mut self, value: T) {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => self.root = Some(Box::new(TreeNode::new(value))),
        }
        self.len += 1;
        self.dirty |= Dirty::STRUCTURE;
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "inserted value");
    }
}

/// In-order iterator over a tree's values. See [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a TreeNode<T>>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T, S> IntoIterator for &'a Tree<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Primitive;
    use crate::types::Rgba8;

    const EPS: f64 = 1e-9;

    fn params() -> LayoutParams {
        LayoutParams {
            center: Point::new(100.0, 20.0),
            diameter: 20.0,
            level_height: 40.0,
            child_separation: 10.0,
        }
    }

    fn drawn(values: &str) -> Tree<char> {
        let mut tree = Tree::with_params(params()).unwrap();
        tree.set_surface(DisplayList::new());
        tree.insert_all(values.chars());
        tree
    }

    fn list<T>(tree: &Tree<T>) -> &DisplayList {
        tree.surface().unwrap()
    }

    #[test]
    fn insert_without_surface_builds_but_does_not_render() {
        let mut tree: Tree<char> = Tree::new();
        tree.insert('B');
        tree.insert('A');
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.epoch(), 0);
        assert!(tree.dirty().contains(Dirty::STRUCTURE));
        assert!(!tree.render_if_dirty());
    }

    #[test]
    fn attaching_a_surface_renders() {
        let mut tree: Tree<char> = Tree::with_params(params()).unwrap();
        tree.insert_all("DBF".chars());
        assert!(tree.set_surface(DisplayList::new()).is_none());
        assert_eq!(tree.epoch(), 1);
        assert!(!tree.is_dirty());
        assert_eq!(list(&tree).len(), 8);
    }

    #[test]
    fn empty_tree_render_leaves_surface_alone() {
        let mut tree: Tree<char> = Tree::new();
        let mut surface = DisplayList::new();
        surface.draw_label(Point::ZERO, "host", Rgba8::BLACK);
        tree.set_surface(surface);
        assert_eq!(tree.epoch(), 0);
        assert_eq!(list(&tree).len(), 1);
        assert!(!tree.is_dirty());
    }

    #[test]
    fn emission_order_is_circle_label_then_edge_and_child() {
        let tree = drawn("DBF");
        let p = list(&tree).primitives();
        assert_eq!(p.len(), 8);
        let kinds: Vec<_> = p
            .iter()
            .map(|p| match p {
                Primitive::Circle { .. } => 'o',
                Primitive::Line { .. } => '-',
                Primitive::Label { text, .. } => text.chars().next().unwrap(),
            })
            .collect();
        // Each node's edge from its parent precedes its marker.
        assert_eq!(kinds, ['o', 'D', '-', 'o', 'B', '-', 'o', 'F']);

        let Primitive::Line { line, .. } = &p[2] else {
            panic!("expected a line");
        };
        assert_eq!(line.p0, Point::new(100.0, 20.0));
        assert_eq!(line.p1, Point::new(85.0, 60.0));
    }

    #[test]
    fn every_node_gets_marker_and_label() {
        let tree = drawn("DBFACEG");
        let l = list(&tree);
        assert_eq!(l.circles().count(), 7);
        assert_eq!(l.labels().count(), 7);
        assert_eq!(l.lines().count(), 6);
        for c in l.circles() {
            assert!((c.radius - 10.0).abs() < EPS);
        }
        let (center, text) = l.labels().nth(1).unwrap();
        assert_eq!(text, "B");
        assert!((center.x - 70.0).abs() < EPS && (center.y - 60.0).abs() < EPS);
    }

    #[test]
    fn insert_renders_each_time_and_batch_renders_once() {
        let mut tree: Tree<char> = Tree::new();
        tree.set_surface(DisplayList::new());
        tree.insert('M');
        tree.insert('A');
        assert_eq!(tree.epoch(), 2);
        tree.insert_all("ZQ".chars());
        assert_eq!(tree.epoch(), 3);
        assert_eq!(list(&tree).circles().count(), 4);
    }

    #[test]
    fn setters_defer_rendering() {
        let mut tree = drawn("DBF");
        let epoch = tree.epoch();
        tree.set_diameter(30.0).unwrap();
        tree.set_level_height(60.0).unwrap();
        tree.set_child_separation(4.0).unwrap();
        tree.set_center(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(tree.epoch(), epoch);
        assert_eq!(tree.dirty(), Dirty::PARAMS);

        assert!(tree.render_if_dirty());
        assert_eq!(tree.epoch(), epoch + 1);
        assert!(!tree.render_if_dirty());
        let first = list(&tree).circles().next().unwrap();
        assert_eq!(first.center, Point::ZERO);
        assert!((first.radius - 15.0).abs() < EPS);
    }

    #[test]
    fn unchanged_values_do_not_dirty() {
        let mut tree = drawn("DBF");
        tree.set_params(params()).unwrap();
        tree.set_theme(Theme::default());
        assert!(!tree.is_dirty());
        tree.set_theme(Theme {
            node_fill: Rgba8::WHITE,
            ..Theme::default()
        });
        assert_eq!(tree.dirty(), Dirty::THEME);
    }

    #[test]
    fn rejected_parameters_leave_tree_unchanged() {
        let mut tree = drawn("DBF");
        let err = tree.set_diameter(-5.0).unwrap_err();
        assert_eq!(err.param(), crate::Param::Diameter);
        assert!(tree.set_center_x(f64::INFINITY).is_err());
        assert!(tree.set_level_height(f64::NAN).is_err());
        assert_eq!(*tree.params(), params());
        assert!(!tree.is_dirty());
        let rejected: Result<Tree<char>, _> = Tree::with_params(LayoutParams {
            child_separation: -1.0,
            ..params()
        });
        assert!(rejected.is_err());
    }

    #[test]
    fn center_x_shift_translates_every_node() {
        let mut tree = drawn("HDLBFJNACEG");
        let before: Vec<_> = tree.layout().iter().map(|p| p.center).collect();
        tree.set_center_x(175.0).unwrap();
        let after: Vec<_> = tree.layout().iter().map(|p| p.center).collect();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert!((a.x - b.x - 75.0).abs() < EPS);
            assert!((a.y - b.y).abs() < EPS);
        }
    }

    #[test]
    fn layout_is_deterministic_across_rebuilds() {
        let mut a = drawn("QWERTYUIOP");
        let mut b = drawn("QWERTYUIOP");
        b.reset();
        b.insert_all("QWERTYUIOP".chars());
        b.render();
        let la: Vec<_> = a.layout().iter().map(|p| (*p.value, p.center)).collect();
        let lb: Vec<_> = b.layout().iter().map(|p| (*p.value, p.center)).collect();
        assert_eq!(la, lb);
        assert_eq!(list(&a), list(&b));
    }

    #[test]
    fn layout_matches_render() {
        let mut tree = drawn("DBFACEG");
        let centers: Vec<_> = list(&tree).circles().map(|c| c.center).collect();
        let placed: Vec<_> = tree.layout().iter().map(|p| p.center).collect();
        assert_eq!(centers, placed);
        let layout = tree.layout();
        assert_eq!(layout[0].parent, None);
        assert_eq!(layout[0].depth, 0);
        assert_eq!(layout[2].depth, 2);
        assert_eq!(layout[2].parent, Some(layout[1].center));
    }

    #[test]
    fn reset_clears_surface_and_nodes() {
        let mut tree = drawn("DBF");
        tree.reset();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(list(&tree).is_empty());
        assert!(tree.layout().is_empty());
        tree.insert('X');
        assert_eq!(list(&tree).circles().count(), 1);
    }

    #[test]
    fn reattached_surface_is_cleared_after_reset() {
        let mut tree = drawn("DBF");
        let old = tree.take_surface().unwrap();
        tree.reset();
        tree.set_surface(old);
        assert!(tree.is_empty());
        assert!(list(&tree).is_empty());
        assert!(!tree.is_dirty());
    }

    #[test]
    fn sorted_chain_renders_and_drops() {
        let mut tree: Tree<u32> = Tree::with_params(params()).unwrap();
        tree.set_surface(DisplayList::new());
        tree.insert_all(0..50_000);
        assert_eq!(tree.len(), 50_000);
        assert_eq!(tree.depth(), 50_000);
        let l = list(&tree);
        assert_eq!(l.circles().count(), 50_000);
        assert_eq!(l.lines().count(), 49_999);
        let last = l.circles().last().unwrap();
        assert!((last.center.x - (100.0 + 49_999.0 * 15.0)).abs() < 1e-6);
        assert!((last.center.y - (20.0 + 49_999.0 * 40.0)).abs() < 1e-6);
        assert_eq!(tree.iter().count(), 50_000);
        drop(tree);
    }

    #[test]
    fn iter_is_sorted_with_duplicates() {
        let mut tree: Tree<u32> = Tree::new();
        tree.insert_all([5, 3, 8, 3, 9, 1, 5]);
        let values: Vec<_> = tree.iter().copied().collect();
        assert_eq!(values, [1, 3, 3, 5, 5, 8, 9]);
        assert_eq!((&tree).into_iter().count(), 7);
    }

    #[test]
    fn borrowed_surface() {
        let mut host = DisplayList::new();
        {
            let mut tree: Tree<char, &mut DisplayList> = Tree::with_params(params()).unwrap();
            tree.set_surface(&mut host);
            tree.insert_all("BAC".chars());
        }
        assert_eq!(host.circles().count(), 3);
    }

    #[test]
    fn take_surface_stops_drawing() {
        let mut tree = drawn("B");
        let taken = tree.take_surface().unwrap();
        tree.insert('A');
        assert_eq!(taken.circles().count(), 1);
        assert!(tree.is_dirty());
    }
}
