// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=grove_layout --heading-base-level=0

//! Grove Layout: a Kurbo-native layout engine for unbalanced binary search trees.
//!
//! Grove Layout keeps a binary search tree, works out where every node goes, and
//! emits the drawing calls to show it.
//!
//! - Insert values in any order; the shape follows insertion order and is never rebalanced.
//! - A bottom-up pass sizes every subtree's bounding box; a top-down pass places each node.
//! - Each node becomes a circle, a centered label, and a line to its parent on a [`Surface`].
//!
//! ## Not a renderer
//!
//! This crate does not own a window or rasterize anything.
//! Hosts implement [`Surface`] over their canvas (or use the recording [`DisplayList`])
//! and the tree clears and repopulates it on every render.
//!
//! ## API overview
//!
//! - [`Tree`]: owns the nodes, the [`LayoutParams`], a [`Theme`], and the surface.
//! - [`TreeNode`]: insertion, bounds, and placement for a single subtree.
//! - [`Surface`]: `clear`, `draw_circle`, `draw_line`, `draw_label`.
//! - [`DisplayList`]: a [`Surface`] that records [`Primitive`]s.
//! - [`ParamError`]: why a parameter was rejected.
//!
//! Key operations:
//! - [`Tree::insert`] / [`Tree::insert_all`]: mutate and redraw.
//! - [`Tree::set_diameter`] and the other setters: change parameters and mark the tree dirty.
//! - [`Tree::render`] / [`Tree::render_if_dirty`]: full clear and redraw.
//! - [`Tree::layout`]: the same placement as a list of [`Placement`]s, no surface needed.
//!
//! ## Layout
//!
//! See the [`node`] module for the bounds formulas and the placement rules.
//! Layout depends only on the tree's shape and the parameters, so rebuilding the same
//! tree always yields the same picture, and moving the center translates every node.
//!
//! # Example
//!
//! ```rust
//! use grove_layout::{DisplayList, LayoutParams, Tree};
//! use kurbo::Point;
//!
//! let params = LayoutParams {
//!     center: Point::new(100.0, 20.0),
//!     diameter: 20.0,
//!     level_height: 40.0,
//!     child_separation: 10.0,
//! };
//! let mut tree = Tree::with_params(params).unwrap();
//! tree.set_surface(DisplayList::new());
//!
//! tree.insert_all(['D', 'B', 'F', 'A', 'C', 'E', 'G']);
//!
//! let list = tree.surface().unwrap();
//! assert_eq!(list.circles().count(), 7);
//! assert_eq!(list.lines().count(), 6);
//!
//! // Four leaves and three gaps.
//! assert_eq!(tree.root().unwrap().bounds().width, 4.0 * 20.0 + 3.0 * 10.0);
//! ```
//!
//! ### Batching parameter changes
//!
//! ```rust
//! use grove_layout::{DisplayList, Tree};
//!
//! let mut tree: Tree<char> = Tree::new();
//! tree.set_surface(DisplayList::new());
//! tree.insert_all("HELLO".chars());
//! let epoch = tree.epoch();
//!
//! tree.set_diameter(24.0).unwrap();
//! tree.set_child_separation(6.0).unwrap();
//! assert_eq!(tree.epoch(), epoch);
//!
//! assert!(tree.render_if_dirty());
//! assert_eq!(tree.epoch(), epoch + 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod node;
pub mod surface;
pub mod tree;
pub mod types;

pub use error::{Param, ParamError};
pub use node::TreeNode;
pub use surface::{DisplayList, Primitive, Surface};
pub use tree::{Iter, Placement, Tree};
pub use types::{Branches, Dirty, LayoutParams, Rgba8, Stroke, Theme};
