// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary search tree basics.
//!
//! Insert a balanced sequence and a sorted one, then print the recorded
//! display list and the node positions.
//!
//! Run:
//! - `cargo run -p grove_demos --example bst_basics`

use grove_layout::{DisplayList, LayoutParams, Primitive, Tree};
use kurbo::Point;

fn main() {
    let params = LayoutParams {
        center: Point::new(100.0, 20.0),
        diameter: 20.0,
        level_height: 40.0,
        child_separation: 10.0,
    };

    // Median-first order gives a perfect tree.
    let mut balanced = Tree::with_params(params).unwrap();
    balanced.set_surface(DisplayList::new());
    balanced.insert_all(['D', 'B', 'F', 'A', 'C', 'E', 'G']);

    println!("balanced tree, {} primitives:", balanced.surface().unwrap().len());
    for p in balanced.surface().unwrap().primitives() {
        match p {
            Primitive::Circle { circle, .. } => {
                println!("  circle {:?} r={}", circle.center, circle.radius);
            }
            Primitive::Line { line, .. } => {
                println!("  line   {:?} -> {:?}", line.p0, line.p1);
            }
            Primitive::Label { center, text, .. } => {
                println!("  label  {text:?} at {center:?}");
            }
        }
    }
    let width = balanced.root().unwrap().bounds().width;
    println!("bounding width: {width}");
    assert_eq!(width, 4.0 * 20.0 + 3.0 * 10.0);

    // Sorted order degenerates into a right chain.
    let mut chain: Tree<char> = Tree::with_params(params).unwrap();
    chain.insert_all("ABCD".chars());
    println!("sorted chain:");
    for placed in chain.layout() {
        println!("  {} at {:?} (depth {})", placed.value, placed.center, placed.depth);
    }
    assert_eq!(chain.depth(), 4);
}
