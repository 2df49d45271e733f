// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a tree of characters to SVG on stdout.
//!
//! Parameters come from an optional TOML file and can be overridden per flag.
//!
//! Run:
//! - `cargo run -p grove_demos --example bst_svg -- DBFACEG > tree.svg`
//! - `cargo run -p grove_demos --example bst_svg -- --config grove.toml --diameter 24 HELLO`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grove_demos::config::DemoConfig;
use grove_demos::input::parse_input;
use grove_demos::svg::SvgSurface;
use grove_layout::Tree;

#[derive(Debug, Parser)]
#[command(about = "Draw a binary search tree of characters as SVG")]
struct Args {
    /// Characters to insert, in order. Whitespace is ignored.
    values: String,
    /// TOML file with `[layout]` and `[theme]` tables.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Root center x.
    #[arg(long)]
    center_x: Option<f64>,
    /// Root center y.
    #[arg(long)]
    center_y: Option<f64>,
    /// Node diameter.
    #[arg(long)]
    diameter: Option<f64>,
    /// Vertical spacing between levels.
    #[arg(long)]
    level_height: Option<f64>,
    /// Gap between sibling subtrees.
    #[arg(long)]
    separation: Option<f64>,
    /// Padding around the drawing.
    #[arg(long, default_value_t = 10.0)]
    margin: f64,
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let mut tree: Tree<char, SvgSurface> = Tree::with_params(config.layout)?;
    tree.set_theme(config.theme);
    if let Some(x) = args.center_x {
        tree.set_center_x(x)?;
    }
    if let Some(y) = args.center_y {
        tree.set_center_y(y)?;
    }
    if let Some(d) = args.diameter {
        tree.set_diameter(d)?;
    }
    if let Some(h) = args.level_height {
        tree.set_level_height(h)?;
    }
    if let Some(s) = args.separation {
        tree.set_child_separation(s)?;
    }

    let Some(values) = parse_input(&args.values) else {
        tracing::warn!("no values given; drawing an empty tree");
        return Ok(SvgSurface::new().finish(args.margin));
    };
    tree.insert_all(values);
    tree.set_surface(SvgSurface::new());
    Ok(tree
        .surface()
        .map(|s| s.finish(args.margin))
        .unwrap_or_default())
}

fn main() -> ExitCode {
    grove_demos::init_tracing();
    match run(Args::parse()) {
        Ok(svg) => {
            print!("{svg}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
