// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side glue for the Grove demos.
//!
//! Grove Layout only decides where things go. This crate plays the host:
//! - [`svg::SvgSurface`] turns drawing calls into an SVG document.
//! - [`input`] parses lines of user input into insertions and commands.
//! - [`session::Session`] wires parsed commands to a tree.
//! - [`config::DemoConfig`] loads layout parameters and a theme from TOML.
//!
//! Run:
//! - `cargo run -p grove_demos --example bst_basics`
//! - `cargo run -p grove_demos --example bst_svg -- DBFACEG > tree.svg`
//! - `cargo run -p grove_demos --example bst_shell`

pub mod config;
pub mod input;
pub mod session;
pub mod svg;

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
