// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive session over stdin.
//!
//! Type characters to insert them; `:help` lists commands.
//!
//! Run:
//! - `cargo run -p grove_demos --example bst_shell`
//! - `echo "DBFACEG\n:svg" | cargo run -p grove_demos --example bst_shell`

use std::io::{self, BufRead, Write};

use grove_demos::session::{Reply, Session};
use grove_layout::{LayoutParams, Theme};

fn main() -> io::Result<()> {
    grove_demos::init_tracing();
    let mut session = Session::new(LayoutParams::default(), Theme::default())
        .expect("default parameters are valid");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        match session.handle_line(&line?) {
            Ok(Reply::Done) => {}
            Ok(Reply::Print(text)) => writeln!(stdout, "{text}")?,
            Ok(Reply::Quit) => break,
            Err(err) => eprintln!("error: {err}"),
        }
        stdout.flush()?;
    }
    Ok(())
}
