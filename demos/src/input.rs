// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-oriented user input.
//!
//! Plain text inserts its characters; lines starting with `:` are commands.

use std::num::ParseFloatError;

/// Characters to insert from a line of text, or `None` if the line is blank.
///
/// Whitespace between characters is skipped, so `"D B F"` and `"DBF"` insert the same.
pub fn parse_input(line: &str) -> Option<Vec<char>> {
    let values: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    (!values.is_empty()).then_some(values)
}

/// One parsed line of input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Insert these values in order.
    Insert(Vec<char>),
    /// Drop every node.
    Reset,
    /// Move the root center.
    Center(f64, f64),
    /// Set the node diameter.
    Diameter(f64),
    /// Set the level height.
    LevelHeight(f64),
    /// Set the child separation.
    Separation(f64),
    /// Print the current drawing.
    Svg,
    /// List commands.
    Help,
    /// End the session.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The word after `:` is not a command.
    #[error("unknown command `:{0}` (try `:help`)")]
    Unknown(String),
    /// Too few arguments.
    #[error("`:{command}` expects {expected} argument(s)")]
    MissingArgument {
        /// Command name.
        command: &'static str,
        /// Number of arguments it takes.
        expected: usize,
    },
    /// An argument is not a number.
    #[error("`{arg}` is not a number")]
    BadNumber {
        /// The offending argument.
        arg: String,
        /// Parser error.
        #[source]
        source: ParseFloatError,
    },
}

/// Parse a line into a command. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(parse_input(line).map(Command::Insert));
    };
    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let command = match name {
        "reset" => Command::Reset,
        "svg" => Command::Svg,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,
        "center" => {
            let [x, y] = numbers::<2>("center", &args)?;
            Command::Center(x, y)
        }
        "diameter" => Command::Diameter(numbers::<1>("diameter", &args)?[0]),
        "level" => Command::LevelHeight(numbers::<1>("level", &args)?[0]),
        "sep" => Command::Separation(numbers::<1>("sep", &args)?[0]),
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(Some(command))
}

/// Usage text for [`Command::Help`].
pub const HELP: &str = "\
text            insert each non-space character
:center X Y     move the root
:diameter D     node size
:level H        vertical spacing
:sep S          sibling gap
:reset          remove every node
:svg            print the drawing
:quit           leave";

fn numbers<const N: usize>(
    command: &'static str,
    args: &[&str],
) -> Result<[f64; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArgument {
            command,
            expected: N,
        });
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|source| CommandError::BadNumber {
            arg: (*arg).to_owned(),
            source,
        })?;
    }
    Ok(out)
}
