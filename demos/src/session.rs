// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A line-driven session: parse input, update the tree, redraw once.

use grove_layout::{LayoutParams, ParamError, Theme, Tree};
use kurbo::Point;

use crate::input::{Command, CommandError, HELP, parse_command};
use crate::svg::SvgSurface;

/// What the host should do after a line was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to show.
    Done,
    /// Show this text.
    Print(String),
    /// End the session.
    Quit,
}

/// A line could not be applied. The tree is unchanged.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The line did not parse.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// A parameter was out of range.
    #[error(transparent)]
    Param(#[from] ParamError),
}

/// A tree of characters drawn to SVG, driven by text commands.
#[derive(Debug)]
pub struct Session {
    tree: Tree<char, SvgSurface>,
    margin: f64,
}

impl Session {
    /// Start a session with an empty tree.
    pub fn new(params: LayoutParams, theme: Theme) -> Result<Self, ParamError> {
        let mut tree = Tree::with_params(params)?;
        tree.set_theme(theme);
        tree.set_surface(SvgSurface::new());
        Ok(Self { tree, margin: 10.0 })
    }

    /// The underlying tree.
    pub fn tree(&self) -> &Tree<char, SvgSurface> {
        &self.tree
    }

    /// The current drawing as an SVG document.
    pub fn svg(&self) -> String {
        self.tree
            .surface()
            .map(|s| s.finish(self.margin))
            .unwrap_or_default()
    }

    /// Handle one line of input. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, SessionError> {
        let Some(command) = parse_command(line)? else {
            return Ok(Reply::Done);
        };
        tracing::debug!(?command, "handling command");
        match command {
            Command::Insert(values) => self.tree.insert_all(values),
            Command::Reset => self.tree.reset(),
            Command::Center(x, y) => self.tree.set_center(Point::new(x, y))?,
            Command::Diameter(d) => self.tree.set_diameter(d)?,
            Command::LevelHeight(h) => self.tree.set_level_height(h)?,
            Command::Separation(s) => self.tree.set_child_separation(s)?,
            Command::Svg => return Ok(Reply::Print(self.svg())),
            Command::Help => return Ok(Reply::Print(HELP.to_owned())),
            Command::Quit => return Ok(Reply::Quit),
        }
        self.tree.render_if_dirty();
        Ok(Reply::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(LayoutParams::default(), Theme::default()).unwrap()
    }

    #[test]
    fn text_inserts_and_blank_lines_are_ignored() {
        let mut s = session();
        assert_eq!(s.handle_line("DBF").unwrap(), Reply::Done);
        assert_eq!(s.handle_line("").unwrap(), Reply::Done);
        assert_eq!(s.tree().len(), 3);
        assert_eq!(s.tree().epoch(), 1);
        assert_eq!(s.svg().matches("<circle").count(), 3);
    }

    #[test]
    fn parameter_commands_redraw() {
        let mut s = session();
        s.handle_line("M").unwrap();
        let epoch = s.tree().epoch();
        s.handle_line(":center 0 0").unwrap();
        assert_eq!(s.tree().epoch(), epoch + 1);
        assert!(s.svg().contains("<circle cx=\"0\" cy=\"0\""));
        // Same value again: nothing to redraw.
        s.handle_line(":center 0 0").unwrap();
        assert_eq!(s.tree().epoch(), epoch + 1);
    }

    #[test]
    fn errors_leave_tree_untouched() {
        let mut s = session();
        s.handle_line("AB").unwrap();
        assert!(matches!(
            s.handle_line(":diameter -1"),
            Err(SessionError::Param(_))
        ));
        assert!(matches!(
            s.handle_line(":bogus"),
            Err(SessionError::Command(_))
        ));
        assert_eq!(*s.tree().params(), LayoutParams::default());
    }

    #[test]
    fn reset_svg_and_quit() {
        let mut s = session();
        s.handle_line("XYZ").unwrap();
        s.handle_line(":reset").unwrap();
        assert!(s.tree().is_empty());
        let Reply::Print(svg) = s.handle_line(":svg").unwrap() else {
            panic!("expected svg");
        };
        assert!(!svg.contains("<circle"));
        assert_eq!(s.handle_line(":quit").unwrap(), Reply::Quit);
    }
}
