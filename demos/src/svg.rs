// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that writes SVG elements.

use std::fmt::{self, Write as _};

use grove_layout::{Primitive, Rgba8, Stroke, Surface};
use kurbo::{Circle, Line, Point, Rect};

/// Accumulates SVG elements in paint order.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    body: String,
    extent: Option<Rect>,
}

impl SvgSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The elements written so far, one per line.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Union of everything drawn so far, including strokes.
    pub fn extent(&self) -> Option<Rect> {
        self.extent
    }

    /// Wrap the elements in an `<svg>` document whose view box covers the
    /// drawing plus `margin` on every side.
    pub fn finish(&self, margin: f64) -> String {
        let view = self
            .extent
            .map_or(Rect::ZERO, |r| r.inflate(margin, margin));
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\" font-family=\"sans-serif\">\n{}</svg>\n",
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            view.width(),
            view.height(),
            self.body
        )
    }

    fn grow(&mut self, primitive: &Primitive) {
        let r = primitive.bounding_box();
        self.extent = Some(self.extent.map_or(r, |e| e.union(r)));
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
        self.extent = None;
    }

    fn draw_circle(&mut self, circle: Circle, fill: Rgba8, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            circle.center.x,
            circle.center.y,
            circle.radius,
            Css(fill),
            Css(stroke.color),
            stroke.width
        );
        self.grow(&Primitive::Circle {
            circle,
            fill,
            stroke,
        });
    }

    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            line.p0.x,
            line.p0.y,
            line.p1.x,
            line.p1.y,
            Css(stroke.color),
            stroke.width
        );
        self.grow(&Primitive::Line { line, stroke });
    }

    fn draw_label(&mut self, center: Point, text: &str, color: Rgba8) {
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\">{}</text>",
            center.x,
            center.y,
            Css(color),
            Escaped(text)
        );
    }
}

/// CSS color syntax for an [`Rgba8`].
struct Css(Rgba8);

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba8 { r, g, b, a } = self.0;
        if a == u8::MAX {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "rgba({r},{g},{b},{:.3})", f64::from(a) / 255.0)
        }
    }
}

/// XML-escaped text content.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
