//! The painting capability contract and its verification backend.
//!
//! Every shape draws through a [`Painter`]: a small set of primitive draw
//! operations plus two pieces of shared mutable state, the active color and
//! the coordinate origin. Temporary mutation of that shared state goes
//! through [`with_color`] and [`with_translation`], which restore the prior
//! state on every exit path.
//!
//! A real drawing surface lives outside this crate. [`LogPainter`] is the
//! in-crate backend: it records one deterministic token per call, which is
//! how shape behavior gets asserted in tests.

use glam::IVec2;

use crate::types::{Color, Rect};

/// A type that offers primitive drawing operations.
///
/// Coordinates are integer pixels with a top-left origin, shifted by any
/// translation currently in effect. The whole trait takes `&mut self`: a
/// painter is a stateful device context, and even reads like [`color`]
/// may record themselves on verification backends.
///
/// [`color`]: Painter::color
pub trait Painter {
    /// Draws the outline of a rectangle.
    fn draw_rect(&mut self, bounds: Rect);

    /// Draws the outline of an oval inscribed in `bounds`.
    fn draw_oval(&mut self, bounds: Rect);

    /// Draws a line segment from (x1, y1) to (x2, y2).
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Draws a rectangle filled with the active color.
    fn fill_rect(&mut self, bounds: Rect);

    /// The active color.
    fn color(&mut self) -> Color;

    /// Replaces the active color.
    fn set_color(&mut self, color: Color);

    /// Shifts the coordinate origin by (dx, dy).
    ///
    /// Every call must be paired with an equal-and-opposite call so that
    /// later drawing observes the prior origin; prefer [`with_translation`].
    fn translate(&mut self, dx: i32, dy: i32);

    /// Draws `text` centered horizontally and vertically within `bounds`.
    fn draw_centered_text(&mut self, text: &str, bounds: Rect);
}

/// Runs `f` with the painter's origin shifted by `offset`.
///
/// The shift is undone when `f` returns, and also if it unwinds, so sibling
/// subtrees always observe a balanced coordinate frame.
pub fn with_translation<R>(
    painter: &mut dyn Painter,
    offset: IVec2,
    f: impl FnOnce(&mut dyn Painter) -> R,
) -> R {
    struct Restore<'a> {
        painter: &'a mut dyn Painter,
        offset: IVec2,
    }
    impl Drop for Restore<'_> {
        fn drop(&mut self) {
            self.painter.translate(-self.offset.x, -self.offset.y);
        }
    }

    painter.translate(offset.x, offset.y);
    let mut scope = Restore { painter, offset };
    f(&mut *scope.painter)
}

/// Runs `f` with `color` as the painter's active color, restoring the
/// previous color afterwards.
pub fn with_color<R>(
    painter: &mut dyn Painter,
    color: Color,
    f: impl FnOnce(&mut dyn Painter) -> R,
) -> R {
    struct Restore<'a> {
        painter: &'a mut dyn Painter,
        previous: Color,
    }
    impl Drop for Restore<'_> {
        fn drop(&mut self) {
            self.painter.set_color(self.previous);
        }
    }

    let previous = painter.color();
    painter.set_color(color);
    let mut scope = Restore { painter, previous };
    f(&mut *scope.painter)
}

/// A [`Painter`] that logs every request instead of drawing.
///
/// Each call appends one token to the log, e.g. `(oval 100,20,25,35)`.
/// `translate` logs nothing, but the running origin is tracked so tests can
/// assert it nets out to zero after a paint pass.
#[derive(Debug, Default)]
pub struct LogPainter {
    log: String,
    color: Color,
    origin: IVec2,
}

impl LogPainter {
    pub fn new() -> LogPainter {
        LogPainter::default()
    }

    /// The accumulated log of draw requests.
    pub fn log(&self) -> &str {
        &self.log
    }

    /// The net origin translation currently in effect.
    pub fn origin(&self) -> IVec2 {
        self.origin
    }
}

impl Painter for LogPainter {
    fn draw_rect(&mut self, bounds: Rect) {
        self.log.push_str(&format!("(rectangle {bounds})"));
    }

    fn draw_oval(&mut self, bounds: Rect) {
        self.log.push_str(&format!("(oval {bounds})"));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.log.push_str(&format!("(line {x1},{y1},{x2},{y2})"));
    }

    fn fill_rect(&mut self, bounds: Rect) {
        self.log.push_str(&format!("(rectangle-filled {bounds})"));
    }

    fn color(&mut self) -> Color {
        self.log.push_str("(get color)");
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.log.push_str("(set color)");
        self.color = color;
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.origin += IVec2::new(dx, dy);
    }

    fn draw_centered_text(&mut self, _text: &str, _bounds: Rect) {
        self.log.push_str("(draw centered text)");
    }
}
