//! Integer geometry primitives for bouncebox.
//!
//! All coordinates are whole pixels with a top-left origin. Positions and
//! velocities are [`glam::IVec2`]; the bespoke types here exist so that a
//! bounding box, an extent, and a color never get mixed up with each other.

use std::fmt;

pub use glam::IVec2;

/// A width × height extent, strictly positive for shapes.
///
/// Also serves as the extent of a world: the bounded rectangle a shape
/// moves in is nothing but a size with an implicit (0, 0) origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }

    /// The extent as a vector, for coordinate arithmetic.
    #[inline]
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned bounding box: top-left corner plus extent.
///
/// This is the unit of currency between shapes and painters; every painter
/// primitive that draws a box-like thing takes one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: IVec2, size: Size) -> Rect {
        Rect::new(pos.x, pos.y, size.width, size.height)
    }

    /// X coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// An RGB color, as painters understand it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
