//! Shape types for the bouncing world.
//!
//! Every shape owns a [`Body`] (position, velocity, size, optional label)
//! and supplies one shape-specific paint primitive. The variant set is
//! closed, so dispatch goes through [`ShapeKind`] rather than open-ended
//! trait objects.

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use crate::motion::{self, Contact};
use crate::painter::{self, Painter};
use crate::space::ShapeId;
use crate::types::{Color, Rect, Size};

/// State common to every shape: an axis-aligned bounding box moving with a
/// constant velocity, plus an optional label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    pos: IVec2,
    vel: IVec2,
    size: Size,
    text: Option<String>,
}

impl Body {
    pub const DEFAULT_VELOCITY: IVec2 = IVec2::new(5, 5);
    pub const DEFAULT_SIZE: Size = Size::new(25, 35);

    /// A body at the origin with the default velocity and size.
    pub fn new() -> Body {
        Body::at(0, 0)
    }

    /// A body at (x, y) with the default velocity and size.
    pub fn at(x: i32, y: i32) -> Body {
        Body {
            pos: IVec2::new(x, y),
            vel: Body::DEFAULT_VELOCITY,
            size: Body::DEFAULT_SIZE,
            text: None,
        }
    }

    pub fn with_velocity(mut self, dx: i32, dy: i32) -> Body {
        self.vel = IVec2::new(dx, dy);
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Body {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Body {
        self.text = Some(text.into());
        self
    }

    /// Top-left corner of the bounding box.
    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn velocity(&self) -> IVec2 {
        self.vel
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The bounding box: position plus size.
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// The label, if one has been set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Advances this body one step inside `world`, bouncing off its walls,
    /// and reports which walls were hit.
    pub(crate) fn step(&mut self, world: Size) -> Contact {
        let (pos, vel, contact) = motion::step(self.pos, self.vel, self.size, world);
        self.pos = pos;
        self.vel = vel;
        contact
    }
}

impl Default for Body {
    fn default() -> Body {
        Body::new()
    }
}

/// Behavior common to all shape variants.
///
/// `paint_shape` is the variant-specific primitive only; label text and
/// carrier recursion are layered on by [`Space::paint`].
///
/// [`Space::paint`]: crate::space::Space::paint
#[enum_dispatch]
pub trait Shape {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Issues this variant's primitive draw calls.
    fn paint_shape(&self, painter: &mut dyn Painter);

    /// Hook run after each movement step with the walls that were hit.
    fn on_moved(&mut self, contact: Contact) {
        let _ = contact;
    }
}

/// The closed set of shape variants.
#[enum_dispatch(Shape)]
#[derive(Clone, Debug)]
pub enum ShapeKind {
    Oval,
    Hexagon,
    DynamicRect,
    Carrier,
}

/// A plain oval, drawn inscribed in its bounding box.
#[derive(Clone, Debug, Default)]
pub struct Oval {
    body: Body,
}

impl Oval {
    pub fn new(body: Body) -> Oval {
        Oval { body }
    }
}

impl Shape for Oval {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn paint_shape(&self, painter: &mut dyn Painter) {
        painter.draw_oval(self.body.bounds());
    }
}

/// A hexagon outline.
///
/// Narrow hexagons (width ≤ 40) degenerate to a four-segment diamond;
/// wider ones get six segments with fixed 20-pixel corner insets.
#[derive(Clone, Debug, Default)]
pub struct Hexagon {
    body: Body,
}

impl Hexagon {
    /// Widths at or below this paint as the four-segment diamond.
    pub const SMALL_WIDTH: i32 = 40;
    /// Horizontal inset of the top and bottom corners of a regular hexagon.
    pub const CORNER_INSET: i32 = 20;

    pub fn new(body: Body) -> Hexagon {
        Hexagon { body }
    }
}

impl Shape for Hexagon {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn paint_shape(&self, painter: &mut dyn Painter) {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.body.bounds();
        let mid_y = y + height / 2;

        if width <= Hexagon::SMALL_WIDTH {
            let mid_x = x + width / 2;
            painter.draw_line(x, mid_y, mid_x, y);
            painter.draw_line(mid_x, y, x + width, mid_y);
            painter.draw_line(x + width, mid_y, mid_x, y + height);
            painter.draw_line(mid_x, y + height, x, mid_y);
        } else {
            let inset = Hexagon::CORNER_INSET;
            painter.draw_line(x, mid_y, x + inset, y);
            painter.draw_line(x + inset, y, x + width - inset, y);
            painter.draw_line(x + width - inset, y, x + width, mid_y);
            painter.draw_line(x + width, mid_y, x + width - inset, y + height);
            painter.draw_line(x + width - inset, y + height, x + inset, y + height);
            painter.draw_line(x + inset, y + height, x, mid_y);
        }
    }
}

/// A rectangle that fills itself with a color when it bounces off the top
/// or bottom wall and empties again off the left or right wall.
#[derive(Clone, Debug)]
pub struct DynamicRect {
    body: Body,
    color: Color,
    filled: bool,
}

impl DynamicRect {
    /// An unfilled white rectangle.
    pub fn new(body: Body) -> DynamicRect {
        DynamicRect {
            body,
            color: Color::WHITE,
            filled: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> DynamicRect {
        self.color = color;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }
}

impl Shape for DynamicRect {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    // Vertical contact is checked first, so a corner hit resolves to filled.
    fn on_moved(&mut self, contact: Contact) {
        if contact.y.is_some() {
            self.filled = true;
        } else if contact.x.is_some() {
            self.filled = false;
        }
    }

    fn paint_shape(&self, painter: &mut dyn Painter) {
        let bounds = self.body.bounds();
        if self.filled {
            painter::with_color(painter, self.color, |p| p.fill_rect(bounds));
        } else {
            painter.draw_rect(bounds);
        }
    }
}

/// A shape that carries other shapes.
///
/// Children live in the carrier's coordinate frame; moving and painting a
/// carrier cascades to them, which is driven by
/// [`Space`](crate::space::Space) since the children themselves are stored
/// there. The primitive here draws only the carrier's own frame.
#[derive(Clone, Debug, Default)]
pub struct Carrier {
    body: Body,
    pub(crate) children: Vec<ShapeId>,
}

impl Carrier {
    pub fn new(body: Body) -> Carrier {
        Carrier {
            body,
            children: Vec::new(),
        }
    }

    /// Immediate children, in insertion order.
    pub fn children(&self) -> &[ShapeId] {
        &self.children
    }
}

impl Shape for Carrier {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn paint_shape(&self, painter: &mut dyn Painter) {
        painter.draw_rect(self.body.bounds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{WallX, WallY};
    use crate::painter::LogPainter;

    #[test]
    fn body_defaults_match_original_constants() {
        let body = Body::new();
        assert_eq!(body.pos(), IVec2::ZERO);
        assert_eq!(body.velocity(), IVec2::new(5, 5));
        assert_eq!(body.size(), Size::new(25, 35));
        assert_eq!(body.text(), None);
    }

    #[test]
    fn body_builder_chain() {
        let body = Body::at(50, 200)
            .with_velocity(10, 20)
            .with_size(40, 40)
            .with_text("hello");
        assert_eq!(body.bounds(), Rect::new(50, 200, 40, 40));
        assert_eq!(body.velocity(), IVec2::new(10, 20));
        assert_eq!(body.text(), Some("hello"));
    }

    #[test]
    fn oval_paints_its_bounds() {
        let oval = Oval::new(Body::at(100, 20).with_velocity(12, 15));
        let mut painter = LogPainter::new();
        oval.paint_shape(&mut painter);
        assert_eq!(painter.log(), "(oval 100,20,25,35)");
    }

    #[test]
    fn small_hexagon_paints_four_segments() {
        let hex = Hexagon::new(Body::at(0, 0).with_size(40, 40));
        let mut painter = LogPainter::new();
        hex.paint_shape(&mut painter);
        assert_eq!(painter.log().matches("(line").count(), 4);
        assert_eq!(
            painter.log(),
            "(line 0,20,20,0)(line 20,0,40,20)(line 40,20,20,40)(line 20,40,0,20)"
        );
    }

    #[test]
    fn regular_hexagon_paints_six_segments() {
        let hex = Hexagon::new(Body::at(0, 0).with_size(41, 40));
        let mut painter = LogPainter::new();
        hex.paint_shape(&mut painter);
        assert_eq!(painter.log().matches("(line").count(), 6);
    }

    #[test]
    fn regular_hexagon_uses_corner_insets() {
        let hex = Hexagon::new(Body::at(10, 10).with_size(80, 40));
        let mut painter = LogPainter::new();
        hex.paint_shape(&mut painter);
        assert_eq!(
            painter.log(),
            "(line 10,30,30,10)(line 30,10,70,10)(line 70,10,90,30)\
             (line 90,30,70,50)(line 70,50,30,50)(line 30,50,10,30)"
        );
    }

    #[test]
    fn dynamic_rect_fills_on_vertical_contact() {
        let mut rect = DynamicRect::new(Body::new());
        assert!(!rect.is_filled());
        rect.on_moved(Contact {
            x: None,
            y: Some(WallY::Top),
        });
        assert!(rect.is_filled());
    }

    #[test]
    fn dynamic_rect_unfills_on_horizontal_contact() {
        let mut rect = DynamicRect::new(Body::new());
        rect.on_moved(Contact {
            x: None,
            y: Some(WallY::Bottom),
        });
        rect.on_moved(Contact {
            x: Some(WallX::Left),
            y: None,
        });
        assert!(!rect.is_filled());
    }

    #[test]
    fn dynamic_rect_corner_hit_resolves_to_filled() {
        let mut rect = DynamicRect::new(Body::new());
        rect.on_moved(Contact {
            x: Some(WallX::Right),
            y: Some(WallY::Bottom),
        });
        assert!(rect.is_filled());
    }

    #[test]
    fn dynamic_rect_keeps_state_without_contact() {
        let mut rect = DynamicRect::new(Body::new());
        rect.on_moved(Contact {
            x: None,
            y: Some(WallY::Top),
        });
        rect.on_moved(Contact::NONE);
        assert!(rect.is_filled());
    }

    #[test]
    fn filled_paint_swaps_color_around_fill() {
        let mut rect = DynamicRect::new(Body::at(60, 0).with_velocity(10, 20))
            .with_color(Color::rgb(100, 0, 0));
        rect.on_moved(Contact {
            x: None,
            y: Some(WallY::Top),
        });
        let mut painter = LogPainter::new();
        rect.paint_shape(&mut painter);
        assert_eq!(
            painter.log(),
            "(get color)(set color)(rectangle-filled 60,0,25,35)(set color)"
        );
    }

    #[test]
    fn unfilled_paint_is_a_plain_rectangle() {
        let rect = DynamicRect::new(Body::at(50, 200).with_velocity(10, 20));
        let mut painter = LogPainter::new();
        rect.paint_shape(&mut painter);
        assert_eq!(painter.log(), "(rectangle 50,200,25,35)");
    }

    #[test]
    fn carrier_primitive_is_its_frame() {
        let carrier = Carrier::new(Body::at(5, 5).with_size(100, 100));
        let mut painter = LogPainter::new();
        carrier.paint_shape(&mut painter);
        assert_eq!(painter.log(), "(rectangle 5,5,100,100)");
    }
}
