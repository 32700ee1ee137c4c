//! Bouncing 2-D shapes in a bounded world.
//!
//! A [`Space`] holds a population of shapes: ovals, hexagons, dynamic
//! rectangles and [`Carrier`]s. Each advances by its velocity every step
//! and bounces off the walls of its world. Carriers nest other shapes:
//! their children move and paint in the carrier's own coordinate frame, so
//! a whole subtree travels and renders as a unit.
//!
//! Drawing goes through the [`Painter`] capability trait. [`LogPainter`]
//! is the bundled verification backend: it records one token per draw call,
//! which is how the examples and tests below observe shape behavior.
//!
//! ```
//! use bouncebox::{Body, Carrier, LogPainter, Oval, Size, Space};
//!
//! let mut space = Space::new();
//! let root = space.insert_carrier(Carrier::new(Body::at(10, 10).with_size(200, 200)));
//! let oval = space.insert(Oval::new(Body::at(20, 20).with_velocity(3, 4)));
//! space.add(root, oval)?;
//!
//! // one animation tick: move everything, then repaint
//! space.step_all(Size::new(500, 500));
//! let mut painter = LogPainter::new();
//! space.paint_all(&mut painter);
//! assert_eq!(painter.log(), "(rectangle 15,15,200,200)(oval 23,24,25,35)");
//! # Ok::<(), bouncebox::SpaceError>(())
//! ```

pub mod errors;
pub mod log;
pub mod motion;
pub mod painter;
pub mod shapes;
pub mod space;
pub mod types;

pub use errors::SpaceError;
pub use motion::{Contact, WallX, WallY};
pub use painter::{LogPainter, Painter, with_color, with_translation};
pub use shapes::{Body, Carrier, DynamicRect, Hexagon, Oval, Shape, ShapeKind};
pub use space::{CarrierId, ShapeId, Space};
pub use types::{Color, IVec2, Rect, Size};
