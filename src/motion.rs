//! The bounce-movement step, as pure math.
//!
//! A step advances a position by a velocity, then resolves collisions
//! against the four walls of a world independently per axis: a coordinate
//! that would leave the world is clamped to the wall and the matching
//! velocity component is reflected. The walls that were hit come back as an
//! explicit [`Contact`] so callers can layer state transitions on top of the
//! collision result instead of re-inspecting coordinates.

use glam::IVec2;

use crate::types::Size;

/// Vertical wall hit during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallX {
    Left,
    Right,
}

/// Horizontal wall hit during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallY {
    Top,
    Bottom,
}

/// Which walls a body contacted during one step.
///
/// Both axes are resolved on every step, so a corner hit reports a contact
/// on both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub x: Option<WallX>,
    pub y: Option<WallY>,
}

impl Contact {
    pub const NONE: Contact = Contact { x: None, y: None };

    /// True if any wall was hit.
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// Advance `pos` by `vel` inside a `world`, bouncing off its walls.
///
/// Per axis: if the tentative coordinate is at or past the near wall it is
/// clamped to 0 and the velocity component reflected; else if the far edge
/// of the box is at or past the far wall, the coordinate is clamped so the
/// box touches that wall and the component reflected. A world smaller than
/// the box clamps to a negative coordinate; that is accepted, not an error.
pub fn step(pos: IVec2, vel: IVec2, size: Size, world: Size) -> (IVec2, IVec2, Contact) {
    let (x, dx, hit_x) = step_axis(pos.x, vel.x, size.width, world.width);
    let (y, dy, hit_y) = step_axis(pos.y, vel.y, size.height, world.height);

    let contact = Contact {
        x: hit_x.map(|near| if near { WallX::Left } else { WallX::Right }),
        y: hit_y.map(|near| if near { WallY::Top } else { WallY::Bottom }),
    };
    (IVec2::new(x, y), IVec2::new(dx, dy), contact)
}

/// One axis of [`step`]. `Some(true)` means the near wall was hit,
/// `Some(false)` the far wall.
fn step_axis(pos: i32, vel: i32, extent: i32, world: i32) -> (i32, i32, Option<bool>) {
    let next = pos + vel;
    if next <= 0 {
        (0, -vel, Some(true))
    } else if next + extent >= world {
        (world - extent, -vel, Some(false))
    } else {
        (next, vel, None)
    }
}
