//! The world of shapes.
//!
//! A [`Space`] owns every shape and maintains the containment graph between
//! carriers and their children: a carrier holds an ordered child list, each
//! child holds a back-reference to its one carrier, and the two sides are
//! mutated together only by [`add`](Space::add) and [`remove`](Space::remove)
//! so they can never disagree.
//!
//! Shapes are addressed by [`ShapeId`], an index into the space's slot
//! storage. Ids are minted only by insertion and shapes live as long as the
//! space, so an id from this space is always valid; indexing with an id from
//! a different space panics. [`CarrierId`] is a typed wrapper handed out
//! only for carriers, which is what lets containment operations skip a
//! "not a carrier" error case entirely.

use crate::errors::SpaceError;
use crate::painter::{self, Painter};
use crate::shapes::{Carrier, Shape, ShapeKind};
use crate::types::Size;

/// Identity of a shape within one [`Space`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(usize);

/// Identity of a shape known to be a carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CarrierId(ShapeId);

impl CarrierId {
    /// The plain shape identity of this carrier.
    pub fn id(self) -> ShapeId {
        self.0
    }
}

impl From<CarrierId> for ShapeId {
    fn from(carrier: CarrierId) -> ShapeId {
        carrier.0
    }
}

#[derive(Clone, Debug)]
struct Node {
    kind: ShapeKind,
    parent: Option<CarrierId>,
}

/// A bounded 2-D world's population of shapes.
#[derive(Clone, Debug, Default)]
pub struct Space {
    nodes: Vec<Node>,
}

impl Space {
    pub fn new() -> Space {
        Space::default()
    }

    /// Adds a shape to the space as a top-level shape and returns its id.
    pub fn insert(&mut self, shape: impl Into<ShapeKind>) -> ShapeId {
        let id = ShapeId(self.nodes.len());
        self.nodes.push(Node {
            kind: shape.into(),
            parent: None,
        });
        id
    }

    /// Adds a carrier and returns its carrier identity.
    pub fn insert_carrier(&mut self, carrier: Carrier) -> CarrierId {
        CarrierId(self.insert(carrier))
    }

    pub fn shape(&self, id: ShapeId) -> &ShapeKind {
        &self.nodes[id.0].kind
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> &mut ShapeKind {
        &mut self.nodes[id.0].kind
    }

    /// The carrier currently holding `id`, if any.
    pub fn parent(&self, id: ShapeId) -> Option<CarrierId> {
        self.nodes[id.0].parent
    }

    /// Number of shapes in the space, at any nesting depth.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level shapes (those without a carrier), in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(i, _)| ShapeId(i))
    }

    fn carrier(&self, id: CarrierId) -> &Carrier {
        match &self.nodes[id.0.0].kind {
            ShapeKind::Carrier(carrier) => carrier,
            _ => unreachable!("CarrierId always refers to a carrier node"),
        }
    }

    fn carrier_mut(&mut self, id: CarrierId) -> &mut Carrier {
        match &mut self.nodes[id.0.0].kind {
            ShapeKind::Carrier(carrier) => carrier,
            _ => unreachable!("CarrierId always refers to a carrier node"),
        }
    }

    /// Makes `child` a child of `carrier`, establishing the two-way link.
    ///
    /// Fails if the child already belongs to a carrier, if linking would
    /// create a containment cycle, or if the child's bounding box extends
    /// past the carrier's right or bottom edge. The child's left and top
    /// are deliberately not checked against the carrier's origin. On
    /// failure no link on either side changes.
    pub fn add(&mut self, carrier: CarrierId, child: ShapeId) -> Result<(), SpaceError> {
        if self.nodes[child.0].parent.is_some() {
            return Err(SpaceError::AlreadyCarried);
        }
        if carrier.id() == child || self.is_ancestor(child, carrier.id()) {
            return Err(SpaceError::WouldCycle);
        }
        let frame = self.shape(carrier.id()).body().bounds();
        let bounds = self.shape(child).body().bounds();
        if bounds.right() > frame.right() || bounds.bottom() > frame.bottom() {
            return Err(SpaceError::DoesNotFit);
        }

        self.carrier_mut(carrier).children.push(child);
        self.nodes[child.0].parent = Some(carrier);
        crate::log::debug!(?carrier, ?child, "added child to carrier");
        Ok(())
    }

    /// Detaches `child` from `carrier`, destroying the two-way link.
    ///
    /// Has no effect if the shape is not currently a child of the carrier.
    pub fn remove(&mut self, carrier: CarrierId, child: ShapeId) {
        let children = &mut self.carrier_mut(carrier).children;
        if let Some(index) = children.iter().position(|&c| c == child) {
            children.remove(index);
            self.nodes[child.0].parent = None;
            crate::log::debug!(?carrier, ?child, "removed child from carrier");
        }
    }

    /// The child at `index` within the carrier's ordered child sequence.
    pub fn shape_at(&self, carrier: CarrierId, index: usize) -> Result<ShapeId, SpaceError> {
        let children = self.carrier(carrier).children();
        children
            .get(index)
            .copied()
            .ok_or(SpaceError::IndexOutOfRange {
                index,
                count: children.len(),
            })
    }

    /// Number of immediate children of the carrier.
    pub fn shape_count(&self, carrier: CarrierId) -> usize {
        self.carrier(carrier).children().len()
    }

    /// Position of `shape` among the carrier's immediate children, if it is
    /// one. Does not search nested carriers.
    pub fn index_of(&self, carrier: CarrierId, shape: ShapeId) -> Option<usize> {
        self.carrier(carrier)
            .children()
            .iter()
            .position(|&c| c == shape)
    }

    /// True iff `shape` is an immediate child of the carrier.
    pub fn contains(&self, carrier: CarrierId, shape: ShapeId) -> bool {
        self.index_of(carrier, shape).is_some()
    }

    /// The ordered ancestry of `id`, from the outermost carrier down to and
    /// including `id` itself. A top-level shape is its own one-element path.
    pub fn path(&self, id: ShapeId) -> Vec<ShapeId> {
        let mut path = vec![id];
        let mut parent = self.nodes[id.0].parent;
        while let Some(carrier) = parent {
            path.push(carrier.id());
            parent = self.nodes[carrier.id().0].parent;
        }
        path.reverse();
        path
    }

    /// True iff `ancestor` appears above `id` in the containment graph.
    fn is_ancestor(&self, ancestor: ShapeId, id: ShapeId) -> bool {
        let mut parent = self.nodes[id.0].parent;
        while let Some(carrier) = parent {
            if carrier.id() == ancestor {
                return true;
            }
            parent = self.nodes[carrier.id().0].parent;
        }
        false
    }

    /// Moves the shape one step inside `world`, bouncing off its walls.
    ///
    /// A carrier then cascades to its children, each bouncing within the
    /// carrier's own post-move interior rather than the outer world.
    pub fn step(&mut self, id: ShapeId, world: Size) {
        let (interior, children) = {
            let node = &mut self.nodes[id.0];
            let contact = node.kind.body_mut().step(world);
            node.kind.on_moved(contact);
            match &node.kind {
                ShapeKind::Carrier(carrier) => {
                    (carrier.body().size(), carrier.children().to_vec())
                }
                _ => return,
            }
        };
        for child in children {
            self.step(child, interior);
        }
    }

    /// Moves every top-level shape (and, through carriers, every nested
    /// shape) one step inside `world`.
    pub fn step_all(&mut self, world: Size) {
        crate::log::debug!(%world, "step all");
        for index in 0..self.nodes.len() {
            if self.nodes[index].parent.is_none() {
                self.step(ShapeId(index), world);
            }
        }
    }

    /// Paints the shape: its primitive, then (for carriers) its children
    /// inside a translated coordinate frame, then its centered label if one
    /// is set and non-blank.
    ///
    /// The origin translation is restored on every exit path, so sibling
    /// shapes painted afterwards observe an unchanged frame.
    pub fn paint(&self, id: ShapeId, painter: &mut dyn Painter) {
        let node = &self.nodes[id.0];
        node.kind.paint_shape(painter);

        if let ShapeKind::Carrier(carrier) = &node.kind {
            let origin = carrier.body().pos();
            painter::with_translation(painter, origin, |painter| {
                for &child in carrier.children() {
                    self.paint(child, painter);
                }
            });
        }

        let body = node.kind.body();
        if let Some(text) = body.text() {
            if !text.trim().is_empty() {
                painter.draw_centered_text(text, body.bounds());
            }
        }
    }

    /// Paints every top-level shape in insertion order.
    pub fn paint_all(&self, painter: &mut dyn Painter) {
        for id in self.roots() {
            self.paint(id, painter);
        }
    }
}
