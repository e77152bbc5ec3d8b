//! Live geometry providers for anchors, containers and panels
//!
//! Placement always reads the *current* rectangle from a source, so a panel
//! that stays open while its anchor scrolls is re-placed against where the
//! anchor is now, not where it was when the panel opened.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::{Point, Rect};

/// Anything that can report its current bounding rectangle
pub trait GeometrySource {
    /// Current rectangle in viewport coordinates
    fn bounding_rect(&self) -> Rect;

    /// Viewport position of the block the panel's offset is relative to
    ///
    /// Only meaningful for panels. The default suits a fixed-position panel
    /// with no transformed ancestor.
    fn containing_block_origin(&self) -> Point {
        Point::ZERO
    }
}

impl GeometrySource for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

impl GeometrySource for Cell<Rect> {
    fn bounding_rect(&self) -> Rect {
        self.get()
    }
}

impl<T: GeometrySource + ?Sized> GeometrySource for Rc<T> {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn containing_block_origin(&self) -> Point {
        (**self).containing_block_origin()
    }
}

/// Adapts a closure into a geometry source
pub struct FnSource<F>(pub F);

impl<F: Fn() -> Rect> GeometrySource for FnSource<F> {
    fn bounding_rect(&self) -> Rect {
        (self.0)()
    }
}

/// Cheaply clonable, shared handle to a geometry source
#[derive(Clone)]
pub struct RectHandle(Rc<dyn GeometrySource>);

impl RectHandle {
    pub fn new(source: impl GeometrySource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// A source that never moves
    pub fn fixed(rect: Rect) -> Self {
        Self::new(rect)
    }

    /// Share an existing movable rectangle; writes to the cell are seen on the next read
    pub fn shared(cell: Rc<Cell<Rect>>) -> Self {
        Self(cell)
    }

    pub fn current(&self) -> Rect {
        self.0.bounding_rect()
    }

    pub fn containing_block_origin(&self) -> Point {
        self.0.containing_block_origin()
    }
}

impl fmt::Debug for RectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RectHandle").field(&self.current()).finish()
    }
}
