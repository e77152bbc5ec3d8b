//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use flyout::commands::Notification;
use flyout::geometry::{Point, Rect, Size};
use flyout::model::PanelId;
use flyout::overlay::OverlayRegistry;
use flyout::runtime::Runtime;
use flyout::signals::ListenerRegistry;
use flyout::source::{GeometrySource, RectHandle};
use flyout::Direction;

pub const VIEWPORT: Size = Size {
    width: 800.0,
    height: 600.0,
};

/// Anchor used by the end-to-end scenarios
pub fn scenario_anchor() -> Rect {
    Rect::new(100.0, 100.0, 50.0, 20.0)
}

/// Panel size used by the end-to-end scenarios
pub fn scenario_panel() -> Size {
    Size::new(200.0, 100.0)
}

/// A panel whose rectangle and containing block tests can move around
#[derive(Debug)]
pub struct TestPanel {
    pub rect: Cell<Rect>,
    pub origin: Cell<Point>,
}

impl GeometrySource for TestPanel {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }

    fn containing_block_origin(&self) -> Point {
        self.origin.get()
    }
}

/// Create a panel at `rect` with its containing block at the viewport origin
pub fn test_panel(rect: Rect) -> (Rc<TestPanel>, RectHandle) {
    let panel = Rc::new(TestPanel {
        rect: Cell::new(rect),
        origin: Cell::new(Point::ZERO),
    });
    let handle = RectHandle::new(panel.clone());
    (panel, handle)
}

/// A movable anchor and the handle that reads it
pub fn movable(rect: Rect) -> (Rc<Cell<Rect>>, RectHandle) {
    let cell = Rc::new(Cell::new(rect));
    let handle = RectHandle::shared(cell.clone());
    (cell, handle)
}

/// Every register/deregister call, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCall {
    Register(PanelId),
    Deregister(PanelId),
}

/// Overlay registry that only records calls
#[derive(Debug, Default, Clone)]
pub struct RecordingOverlays {
    pub calls: Rc<RefCell<Vec<OverlayCall>>>,
}

impl OverlayRegistry for RecordingOverlays {
    fn register(&mut self, panel: PanelId) {
        self.calls.borrow_mut().push(OverlayCall::Register(panel));
    }

    fn deregister(&mut self, panel: PanelId) {
        self.calls.borrow_mut().push(OverlayCall::Deregister(panel));
    }
}

/// 800x600 runtime with the default bus and overlay stack
pub fn test_runtime() -> Runtime {
    Runtime::new(VIEWPORT)
}

/// 800x600 runtime whose overlay calls are recorded
pub fn recording_runtime() -> (
    Runtime<ListenerRegistry, RecordingOverlays>,
    Rc<RefCell<Vec<OverlayCall>>>,
) {
    let overlays = RecordingOverlays::default();
    let calls = overlays.calls.clone();
    (
        Runtime::with_parts(VIEWPORT, ListenerRegistry::new(), overlays),
        calls,
    )
}

/// Collect notifications emitted by a runtime
pub fn record_notifications<B, O>(
    runtime: &mut Runtime<B, O>,
) -> Rc<RefCell<Vec<(PanelId, Notification)>>>
where
    B: flyout::signals::SignalBus,
    O: OverlayRegistry,
{
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    runtime.on_notification(move |panel, notification| {
        sink.borrow_mut().push((panel, notification));
    });
    log
}

/// Add a 200x100 panel sitting at the given position
pub fn add_panel<B, O>(
    runtime: &mut Runtime<B, O>,
    at: Point,
    direction: Direction,
) -> (PanelId, Rc<TestPanel>)
where
    B: flyout::signals::SignalBus,
    O: OverlayRegistry,
{
    let (panel, handle) = test_panel(Rect::from_origin_size(at, scenario_panel()));
    let id = runtime.create_panel(handle, direction);
    (id, panel)
}
