//! Dropdown state: visibility, remembered geometry and dismissal bookkeeping

use serde_json::Value;

use crate::direction::Direction;
use crate::model::PanelId;
use crate::placement::{find_placement, Placement, PlacementRequest};
use crate::source::RectHandle;

/// Whether the panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// State of a single dropdown panel
#[derive(Debug, Clone)]
pub struct DropdownModel {
    pub id: PanelId,
    pub visibility: Visibility,
    /// Preferred direction, tried before the fallback order
    pub direction: Direction,
    /// The panel itself; its current size is what gets placed
    pub panel: RectHandle,
    /// Containment used when the panel was opened without a container
    pub viewport: RectHandle,
    /// Anchor remembered for re-fits while open
    pub anchor: Option<RectHandle>,
    /// Container remembered for re-fits while open (`None` means the viewport)
    pub container: Option<RectHandle>,
    /// Data bound to the panel's contents
    pub payload: Option<Value>,
    /// Incremented on every open; stale deferred work compares against it
    pub open_epoch: u64,
    /// Outside-click listener is registered
    pub dismiss_armed: bool,
    /// The last pointer press started inside the panel
    pub press_started_inside: bool,
}

impl DropdownModel {
    pub fn new(id: PanelId, panel: RectHandle, viewport: RectHandle) -> Self {
        Self {
            id,
            visibility: Visibility::Closed,
            direction: Direction::default(),
            panel,
            viewport,
            anchor: None,
            container: None,
            payload: None,
            open_epoch: 0,
            dismiss_armed: false,
            press_started_inside: false,
        }
    }

    /// Set the preferred direction (builder pattern)
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Build a request from the current geometry of every source
    ///
    /// Returns `None` when there is no remembered anchor.
    pub fn placement_request(&self) -> Option<PlacementRequest> {
        let anchor = self.anchor.as_ref()?;
        let container = self.container.as_ref().unwrap_or(&self.viewport);
        Some(PlacementRequest {
            anchor: anchor.current(),
            panel: self.panel.current().size(),
            container: container.current(),
            preferred: self.direction,
        })
    }

    /// Compute a fresh placement against the current geometry
    pub fn place(&self) -> Option<Placement> {
        self.placement_request().map(|req| find_placement(&req))
    }

    /// Forget everything tied to the current open cycle
    pub(crate) fn reset_open_state(&mut self) {
        self.anchor = None;
        self.container = None;
        self.dismiss_armed = false;
        self.press_started_inside = false;
    }
}
