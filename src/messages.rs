//! Message types for the Elm-style architecture
//!
//! All dropdown state changes flow through [`DropdownMsg`].

use serde_json::Value;

use crate::direction::Direction;
use crate::source::RectHandle;

/// Optional extras for `open`
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Override the preferred direction for this and later placements
    pub direction: Option<Direction>,
    /// Data for the panel's contents; applied even if the panel is already open
    pub payload: Option<Value>,
}

impl OpenOptions {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Inputs to a dropdown's visibility state machine
#[derive(Debug, Clone)]
pub enum DropdownMsg {
    /// Show the panel next to `anchor`, kept inside `container` (or the viewport)
    Open {
        anchor: RectHandle,
        container: Option<RectHandle>,
        options: OpenOptions,
    },
    /// Hide the panel
    Close,
    /// Recompute placement from current geometry (resize/scroll)
    Refit,
    /// Start listening for outside clicks; queued one tick after `Open`
    ArmDismiss { epoch: u64 },
    /// A pointer press landed on or off the panel
    PointerDown { within_panel: bool },
    /// A click completed on or off the panel
    Click { within_panel: bool },
}

impl DropdownMsg {
    pub fn open(anchor: RectHandle, container: Option<RectHandle>) -> Self {
        DropdownMsg::Open {
            anchor,
            container,
            options: OpenOptions::default(),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            DropdownMsg::Open { .. } => "Open",
            DropdownMsg::Close => "Close",
            DropdownMsg::Refit => "Refit",
            DropdownMsg::ArmDismiss { .. } => "ArmDismiss",
            DropdownMsg::PointerDown { .. } => "PointerDown",
            DropdownMsg::Click { .. } => "Click",
        }
    }
}
