//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The [`crate::runtime::Runtime`] executes them against the overlay registry,
//! the signal bus and notification listeners.

use crate::messages::DropdownMsg;
use crate::model::PanelId;
use crate::placement::{Offset, Placement};
use crate::signals::SignalKind;

/// Observable panel lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Shown,
    Hidden,
}

/// Side effects requested by `update`
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Move the panel to a freshly computed placement
    ApplyPlacement {
        panel: PanelId,
        placement: Placement,
        offset: Offset,
    },
    /// Add the panel to the overlay registry
    RegisterOverlay(PanelId),
    /// Remove the panel from the overlay registry
    DeregisterOverlay(PanelId),
    /// Start listening for an environment signal
    Subscribe { panel: PanelId, kind: SignalKind },
    /// Stop listening for an environment signal
    Unsubscribe { panel: PanelId, kind: SignalKind },
    /// Deliver `msg` to `panel` after the current dispatch has fully completed
    Defer { panel: PanelId, msg: DropdownMsg },
    /// Tell listeners about a lifecycle event
    Emit {
        panel: PanelId,
        notification: Notification,
    },
    /// Keep the signal being handled from reaching other handlers
    StopPropagation,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Whether executing this command stops propagation of the current signal
    pub fn stops_propagation(&self) -> bool {
        match self {
            Cmd::StopPropagation => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::stops_propagation),
            _ => false,
        }
    }
}
