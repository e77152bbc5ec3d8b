//! Environment signals and the listener registry shared by all panels
//!
//! Panels never hold callbacks. A subscription is a `(kind, panel)` pair kept
//! by the bus under a [`SubscriptionId`]; unsubscribing hands that exact id
//! back, so a panel can only ever remove what it added.

use crate::geometry::Point;
use crate::model::PanelId;

/// The environment signal kinds a panel subscribes to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Resize,
    Scroll,
    Click,
}

/// A signal delivered by the host environment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// The viewport changed size
    Resize { width: f64, height: f64 },
    /// Something scrolled; anchors may have moved
    Scroll,
    /// A pointer press, delivered to the panel under the pointer
    PointerDown { position: Point },
    /// A completed click anywhere in the viewport
    Click { position: Point },
}

impl Signal {
    /// Bus kind this signal is routed by, if it is routed through the bus at all
    pub fn kind(&self) -> Option<SignalKind> {
        match self {
            Signal::Resize { .. } => Some(SignalKind::Resize),
            Signal::Scroll => Some(SignalKind::Scroll),
            Signal::Click { .. } => Some(SignalKind::Click),
            Signal::PointerDown { .. } => None,
        }
    }
}

/// Whether the host should keep dispatching a signal to other handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    Stop,
}

/// Handle for one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// The environment-level listener registry
pub trait SignalBus {
    fn subscribe(&mut self, kind: SignalKind, panel: PanelId) -> SubscriptionId;

    /// Remove exactly the listener registered under `id`; false if it was already gone
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Panels listening for `kind`, in subscription order
    fn subscribers(&self, kind: SignalKind) -> Vec<PanelId>;

    /// Total number of live listeners
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory signal bus
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, SignalKind, PanelId)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live listeners of one kind
    pub fn count(&self, kind: SignalKind) -> usize {
        self.listeners.iter().filter(|(_, k, _)| *k == kind).count()
    }
}

impl SignalBus for ListenerRegistry {
    fn subscribe(&mut self, kind: SignalKind, panel: PanelId) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, panel));
        tracing::trace!(target: "signals", ?kind, ?panel, id = id.0, "subscribed");
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _, _)| *sid != id);
        let removed = self.listeners.len() != before;
        tracing::trace!(target: "signals", id = id.0, removed, "unsubscribed");
        removed
    }

    fn subscribers(&self, kind: SignalKind) -> Vec<PanelId> {
        self.listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, panel)| *panel)
            .collect()
    }

    fn len(&self) -> usize {
        self.listeners.len()
    }
}
