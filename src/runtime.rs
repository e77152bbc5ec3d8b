//! Host-side runtime: owns panels and executes their commands
//!
//! The runtime is the only place side effects happen. It routes environment
//! signals to the panels subscribed to them, runs deferred messages one tick
//! later, and keeps the signal bus and overlay registry in step with every
//! panel's visibility.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

use crate::commands::{Cmd, Notification};
use crate::direction::Direction;
use crate::geometry::{Point, Rect, Size};
use crate::messages::{DropdownMsg, OpenOptions};
use crate::model::{DropdownModel, PanelId};
use crate::overlay::{OverlayRegistry, OverlayStack};
use crate::placement::{Offset, Placement};
use crate::signals::{ListenerRegistry, Propagation, Signal, SignalBus, SignalKind, SubscriptionId};
use crate::source::RectHandle;
use crate::update::update;

/// Callback for panel lifecycle notifications
pub type NotificationListener = Box<dyn FnMut(PanelId, Notification)>;

/// Handle returned by [`Runtime::on_notification`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug)]
struct PanelEntry {
    model: DropdownModel,
    applied: Option<(Placement, Offset)>,
    placements_applied: u64,
}

/// Owns a set of dropdown panels and the environment they live in
pub struct Runtime<B = ListenerRegistry, O = OverlayStack> {
    viewport: Rc<Cell<Rect>>,
    panels: BTreeMap<PanelId, PanelEntry>,
    next_panel: u64,
    bus: B,
    overlays: O,
    subscriptions: HashMap<(PanelId, SignalKind), SubscriptionId>,
    deferred: VecDeque<(PanelId, DropdownMsg)>,
    listeners: Vec<(ListenerId, NotificationListener)>,
    next_listener: u64,
}

impl Runtime {
    /// Runtime with the in-memory bus and overlay stack
    pub fn new(viewport: Size) -> Self {
        Self::with_parts(viewport, ListenerRegistry::new(), OverlayStack::new())
    }
}

impl<B: SignalBus, O: OverlayRegistry> Runtime<B, O> {
    pub fn with_parts(viewport: Size, bus: B, overlays: O) -> Self {
        Self {
            viewport: Rc::new(Cell::new(Rect::new(
                0.0,
                0.0,
                viewport.width,
                viewport.height,
            ))),
            panels: BTreeMap::new(),
            next_panel: 1,
            bus,
            overlays,
            subscriptions: HashMap::new(),
            deferred: VecDeque::new(),
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    /// The full visible viewport, used when a panel opens without a container
    pub fn viewport(&self) -> Rect {
        self.viewport.get()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn overlays(&self) -> &O {
        &self.overlays
    }

    /// Add a closed panel whose geometry is read from `panel`
    pub fn create_panel(&mut self, panel: RectHandle, direction: Direction) -> PanelId {
        let id = PanelId(self.next_panel);
        self.next_panel += 1;

        let viewport = RectHandle::shared(self.viewport.clone());
        let model = DropdownModel::new(id, panel, viewport).with_direction(direction);
        self.panels.insert(
            id,
            PanelEntry {
                model,
                applied: None,
                placements_applied: 0,
            },
        );
        tracing::debug!(%id, %direction, "panel created");
        id
    }

    /// Close (if needed) and forget a panel
    pub fn remove_panel(&mut self, id: PanelId) -> bool {
        self.close(id);
        self.deferred.retain(|(panel, _)| *panel != id);
        self.panels.remove(&id).is_some()
    }

    pub fn model(&self, id: PanelId) -> Option<&DropdownModel> {
        self.panels.get(&id).map(|e| &e.model)
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.model(id).is_some_and(DropdownModel::is_open)
    }

    /// Last placement applied to the panel
    pub fn placement(&self, id: PanelId) -> Option<Placement> {
        self.panels.get(&id)?.applied.map(|(p, _)| p)
    }

    /// Last integer offset applied to the panel
    pub fn offset(&self, id: PanelId) -> Option<Offset> {
        self.panels.get(&id)?.applied.map(|(_, o)| o)
    }

    /// How many placements have been applied to the panel so far
    pub fn placements_applied(&self, id: PanelId) -> u64 {
        self.panels.get(&id).map_or(0, |e| e.placements_applied)
    }

    /// Register a listener for shown/hidden notifications
    pub fn on_notification(
        &mut self,
        listener: impl FnMut(PanelId, Notification) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a notification listener; `false` if it was already gone
    pub fn remove_notification_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    /// Show a panel next to `anchor`, inside `container` or the viewport
    pub fn open(
        &mut self,
        id: PanelId,
        anchor: RectHandle,
        container: Option<RectHandle>,
        options: OpenOptions,
    ) {
        self.send(
            id,
            DropdownMsg::Open {
                anchor,
                container,
                options,
            },
        );
    }

    pub fn close(&mut self, id: PanelId) {
        self.send(id, DropdownMsg::Close);
    }

    /// Recompute a panel's placement from current geometry
    pub fn refit(&mut self, id: PanelId) {
        self.send(id, DropdownMsg::Refit);
    }

    /// Feed one message to a panel and execute the resulting commands
    pub fn send(&mut self, id: PanelId, msg: DropdownMsg) -> Propagation {
        let Some(entry) = self.panels.get_mut(&id) else {
            tracing::warn!(%id, msg = msg.name(), "message for unknown panel");
            return Propagation::Continue;
        };

        match update(&mut entry.model, msg) {
            Some(cmd) => self.execute(cmd),
            None => Propagation::Continue,
        }
    }

    /// Deliver an environment signal
    pub fn dispatch(&mut self, signal: Signal) -> Propagation {
        match signal {
            Signal::Resize { width, height } => {
                self.viewport.set(Rect::new(0.0, 0.0, width, height));
                self.refit_subscribers(SignalKind::Resize);
                Propagation::Continue
            }
            Signal::Scroll => {
                self.refit_subscribers(SignalKind::Scroll);
                Propagation::Continue
            }
            Signal::PointerDown { position } => {
                let hit: Vec<PanelId> = self
                    .panels
                    .values()
                    .filter(|e| e.model.is_open() && e.model.panel.current().contains(position))
                    .map(|e| e.model.id)
                    .collect();
                for id in hit {
                    self.send(id, DropdownMsg::PointerDown { within_panel: true });
                }
                Propagation::Continue
            }
            Signal::Click { position } => {
                if let Some(propagation) = self.release_pressed_panels(position) {
                    return propagation;
                }

                let mut propagation = Propagation::Continue;
                for id in self.bus.subscribers(SignalKind::Click) {
                    let Some(entry) = self.panels.get(&id) else {
                        continue;
                    };
                    let within_panel = entry.model.panel.current().contains(position);
                    if self.send(id, DropdownMsg::Click { within_panel }) == Propagation::Stop {
                        propagation = Propagation::Stop;
                    }
                }
                propagation
            }
        }
    }

    /// Run everything deferred before this call
    ///
    /// Messages deferred while these run wait for the next call, the same way
    /// a zero-delay timer set inside a timer callback fires on a later tick.
    pub fn run_deferred(&mut self) -> usize {
        let batch: Vec<_> = self.deferred.drain(..).collect();
        let count = batch.len();
        for (id, msg) in batch {
            self.send(id, msg);
        }
        count
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Finish a press that started inside a panel
    ///
    /// Every pressed panel sees the release, armed or not, so the flag never
    /// outlives its gesture. A release outside the pressed panel ends the
    /// click here: no other panel gets to dismiss on it.
    fn release_pressed_panels(&mut self, position: Point) -> Option<Propagation> {
        let pressed: Vec<(PanelId, bool)> = self
            .panels
            .values()
            .filter(|e| e.model.is_open() && e.model.press_started_inside)
            .map(|e| (e.model.id, e.model.panel.current().contains(position)))
            .collect();

        let mut swallowed = false;
        for (id, within_panel) in pressed {
            if self.send(id, DropdownMsg::Click { within_panel }) == Propagation::Stop {
                swallowed = true;
            }
        }

        if swallowed {
            tracing::debug!(?position, "release outside pressed panel, click swallowed");
            Some(Propagation::Stop)
        } else {
            None
        }
    }

    fn refit_subscribers(&mut self, kind: SignalKind) {
        for id in self.bus.subscribers(kind) {
            self.send(id, DropdownMsg::Refit);
        }
    }

    fn execute(&mut self, cmd: Cmd) -> Propagation {
        let mut propagation = Propagation::Continue;

        for cmd in cmd.flatten() {
            match cmd {
                Cmd::ApplyPlacement {
                    panel,
                    placement,
                    offset,
                } => {
                    if let Some(entry) = self.panels.get_mut(&panel) {
                        tracing::trace!(
                            %panel,
                            direction = %placement.direction,
                            left = offset.left,
                            top = offset.top,
                            "placement applied"
                        );
                        entry.applied = Some((placement, offset));
                        entry.placements_applied += 1;
                    }
                }
                Cmd::RegisterOverlay(panel) => self.overlays.register(panel),
                Cmd::DeregisterOverlay(panel) => self.overlays.deregister(panel),
                Cmd::Subscribe { panel, kind } => {
                    if self.subscriptions.contains_key(&(panel, kind)) {
                        tracing::warn!(%panel, ?kind, "already subscribed");
                        continue;
                    }
                    let id = self.bus.subscribe(kind, panel);
                    self.subscriptions.insert((panel, kind), id);
                }
                Cmd::Unsubscribe { panel, kind } => {
                    match self.subscriptions.remove(&(panel, kind)) {
                        Some(id) => {
                            self.bus.unsubscribe(id);
                        }
                        None => tracing::warn!(%panel, ?kind, "unsubscribe without subscription"),
                    }
                }
                Cmd::Defer { panel, msg } => self.deferred.push_back((panel, msg)),
                Cmd::Emit {
                    panel,
                    notification,
                } => {
                    tracing::debug!(%panel, ?notification, "notify");
                    for (_, listener) in &mut self.listeners {
                        listener(panel, notification);
                    }
                }
                Cmd::StopPropagation => propagation = Propagation::Stop,
                Cmd::None | Cmd::Batch(_) => {}
            }
        }

        propagation
    }
}
