//! Overlay registration for open panels
//!
//! The placement core only promises to call `register` once when a panel
//! opens and `deregister` once when it closes. [`OverlayStack`] is the
//! in-memory registry: it keeps open panels in stacking order, topmost last.

use crate::model::PanelId;

/// Tracks top-level floating layers
pub trait OverlayRegistry {
    fn register(&mut self, panel: PanelId);
    fn deregister(&mut self, panel: PanelId);
}

/// Open panels in stacking order
#[derive(Debug, Default, Clone)]
pub struct OverlayStack {
    layers: Vec<PanelId>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently opened panel still open
    pub fn topmost(&self) -> Option<PanelId> {
        self.layers.last().copied()
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.layers.contains(&panel)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers bottom to top
    pub fn layers(&self) -> &[PanelId] {
        &self.layers
    }
}

impl OverlayRegistry for OverlayStack {
    fn register(&mut self, panel: PanelId) {
        // Re-registering moves the panel to the top
        self.layers.retain(|p| *p != panel);
        self.layers.push(panel);
    }

    fn deregister(&mut self, panel: PanelId) {
        self.layers.retain(|p| *p != panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_order_topmost_last() {
        let mut stack = OverlayStack::new();
        stack.register(PanelId(1));
        stack.register(PanelId(2));
        assert_eq!(stack.topmost(), Some(PanelId(2)));

        stack.deregister(PanelId(2));
        assert_eq!(stack.topmost(), Some(PanelId(1)));
    }

    #[test]
    fn test_register_twice_moves_to_top() {
        let mut stack = OverlayStack::new();
        stack.register(PanelId(1));
        stack.register(PanelId(2));
        stack.register(PanelId(1));
        assert_eq!(stack.layers(), &[PanelId(2), PanelId(1)]);
    }

    #[test]
    fn test_deregister_unknown_is_harmless() {
        let mut stack = OverlayStack::new();
        stack.deregister(PanelId(9));
        assert!(stack.is_empty());
    }
}
