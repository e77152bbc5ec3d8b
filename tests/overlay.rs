//! Overlay stacking tests
//!
//! Open panels are layered in the order they opened; closing removes the layer.

mod common;

use common::{add_panel, scenario_anchor, test_runtime};
use flyout::{Direction, OpenOptions, Point, RectHandle};

#[test]
fn test_last_opened_panel_is_topmost() {
    let mut rt = test_runtime();
    let (a, _) = add_panel(&mut rt, Point::new(100.0, 120.0), Direction::Down);
    let (b, _) = add_panel(&mut rt, Point::new(400.0, 300.0), Direction::Down);
    let anchor = RectHandle::fixed(scenario_anchor());

    rt.open(a, anchor.clone(), None, OpenOptions::default());
    rt.open(b, anchor, None, OpenOptions::default());

    assert_eq!(rt.overlays().layers(), &[a, b]);
    assert_eq!(rt.overlays().topmost(), Some(b));
}

#[test]
fn test_close_removes_only_its_layer() {
    let mut rt = test_runtime();
    let (a, _) = add_panel(&mut rt, Point::new(100.0, 120.0), Direction::Down);
    let (b, _) = add_panel(&mut rt, Point::new(400.0, 300.0), Direction::Down);
    let anchor = RectHandle::fixed(scenario_anchor());

    rt.open(a, anchor.clone(), None, OpenOptions::default());
    rt.open(b, anchor, None, OpenOptions::default());
    rt.close(b);

    assert_eq!(rt.overlays().layers(), &[a]);
    assert!(!rt.overlays().contains(b));
}

#[test]
fn test_reopen_moves_to_top() {
    let mut rt = test_runtime();
    let (a, _) = add_panel(&mut rt, Point::new(100.0, 120.0), Direction::Down);
    let (b, _) = add_panel(&mut rt, Point::new(400.0, 300.0), Direction::Down);
    let anchor = RectHandle::fixed(scenario_anchor());

    rt.open(a, anchor.clone(), None, OpenOptions::default());
    rt.open(b, anchor.clone(), None, OpenOptions::default());
    rt.close(a);
    rt.open(a, anchor, None, OpenOptions::default());

    assert_eq!(rt.overlays().layers(), &[b, a]);
    assert_eq!(rt.overlays().len(), 2);
}

#[test]
fn test_redundant_open_keeps_stack_order() {
    let mut rt = test_runtime();
    let (a, _) = add_panel(&mut rt, Point::new(100.0, 120.0), Direction::Down);
    let (b, _) = add_panel(&mut rt, Point::new(400.0, 300.0), Direction::Down);
    let anchor = RectHandle::fixed(scenario_anchor());

    rt.open(a, anchor.clone(), None, OpenOptions::default());
    rt.open(b, anchor.clone(), None, OpenOptions::default());
    rt.open(a, anchor, None, OpenOptions::default());

    assert_eq!(rt.overlays().topmost(), Some(b));
}

#[test]
fn test_remove_panel_drops_layer() {
    let mut rt = test_runtime();
    let (a, _) = add_panel(&mut rt, Point::new(100.0, 120.0), Direction::Down);
    rt.open(a, RectHandle::fixed(scenario_anchor()), None, OpenOptions::default());

    assert!(rt.remove_panel(a));
    assert!(rt.overlays().is_empty());
    assert!(!rt.remove_panel(a));
}
