//! Dropdown visibility state machine

use crate::commands::{Cmd, Notification};
use crate::messages::{DropdownMsg, OpenOptions};
use crate::model::{DropdownModel, Visibility};
use crate::signals::SignalKind;
use crate::source::RectHandle;

/// Handle a dropdown message
pub fn update_dropdown(model: &mut DropdownModel, msg: DropdownMsg) -> Option<Cmd> {
    match msg {
        DropdownMsg::Open {
            anchor,
            container,
            options,
        } => open(model, anchor, container, options),
        DropdownMsg::Close => close(model),
        DropdownMsg::Refit => placement_cmd(model),
        DropdownMsg::ArmDismiss { epoch } => arm_dismiss(model, epoch),
        DropdownMsg::PointerDown { within_panel } => {
            if within_panel {
                model.press_started_inside = true;
            }
            None
        }
        DropdownMsg::Click { within_panel } => click(model, within_panel),
    }
}

fn open(
    model: &mut DropdownModel,
    anchor: RectHandle,
    container: Option<RectHandle>,
    options: OpenOptions,
) -> Option<Cmd> {
    if let Some(payload) = options.payload {
        model.payload = Some(payload);
    }

    if model.is_open() {
        tracing::debug!(panel = %model.id, "already open");
        return None;
    }

    if let Some(direction) = options.direction {
        model.direction = direction;
    }

    model.visibility = Visibility::Open;
    model.anchor = Some(anchor);
    model.container = container;
    model.open_epoch += 1;
    model.dismiss_armed = false;
    model.press_started_inside = false;

    let id = model.id;
    let mut cmds = Vec::with_capacity(6);
    cmds.extend(placement_cmd(model));
    cmds.push(Cmd::RegisterOverlay(id));
    cmds.push(Cmd::Subscribe {
        panel: id,
        kind: SignalKind::Resize,
    });
    cmds.push(Cmd::Subscribe {
        panel: id,
        kind: SignalKind::Scroll,
    });
    // The gesture that opened the panel is still being dispatched; listening
    // for clicks now would let that same gesture close it again.
    cmds.push(Cmd::Defer {
        panel: id,
        msg: DropdownMsg::ArmDismiss {
            epoch: model.open_epoch,
        },
    });
    cmds.push(Cmd::Emit {
        panel: id,
        notification: Notification::Shown,
    });

    Some(Cmd::batch(cmds))
}

fn close(model: &mut DropdownModel) -> Option<Cmd> {
    if !model.is_open() {
        return None;
    }

    let id = model.id;
    let was_armed = model.dismiss_armed;
    model.visibility = Visibility::Closed;
    model.reset_open_state();

    let mut cmds = vec![
        Cmd::DeregisterOverlay(id),
        Cmd::Unsubscribe {
            panel: id,
            kind: SignalKind::Resize,
        },
        Cmd::Unsubscribe {
            panel: id,
            kind: SignalKind::Scroll,
        },
    ];
    if was_armed {
        cmds.push(Cmd::Unsubscribe {
            panel: id,
            kind: SignalKind::Click,
        });
    }
    cmds.push(Cmd::Emit {
        panel: id,
        notification: Notification::Hidden,
    });

    Some(Cmd::batch(cmds))
}

/// Place against current geometry; `None` when there is no anchor to place against
fn placement_cmd(model: &DropdownModel) -> Option<Cmd> {
    let Some(placement) = model.place() else {
        tracing::trace!(panel = %model.id, "no anchor, skipping re-fit");
        return None;
    };
    let offset = placement.offset_from(model.panel.containing_block_origin());
    Some(Cmd::ApplyPlacement {
        panel: model.id,
        placement,
        offset,
    })
}

fn arm_dismiss(model: &mut DropdownModel, epoch: u64) -> Option<Cmd> {
    if !model.is_open() || epoch != model.open_epoch || model.dismiss_armed {
        tracing::debug!(
            panel = %model.id,
            epoch,
            current = model.open_epoch,
            "dropping stale dismiss arm"
        );
        return None;
    }

    model.dismiss_armed = true;
    Some(Cmd::Subscribe {
        panel: model.id,
        kind: SignalKind::Click,
    })
}

fn click(model: &mut DropdownModel, within_panel: bool) -> Option<Cmd> {
    // A press inside followed by a release outside is a drag out of the
    // panel, not a dismissal.
    if model.press_started_inside {
        model.press_started_inside = false;
        return (!within_panel).then_some(Cmd::StopPropagation);
    }

    if within_panel || !model.dismiss_armed {
        return None;
    }

    let mut cmds = vec![Cmd::StopPropagation];
    cmds.extend(close(model));
    Some(Cmd::batch(cmds))
}

impl DropdownModel {
    /// Panic with context if the model's invariants are violated
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let open = self.is_open();
        assert_eq!(
            open,
            self.anchor.is_some(),
            "[{}] {}: anchor must be remembered exactly while open",
            context,
            self.id
        );
        assert!(
            open || !self.dismiss_armed,
            "[{}] {}: dismissal armed while closed",
            context,
            self.id
        );
        assert!(
            open || self.container.is_none(),
            "[{}] {}: container kept after close",
            context,
            self.id
        );
    }
}
