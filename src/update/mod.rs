//! Update functions for the Elm-style architecture
//!
//! All dropdown state transformations flow through these functions.

mod dropdown;

use crate::commands::Cmd;
use crate::messages::DropdownMsg;
use crate::model::DropdownModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dropdown::update_dropdown;

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// model's invariants after every message.
#[inline]
pub fn update(model: &mut DropdownModel, msg: DropdownMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_dropdown(model, msg)
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut DropdownModel, msg: DropdownMsg) -> Option<Cmd> {
    let msg_name = msg.name();
    let _span = span!(Level::DEBUG, "update", panel = %model.id, msg = msg_name).entered();

    let before = model.visibility;
    debug!(target: "message", msg = msg_name, "processing");

    let result = update_dropdown(model, msg);

    if before != model.visibility {
        debug!(
            target: "visibility",
            from = ?before,
            to = ?model.visibility,
            "state changed"
        );
    }

    model.assert_invariants_with_context(msg_name);
    result
}
