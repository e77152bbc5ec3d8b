//! Panel state following the Elm Architecture pattern
//!
//! Each dropdown owns a [`DropdownModel`]; the runtime keeps one per panel and
//! feeds messages to [`crate::update::update`].

pub mod dropdown;

pub use dropdown::{DropdownModel, Visibility};

use std::fmt;

/// Identifies one panel within a runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}
