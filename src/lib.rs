//! flyout - anchored dropdown placement
//!
//! Places a floating panel next to an anchor so that as much of it as possible
//! stays inside a container or the viewport, and tracks the panel's open/closed
//! lifecycle following the Elm Architecture pattern: messages go through
//! [`update::update`], side effects come back as [`commands::Cmd`] and the
//! [`runtime::Runtime`] executes them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod direction;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod overlay;
pub mod placement;
pub mod runtime;
pub mod signals;
pub mod source;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::{Cmd, Notification};
pub use config::FlyoutConfig;
pub use direction::Direction;
pub use geometry::{Point, Rect, Size};
pub use messages::{DropdownMsg, OpenOptions};
pub use model::{DropdownModel, PanelId, Visibility};
pub use placement::{build_candidate, find_placement, fit_ratio, Offset, Placement, PlacementRequest};
pub use runtime::{ListenerId, Runtime};
pub use signals::{Propagation, Signal, SignalKind};
pub use source::{GeometrySource, RectHandle};
