//! Placement directions relative to the anchor

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the panel sits relative to its anchor
///
/// Compound names read "side, then alignment": `DownLeft` is below the anchor
/// with the panel's right edge aligned to the anchor's right edge, so the panel
/// grows towards the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Down,
    DownLeft,
    Up,
    UpLeft,
    Right,
    RightUp,
    Left,
    LeftUp,
}

impl Direction {
    /// Fallback scan order used when the preferred direction doesn't fully fit
    pub const SEARCH_ORDER: [Direction; 8] = [
        Direction::Down,
        Direction::DownLeft,
        Direction::Up,
        Direction::UpLeft,
        Direction::Right,
        Direction::RightUp,
        Direction::Left,
        Direction::LeftUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::DownLeft => "down-left",
            Direction::Up => "up",
            Direction::UpLeft => "up-left",
            Direction::Right => "right",
            Direction::RightUp => "right-up",
            Direction::Left => "left",
            Direction::LeftUp => "left-up",
        }
    }

    /// Parse a direction name, treating anything unrecognized as `Down`
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::debug!(direction = s, "unknown direction, using down");
            Direction::Down
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by the strict [`FromStr`] impl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction {:?} (expected one of: {})",
            self.0,
            Direction::SEARCH_ORDER
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::SEARCH_ORDER
            .into_iter()
            .find(|d| d.as_str() == s.trim())
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}
