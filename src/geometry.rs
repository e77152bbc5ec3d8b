//! Geometry value types shared by placement and hit-testing
//!
//! All coordinates live in one shared space (viewport pixels). Rectangles are
//! axis-aligned and immutable; every helper here is pure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a panel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size positioned at `origin`
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Half-open point test: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// True when `other` lies entirely inside `self` (shared edges count as inside)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Error returned when parsing `x,y,w,h` or `w,h` strings
#[derive(Debug, Clone, PartialEq)]
pub enum ParseGeometryError {
    WrongArity { expected: usize, found: usize },
    InvalidNumber(String),
}

impl fmt::Display for ParseGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGeometryError::WrongArity { expected, found } => {
                write!(f, "expected {} comma-separated numbers, found {}", expected, found)
            }
            ParseGeometryError::InvalidNumber(s) => write!(f, "invalid number: {:?}", s),
        }
    }
}

impl std::error::Error for ParseGeometryError {}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], ParseGeometryError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseGeometryError::WrongArity {
            expected: N,
            found: parts.len(),
        });
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseGeometryError::InvalidNumber(part.to_string()))?;
    }
    Ok(out)
}

impl FromStr for Rect {
    type Err = ParseGeometryError;

    /// Parses `x,y,width,height`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, width, height] = parse_numbers::<4>(s)?;
        Ok(Rect::new(x, y, width, height))
    }
}

impl FromStr for Size {
    type Err = ParseGeometryError;

    /// Parses `width,height`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [width, height] = parse_numbers::<2>(s)?;
        Ok(Size::new(width, height))
    }
}
