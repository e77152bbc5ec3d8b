//! Anchored placement: candidate rectangles, fit scoring and direction search
//!
//! Everything here is pure and synchronous. A placement is recomputed from
//! scratch on every call; nothing is cached between calls because the anchor
//! and container may move at any time.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::geometry::{Point, Rect, Size};

/// Inputs for a single placement computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub anchor: Rect,
    pub panel: Size,
    pub container: Rect,
    pub preferred: Direction,
}

/// Outcome of a placement computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Top-left corner of the panel
    pub position: Point,
    /// Direction that produced `position`
    pub direction: Direction,
    /// Fraction of the panel's area inside the container, in `[0, 1]`
    pub fit_ratio: f64,
    /// Panel size the placement was computed for
    pub size: Size,
}

impl Placement {
    /// The rectangle the panel occupies
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn is_fully_visible(&self) -> bool {
        self.fit_ratio >= 1.0
    }

    /// Integer style offset relative to the panel's containing block
    ///
    /// `origin` is where the containing block sits in viewport coordinates;
    /// a fixed-position panel in an untransformed page has `Point::ZERO`.
    pub fn offset_from(&self, origin: Point) -> Offset {
        Offset {
            left: round_half_up(self.position.x - origin.x),
            top: round_half_up(self.position.y - origin.y),
        }
    }
}

/// Pixel offset applied to the panel (`left`/`top`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub left: i64,
    pub top: i64,
}

/// Rounds .5 towards positive infinity (`-2.5` becomes `-2`)
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Rectangle the panel would occupy when placed in `direction`
pub fn build_candidate(direction: Direction, anchor: &Rect, panel: Size) -> Rect {
    let (w, h) = (panel.width, panel.height);
    let (x, y) = match direction {
        Direction::Left => (anchor.left() - w, anchor.top()),
        Direction::Right => (anchor.right(), anchor.top()),
        Direction::RightUp => (anchor.right(), anchor.bottom() - h),
        Direction::LeftUp => (anchor.left() - w, anchor.bottom() - h),
        Direction::Up => (anchor.left(), anchor.top() - h),
        Direction::UpLeft => (anchor.right() - w, anchor.top() - h),
        Direction::DownLeft => (anchor.right() - w, anchor.bottom()),
        Direction::Down => (anchor.left(), anchor.bottom()),
    };
    Rect::new(x, y, w, h)
}

/// Fraction of `candidate`'s own area that lies inside `container`
///
/// The divisor is the candidate's area, not the container's, so the score is
/// not symmetric: a small rect inside a big one scores 1, the reverse does not.
pub fn fit_ratio(candidate: &Rect, container: &Rect) -> f64 {
    let width = candidate.right().min(container.right()) - candidate.left().max(container.left());
    let height =
        candidate.bottom().min(container.bottom()) - candidate.top().max(container.top());
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }

    let area = candidate.area();
    if area <= 0.0 {
        return 0.0;
    }

    // Clamp away float noise so a contained rect scores exactly 1
    ((width * height) / area).min(1.0)
}

/// Pick the direction that keeps the most of the panel visible
pub fn find_placement(request: &PlacementRequest) -> Placement {
    find_placement_with(request, |_, _, _| {})
}

/// Same as [`find_placement`], calling `probe` for every candidate evaluated
///
/// The preferred direction is scored first. If it doesn't fully fit, the
/// directions in [`Direction::SEARCH_ORDER`] are tried in turn; a candidate
/// only replaces the current best when it scores strictly higher, and the scan
/// stops at the first candidate that fits completely. When nothing overlaps the
/// container at all, the preferred candidate is kept.
pub fn find_placement_with<F>(request: &PlacementRequest, mut probe: F) -> Placement
where
    F: FnMut(Direction, &Rect, f64),
{
    let mut evaluate = |direction: Direction| {
        let rect = build_candidate(direction, &request.anchor, request.panel);
        let ratio = fit_ratio(&rect, &request.container);
        tracing::trace!(target: "placement", %direction, ratio, "candidate");
        probe(direction, &rect, ratio);
        (direction, rect, ratio)
    };

    let (mut best_dir, mut best_rect, mut best_ratio) = evaluate(request.preferred);

    if best_ratio < 1.0 {
        for direction in Direction::SEARCH_ORDER {
            let (dir, rect, ratio) = evaluate(direction);
            if ratio > best_ratio {
                best_dir = dir;
                best_rect = rect;
                best_ratio = ratio;
            }
            if ratio == 1.0 {
                break;
            }
        }
    }

    tracing::debug!(
        target: "placement",
        preferred = %request.preferred,
        chosen = %best_dir,
        ratio = best_ratio,
        "placement resolved"
    );

    Placement {
        position: best_rect.origin(),
        direction: best_dir,
        fit_ratio: best_ratio,
        size: request.panel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rect {
        Rect::new(100.0, 100.0, 50.0, 20.0)
    }

    #[test]
    fn test_candidate_formulas() {
        let a = anchor();
        let p = Size::new(200.0, 100.0);
        let cases = [
            (Direction::Left, -100.0, 100.0),
            (Direction::Right, 150.0, 100.0),
            (Direction::RightUp, 150.0, 20.0),
            (Direction::LeftUp, -100.0, 20.0),
            (Direction::Up, 100.0, 0.0),
            (Direction::UpLeft, -50.0, 0.0),
            (Direction::DownLeft, -50.0, 120.0),
            (Direction::Down, 100.0, 120.0),
        ];
        for (dir, x, y) in cases {
            let c = build_candidate(dir, &a, p);
            assert_eq!((c.x, c.y), (x, y), "direction {}", dir);
            assert_eq!(c.size(), p);
        }
    }

    #[test]
    fn test_fit_ratio_partial_overlap() {
        let candidate = Rect::new(100.0, 120.0, 200.0, 100.0);
        let container = Rect::new(0.0, 0.0, 800.0, 150.0);
        // 200 x 30 visible out of 200 x 100
        assert!((fit_ratio(&candidate, &container) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_fit_ratio_touching_edges_is_zero() {
        let candidate = Rect::new(100.0, 150.0, 200.0, 100.0);
        let container = Rect::new(0.0, 0.0, 800.0, 150.0);
        assert_eq!(fit_ratio(&candidate, &container), 0.0);
    }

    #[test]
    fn test_offset_rounding_matches_half_up() {
        let placement = Placement {
            position: Point::new(10.5, -2.5),
            direction: Direction::Down,
            fit_ratio: 1.0,
            size: Size::new(1.0, 1.0),
        };
        assert_eq!(placement.offset_from(Point::ZERO), Offset { left: 11, top: -2 });
        assert_eq!(
            placement.offset_from(Point::new(0.4, -10.0)),
            Offset { left: 10, top: 8 }
        );
    }
}
