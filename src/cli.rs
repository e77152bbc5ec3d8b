//! Command-line placement calculator
//!
//! Supports:
//! - One-shot placement of a panel around an anchor
//! - Explicit container or a viewport-sized default
//! - JSON or YAML output, optionally listing every evaluated candidate

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::FlyoutConfig;
use crate::direction::Direction;
use crate::geometry::{Point, Rect, Size};
use crate::placement::{find_placement_with, Offset, PlacementRequest};

/// Compute where an anchored dropdown panel should go
#[derive(Parser, Debug)]
#[command(name = "flyout", version, about = "Compute where an anchored dropdown panel should go")]
pub struct CliArgs {
    /// Anchor rectangle
    #[arg(long, value_name = "X,Y,W,H")]
    pub anchor: Rect,

    /// Panel size
    #[arg(long, value_name = "W,H")]
    pub panel: Size,

    /// Containment rectangle (defaults to the viewport)
    #[arg(long, value_name = "X,Y,W,H")]
    pub container: Option<Rect>,

    /// Preferred direction; unknown names fall back to `down`
    #[arg(short, long, value_name = "DIR")]
    pub direction: Option<String>,

    /// Viewport size used when no container is given (overrides config)
    #[arg(long, value_name = "W,H")]
    pub viewport: Option<Size>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Also list every candidate the search evaluated
    #[arg(long)]
    pub candidates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Everything needed to run one placement from the command line
#[derive(Debug, Clone)]
pub struct PlacementJob {
    pub request: PlacementRequest,
    pub format: OutputFormat,
    pub list_candidates: bool,
}

impl CliArgs {
    /// Resolve arguments against the user's config
    pub fn into_job(self, config: &FlyoutConfig) -> Result<PlacementJob, String> {
        if self.panel.width < 0.0 || self.panel.height < 0.0 {
            return Err("panel size must be non-negative".to_string());
        }
        if self.anchor.width < 0.0 || self.anchor.height < 0.0 {
            return Err("anchor size must be non-negative".to_string());
        }

        let preferred = match self.direction.as_deref() {
            Some(name) => {
                let direction = Direction::parse_lenient(name);
                if direction.as_str() != name.trim() {
                    tracing::warn!("Unknown direction {:?}, using {}", name, direction);
                }
                direction
            }
            None => config.direction,
        };

        let container = self.container.unwrap_or_else(|| {
            let viewport = self.viewport.unwrap_or(config.viewport);
            Rect::from_origin_size(Point::ZERO, viewport)
        });

        Ok(PlacementJob {
            request: PlacementRequest {
                anchor: self.anchor,
                panel: self.panel,
                container,
                preferred,
            },
            format: self.format,
            list_candidates: self.candidates,
        })
    }
}

/// One evaluated candidate
#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    pub direction: Direction,
    pub rect: Rect,
    pub fit_ratio: f64,
}

/// Printable result of a placement
#[derive(Debug, Clone, Serialize)]
pub struct PlacementReport {
    pub direction: Direction,
    pub position: Point,
    pub fit_ratio: f64,
    pub rect: Rect,
    pub offset: Offset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CandidateReport>>,
}

impl PlacementReport {
    pub fn compute(request: &PlacementRequest, list_candidates: bool) -> Self {
        let mut candidates = Vec::new();
        let placement = find_placement_with(request, |direction, rect, fit_ratio| {
            if list_candidates {
                candidates.push(CandidateReport {
                    direction,
                    rect: *rect,
                    fit_ratio,
                });
            }
        });

        Self {
            direction: placement.direction,
            position: placement.position,
            fit_ratio: placement.fit_ratio,
            rect: placement.rect(),
            offset: placement.offset_from(Point::ZERO),
            candidates: list_candidates.then_some(candidates),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            OutputFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut full = vec!["flyout"];
        full.extend_from_slice(args);
        CliArgs::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_container_defaults_to_config_viewport() {
        let args = parse(&["--anchor", "100,100,50,20", "--panel", "200,100"]);
        let job = args.into_job(&FlyoutConfig::default()).unwrap();
        assert_eq!(job.request.container, Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert_eq!(job.request.preferred, Direction::Down);
    }

    #[test]
    fn test_viewport_flag_overrides_config() {
        let args = parse(&[
            "--anchor",
            "100,100,50,20",
            "--panel",
            "200,100",
            "--viewport",
            "800,600",
        ]);
        let job = args.into_job(&FlyoutConfig::default()).unwrap();
        assert_eq!(job.request.container, Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn test_unknown_direction_becomes_down() {
        let args = parse(&[
            "--anchor",
            "0,0,1,1",
            "--panel",
            "1,1",
            "--direction",
            "north",
        ]);
        let config = FlyoutConfig {
            direction: Direction::Up,
            ..FlyoutConfig::default()
        };
        let job = args.into_job(&config).unwrap();
        assert_eq!(job.request.preferred, Direction::Down);
    }

    #[test]
    fn test_bad_rect_is_rejected_by_parser() {
        let result = CliArgs::try_parse_from(["flyout", "--anchor", "1,2", "--panel", "1,1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_panel_rejected() {
        let args = parse(&["--anchor", "0,0,1,1", "--panel=-5,1"]);
        assert!(args.into_job(&FlyoutConfig::default()).is_err());
    }
}
