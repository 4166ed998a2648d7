//! Fixed diagram geometry, styling and the layout config record.
//!
//! # Responsibility
//! - Hold every coordinate the renderer uses in one named record.
//! - Load layout overrides from JSON so tuning is a data change.
//!
//! # Invariants
//! - Geometry never depends on participant data.
//! - A validated config has a positive canvas, positive radii and every
//!   circle and region box inside the canvas.

use crate::locale::Locale;
use crate::model::region::{Circle, Region};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STANDARD_WIDTH: f64 = 900.0;
const STANDARD_HEIGHT: f64 = 720.0;
const STANDARD_RADIUS: f64 = 210.0;
const FAMILY_CENTER: Point = Point::new(320.0, 320.0);
const OWNERSHIP_CENTER: Point = Point::new(500.0, 320.0);
const MANAGEMENT_CENTER: Point = Point::new(410.0, 440.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Center and radius of one circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxSpec {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Per-circle table keyed by [`Circle`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerCircle<T> {
    pub family: T,
    pub ownership: T,
    pub management: T,
}

impl<T> PerCircle<T> {
    pub fn get(&self, circle: Circle) -> &T {
        match circle {
            Circle::Family => &self.family,
            Circle::Ownership => &self.ownership,
            Circle::Management => &self.management,
        }
    }
}

/// Region box table keyed by [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBoxes {
    pub family: BoxSpec,
    pub ownership: BoxSpec,
    pub management: BoxSpec,
    pub family_ownership: BoxSpec,
    pub family_management: BoxSpec,
    pub ownership_management: BoxSpec,
    pub all: BoxSpec,
}

impl RegionBoxes {
    pub fn get(&self, region: Region) -> &BoxSpec {
        match region {
            Region::Family => &self.family,
            Region::Ownership => &self.ownership,
            Region::Management => &self.management,
            Region::FamilyOwnership => &self.family_ownership,
            Region::FamilyManagement => &self.family_management,
            Region::OwnershipManagement => &self.ownership_management,
            Region::All => &self.all,
        }
    }
}

/// Legend swatch placement; swatches run left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub origin: Point,
    pub spacing: f64,
    pub swatch: f64,
    /// Label baseline relative to the swatch's top-left corner.
    pub label_offset: Point,
}

/// Every coordinate of the fixed-size diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramGeometry {
    pub width: f64,
    pub height: f64,
    /// Center of the title baseline.
    pub title: Point,
    pub circles: PerCircle<CircleSpec>,
    /// Baseline start of each circle caption.
    pub captions: PerCircle<Point>,
    pub regions: RegionBoxes,
    pub legend: LegendLayout,
}

impl DiagramGeometry {
    /// The 900x720 layout: Family top-left, Ownership top-right,
    /// Management below, all with radius 210.
    pub fn standard() -> Self {
        let (f, o, m, r) = (
            FAMILY_CENTER,
            OWNERSHIP_CENTER,
            MANAGEMENT_CENTER,
            STANDARD_RADIUS,
        );
        let circle = |center: Point| CircleSpec {
            cx: center.x,
            cy: center.y,
            r,
        };

        Self {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            title: Point::new(STANDARD_WIDTH / 2.0, 40.0),
            circles: PerCircle {
                family: circle(f),
                ownership: circle(o),
                management: circle(m),
            },
            captions: PerCircle {
                family: Point::new(f.x - 140.0, f.y - r - 10.0),
                ownership: Point::new(o.x + 80.0, o.y - r - 10.0),
                management: Point::new(m.x - 35.0, m.y + r + 24.0),
            },
            regions: RegionBoxes {
                family: BoxSpec::new(f.x - r + 10.0, f.y - 40.0, 160.0, 120.0),
                ownership: BoxSpec::new(o.x + 40.0, f.y - 40.0, 160.0, 120.0),
                management: BoxSpec::new(m.x - 80.0, m.y + 10.0, 200.0, 120.0),
                family_ownership: BoxSpec::new((f.x + o.x) / 2.0 - 90.0, f.y - 120.0, 180.0, 100.0),
                family_management: BoxSpec::new(f.x - 160.0, (f.y + m.y) / 2.0 - 30.0, 180.0, 100.0),
                ownership_management: BoxSpec::new(
                    o.x - 20.0,
                    (o.y + m.y) / 2.0 - 30.0,
                    180.0,
                    100.0,
                ),
                all: BoxSpec::new(
                    (f.x + o.x + m.x) / 3.0 - 90.0,
                    (f.y + o.y + m.y) / 3.0 - 20.0,
                    200.0,
                    120.0,
                ),
            },
            legend: LegendLayout {
                origin: Point::new(30.0, 60.0),
                spacing: 70.0,
                swatch: 12.0,
                label_offset: Point::new(18.0, 10.0),
            },
        }
    }

    pub fn circle(&self, circle: Circle) -> &CircleSpec {
        self.circles.get(circle)
    }

    pub fn region_box(&self, region: Region) -> &BoxSpec {
        self.regions.get(region)
    }

    /// Checks the geometry against the canvas.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if !(is_positive(self.width) && is_positive(self.height)) {
            return Err(LayoutConfigError::NonPositiveCanvas {
                width: self.width,
                height: self.height,
            });
        }

        for circle in Circle::ALL {
            let spec = self.circle(circle);
            if !is_positive(spec.r) {
                return Err(LayoutConfigError::NonPositiveRadius { circle });
            }
            let inside = spec.cx - spec.r >= 0.0
                && spec.cy - spec.r >= 0.0
                && spec.cx + spec.r <= self.width
                && spec.cy + spec.r <= self.height;
            if !inside {
                return Err(LayoutConfigError::CircleOutsideCanvas { circle });
            }
        }

        for region in Region::ALL {
            let area = self.region_box(region);
            if !(is_positive(area.width) && is_positive(area.height)) {
                return Err(LayoutConfigError::EmptyRegionBox { region });
            }
            let inside = area.x >= 0.0
                && area.y >= 0.0
                && area.x + area.width <= self.width
                && area.y + area.height <= self.height;
            if !inside {
                return Err(LayoutConfigError::RegionOutsideCanvas { region });
            }
        }

        Ok(())
    }
}

impl Default for DiagramGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Colors and font metrics used when the diagram is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
    pub fills: PerCircle<String>,
    pub stroke: String,
    pub background: String,
    pub title_color: String,
    pub caption_color: String,
    pub legend_color: String,
    pub placeholder_color: String,
    pub font_family: String,
    pub title_font_size: f64,
    pub caption_font_size: f64,
    pub item_font_size: f64,
    pub legend_font_size: f64,
    /// Gap between a region caption and its first name line.
    pub caption_gap: f64,
    /// Baseline-to-baseline distance of name lines.
    pub item_line_height: f64,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            fills: PerCircle {
                family: "rgba(59,130,246,0.18)".to_string(),
                ownership: "rgba(16,185,129,0.18)".to_string(),
                management: "rgba(234,179,8,0.18)".to_string(),
            },
            stroke: "rgba(0,0,0,0.25)".to_string(),
            background: "white".to_string(),
            title_color: "#111827".to_string(),
            caption_color: "#1f2937".to_string(),
            legend_color: "#374151".to_string(),
            placeholder_color: "#6b7280".to_string(),
            font_family: "'Noto Sans CJK JP','IPAexGothic','Meiryo',system-ui,sans-serif"
                .to_string(),
            title_font_size: 20.0,
            caption_font_size: 14.0,
            item_font_size: 13.0,
            legend_font_size: 12.0,
            caption_gap: 4.0,
            item_line_height: 18.0,
        }
    }
}

/// Complete layout configuration handed to the renderer.
///
/// Every field defaults, so a JSON file only names what it overrides at the
/// top level (`geometry`, `style`, `locale`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub geometry: DiagramGeometry,
    pub style: DiagramStyle,
    pub locale: Locale,
}

impl LayoutConfig {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Parses and validates a layout config document.
    pub fn from_json_str(text: &str) -> Result<Self, LayoutConfigError> {
        let config: LayoutConfig = serde_json::from_str(text).map_err(LayoutConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        self.geometry.validate()?;
        if !(is_positive(self.style.item_line_height) && is_positive(self.style.item_font_size)) {
            return Err(LayoutConfigError::InvalidFontMetrics);
        }
        Ok(())
    }
}

/// Layout config load and validation failures.
#[derive(Debug)]
pub enum LayoutConfigError {
    Parse(serde_json::Error),
    NonPositiveCanvas { width: f64, height: f64 },
    NonPositiveRadius { circle: Circle },
    CircleOutsideCanvas { circle: Circle },
    EmptyRegionBox { region: Region },
    RegionOutsideCanvas { region: Region },
    InvalidFontMetrics,
}

impl Display for LayoutConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid layout config: {err}"),
            Self::NonPositiveCanvas { width, height } => {
                write!(f, "canvas must be positive, got {width}x{height}")
            }
            Self::NonPositiveRadius { circle } => {
                write!(f, "circle `{}` must have a positive radius", circle.as_str())
            }
            Self::CircleOutsideCanvas { circle } => {
                write!(f, "circle `{}` does not fit the canvas", circle.as_str())
            }
            Self::EmptyRegionBox { region } => {
                write!(f, "region box `{}` must have a positive size", region.as_str())
            }
            Self::RegionOutsideCanvas { region } => {
                write!(f, "region box `{}` does not fit the canvas", region.as_str())
            }
            Self::InvalidFontMetrics => {
                write!(f, "item font size and line height must be positive")
            }
        }
    }
}

impl Error for LayoutConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
