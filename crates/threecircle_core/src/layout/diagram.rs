//! Diagram scene graph and the renderer that builds it.
//!
//! # Invariants
//! - Every coordinate is copied from `DiagramGeometry`; bucket sizes and name
//!   lengths never move anything.
//! - Region boxes appear in canonical region order and names keep bucket order.

use crate::classify::buckets::BucketSet;
use crate::layout::geometry::LayoutConfig;
use crate::model::region::{Circle, Region};
use serde::{Deserialize, Serialize};

/// Text anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub circle: Circle,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionPrimitive {
    pub circle: Circle,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Color swatch plus label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub circle: Circle,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: String,
    pub label: TextPrimitive,
}

/// Fixed-size box holding one region's caption and participant names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPrimitive {
    pub region: Region,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub caption: String,
    /// Display names in bucket order; empty renders a placeholder.
    pub names: Vec<String>,
}

/// Renderer output: everything an export surface needs to draw the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub title: TextPrimitive,
    pub circles: Vec<CirclePrimitive>,
    pub captions: Vec<CaptionPrimitive>,
    pub legend: Vec<LegendEntry>,
    pub regions: Vec<RegionPrimitive>,
}

impl Diagram {
    /// Region box for `region`; `None` when a deserialized scene lacks it.
    pub fn region(&self, region: Region) -> Option<&RegionPrimitive> {
        self.regions.iter().find(|primitive| primitive.region == region)
    }

    /// Scene graph as pretty-printed JSON for export surfaces.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Lays out the diagram for a title and bucket set.
pub fn render(title: &str, buckets: &BucketSet, config: &LayoutConfig) -> Diagram {
    let geometry = &config.geometry;
    let style = &config.style;
    let locale = config.locale;

    let circles = Circle::ALL
        .into_iter()
        .map(|circle| {
            let spec = geometry.circle(circle);
            CirclePrimitive {
                circle,
                cx: spec.cx,
                cy: spec.cy,
                r: spec.r,
                fill: style.fills.get(circle).clone(),
                stroke: style.stroke.clone(),
            }
        })
        .collect();

    let captions = Circle::ALL
        .into_iter()
        .map(|circle| {
            let anchor = geometry.captions.get(circle);
            CaptionPrimitive {
                circle,
                x: anchor.x,
                y: anchor.y,
                text: locale.circle_caption(circle).to_string(),
            }
        })
        .collect();

    let legend_layout = &geometry.legend;
    let legend = Circle::ALL
        .into_iter()
        .map(|circle| {
            let x = legend_layout.origin.x + legend_layout.spacing * circle.index() as f64;
            let y = legend_layout.origin.y;
            LegendEntry {
                circle,
                x,
                y,
                size: legend_layout.swatch,
                fill: style.fills.get(circle).clone(),
                label: TextPrimitive {
                    x: x + legend_layout.label_offset.x,
                    y: y + legend_layout.label_offset.y,
                    text: locale.legend_label(circle).to_string(),
                },
            }
        })
        .collect();

    let regions = Region::ALL
        .into_iter()
        .map(|region| {
            let area = geometry.region_box(region);
            RegionPrimitive {
                region,
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height,
                caption: locale.region_caption(region).to_string(),
                names: buckets
                    .names(region)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }
        })
        .collect();

    Diagram {
        width: geometry.width,
        height: geometry.height,
        title: TextPrimitive {
            x: geometry.title.x,
            y: geometry.title.y,
            text: title.to_string(),
        },
        circles,
        captions,
        legend,
        regions,
    }
}
