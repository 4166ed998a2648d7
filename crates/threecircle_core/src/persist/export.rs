//! Export file naming.

use chrono::NaiveDate;

/// Kind of file produced by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Participant collection as JSON.
    Json,
    /// Rendered diagram as SVG.
    Svg,
    /// Rendered diagram as a JSON scene graph.
    Scene,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Svg => "svg",
            Self::Scene => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json | Self::Scene => "application/json",
            Self::Svg => "image/svg+xml;charset=utf-8",
        }
    }
}

/// File name for an export made on `date`, e.g. `three-circle-2026-10-19.svg`.
pub fn export_file_name(kind: ExportKind, date: NaiveDate) -> String {
    let stem = match kind {
        ExportKind::Json => "three-circle-data",
        ExportKind::Svg => "three-circle",
        ExportKind::Scene => "three-circle-scene",
    };
    format!("{stem}-{}.{}", date.format("%Y-%m-%d"), kind.extension())
}
