//! Core logic for the three-circle (Family / Ownership / Management) diagram.
//! This crate is the single source of truth for classification and layout.

pub mod classify;
pub mod layout;
pub mod locale;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;

pub use classify::advisory::{advisories, advisory_footer, Advisory};
pub use classify::buckets::{classify, BucketSet};
pub use layout::diagram::{render, Diagram, RegionPrimitive};
pub use layout::geometry::{DiagramGeometry, DiagramStyle, LayoutConfig, LayoutConfigError};
pub use layout::svg::render_svg;
pub use locale::Locale;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::id::{IdGenerator, ParticipantId, SequentialIdGenerator, UuidIdGenerator};
pub use model::participant::{InputError, Participant, ParticipantDraft};
pub use model::region::{Circle, Region};
pub use model::roster::Roster;
pub use persist::export::{export_file_name, ExportKind};
pub use persist::json::{
    export_participants, import_participants, CoercedField, Coercion, ImportReport, PersistError,
};
pub use service::roster_service::{ImportSummary, RosterService, RosterView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
