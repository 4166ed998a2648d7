//! Roster use-case service.
//!
//! # Responsibility
//! - Own the single participant collection, the diagram title and the
//!   layout config on behalf of the UI.
//! - Validate drafts before they reach the classifier.
//! - Recompute buckets, advisories and the diagram from scratch on demand.
//!
//! # Invariants
//! - Every change replaces the whole roster; derived views hold no state.
//! - A failed import leaves the current roster untouched.
//! - Log events carry counts only, never participant names.

use crate::classify::advisory::{advisories, advisory_footer, Advisory};
use crate::classify::buckets::{classify, BucketSet};
use crate::layout::diagram::{render, Diagram};
use crate::layout::geometry::LayoutConfig;
use crate::layout::svg::render_svg;
use crate::model::id::{IdGenerator, ParticipantId};
use crate::model::participant::{InputError, Participant, ParticipantDraft};
use crate::model::roster::Roster;
use crate::persist::json::{export_participants, import_participants, Coercion, PersistError};
use log::{debug, info, warn};

/// Everything derived from one roster snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterView {
    pub buckets: BucketSet,
    pub advisories: Vec<Advisory>,
    pub footer: Option<&'static str>,
    pub diagram: Diagram,
}

/// Outcome of a successful JSON import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub coercions: Vec<Coercion>,
}

/// Controller over the participant roster.
pub struct RosterService<G: IdGenerator> {
    ids: G,
    roster: Roster,
    title: String,
    config: LayoutConfig,
}

impl<G: IdGenerator> RosterService<G> {
    /// Creates an empty roster titled with the locale's default title.
    pub fn new(ids: G, config: LayoutConfig) -> Self {
        let title = config.locale.default_title().to_string();
        Self {
            ids,
            roster: Roster::default(),
            title,
            config,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Validates a draft and appends it with a generated id not already in
    /// the roster.
    ///
    /// # Errors
    /// - `InputError::EmptyName` / `InputError::NoAttributes`; the roster is
    ///   left unchanged.
    pub fn add(&mut self, draft: ParticipantDraft) -> Result<ParticipantId, InputError> {
        let roster = &self.roster;
        let taken = |id: &ParticipantId| roster.get(id).is_some();
        let participant = match draft.into_participant(&mut self.ids, &taken) {
            Ok(participant) => participant,
            Err(err) => {
                warn!(
                    "event=participant_add module=roster status=rejected reason={:?}",
                    err
                );
                return Err(err);
            }
        };
        let id = participant.id.clone();
        self.roster = self.roster.with_added(participant);
        info!(
            "event=participant_add module=roster status=ok count={}",
            self.roster.len()
        );
        Ok(id)
    }

    /// Removes a participant; returns it when it was present.
    pub fn remove(&mut self, id: &ParticipantId) -> Option<Participant> {
        let removed = self.roster.get(id).cloned()?;
        self.roster = self.roster.without(id);
        info!(
            "event=participant_remove module=roster status=ok count={}",
            self.roster.len()
        );
        Some(removed)
    }

    /// Replaces the roster with the built-in sample.
    pub fn load_sample(&mut self) {
        self.roster = Roster::sample(&mut self.ids, self.config.locale);
        info!(
            "event=sample_load module=roster status=ok count={}",
            self.roster.len()
        );
    }

    /// Replaces the roster with participants parsed from JSON text.
    ///
    /// # Errors
    /// - Whole-document failures from [`import_participants`]; the roster
    ///   is left unchanged.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary, PersistError> {
        let report = match import_participants(text, &mut self.ids, self.config.locale) {
            Ok(report) => report,
            Err(err) => {
                warn!("event=roster_import module=roster status=error error={err}");
                return Err(err);
            }
        };
        let summary = ImportSummary {
            imported: report.participants.len(),
            coercions: report.coercions,
        };
        self.roster = Roster::new(report.participants);
        info!(
            "event=roster_import module=roster status=ok count={} coerced={}",
            summary.imported,
            summary.coercions.len()
        );
        Ok(summary)
    }

    pub fn export_json(&self) -> Result<String, PersistError> {
        export_participants(self.roster.participants())
    }

    /// Classifies the current roster and lays out the diagram.
    pub fn view(&self) -> RosterView {
        let locale = self.config.locale;
        let buckets = classify(self.roster.participants());
        let advisories = advisories(&buckets, locale);
        let footer = advisory_footer(&buckets, locale);
        let diagram = render(&self.title, &buckets, &self.config);
        debug!(
            "event=roster_view module=roster status=ok total={} placed={}",
            self.roster.len(),
            buckets.placed_count()
        );
        RosterView {
            buckets,
            advisories,
            footer,
            diagram,
        }
    }

    /// Current diagram serialized as SVG.
    pub fn svg(&self) -> String {
        render_svg(&self.view().diagram, &self.config.style)
    }
}
