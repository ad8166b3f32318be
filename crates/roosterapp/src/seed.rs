//! # Seeding
//!
//! The appliance boots with resources described by one JSON document:
//!
//! ```text
//! {
//!   "Alarms":        [ { "time": "06:30", "period": "daily", ... }, ... ],
//!   "Podcasts":      [ { "title": "...", "url": "...", ... }, ... ],
//!   "InternetRadio": [ { "name": "...", "url": "..." }, ... ],
//!   ...any other keys are ignored...
//! }
//! ```
//!
//! Each entry goes through the regular create path, so ids, defaults and
//! validation behave exactly as for a create request. A bad entry does not
//! spoil the document: it is logged, counted and skipped.
//!
//! Reading the document from disk is the caller's business; this module only
//! takes strings and readers.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{ResourceDraft, ResourceKind};
use crate::registry::Registry;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct SeedDocument {
    #[serde(rename = "Alarms", default)]
    pub alarms: Vec<Value>,

    #[serde(rename = "Podcasts", default)]
    pub podcasts: Vec<Value>,

    #[serde(rename = "InternetRadio", default)]
    pub radios: Vec<Value>,
}

impl SeedDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    fn entries(self) -> [(ResourceKind, Vec<Value>); 3] {
        [
            (ResourceKind::Alarms, self.alarms),
            (ResourceKind::Podcasts, self.podcasts),
            (ResourceKind::Radios, self.radios),
        ]
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindReport {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub alarms: KindReport,
    pub podcasts: KindReport,
    pub radios: KindReport,
}

impl SeedReport {
    pub fn for_kind(&self, kind: ResourceKind) -> KindReport {
        match kind {
            ResourceKind::Alarms => self.alarms,
            ResourceKind::Podcasts => self.podcasts,
            ResourceKind::Radios => self.radios,
        }
    }

    fn for_kind_mut(&mut self, kind: ResourceKind) -> &mut KindReport {
        match kind {
            ResourceKind::Alarms => &mut self.alarms,
            ResourceKind::Podcasts => &mut self.podcasts,
            ResourceKind::Radios => &mut self.radios,
        }
    }

    pub fn total_loaded(&self) -> usize {
        self.alarms.loaded + self.podcasts.loaded + self.radios.loaded
    }

    pub fn total_skipped(&self) -> usize {
        self.alarms.skipped + self.podcasts.skipped + self.radios.skipped
    }
}

/// Creates every valid entry of `doc` in `registry`, in document order.
pub fn load(registry: &Registry, doc: SeedDocument) -> SeedReport {
    let mut report = SeedReport::default();

    for (kind, entries) in doc.entries() {
        for (index, entry) in entries.into_iter().enumerate() {
            let outcome = ResourceDraft::from_value(kind, entry)
                .map_err(crate::error::RoosterError::from)
                .and_then(|draft| registry.create(draft));

            let counts = report.for_kind_mut(kind);
            match outcome {
                Ok(_) => counts.loaded += 1,
                Err(e) => {
                    tracing::warn!(%kind, index, error = %e, "skipping seed entry");
                    counts.skipped += 1;
                }
            }
        }
    }

    tracing::debug!(
        loaded = report.total_loaded(),
        skipped = report.total_skipped(),
        "seed loaded"
    );
    report
}
