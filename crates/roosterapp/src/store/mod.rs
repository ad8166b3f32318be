//! # Storage Layer
//!
//! Resources live in memory only, one [`Collection`] per kind.
//!
//! ## Ordering
//!
//! A collection is an insertion-ordered map from UUID value to record. The
//! insertion order is the only order there is: listing and pagination never
//! sort. Deleting shifts later items up, so the relative order of survivors is
//! unchanged.
//!
//! ## Create Pipeline
//!
//! ```text
//! draft ──► Record::validate ──► identity::assign ──► Record::assemble ──► append
//!              (fields)              (id, uniqueness)
//! ```
//!
//! All three steps are pure; the collection is only touched by the final
//! append, so a rejected draft leaves no trace.
//!
//! ## Locking
//!
//! Each collection sits behind its own `parking_lot::RwLock`. Create and delete
//! hold the write lock across the whole pipeline (the uniqueness check and the
//! append cannot interleave with another writer); reads take the read lock and
//! copy out a snapshot.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::RoosterConfig;
use crate::identity::ResourceId;
use crate::model::{Resource, ResourceKind};
use crate::validation::ValidationResult;

pub mod collection;
pub mod records;

pub use collection::Collection;

/// Output of [`Record::validate`]: checked field values plus the id the
/// caller asked for, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<F> {
    pub requested_id: Option<String>,
    pub fields: F,
}

/// A resource type a [`Collection`] can hold.
pub trait Record: Clone + Serialize + Into<Resource> + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Unvalidated create request.
    type Draft: DeserializeOwned;

    /// Everything but the id, already checked.
    type Fields;

    fn id(&self) -> &ResourceId;

    /// Checks a draft and fills in defaults. Must not have side effects.
    fn validate(draft: Self::Draft, config: &RoosterConfig) -> ValidationResult<Validated<Self::Fields>>;

    fn assemble(id: ResourceId, fields: Self::Fields) -> Self;
}
