//! # API Facade
//!
//! The API layer is a **thin facade** over the [`Registry`] for callers that
//! speak the wire format: request bodies arrive as JSON text, query parameters
//! as raw strings, and failures leave as an [`ErrorBody`].
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Parses** request bodies into drafts of the addressed kind
//! - **Normalizes** query parameters (`offset`, `length`) into a [`Window`]
//! - **Shapes errors** into `{"code": 400, "message": "..."}`
//!
//! It does not validate resources or touch collections itself; that all
//! happens in the registry.
//!
//! ## Operations
//!
//! | Operation | Success | Failure |
//! |-----------|---------|---------|
//! | `create(kind, body)` | the stored resource | 400 with the violated constraint |
//! | `read_all(kind, query)` | ordered list, possibly empty | never fails |
//! | `read_one(kind, id)` | the resource | 400 `no item for this UUID` |
//! | `delete(kind, id)` | nothing | 400 `no item for this UUID` |
//!
//! ## Query Parameters
//!
//! `offset` and `length` are optional integers and may be negative. A value
//! that is not an integer at all is ignored, as if it had not been sent.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoosterError};
use crate::model::{Resource, ResourceDraft, ResourceKind};
use crate::pagination::Window;
use crate::registry::Registry;
use crate::seed::{self, SeedDocument, SeedReport};

/// The JSON error payload for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl From<&RoosterError> for ErrorBody {
    fn from(err: &RoosterError) -> Self {
        Self {
            code: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl From<RoosterError> for ErrorBody {
    fn from(err: RoosterError) -> Self {
        Self::from(&err)
    }
}

/// Raw `offset` / `length` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
}

impl ListQuery {
    pub fn new(offset: Option<&str>, length: Option<&str>) -> Self {
        Self {
            offset: offset.map(str::to_string),
            length: length.map(str::to_string),
        }
    }

    pub fn window(&self) -> Window {
        Window::new(
            parse_param("offset", self.offset.as_deref()),
            parse_param("length", self.length.as_deref()),
        )
    }
}

fn parse_param(name: &str, raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(param = name, value = raw, "ignoring non-integer query parameter");
            None
        }
    }
}

/// The main API facade.
pub struct RoosterApi {
    registry: Registry,
}

impl Default for RoosterApi {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

impl RoosterApi {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn create(&self, kind: ResourceKind, body: &str) -> Result<Resource> {
        let draft = ResourceDraft::from_json(kind, body)?;
        self.registry.create(draft)
    }

    pub fn create_value(&self, kind: ResourceKind, body: serde_json::Value) -> Result<Resource> {
        let draft = ResourceDraft::from_value(kind, body)?;
        self.registry.create(draft)
    }

    pub fn read_all(&self, kind: ResourceKind, query: &ListQuery) -> Vec<Resource> {
        self.registry.read_page(kind, &query.window())
    }

    pub fn read_one(&self, kind: ResourceKind, id: &str) -> Result<Resource> {
        self.registry.read_one(kind, id)
    }

    pub fn delete(&self, kind: ResourceKind, id: &str) -> Result<()> {
        self.registry.delete(kind, id)
    }

    /// Loads a seed document; only an unreadable document is an error.
    pub fn seed(&self, json: &str) -> Result<SeedReport> {
        let doc = SeedDocument::from_json(json)?;
        Ok(seed::load(&self.registry, doc))
    }
}
