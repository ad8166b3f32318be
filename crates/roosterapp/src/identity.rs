//! # Resource Identity
//!
//! Every resource is named by a UUID that is unique within its collection.
//!
//! ## Value vs. Text
//!
//! Callers spell UUIDs in more than one way. The appliance's own configuration
//! uses both `0a2152ef-da4f-4f26-8a77-078193da536e` and
//! `{09be8e85-a9d3-4db8-b2c5-02e3eb3ff66d}`. A [`ResourceId`] therefore keeps two
//! things:
//!
//! - the 128-bit value, used for equality, hashing and lookup
//! - the text exactly as the caller supplied it, echoed back on every read
//!
//! So `{X}` and `X` name the same resource, and a resource created as `{X}` is
//! still reported as `{X}`. Generated ids use the lowercase hyphenated form.
//!
//! ## Assignment
//!
//! [`assign`] decides the id of a resource about to be created:
//! - an omitted or empty request yields a fresh v4 UUID not already taken
//! - a supplied id is parsed and kept verbatim, or rejected as invalid
//! - a supplied id that is already taken is rejected, never overwritten

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::validation::{ValidationError, ValidationResult};

#[derive(Debug, Clone)]
pub struct ResourceId {
    uuid: Uuid,
    text: String,
}

impl ResourceId {
    pub fn generate() -> Self {
        Self::from(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<Uuid> for ResourceId {
    fn from(uuid: Uuid) -> Self {
        Self {
            uuid,
            text: uuid.hyphenated().to_string(),
        }
    }
}

impl FromStr for ResourceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let uuid = Uuid::parse_str(s).map_err(|_| ValidationError::Id(s.to_string()))?;
        Ok(Self {
            uuid,
            text: s.to_string(),
        })
    }
}

impl PartialEq for ResourceId {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for ResourceId {}

impl Hash for ResourceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl PartialEq<Uuid> for ResourceId {
    fn eq(&self, other: &Uuid) -> bool {
        self.uuid == *other
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses an id coming from a lookup. Text that is not a UUID cannot name
/// anything, so it maps to `None` instead of an error.
pub fn lookup_key(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

/// Chooses the id for a new resource.
///
/// `taken` reports whether a value is already present in the target collection.
pub fn assign<F>(requested: Option<&str>, taken: F) -> ValidationResult<ResourceId>
where
    F: Fn(&Uuid) -> bool,
{
    match requested {
        Some(text) if !text.is_empty() => {
            let id: ResourceId = text.parse()?;
            if taken(id.as_uuid()) {
                return Err(ValidationError::DuplicateId(id.text));
            }
            Ok(id)
        }
        _ => loop {
            let id = ResourceId::generate();
            if !taken(id.as_uuid()) {
                tracing::trace!(id = %id, "generated resource id");
                return Ok(id);
            }
        },
    }
}
