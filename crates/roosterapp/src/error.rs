use thiserror::Error;

use crate::validation::ValidationError;

/// Message used by every kind when an identifier names nothing.
pub const NO_ITEM_FOR_UUID: &str = "no item for this UUID";

#[derive(Error, Debug)]
pub enum RoosterError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("no item for this UUID")]
    NotFound,

    #[error("Malformed request body: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RoosterError {
    /// HTTP-style status code a boundary layer should answer with.
    ///
    /// Unknown identifiers answer 400 rather than 404; clients of the
    /// appliance match on that.
    pub fn status_code(&self) -> u16 {
        match self {
            RoosterError::Validation(_) => 400,
            RoosterError::NotFound => 400,
            RoosterError::Serialization(_) => 400,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RoosterError::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, RoosterError>;
