use std::fmt;

use thiserror::Error;

/// Statement of the address list synchronization that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStep {
    /// Inserting a new `locations` row.
    CreateLocation,
    /// Inserting an `entity_addresses` link row.
    InsertLink,
    /// Deleting an owner's existing `entity_addresses` rows.
    ResetLinks,
}

impl fmt::Display for StorageStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateLocation => "create-location",
            Self::InsertLink => "insert-link",
            Self::ResetLinks => "reset-links",
        };
        f.write_str(name)
    }
}

/// Database failure tagged with the synchronization step that raised it.
///
/// The enclosing transaction is left for the caller to roll back.
#[derive(Error, Debug)]
#[error("Storage failure during {step}: {source}")]
pub struct StorageError {
    pub step: StorageStep,
    #[source]
    pub source: sea_orm::DbErr,
}

impl StorageError {
    pub fn new(step: StorageStep, source: sea_orm::DbErr) -> Self {
        Self { step, source }
    }
}
