//! Driving port for reading the pet name collection.

use async_trait::async_trait;

use crate::domain::{Error, PetNameRecord};

/// Domain use-case port for listing every stored pet name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetNameQuery: Send + Sync {
    /// Return all records, unfiltered; empty when nothing is stored.
    async fn list_all(&self) -> Result<Vec<PetNameRecord>, Error>;
}
