//! Driving port for submitting pet names.

use async_trait::async_trait;

use crate::domain::{Error, NewPetName, PetNameRecord};

/// Domain use-case port for adding a user-supplied pet name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetNameCommand: Send + Sync {
    /// Persist `pet_name` and return the stored record.
    async fn add(&self, pet_name: NewPetName) -> Result<PetNameRecord, Error>;
}
