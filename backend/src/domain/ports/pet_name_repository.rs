//! Driven port for the pet name store.

use async_trait::async_trait;

use crate::domain::{NewPetName, PetNameRecord, PetType};

use super::define_port_error;

define_port_error! {
    /// Errors raised by pet name store adapters.
    pub enum PetNameRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "pet name store connection failed: {message}",
        /// A query or insert failed during execution.
        Query { message: String } => "pet name store query failed: {message}",
    }
}

/// Persistence port for pet name records.
///
/// Implementations own id assignment and creation timestamps. Records are
/// never updated or deleted through this port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetNameRepository: Send + Sync {
    /// Return every record, or only those of `pet_type` when a filter is
    /// given, in the store's natural (ascending id) order.
    async fn list(
        &self,
        pet_type: Option<PetType>,
    ) -> Result<Vec<PetNameRecord>, PetNameRepositoryError>;

    /// Insert one record and return it with its assigned id and timestamp.
    async fn insert(&self, pet_name: &NewPetName) -> Result<PetNameRecord, PetNameRepositoryError>;
}
