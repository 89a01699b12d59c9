//! Process-local `PetNameRepository` used when no database is configured.
//!
//! Records live for the lifetime of the process. Ids start at 1 and increase
//! by one per insert, matching a fresh `SERIAL` column.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{PetNameRepository, PetNameRepositoryError};
use crate::domain::{NewPetName, PetNameId, PetNameRecord, PetType};

#[derive(Default)]
struct Store {
    records: Vec<PetNameRecord>,
    last_id: i32,
}

/// In-memory pet name store.
#[derive(Clone)]
pub struct InMemoryPetNameRepository {
    store: Arc<Mutex<Store>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryPetNameRepository {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
            clock,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Store>, PetNameRepositoryError> {
        self.store
            .lock()
            .map_err(|_| PetNameRepositoryError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl PetNameRepository for InMemoryPetNameRepository {
    async fn list(
        &self,
        pet_type: Option<PetType>,
    ) -> Result<Vec<PetNameRecord>, PetNameRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .iter()
            .filter(|record| pet_type.is_none_or(|wanted| record.pet_type == wanted))
            .cloned()
            .collect())
    }

    async fn insert(&self, pet_name: &NewPetName) -> Result<PetNameRecord, PetNameRepositoryError> {
        let mut store = self.lock()?;
        let next_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| PetNameRepositoryError::query("pet name id space exhausted"))?;

        let record = PetNameRecord {
            id: PetNameId::new(next_id),
            name: pet_name.name.as_ref().to_owned(),
            pet_type: pet_name.pet_type,
            created_at: self.clock.utc(),
        };
        store.last_id = next_id;
        store.records.push(record.clone());
        Ok(record)
    }
}
