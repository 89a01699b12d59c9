//! Pet name domain services.
//!
//! Three thin services sit behind the driving ports: selection (random draw
//! with a built-in fallback list), ingestion (one durable insert) and listing
//! (the whole collection). None of them retries or recovers; store failures
//! are mapped once and returned to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::domain::ports::{
    GeneratePetNamesRequest, PetNameCommand, PetNameGenerator, PetNameQuery, PetNameRepository,
    PetNameRepositoryError,
};
use crate::domain::{Error, GenerationCount, NewPetName, PetNameId, PetNameRecord, PetType};

/// Names drawn from when the store holds no matching records.
pub const FALLBACK_NAMES: [&str; 24] = [
    "Buddy", "Bella", "Max", "Luna", "Charlie", "Lucy", "Cooper", "Daisy", "Milo", "Lola", "Bear",
    "Sadie", "Rocky", "Molly", "Zeus", "Sophie", "Duke", "Chloe", "Jack", "Ruby", "Oscar", "Penny",
    "Leo", "Zoe",
];

/// Exclusive upper bound for placeholder ids given to fallback records.
const PLACEHOLDER_ID_CEILING: i32 = 10_000;

fn map_repository_error(error: PetNameRepositoryError) -> Error {
    match error {
        PetNameRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("pet name store unavailable: {message}"))
        }
        PetNameRepositoryError::Query { message } => {
            Error::internal(format!("pet name store error: {message}"))
        }
    }
}

/// Draw `count` records uniformly with replacement from `records`.
///
/// Returns an empty vector when `records` is empty; callers take the fallback
/// path in that case.
pub(crate) fn draw_stored<R>(
    records: &[PetNameRecord],
    count: GenerationCount,
    rng: &mut R,
) -> Vec<PetNameRecord>
where
    R: Rng + ?Sized,
{
    (0..count.get())
        .filter_map(|_| records.choose(rng).cloned())
        .collect()
}

/// Synthesise `count` unpersisted records from [`FALLBACK_NAMES`].
///
/// Each record gets a placeholder id in `[0, 10000)`, the requested type (or
/// [`PetType::Other`] when unfiltered) and `now` as its timestamp.
pub(crate) fn draw_fallback<R>(
    pet_type: Option<PetType>,
    count: GenerationCount,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<PetNameRecord>
where
    R: Rng + ?Sized,
{
    let pet_type = pet_type.unwrap_or(PetType::Other);
    (0..count.get())
        .filter_map(|_| {
            let name = FALLBACK_NAMES.choose(rng)?;
            Some(PetNameRecord {
                id: PetNameId::new(rng.gen_range(0..PLACEHOLDER_ID_CEILING)),
                name: (*name).to_owned(),
                pet_type,
                created_at: now,
            })
        })
        .collect()
}

/// Selection service implementing [`PetNameGenerator`].
///
/// Read-only: the fallback path never writes synthetic records back.
#[derive(Clone)]
pub struct PetNameSelectionService<R> {
    pet_name_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> PetNameSelectionService<R> {
    /// Create a new selection service over the store.
    pub fn new(pet_name_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            pet_name_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> PetNameGenerator for PetNameSelectionService<R>
where
    R: PetNameRepository,
{
    async fn generate(&self, request: GeneratePetNamesRequest) -> Result<Vec<PetNameRecord>, Error> {
        let GeneratePetNamesRequest { pet_type, count } = request;
        let matched = self
            .pet_name_repo
            .list(pet_type)
            .await
            .map_err(map_repository_error)?;

        if matched.is_empty() {
            debug!(
                pet_type = ?pet_type,
                count = count.get(),
                "no stored names matched; drawing from fallback list"
            );
            return Ok(draw_fallback(
                pet_type,
                count,
                self.clock.utc(),
                &mut rand::thread_rng(),
            ));
        }

        debug!(
            pet_type = ?pet_type,
            count = count.get(),
            candidates = matched.len(),
            "drawing from stored names"
        );
        Ok(draw_stored(&matched, count, &mut rand::thread_rng()))
    }
}

/// Ingestion service implementing [`PetNameCommand`].
#[derive(Clone)]
pub struct PetNameIngestionService<R> {
    pet_name_repo: Arc<R>,
}

impl<R> PetNameIngestionService<R> {
    /// Create a new ingestion service over the store.
    pub fn new(pet_name_repo: Arc<R>) -> Self {
        Self { pet_name_repo }
    }
}

#[async_trait]
impl<R> PetNameCommand for PetNameIngestionService<R>
where
    R: PetNameRepository,
{
    async fn add(&self, pet_name: NewPetName) -> Result<PetNameRecord, Error> {
        let record = self
            .pet_name_repo
            .insert(&pet_name)
            .await
            .map_err(map_repository_error)?;
        info!(id = %record.id, pet_type = %record.pet_type, "pet name added");
        Ok(record)
    }
}

/// Listing service implementing [`PetNameQuery`].
#[derive(Clone)]
pub struct PetNameListingService<R> {
    pet_name_repo: Arc<R>,
}

impl<R> PetNameListingService<R> {
    /// Create a new listing service over the store.
    pub fn new(pet_name_repo: Arc<R>) -> Self {
        Self { pet_name_repo }
    }
}

#[async_trait]
impl<R> PetNameQuery for PetNameListingService<R>
where
    R: PetNameRepository,
{
    async fn list_all(&self) -> Result<Vec<PetNameRecord>, Error> {
        self.pet_name_repo
            .list(None)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "pet_name_service_tests.rs"]
mod tests;
