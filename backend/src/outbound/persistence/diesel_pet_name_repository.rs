//! PostgreSQL-backed `PetNameRepository` implementation using Diesel ORM.
//!
//! Reads return rows in ascending id order. Inserts use `RETURNING` so the
//! generated id and timestamp come back in the same round trip.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PetNameRepository, PetNameRepositoryError};
use crate::domain::{NewPetName, PetNameId, PetNameRecord, PetType};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewPetNameRow, PetNameRow};
use super::pool::{DbPool, PoolError};
use super::schema::pet_names;

/// Diesel-backed implementation of the pet name store.
#[derive(Clone)]
pub struct DieselPetNameRepository {
    pool: DbPool,
}

impl DieselPetNameRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PetNameRepositoryError {
    map_basic_pool_error(error, PetNameRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PetNameRepositoryError {
    map_basic_diesel_error(
        error,
        PetNameRepositoryError::query,
        PetNameRepositoryError::connection,
    )
}

/// Convert a database row to a domain record.
///
/// The `type` column is constrained by the migration, so an unknown value
/// means the schema and the code disagree.
fn row_to_record(row: PetNameRow) -> Result<PetNameRecord, PetNameRepositoryError> {
    let PetNameRow {
        id,
        name,
        pet_type,
        created_at,
    } = row;
    let pet_type = pet_type.parse::<PetType>().map_err(|err| {
        PetNameRepositoryError::query(format!("row {id} has an unrecognised pet type: {err}"))
    })?;

    Ok(PetNameRecord {
        id: PetNameId::new(id),
        name,
        pet_type,
        created_at,
    })
}

#[async_trait]
impl PetNameRepository for DieselPetNameRepository {
    async fn list(
        &self,
        pet_type: Option<PetType>,
    ) -> Result<Vec<PetNameRecord>, PetNameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PetNameRow> = match pet_type {
            Some(pet_type) => {
                pet_names::table
                    .filter(pet_names::pet_type.eq(pet_type.as_str()))
                    .order(pet_names::id.asc())
                    .select(PetNameRow::as_select())
                    .load(&mut conn)
                    .await
            }
            None => {
                pet_names::table
                    .order(pet_names::id.asc())
                    .select(PetNameRow::as_select())
                    .load(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;

        debug!(pet_type = ?pet_type, rows = rows.len(), "loaded pet names");
        rows.into_iter().map(row_to_record).collect()
    }

    async fn insert(&self, pet_name: &NewPetName) -> Result<PetNameRecord, PetNameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPetNameRow {
            name: pet_name.name.as_ref(),
            pet_type: pet_name.pet_type.as_str(),
        };

        let row: PetNameRow = diesel::insert_into(pet_names::table)
            .values(&new_row)
            .returning(PetNameRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_record(row)
    }
}
