//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::pet_names;

/// Row struct for reading from the pet_names table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pet_names)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PetNameRow {
    pub id: i32,
    pub name: String,
    pub pet_type: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new pet name records; id and timestamp come from
/// column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pet_names)]
pub(crate) struct NewPetNameRow<'a> {
    pub name: &'a str,
    pub pet_type: &'a str,
}
