//! Pet name store adapters.
//!
//! `DieselPetNameRepository` persists to PostgreSQL via Diesel with async
//! support through `diesel-async` and `bb8` pooling.
//! `InMemoryPetNameRepository` keeps records in process memory and backs
//! the server when no database is configured.
//!
//! Diesel row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module; only domain types cross the port.
//!
//! # Example
//!
//! ```ignore
//! use pet_names_backend::outbound::persistence::{DbPool, DieselPetNameRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/pets")).await?;
//! let repo = DieselPetNameRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_pet_name_repository;
mod in_memory_pet_name_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_pet_name_repository::DieselPetNameRepository;
pub use in_memory_pet_name_repository::InMemoryPetNameRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
