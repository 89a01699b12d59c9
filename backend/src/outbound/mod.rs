//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed store via Diesel, plus an in-memory
//!   store for development and tests.
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod persistence;
