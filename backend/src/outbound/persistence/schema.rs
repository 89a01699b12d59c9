//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Pet name records.
    ///
    /// `type` is constrained to the seven known pet types by a CHECK
    /// constraint; the Rust column is named `pet_type` because `type` is a
    /// keyword.
    pet_names (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Pet name exactly as submitted.
        name -> Text,
        /// Pet type string (`dog`, `cat`, `bird`, `fish`, `rabbit`, `hamster`, `other`).
        #[sql_name = "type"]
        pet_type -> Text,
        /// Insert timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
