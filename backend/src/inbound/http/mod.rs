//! HTTP inbound adapter exposing the pet name procedures.

pub mod client_ui;
pub mod error;
pub mod health;
pub mod pet_names;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{Scope, web};

pub use error::{ApiResult, json_config, query_config};

/// Scope mounting the RPC procedures under `/api/v1`.
///
/// Extractor failures inside the scope share the domain error envelope.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(json_config())
        .app_data(query_config())
        .service(health::healthcheck)
        .service(pet_names::generate_pet_names)
        .service(pet_names::add_pet_name)
        .service(pet_names::get_all_pet_names)
}
