//! Pet name procedures exposed over HTTP.
//!
//! ```text
//! GET  /api/v1/generatePetNames?type=cat&count=3
//! POST /api/v1/addPetName {"name":"Fluffy","type":"cat"}
//! GET  /api/v1/getAllPetNames
//! ```
//!
//! Handlers validate their input before touching a port; a rejected request
//! never reaches the store.

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::GeneratePetNamesRequest;
use crate::domain::{NewPetName, PetNameRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PetTypeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_generation_count, parse_optional_pet_type, parse_pet_name, parse_pet_type,
};

const TYPE_FIELD: FieldName = FieldName::new("type");
const COUNT_FIELD: FieldName = FieldName::new("count");
const NAME_FIELD: FieldName = FieldName::new("name");

/// A pet name record as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PetNameResponse {
    /// Store-assigned id, or a placeholder for fallback names.
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "Fluffy")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = PetTypeSchema)]
    pub pet_type: String,
    #[schema(value_type = String, example = "2026-01-01T12:00:00Z")]
    pub created_at: DateTime<Utc>,
}

impl From<PetNameRecord> for PetNameResponse {
    fn from(record: PetNameRecord) -> Self {
        let PetNameRecord {
            id,
            name,
            pet_type,
            created_at,
        } = record;
        Self {
            id: id.get(),
            name,
            pet_type: pet_type.as_str().to_owned(),
            created_at,
        }
    }
}

fn to_responses(records: Vec<PetNameRecord>) -> Vec<PetNameResponse> {
    records.into_iter().map(PetNameResponse::from).collect()
}

/// Query parameters for `generatePetNames`.
///
/// Both fields arrive as raw strings so the handler can report precise
/// validation failures.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GeneratePetNamesQuery {
    /// Restrict the draw to one pet type.
    #[serde(rename = "type")]
    #[param(value_type = Option<PetTypeSchema>)]
    pub pet_type: Option<String>,
    /// Number of names to return, 1 to 10. Defaults to 1.
    #[param(value_type = Option<u8>, minimum = 1, maximum = 10)]
    pub count: Option<String>,
}

/// Request body for `addPetName`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AddPetNameRequest {
    /// 1 to 50 characters, stored verbatim.
    #[schema(example = "Mr. Whiskers O'Malley")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<PetTypeSchema>)]
    pub pet_type: Option<String>,
}

/// Draw `count` pet names, optionally of one type.
///
/// Names come from stored records when any match, otherwise from a built-in
/// fallback list. Nothing is written.
#[utoipa::path(
    get,
    path = "/api/v1/generatePetNames",
    params(GeneratePetNamesQuery),
    responses(
        (status = 200, description = "Generated names", body = [PetNameResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["pet-names"],
    operation_id = "generatePetNames"
)]
#[get("/generatePetNames")]
pub async fn generate_pet_names(
    state: web::Data<HttpState>,
    query: web::Query<GeneratePetNamesQuery>,
) -> ApiResult<web::Json<Vec<PetNameResponse>>> {
    let GeneratePetNamesQuery { pet_type, count } = query.into_inner();
    let request = GeneratePetNamesRequest {
        pet_type: parse_optional_pet_type(pet_type, TYPE_FIELD)?,
        count: parse_generation_count(count, COUNT_FIELD)?,
    };

    let records = state.generator.generate(request).await?;
    Ok(web::Json(to_responses(records)))
}

/// Add a pet name to the shared collection.
#[utoipa::path(
    post,
    path = "/api/v1/addPetName",
    request_body = AddPetNameRequest,
    responses(
        (status = 200, description = "Stored record", body = PetNameResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["pet-names"],
    operation_id = "addPetName"
)]
#[post("/addPetName")]
pub async fn add_pet_name(
    state: web::Data<HttpState>,
    payload: web::Json<AddPetNameRequest>,
) -> ApiResult<web::Json<PetNameResponse>> {
    let AddPetNameRequest { name, pet_type } = payload.into_inner();
    let new_pet_name = NewPetName {
        name: parse_pet_name(name, NAME_FIELD)?,
        pet_type: parse_pet_type(pet_type, TYPE_FIELD)?,
    };

    let record = state.command.add(new_pet_name).await?;
    Ok(web::Json(record.into()))
}

/// List every stored pet name.
#[utoipa::path(
    get,
    path = "/api/v1/getAllPetNames",
    responses(
        (status = 200, description = "All stored records", body = [PetNameResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["pet-names"],
    operation_id = "getAllPetNames"
)]
#[get("/getAllPetNames")]
pub async fn get_all_pet_names(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PetNameResponse>>> {
    let records = state.query.list_all().await?;
    Ok(web::Json(to_responses(records)))
}

#[cfg(test)]
#[path = "pet_names_tests.rs"]
mod tests;
