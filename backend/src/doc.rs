//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the pet name procedures, the health endpoints and the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds and `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::health::HealthcheckResponse;
use crate::inbound::http::pet_names::{AddPetNameRequest, PetNameResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PetTypeSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet names API",
        description = "Generate random pet names and grow the shared collection."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pet_names::generate_pet_names,
        crate::inbound::http::pet_names::add_pet_name,
        crate::inbound::http::pet_names::get_all_pet_names,
        crate::inbound::http::health::healthcheck,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PetNameResponse,
        AddPetNameRequest,
        HealthcheckResponse,
        PetTypeSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "pet-names", description = "Pet name generation and submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
