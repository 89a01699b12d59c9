//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts and exist only so utoipa
//! can describe them.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The pet name store cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "count must be between 1 and 10")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context: `field`, `code` and sometimes `value`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::PetType`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PetType)]
pub enum PetTypeSchema {
    #[schema(rename = "dog")]
    Dog,
    #[schema(rename = "cat")]
    Cat,
    #[schema(rename = "bird")]
    Bird,
    #[schema(rename = "fish")]
    Fish,
    #[schema(rename = "rabbit")]
    Rabbit,
    #[schema(rename = "hamster")]
    Hamster,
    #[schema(rename = "other")]
    Other,
}
