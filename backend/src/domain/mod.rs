//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed pet name model and the use-cases
//! exposed to inbound adapters. Nothing in here depends on HTTP or Diesel.
//!
//! Public surface:
//! - Data model: `PetType`, `PetNameText`, `GenerationCount`, `PetNameId`,
//!   `PetNameRecord`, `NewPetName`.
//! - Transport-agnostic failures: `Error` and `ErrorCode`.
//! - Request correlation: `TraceId`.
//! - Driving port implementations: `PetNameSelectionService`,
//!   `PetNameIngestionService`, `PetNameListingService`.

pub mod error;
pub mod pet_name;
pub mod pet_name_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::pet_name::{
    GenerationCount, GenerationCountError, NewPetName, PET_NAME_MAX, ParsePetTypeError,
    PetNameId, PetNameRecord, PetNameText, PetNameValidationError, PetType,
};
pub use self::pet_name_service::{
    FALLBACK_NAMES, PetNameIngestionService, PetNameListingService, PetNameSelectionService,
};
pub use self::trace_id::TraceId;
