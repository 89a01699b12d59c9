//! Driving port for pet name generation.

use async_trait::async_trait;

use crate::domain::{Error, GenerationCount, PetNameRecord, PetType};

/// Validated input for [`PetNameGenerator::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratePetNamesRequest {
    /// Restrict the draw to one pet type.
    pub pet_type: Option<PetType>,
    /// Number of records to return.
    pub count: GenerationCount,
}

/// Domain use-case port for drawing random pet names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetNameGenerator: Send + Sync {
    /// Return exactly `request.count` records drawn with replacement.
    async fn generate(&self, request: GeneratePetNamesRequest) -> Result<Vec<PetNameRecord>, Error>;
}
