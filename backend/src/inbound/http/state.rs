//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{PetNameCommand, PetNameGenerator, PetNameQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub generator: Arc<dyn PetNameGenerator>,
    pub command: Arc<dyn PetNameCommand>,
    pub query: Arc<dyn PetNameQuery>,
    /// Source of the healthcheck timestamp.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Bundle the driving ports and clock.
    pub fn new(
        generator: Arc<dyn PetNameGenerator>,
        command: Arc<dyn PetNameCommand>,
        query: Arc<dyn PetNameQuery>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            generator,
            command,
            query,
            clock,
        }
    }
}
