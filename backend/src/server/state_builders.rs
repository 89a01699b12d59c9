//! Builders wiring the pet name services to a store.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use pet_names_backend::domain::ports::PetNameRepository;
use pet_names_backend::domain::{
    PetNameIngestionService, PetNameListingService, PetNameSelectionService,
};
use pet_names_backend::inbound::http::state::HttpState;
use pet_names_backend::outbound::persistence::{
    DieselPetNameRepository, InMemoryPetNameRepository,
};

use super::ServerConfig;

fn services_over<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> HttpState
where
    R: PetNameRepository + 'static,
{
    HttpState::new(
        Arc::new(PetNameSelectionService::new(repo.clone(), clock.clone())),
        Arc::new(PetNameIngestionService::new(repo.clone())),
        Arc::new(PetNameListingService::new(repo)),
        clock,
    )
}

/// Build handler state over PostgreSQL when a pool is configured, otherwise
/// over a process-local store.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL pet name store");
            services_over(Arc::new(DieselPetNameRepository::new(pool.clone())), clock)
        }
        None => {
            warn!("DATABASE_URL not set; pet names are kept in memory and lost on restart");
            services_over(Arc::new(InMemoryPetNameRepository::new(clock.clone())), clock)
        }
    }
}
