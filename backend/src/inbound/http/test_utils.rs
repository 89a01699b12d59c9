//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{PetNameIngestionService, PetNameListingService, PetNameSelectionService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::InMemoryPetNameRepository;

/// Clock pinned to [`fixed_now`].
pub struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        fixed_now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// The instant every test clock reports.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Handler state wired to real services over a fresh in-memory store.
pub fn in_memory_state() -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let repo = Arc::new(InMemoryPetNameRepository::new(clock.clone()));
    HttpState::new(
        Arc::new(PetNameSelectionService::new(repo.clone(), clock.clone())),
        Arc::new(PetNameIngestionService::new(repo.clone())),
        Arc::new(PetNameListingService::new(repo)),
        clock,
    )
}
