//! Integration tests for `DieselPetNameRepository` against embedded
//! PostgreSQL.
//!
//! Opt in with `RUN_PG_EMBEDDED=1 cargo test -- --ignored`. The suite starts a
//! throwaway cluster, applies the embedded migrations to its default
//! `postgres` database and exercises the store through the port.

use pet_names_backend::domain::ports::PetNameRepository;
use pet_names_backend::domain::{NewPetName, PetNameText, PetType};
use pet_names_backend::outbound::persistence::{
    DbPool, DieselPetNameRepository, PoolConfig, run_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

fn new_pet_name(name: &str, pet_type: PetType) -> NewPetName {
    NewPetName {
        name: PetNameText::new(name).expect("valid name"),
        pet_type,
    }
}

fn embedded_enabled() -> bool {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1") {
        return true;
    }
    eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
    false
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn diesel_repository_honours_the_store_contract() {
    if !embedded_enabled() {
        return;
    }

    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let database_url = cluster.connection().database_url("postgres");
    let applied = run_migrations(&database_url).expect("migrations apply");
    assert_eq!(applied, 1);
    assert_eq!(
        run_migrations(&database_url).expect("re-run is a no-op"),
        0
    );

    let runtime = Runtime::new().expect("tokio runtime");
    runtime.block_on(async {
        let pool = DbPool::new(PoolConfig::new(database_url.as_str()).with_max_size(2))
            .await
            .expect("pool builds");
        let repo = DieselPetNameRepository::new(pool);

        assert!(repo.list(None).await.expect("list").is_empty());

        let fluffy = repo
            .insert(&new_pet_name("Fluffy", PetType::Cat))
            .await
            .expect("insert Fluffy");
        assert_eq!(fluffy.name, "Fluffy");
        assert_eq!(fluffy.pet_type, PetType::Cat);

        let malley = repo
            .insert(&new_pet_name("Mr. Whiskers O'Malley", PetType::Cat))
            .await
            .expect("insert with punctuation");
        assert_eq!(malley.name, "Mr. Whiskers O'Malley");
        assert!(malley.id > fluffy.id);
        assert!(malley.created_at >= fluffy.created_at);

        repo.insert(&new_pet_name("Rex", PetType::Dog))
            .await
            .expect("insert Rex");

        let all = repo.list(None).await.expect("list all");
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
        assert_eq!(all[0], fluffy);
        assert_eq!(all[1], malley);

        let cats = repo.list(Some(PetType::Cat)).await.expect("list cats");
        assert_eq!(cats, vec![fluffy, malley]);

        let fish = repo.list(Some(PetType::Fish)).await.expect("list fish");
        assert!(fish.is_empty());
    });
}
