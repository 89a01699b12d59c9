//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings, database_url};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use pet_names_backend::Trace;
#[cfg(debug_assertions)]
use pet_names_backend::doc::ApiDoc;
use pet_names_backend::inbound::http::api_scope;
use pet_names_backend::inbound::http::client_ui::index;
use pet_names_backend::inbound::http::health::{HealthState, live, ready};
use pet_names_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live)
        .service(index);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    fn in_memory_config() -> ServerConfig {
        ServerConfig::new(([127, 0, 0, 1], 0).into())
    }

    #[actix_web::test]
    async fn assembled_app_serves_procedures_probes_and_page() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let state = web::Data::new(build_http_state(&in_memory_config()));
        let app = test::init_service(build_app(health, state)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/addPetName")
            .set_json(json!({"name": "Fluffy", "type": "cat"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("trace-id"));

        let req = test::TestRequest::get()
            .uri("/api/v1/getAllPetNames")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["name"], "Fluffy");

        for uri in ["/health/ready", "/health/live", "/", "/api/v1/healthcheck"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
        }
    }

    #[actix_web::test]
    async fn validation_errors_carry_the_request_trace_id() {
        let health = web::Data::new(HealthState::new());
        let state = web::Data::new(build_http_state(&in_memory_config()));
        let app = test::init_service(build_app(health, state)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/generatePetNames?count=11")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let header = res
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace id header");
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["traceId"].as_str(), Some(header.as_str()));
    }
}
