//! Browser client served at `/`.
//!
//! The page is compiled into the binary so the server has no runtime asset
//! directory. It calls the `/api/v1` procedures with `fetch`.

use actix_web::{HttpResponse, get, http::header};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the single-page client.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(INDEX_HTML)
}
