//! Liveness endpoint.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Store liveness check.
///
/// GET /ping
pub async fn ping(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.posts.ping().await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Pong"))
}
