//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/ping", web::get().to(health::ping))
        .route("/posts", web::get().to(posts::list_posts))
        .route(
            "/posts/{year}/{month}/{day}",
            web::get().to(posts::posts_by_date),
        )
        .route("/new", web::post().to(posts::create_post))
        .route("/edit", web::post().to(posts::edit_post))
        .route("/delete", web::delete().to(posts::delete_post));
}

/// JSON bodies are accepted regardless of content type; undecodable bodies answer 422.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::Unprocessable(err.to_string()).into())
}
