//! Post handlers - decode, validate, delegate to the repository, encode.

use actix_web::{HttpResponse, web};
use futures::StreamExt;

use blog_core::domain::{Post, PostEdit, PostFilter};
use blog_core::error::DomainError;
use blog_shared::dto::DatePath;

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Largest `GET /posts` body that is read for a filter.
pub const FILTER_BODY_LIMIT: usize = 256 * 1024;

/// GET /posts
///
/// The optional body narrows results by `year`, `month` and `day`. Anything
/// unreadable in it is ignored, as is a body over `FILTER_BODY_LIMIT` or one
/// that ends early.
pub async fn list_posts(
    state: web::Data<AppState>,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    let filter = read_filter(payload).await;
    let posts = state.posts.find(&filter).await?;

    Ok(HttpResponse::Ok().json(posts))
}

async fn read_filter(mut payload: web::Payload) -> PostFilter {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        match chunk {
            Ok(chunk) if body.len() + chunk.len() <= FILTER_BODY_LIMIT => {
                body.extend_from_slice(&chunk)
            }
            Ok(_) => {
                tracing::debug!(limit = FILTER_BODY_LIMIT, "Filter body too large, ignoring");
                return PostFilter::default();
            }
            Err(e) => {
                tracing::debug!(error = %e, "Filter body unreadable, ignoring");
                return PostFilter::default();
            }
        }
    }

    PostFilter::from_json_lenient(&body)
}

/// GET /posts/{year}/{month}/{day}
///
/// `0` in any segment matches every value. Results are in date order.
pub async fn posts_by_date(
    state: web::Data<AppState>,
    path: web::Path<DatePath>,
) -> AppResult<HttpResponse> {
    let DatePath { year, month, day } = path.into_inner();
    let mut posts = state
        .posts
        .find(&PostFilter::from_parts(year, month, day))
        .await?;

    if posts.is_empty() {
        return Err(AppError::NotFound(format!(
            "post with date {year}-{month}-{day} not found"
        )));
    }

    posts.sort_by_key(|p| (p.year, p.month, p.day));
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /new
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<Post>,
) -> AppResult<HttpResponse> {
    let mut post = body.into_inner();
    post.stamp(state.clock.now())?;

    let date = format!("{}-{}-{}", post.year, post.month, post.day);
    state.posts.insert(post).await?;

    tracing::info!(request_id = %request_id.as_str(), %date, "Post created");
    Ok(HttpResponse::Ok().finish())
}

/// POST /edit
pub async fn edit_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<Post>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner();
    let key = post.date_key().ok_or(DomainError::MissingDateKey)?;

    state
        .posts
        .update(&key, PostEdit::from_post(post, state.clock.now()))
        .await?;

    tracing::info!(request_id = %request_id.as_str(), date = %key, "Post edited");
    Ok(HttpResponse::Ok().finish())
}

/// DELETE /delete
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<Post>,
) -> AppResult<HttpResponse> {
    let key = body.date_key().ok_or(DomainError::MissingDateKey)?;

    state.posts.delete(&key).await?;

    tracing::info!(request_id = %request_id.as_str(), date = %key, "Post deleted");
    Ok(HttpResponse::Ok().finish())
}
