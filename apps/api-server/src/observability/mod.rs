//! Observability module - request IDs and request spans.

mod request_id;

pub use request_id::{RequestId, RequestIdMiddleware};
