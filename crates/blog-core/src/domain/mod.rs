//! Domain entities - the core business objects.

mod date_key;
mod filter;
mod post;

pub use date_key::DateKey;
pub use filter::PostFilter;
pub use post::{Post, PostEdit};
