//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains the post entity, its date key, and the ports the
//! storage layer implements. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
