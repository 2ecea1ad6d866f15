//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Path segments of `GET /posts/{year}/{month}/{day}`. A `0` segment matches any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePath {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}
