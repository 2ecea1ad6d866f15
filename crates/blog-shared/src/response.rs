//! Error bodies returned as JSON.

use serde::{Deserialize, Serialize};

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_single_error_field() {
        let body = serde_json::to_string(&ErrorBody::new("A blog post with this date already exists!")).unwrap();
        assert_eq!(body, r#"{"error":"A blog post with this date already exists!"}"#);
    }
}
