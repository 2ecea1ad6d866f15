use serde_json::Value;

use super::Post;

/// Partial match over the date-key fields. `None` matches anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PostFilter {
    /// Build a filter from raw parts where `0` means "any".
    pub fn from_parts(year: u32, month: u32, day: u32) -> Self {
        let part = |v: u32| (v != 0).then_some(v);
        Self {
            year: part(year),
            month: part(month),
            day: part(day),
        }
    }

    /// Best-effort extraction from a JSON request body.
    ///
    /// An empty or malformed body yields the empty filter. Fields that are
    /// absent, not unsigned integers, zero, or wider than `u32` are ignored.
    pub fn from_json_lenient(body: &[u8]) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        let field = |name: &str| {
            map.get(name)
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| *v != 0)
        };

        Self {
            year: field("year"),
            month: field("month"),
            day: field("day"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.year.is_none_or(|y| y == post.year)
            && self.month.is_none_or(|m| m == post.month)
            && self.day.is_none_or(|d| d == post.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_malformed_bodies_match_everything() {
        assert!(PostFilter::from_json_lenient(b"").is_empty());
        assert!(PostFilter::from_json_lenient(b"{\"year\":").is_empty());
        assert!(PostFilter::from_json_lenient(b"[1,2,3]").is_empty());
    }

    #[test]
    fn test_extracts_present_fields() {
        let filter = PostFilter::from_json_lenient(br#"{"year":2024,"day":15}"#);
        assert_eq!(
            filter,
            PostFilter {
                year: Some(2024),
                month: None,
                day: Some(15),
            }
        );
    }

    #[test]
    fn test_ignores_wrong_typed_fields() {
        let filter = PostFilter::from_json_lenient(br#"{"year":"2024","month":-3,"day":1.5}"#);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_matches_subset() {
        let filter = PostFilter::from_parts(2024, 0, 0);
        assert!(filter.matches(&Post::new("a", "b").with_date(2024, 3, 15)));
        assert!(!filter.matches(&Post::new("a", "b").with_date(2023, 3, 15)));
    }
}
