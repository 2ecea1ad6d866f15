#[cfg(test)]
mod tests {
    use blog_core::domain::{DateKey, Post, PostEdit, PostFilter};
    use chrono::{TimeZone, Utc};
    use mongodb::bson::doc;

    use crate::database::document::{
        PostDocument, edit_document, filter_document, key_document,
    };

    #[test]
    fn test_filter_document_only_has_present_fields() {
        assert_eq!(filter_document(&PostFilter::default()), doc! {});
        assert_eq!(
            filter_document(&PostFilter::from_parts(2024, 0, 15)),
            doc! { "year": 2024_i64, "day": 15_i64 }
        );
    }

    #[test]
    fn test_key_document_matches_all_parts() {
        let key = DateKey::new(2024, 3, 15).unwrap();
        assert_eq!(
            key_document(&key),
            doc! { "year": 2024_i64, "month": 3_i64, "day": 15_i64 }
        );
    }

    #[test]
    fn test_edit_document_sets_only_editable_fields() {
        let edit = PostEdit {
            title: "C".to_string(),
            content: "D".to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 16, 8, 30, 0).unwrap(),
        };

        assert_eq!(
            edit_document(edit),
            doc! { "$set": { "title": "C", "content": "D", "updatedAt": "2024-03-16T08:30:00Z" } }
        );
    }

    #[test]
    fn test_post_converts_to_document_and_back() {
        let mut post = Post::new("Test Post", "Content");
        post.stamp(Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap())
            .unwrap();

        let document = PostDocument::from(post.clone());
        assert_eq!(document.year, 2024);
        assert_eq!(document.created_at, "2024-03-15T10:00:00Z");

        let restored = Post::try_from(document).unwrap();
        assert_eq!(restored, post);
    }

    #[test]
    fn test_legacy_document_without_timestamps() {
        let document = PostDocument {
            title: "Old".to_string(),
            content: "Post".to_string(),
            day: 1,
            month: 2,
            year: 2022,
            created_at: String::new(),
            updated_at: String::new(),
        };

        let post = Post::try_from(document).unwrap();
        assert_eq!(post.created_at, None);
        assert_eq!(post.date_key(), DateKey::new(2022, 2, 1));
    }

    #[test]
    fn test_stored_document_without_date_parts_is_read() {
        let stored = doc! { "title": "Undated", "content": "Post", "year": 2022_i32 };

        let document: PostDocument = mongodb::bson::from_document(stored).unwrap();
        let post = Post::try_from(document).unwrap();

        assert_eq!((post.year, post.month, post.day), (2022, 0, 0));
        assert!(post.date_key().is_none());
    }

    #[test]
    fn test_negative_stored_date_is_rejected() {
        let document = PostDocument {
            title: String::new(),
            content: String::new(),
            day: -1,
            month: 1,
            year: 2022,
            created_at: String::new(),
            updated_at: String::new(),
        };

        assert!(Post::try_from(document).is_err());
    }
}
