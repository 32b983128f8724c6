//! # Wire models and the view logic that operates on them
//!
//! | Module | Types |
//! |--------|-------|
//! | [`accessory`] | [`Accessory`], [`NewAccessory`], [`AccessoryUpdate`], [`filter_accessories`] |
//! | [`blog`] | [`Blog`], [`BlogDraft`] |
//! | [`banner`] | [`Banner`], [`BannerUpload`] |
//! | [`review`] | [`Review`] |
//! | [`auth`] | [`Credentials`], [`GoogleCredential`], [`AuthResponse`] |
//!
//! Records owned by the backend implement [`HasId`] so a view can splice one
//! out of its local list after a confirmed delete with [`remove_by_id`].

pub mod accessory;
pub mod auth;
pub mod banner;
pub mod blog;
pub(crate) mod de;
pub mod review;

use serde::Deserialize;

pub use accessory::{filter_accessories, Accessory, AccessoryUpdate, NewAccessory};
pub use auth::{AuthResponse, Credentials, GoogleCredential};
pub use banner::{Banner, BannerUpload};
pub use blog::{Blog, BlogDraft};
pub use review::Review;

/// A record with a backend-assigned identifier.
pub trait HasId {
    fn id(&self) -> &str;
}

/// Remove the record with `id` from `items`. Returns whether one was removed.
pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// A file picked in a form, ready to go into a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Generic `{ "message": ... }` reply.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_by_id() {
        let mut blogs: Vec<Blog> = serde_json::from_str(
            r#"[{"id":1,"title":"a","description":""},{"id":2,"title":"b","description":""}]"#,
        )
        .unwrap();

        assert!(remove_by_id(&mut blogs, "1"));
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].title, "b");

        assert!(!remove_by_id(&mut blogs, "42"));
        assert_eq!(blogs.len(), 1);
    }

    #[test]
    fn test_message_response_tolerates_missing_field() {
        let reply: MessageResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.message.is_none());
    }
}
