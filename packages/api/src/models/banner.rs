use serde::Deserialize;

use super::{de, is_blank, ImageFile};
use crate::error::ApiError;

/// The storefront hero banner, `GET /banner`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Banner {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub image: String,
}

impl Banner {
    /// Only a banner with both an image and a title is worth rendering.
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.image) && !is_blank(&self.title)
    }
}

/// Multipart body of `POST /banner`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerUpload {
    pub title: String,
    /// May be empty.
    pub description: String,
    pub image: Option<ImageFile>,
}

impl BannerUpload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.title) || self.image.is_none() {
            return Err(ApiError::Validation(
                "Title and image are required.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_banner() {
        let banner: Banner = serde_json::from_str(
            r#"{"title": "Summer", "description": null, "image": "/uploads/b.jpg"}"#,
        )
        .unwrap();
        assert!(banner.is_complete());
        assert!(banner.description.is_none());
    }

    #[test]
    fn test_incomplete_banner() {
        let banner: Banner = serde_json::from_str(r#"{"title": "Summer"}"#).unwrap();
        assert!(!banner.is_complete());
        assert!(!Banner::default().is_complete());
    }

    #[test]
    fn test_upload_needs_title_and_image() {
        let mut upload = BannerUpload {
            title: "Summer".into(),
            ..BannerUpload::default()
        };
        let err = upload.validate().unwrap_err();
        assert_eq!(err.to_string(), "Title and image are required.");

        upload.image = Some(ImageFile::new("b.jpg", vec![1, 2, 3]));
        assert!(upload.validate().is_ok());

        upload.title = String::new();
        assert!(upload.validate().is_err());
    }
}
