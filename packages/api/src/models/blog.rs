use serde::{Deserialize, Serialize};

use super::{de, is_blank, HasId};
use crate::error::ApiError;

/// A blog post. `description` holds HTML.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Blog {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub description: String,
}

impl HasId for Blog {
    fn id(&self) -> &str {
        &self.id
    }
}

/// JSON body of `POST /blogs` and `PUT /blogs/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BlogDraft {
    pub title: String,
    pub description: String,
}

impl BlogDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.title) {
            return Err(ApiError::Validation("Blog title is required.".to_string()));
        }
        Ok(())
    }
}

impl From<&Blog> for BlogDraft {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            description: blog.description.clone(),
        }
    }
}
