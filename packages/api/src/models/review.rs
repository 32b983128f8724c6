use serde::Deserialize;

use super::{de, HasId};

/// A customer review, `GET /reviews`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub rating: Option<String>,
    #[serde(default, alias = "review", deserialize_with = "de::string_or_number")]
    pub comment: String,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub created_at: Option<String>,
}

impl HasId for Review {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Review {
    /// Rating clamped to 0..=5; unparsable ratings count as 0.
    pub fn stars(&self) -> u8 {
        self.rating
            .as_deref()
            .and_then(|r| r.trim().parse::<f64>().ok())
            .map(|r| r.round().clamp(0.0, 5.0) as u8)
            .unwrap_or(0)
    }

    pub fn author(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Anonymous")
    }

    /// Date part of `created_at` (`YYYY-MM-DD`), if any.
    pub fn date(&self) -> Option<&str> {
        let ts = self.created_at.as_deref()?;
        Some(ts.get(..10).unwrap_or(ts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_fields() {
        let review: Review = serde_json::from_str(
            r#"{"id": 4, "name": "Asha", "rating": "4.6", "review": "Great box",
                "created_at": "2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(review.id, "4");
        assert_eq!(review.comment, "Great box");
        assert_eq!(review.stars(), 5);
        assert_eq!(review.author(), "Asha");
        assert_eq!(review.date(), Some("2024-03-01"));
    }

    #[test]
    fn test_review_defaults() {
        let review: Review =
            serde_json::from_str(r#"{"id": 1, "rating": 9, "comment": "ok"}"#).unwrap();
        assert_eq!(review.stars(), 5);
        assert_eq!(review.author(), "Anonymous");
        assert!(review.date().is_none());

        let review: Review = serde_json::from_str(r#"{"id": 2, "rating": "n/a"}"#).unwrap();
        assert_eq!(review.stars(), 0);
    }
}
