use serde::{Deserialize, Serialize};

use super::{de, is_blank, HasId, ImageFile};
use crate::error::ApiError;

/// An accessory as listed by `GET /accessories`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Accessory {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub category: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub price: String,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub original_price: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub quantity: String,
    /// Stored file names under the uploads directory.
    #[serde(default, deserialize_with = "de::comma_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "de::one_or_many")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub color: Option<String>,
}

impl HasId for Accessory {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Accessory {
    /// Full URLs of the accessory's images.
    pub fn image_urls(&self, uploads_base_url: &str) -> Vec<String> {
        let base = uploads_base_url.trim_end_matches('/');
        self.images
            .iter()
            .map(|file| format!("{base}/{}", file.trim_start_matches('/')))
            .collect()
    }

    /// Colour swatches to render. `colors` wins; the singular `color`
    /// is used when the backend only sent that.
    pub fn swatches(&self) -> Vec<String> {
        if !self.colors.is_empty() {
            return self.colors.clone();
        }
        self.color.iter().cloned().collect()
    }

    /// Case-insensitive substring match on name or category.
    /// A blank term matches everything; otherwise the term is used as typed.
    pub fn matches(&self, term: &str) -> bool {
        if term.trim().is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }

    /// Prefilled edit form.
    pub fn to_update(&self) -> AccessoryUpdate {
        AccessoryUpdate {
            name: self.name.clone(),
            price: self.price.clone(),
            original_price: self.original_price.clone().unwrap_or_default(),
            quantity: self.quantity.clone(),
        }
    }
}

/// Accessories whose name or category contains `term`, ignoring case.
/// A blank term keeps everything.
pub fn filter_accessories(items: &[Accessory], term: &str) -> Vec<Accessory> {
    items.iter().filter(|a| a.matches(term)).cloned().collect()
}

/// JSON body of `PUT /accessories/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AccessoryUpdate {
    pub name: String,
    pub price: String,
    pub original_price: String,
    pub quantity: String,
}

/// Multipart body of `POST /accessories`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewAccessory {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub color: String,
    pub quantity: String,
    pub images: Vec<ImageFile>,
}

impl NewAccessory {
    pub fn validate(&self) -> Result<(), ApiError> {
        let required = [&self.name, &self.category, &self.price, &self.quantity];
        if required.iter().any(|v| is_blank(v)) {
            return Err(ApiError::Validation(
                "Name, category, price and quantity are required.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Accessory> {
        serde_json::from_str(
            r##"[
                {"id": 1, "name": "Leather Strap", "category": "Straps", "price": 499,
                 "quantity": 3, "images": ["a.jpg", "b.jpg"], "colors": ["#000", "#fff"]},
                {"id": "2", "name": "Gift Box", "category": "Packaging", "price": "99.5",
                 "quantity": "10", "images": "c.jpg, d.jpg", "colors": "red"},
                {"id": 3, "name": "Keychain", "category": "Metal STRAPS", "price": 50,
                 "quantity": 0, "images": null}
            ]"##,
        )
        .unwrap()
    }

    #[test]
    fn test_lenient_fields() {
        let items = sample();
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].price, "499");
        assert_eq!(items[1].price, "99.5");
        assert_eq!(items[1].quantity, "10");
        assert_eq!(items[0].images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(items[1].images, vec!["c.jpg", "d.jpg"]);
        assert!(items[2].images.is_empty());
        assert_eq!(items[1].swatches(), vec!["red"]);
        assert!(items[2].swatches().is_empty());
        assert!(items[2].description.is_none());
    }

    #[test]
    fn test_singular_color_fallback() {
        let item: Accessory =
            serde_json::from_str(r#"{"id": 9, "name": "x", "color": "blue"}"#).unwrap();
        assert_eq!(item.swatches(), vec!["blue"]);
    }

    #[test]
    fn test_filter_by_name_or_category_case_insensitive() {
        let items = sample();

        let hits = filter_accessories(&items, "strap");
        let ids: Vec<_> = hits.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let hits = filter_accessories(&items, "GIFT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Gift Box");

        assert!(filter_accessories(&items, "watch").is_empty());
    }

    #[test]
    fn test_blank_term_keeps_everything() {
        let items = sample();
        assert_eq!(filter_accessories(&items, "").len(), 3);
        assert_eq!(filter_accessories(&items, "   ").len(), 3);
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_the_term() {
        let items = sample();
        assert!(filter_accessories(&items, "strap ").is_empty());

        let hits = filter_accessories(&items, "leather ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_image_urls() {
        let items = sample();
        assert_eq!(
            items[0].image_urls("/uploads/"),
            vec!["/uploads/a.jpg", "/uploads/b.jpg"]
        );
    }

    #[test]
    fn test_to_update_prefills() {
        let items = sample();
        let form = items[0].to_update();
        assert_eq!(form.name, "Leather Strap");
        assert_eq!(form.price, "499");
        assert_eq!(form.original_price, "");
        assert_eq!(form.quantity, "3");
    }

    #[test]
    fn test_new_accessory_validation() {
        let mut draft = NewAccessory {
            name: "Strap".into(),
            category: "Straps".into(),
            price: "10".into(),
            quantity: "1".into(),
            ..NewAccessory::default()
        };
        assert!(draft.validate().is_ok());

        draft.price = " ".into();
        assert!(matches!(draft.validate(), Err(ApiError::Validation(_))));
    }
}
