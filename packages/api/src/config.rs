//! # Frontend configuration — `app.toml`
//!
//! The web binary embeds an `app.toml` and hands it to [`AppConfig::load`].
//! Values baked in at build time through environment variables win over the
//! file, so a deployment can point the same sources at another backend:
//!
//! | Key | Env override | Default |
//! |-----|--------------|---------|
//! | `api_base_url` | `API_BASE_URL` | `http://localhost:5005/api` |
//! | `uploads_base_url` | `UPLOADS_BASE_URL` | `/uploads` |
//! | `google_client_id` | `GOOGLE_CLIENT_ID` | none (Google sign-in hidden) |
//! | `redirect_delay_ms` | — | `1500` |
//!
//! ```toml
//! api_base_url = "https://shop.example.com/api"
//! google_client_id = "1234.apps.googleusercontent.com"
//! ```

use serde::{Deserialize, Serialize};

/// Runtime configuration shared by every page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL every REST path is appended to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Where uploaded accessory images are served from.
    #[serde(default = "default_uploads_base_url")]
    pub uploads_base_url: String,
    /// OAuth client id for Google Identity Services.
    #[serde(default)]
    pub google_client_id: Option<String>,
    /// Delay between a successful login and the redirect home.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:5005/api".to_string()
}

fn default_uploads_base_url() -> String {
    "/uploads".to_string()
}

fn default_redirect_delay_ms() -> u64 {
    1500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            uploads_base_url: default_uploads_base_url(),
            google_client_id: None,
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(s).map(Self::normalized)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse the embedded file, then apply build-time environment overrides.
    ///
    /// A malformed file is logged and replaced by the defaults.
    pub fn load(embedded: &str) -> Self {
        let base = Self::from_toml(embedded).unwrap_or_else(|e| {
            tracing::error!("Invalid app.toml, using defaults: {}", e);
            Self::default()
        });
        base.with_overrides(
            option_env!("API_BASE_URL"),
            option_env!("UPLOADS_BASE_URL"),
            option_env!("GOOGLE_CLIENT_ID"),
        )
    }

    /// Builder method to override individual values; blank values are ignored.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        uploads_base_url: Option<&str>,
        google_client_id: Option<&str>,
    ) -> Self {
        if let Some(url) = api_base_url.filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(url) = uploads_base_url.filter(|v| !v.trim().is_empty()) {
            self.uploads_base_url = url.trim().to_string();
        }
        if let Some(id) = google_client_id.filter(|v| !v.trim().is_empty()) {
            self.google_client_id = Some(id.trim().to_string());
        }
        self.normalized()
    }

    /// Google client id, if sign-in with Google is enabled.
    pub fn google_client_id(&self) -> Option<&str> {
        self.google_client_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self.uploads_base_url = self.uploads_base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5005/api");
        assert_eq!(config.redirect_delay_ms, 1500);
        assert!(config.google_client_id().is_none());
    }

    #[test]
    fn test_parse_and_trim_trailing_slash() {
        let config = AppConfig::from_toml(
            r#"
            api_base_url = "https://shop.example.com/api/"
            uploads_base_url = "https://cdn.example.com/uploads/"
            google_client_id = "abc.apps.googleusercontent.com"
            redirect_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://shop.example.com/api");
        assert_eq!(config.uploads_base_url, "https://cdn.example.com/uploads");
        assert_eq!(
            config.google_client_id(),
            Some("abc.apps.googleusercontent.com")
        );
        assert_eq!(config.redirect_delay_ms, 0);
    }

    #[test]
    fn test_overrides_win_and_blanks_are_ignored() {
        let config = AppConfig::default().with_overrides(
            Some("http://backend:9000/api/"),
            Some(""),
            Some("  "),
        );
        assert_eq!(config.api_base_url, "http://backend:9000/api");
        assert_eq!(config.uploads_base_url, "/uploads");
        assert!(config.google_client_id().is_none());
    }

    #[test]
    fn test_blank_client_id_counts_as_disabled() {
        let config = AppConfig::from_toml(r#"google_client_id = """#).unwrap();
        assert!(config.google_client_id().is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("api_base_url = 5").is_err());
    }

    #[test]
    fn test_load_falls_back_on_bad_file() {
        let config = AppConfig::load("not = [valid");
        assert_eq!(config.uploads_base_url, "/uploads");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig {
            google_client_id: Some("id".into()),
            ..AppConfig::default()
        };
        let parsed = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
