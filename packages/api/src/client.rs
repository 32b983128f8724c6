//! Storefront REST client

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{header, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use store::TokenStore;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    Accessory, AccessoryUpdate, AuthResponse, Banner, BannerUpload, Blog, BlogDraft, Credentials,
    GoogleCredential, ImageFile, MessageResponse, NewAccessory, Review,
};

/// Client for the storefront backend.
///
/// Cheap to clone: the HTTP client and the token store are shared. When the
/// token store holds a token, every request carries it as a bearer header.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.tokens.is_authenticated())
            .finish()
    }
}

/// Two clients are equal when they target the same backend with the same
/// token store.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl ApiClient {
    /// Create a client for `config.api_base_url`.
    pub fn new(config: &AppConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        Self::with_base_url(&config.api_base_url, tokens)
    }

    pub fn with_base_url(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Configuration("api_base_url is required".into()));
        }
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Create a request builder with authentication
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);

        if let Some(token) = self.tokens.get() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send a request and decode the JSON reply. A blank body decodes as `null`.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &body));
        }
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    /// Send a request whose reply body is irrelevant.
    async fn execute_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
        Ok(())
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let items: Option<Vec<T>> = self.execute(self.request(Method::GET, path)).await?;
        Ok(items.unwrap_or_default())
    }

    // Accessories

    pub async fn list_accessories(&self) -> Result<Vec<Accessory>, ApiError> {
        self.list("/accessories").await
    }

    /// Multipart `POST /accessories`, one `images` part per file.
    pub async fn create_accessory(&self, accessory: NewAccessory) -> Result<(), ApiError> {
        accessory.validate()?;
        let mut form = Form::new()
            .text("name", accessory.name)
            .text("description", accessory.description)
            .text("category", accessory.category)
            .text("price", accessory.price)
            .text("color", accessory.color)
            .text("quantity", accessory.quantity);
        for image in accessory.images {
            form = form.part("images", image_part(image)?);
        }
        self.execute_unit(self.request(Method::POST, "/accessories").multipart(form))
            .await
    }

    pub async fn update_accessory(&self, id: &str, update: &AccessoryUpdate) -> Result<(), ApiError> {
        let path = format!("/accessories/{id}");
        self.execute_unit(self.request(Method::PUT, &path).json(update))
            .await
    }

    pub async fn delete_accessory(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/accessories/{id}");
        self.execute_unit(self.request(Method::DELETE, &path)).await
    }

    // Blogs

    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        self.list("/blogs").await
    }

    pub async fn create_blog(&self, draft: &BlogDraft) -> Result<(), ApiError> {
        draft.validate()?;
        self.execute_unit(self.request(Method::POST, "/blogs").json(draft))
            .await
    }

    pub async fn update_blog(&self, id: &str, draft: &BlogDraft) -> Result<(), ApiError> {
        draft.validate()?;
        let path = format!("/blogs/{id}");
        self.execute_unit(self.request(Method::PUT, &path).json(draft))
            .await
    }

    pub async fn delete_blog(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/blogs/{id}");
        self.execute_unit(self.request(Method::DELETE, &path)).await
    }

    // Banner

    pub async fn get_banner(&self) -> Result<Banner, ApiError> {
        let banner: Option<Banner> = self.execute(self.request(Method::GET, "/banner")).await?;
        Ok(banner.unwrap_or_default())
    }

    /// Multipart `POST /banner`. Returns the backend's confirmation message.
    pub async fn store_banner(&self, upload: BannerUpload) -> Result<MessageResponse, ApiError> {
        upload.validate()?;
        let Some(image) = upload.image else {
            return Err(ApiError::Validation("Title and image are required.".into()));
        };
        let form = Form::new()
            .text("title", upload.title)
            .text("description", upload.description)
            .part("image", image_part(image)?);
        let reply: Option<MessageResponse> = self
            .execute(self.request(Method::POST, "/banner").multipart(form))
            .await?;
        Ok(reply.unwrap_or_default())
    }

    // Reviews

    pub async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.list("/reviews").await
    }

    pub async fn delete_review(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/reviews/{id}");
        self.execute_unit(self.request(Method::DELETE, &path)).await
    }

    // Authentication

    /// Email/password login. Stores the returned token.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        credentials.validate()?;
        let reply: Option<AuthResponse> = self
            .execute(self.request(Method::POST, "/auth/login").json(credentials))
            .await?;
        Ok(self.remember(reply.unwrap_or_default()))
    }

    /// Exchange a Google ID-token credential for a backend token and store it.
    pub async fn google_login(&self, credential: &str) -> Result<AuthResponse, ApiError> {
        let body = GoogleCredential {
            token: credential.to_string(),
        };
        let reply: Option<AuthResponse> = self
            .execute(self.request(Method::POST, "/auth/google-auth").json(&body))
            .await?;
        Ok(self.remember(reply.unwrap_or_default()))
    }

    /// Forget the stored token. The backend keeps no session to end.
    pub fn logout(&self) {
        self.tokens.clear();
    }

    fn remember(&self, reply: AuthResponse) -> AuthResponse {
        match reply.token.as_deref() {
            Some(token) if !token.trim().is_empty() => self.tokens.set(token),
            _ => tracing::warn!("Login reply carried no token"),
        }
        reply
    }
}

fn image_part(image: ImageFile) -> Result<Part, ApiError> {
    let part = Part::bytes(image.bytes).file_name(image.file_name);
    match image.content_type {
        Some(content_type) => Ok(part.mime_str(&content_type)?),
        None => Ok(part),
    }
}
