//! # API crate — REST client for the storefront backend
//!
//! Every page of the frontend talks to the backend through [`ApiClient`]. This
//! crate also owns the wire models and the small amount of view logic that is
//! worth testing without a browser (search filtering, payload normalisation,
//! required-field checks).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one async method per backend endpoint, bearer token attached from the [`store::TokenStore`] |
//! | [`config`] | [`AppConfig`]: base URLs, Google client id, login redirect delay |
//! | [`error`] | [`ApiError`]: transport, status, decode, validation and configuration failures |
//! | [`models`] | Accessories, blogs, banner, reviews, auth payloads |
//!
//! ## Endpoints
//!
//! - **Accessories**: `GET/POST /accessories`, `PUT/DELETE /accessories/{id}`
//! - **Blogs**: `GET/POST /blogs`, `PUT/DELETE /blogs/{id}`
//! - **Banner**: `GET/POST /banner`
//! - **Reviews**: `GET /reviews`, `DELETE /reviews/{id}`
//! - **Auth**: `POST /auth/login`, `POST /auth/google-auth`

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::AppConfig;
pub use error::ApiError;
pub use models::{
    filter_accessories, remove_by_id, Accessory, AccessoryUpdate, AuthResponse, Banner,
    BannerUpload, Blog, BlogDraft, Credentials, HasId, ImageFile, MessageResponse, NewAccessory,
    Review,
};
