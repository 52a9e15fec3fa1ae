//! Player Management REST API client library.
//!
//! Provides typed access to the player, embed and configuration endpoints
//! with automatic auth header injection and curl-style request tracing.
//!
//! Every call issues exactly one HTTP request and returns the raw
//! [`ApiResponse`]. Non-2xx statuses are *not* errors at this layer; use
//! [`ApiResponse::error_for_status`] when a classified result is wanted.

pub mod api;
pub mod config;
pub mod transport;

pub use api::PlayerManagementClient;
pub use api::models::{Branch, Embed, ItemsResponse, Player, PlayerBranches, PublishRequest};
pub use api::request::RequestDescriptor;
pub use config::{ClientConfig, Credentials};
pub use transport::{ApiResponse, ReqwestTransport, Transport};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://players.api.brightcove.com";

/// Default API version path segment.
pub const DEFAULT_VERSION: &str = "v1";

/// Unified error type for the player-management crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Player Management API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
