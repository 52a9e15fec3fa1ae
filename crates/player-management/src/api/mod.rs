//! Player Management REST API client.
//!
//! Provides access to the player, embed and configuration endpoints
//! with automatic auth header injection. One method per endpoint; each
//! returns the raw [`crate::ApiResponse`].

mod embed_config;
mod embeds;
mod player_config;
mod players;
pub mod request;

pub mod models;

pub use models::{Branch, Embed, ItemsResponse, Player, PlayerBranches, PublishRequest};

use std::sync::{PoisonError, RwLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::Error;
use crate::config::{ClientConfig, Credentials};
use crate::transport::{ReqwestTransport, Transport};

/// Player Management API client with automatic auth header injection.
pub struct PlayerManagementClient<T = ReqwestTransport> {
    pub(super) transport: T,
    /// `{base}/{version}/accounts/{account}`; resource paths are appended verbatim.
    pub(super) account_url: String,
    pub(super) auth_header: HeaderValue,
    pub(super) custom_headers: RwLock<HeaderMap>,
}

impl PlayerManagementClient<ReqwestTransport> {
    /// Create a client using the default `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(config.accept_invalid_certs)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> PlayerManagementClient<T> {
    /// Create a client dispatching through the given transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, Error> {
        url::Url::parse(&config.base_url)?;

        let mut custom_headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let (name, value) = parse_header(key, value)?;
            custom_headers.insert(name, value);
        }

        Ok(Self {
            transport,
            account_url: config.account_url(),
            auth_header: auth_header(&config.credentials)?,
            custom_headers: RwLock::new(custom_headers),
        })
    }

    /// Register a header sent with every subsequently built request.
    ///
    /// A repeated key replaces the previous value. Requests already
    /// dispatched are unaffected.
    pub fn add_custom_header(&self, key: &str, value: &str) -> Result<(), Error> {
        let (name, value) = parse_header(key, value)?;
        self.custom_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, value);
        tracing::debug!(header = key, "Custom header registered");
        Ok(())
    }

    /// Base URL every resource path is appended to.
    pub fn account_url(&self) -> &str {
        &self.account_url
    }
}

/// Build the single `Authorization` value for the configured scheme.
fn auth_header(credentials: &Credentials) -> Result<HeaderValue, Error> {
    let raw = match credentials {
        Credentials::Bearer { token } => format!("Bearer {token}"),
        Credentials::Basic { email, password } => {
            format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
        }
    };
    let mut value = HeaderValue::from_str(&raw)
        .map_err(|e| Error::InvalidHeader(format!("Authorization: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

fn parse_header(key: &str, value: &str) -> Result<(HeaderName, HeaderValue), Error> {
    let name = HeaderName::from_bytes(key.as_bytes())
        .map_err(|e| Error::InvalidHeader(format!("{key}: {e}")))?;
    let value =
        HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(format!("{key}: {e}")))?;
    Ok((name, value))
}

impl<T> std::fmt::Debug for PlayerManagementClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerManagementClient")
            .field("account_url", &self.account_url)
            .finish_non_exhaustive()
    }
}
