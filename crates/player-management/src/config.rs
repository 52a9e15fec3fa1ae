//! Client configuration: account, credentials, endpoint and extra headers.

use std::fmt;

use crate::{DEFAULT_BASE_URL, DEFAULT_VERSION, Error};

const ENV_ACCOUNT_ID: &str = "PLAYER_MANAGEMENT_ACCOUNT_ID";
const ENV_ACCESS_TOKEN: &str = "PLAYER_MANAGEMENT_ACCESS_TOKEN";
const ENV_EMAIL: &str = "PLAYER_MANAGEMENT_EMAIL";
const ENV_PASSWORD: &str = "PLAYER_MANAGEMENT_PASSWORD";
const ENV_BASE_URL: &str = "PLAYER_MANAGEMENT_BASE_URL";
const ENV_VERSION: &str = "PLAYER_MANAGEMENT_VERSION";
const ENV_ACCEPT_INVALID_CERTS: &str = "PLAYER_MANAGEMENT_ACCEPT_INVALID_CERTS";

/// Authentication scheme attached to every request.
///
/// Exactly one scheme is ever used: a bearer token when one is configured,
/// basic credentials otherwise.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Bearer { token: String },
    Basic { email: String, password: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            Self::Basic { email, .. } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Configuration consumed by [`crate::PlayerManagementClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub account_id: String,
    pub credentials: Credentials,
    pub base_url: String,
    pub version: String,
    /// Extra headers applied to every request, in insertion order.
    /// A repeated key replaces the earlier value.
    pub headers: Vec<(String, String)>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Configuration authenticating with a bearer access token.
    pub fn with_token(account_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(
            account_id.into(),
            Credentials::Bearer {
                token: token.into(),
            },
        )
    }

    /// Configuration authenticating with basic email/password credentials.
    pub fn with_credentials(
        account_id: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(
            account_id.into(),
            Credentials::Basic {
                email: email.into(),
                password: password.into(),
            },
        )
    }

    fn new(account_id: String, credentials: Credentials) -> Self {
        Self {
            account_id,
            credentials,
            base_url: DEFAULT_BASE_URL.into(),
            version: DEFAULT_VERSION.into(),
            headers: Vec::new(),
            accept_invalid_certs: false,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add an extra header sent with every request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&key));
        self.headers.push((key, value.into()));
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Load configuration from `PLAYER_MANAGEMENT_*` environment variables.
    ///
    /// `PLAYER_MANAGEMENT_ACCOUNT_ID` is required, plus either
    /// `PLAYER_MANAGEMENT_ACCESS_TOKEN` or the `EMAIL`/`PASSWORD` pair.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let account_id =
            get(ENV_ACCOUNT_ID).ok_or_else(|| Error::Config(format!("{ENV_ACCOUNT_ID} is not set")))?;

        let mut config = match (get(ENV_ACCESS_TOKEN), get(ENV_EMAIL), get(ENV_PASSWORD)) {
            (Some(token), _, _) => Self::with_token(account_id, token),
            (None, Some(email), Some(password)) => {
                Self::with_credentials(account_id, email, password)
            }
            _ => {
                return Err(Error::Config(format!(
                    "either {ENV_ACCESS_TOKEN} or {ENV_EMAIL} and {ENV_PASSWORD} must be set"
                )));
            }
        };

        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(version) = get(ENV_VERSION) {
            config.version = version;
        }
        if let Some(v) = get(ENV_ACCEPT_INVALID_CERTS) {
            match v.parse::<bool>() {
                Ok(accept) => config.accept_invalid_certs = accept,
                Err(_) => {
                    tracing::warn!(value = %v, "Ignoring invalid {ENV_ACCEPT_INVALID_CERTS}");
                }
            }
        }

        Ok(config)
    }

    /// `{base_url}/{version}/accounts/{account_id}` with no doubled slashes.
    pub fn account_url(&self) -> String {
        format!(
            "{}/{}/accounts/{}",
            self.base_url.trim_end_matches('/'),
            self.version.trim_matches('/'),
            self.account_id
        )
    }
}
