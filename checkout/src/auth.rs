//! API key authentication.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::warn;

use super::error::{Error, Result};

const SECRET_KEY_PREFIX: &str = "sk_";
const PUBLIC_KEY_PREFIX: &str = "pk_";
const MIN_KEY_LEN: usize = 20;

/// Which API key authenticates a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyKind {
    /// The secret key, used for server-side operations.
    #[default]
    Secret,
    /// The public key, used for client-facing calls such as tokenization.
    Public,
}

/// Source of API keys.
///
/// Keys are looked up on every request, so a missing secret key only fails
/// calls that actually need it.
pub trait Credentials: Send + Sync {
    /// Returns the secret key or [`Error::ConfigurationMissing`].
    fn secret_key(&self) -> Result<String>;

    /// Returns the public key, empty when not configured.
    fn public_key(&self) -> String;
}

/// Fixed in-memory API keys.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub secret_key: String,
    pub public_key: String,
}

impl ApiKeys {
    /// Creates keys holding only a secret key.
    pub fn secret(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            public_key: String::new(),
        }
    }

    /// Sets the public key.
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = public_key.into();
        self
    }
}

impl Credentials for ApiKeys {
    fn secret_key(&self) -> Result<String> {
        if self.secret_key.is_empty() {
            return Err(Error::ConfigurationMissing(
                "Secret key not configured.".to_string(),
            ));
        }
        Ok(self.secret_key.clone())
    }

    fn public_key(&self) -> String {
        self.public_key.clone()
    }
}

/// Builds the headers sent with every API request.
pub fn auth_headers(credentials: &dyn Credentials, key: KeyKind) -> Result<HeaderMap> {
    let api_key = match key {
        KeyKind::Secret => credentials.secret_key()?,
        KeyKind::Public => {
            let k = credentials.public_key();
            if k.is_empty() {
                warn!("public key is not configured, sending an empty bearer token");
            }
            k
        }
    };

    let mut headers = HeaderMap::new();
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|e| Error::Request(format!("invalid API key: {}", e)))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Reports whether a key looks like a Checkout.com API key.
///
/// Keys start with `sk_` or `pk_` (optionally followed by an environment
/// marker such as `sbox_`) and are at least 20 characters long.
pub fn validate_api_key_format(api_key: &str) -> bool {
    (api_key.starts_with(SECRET_KEY_PREFIX) || api_key.starts_with(PUBLIC_KEY_PREFIX))
        && api_key.len() >= MIN_KEY_LEN
}
