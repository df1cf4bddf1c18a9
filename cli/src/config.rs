//! Configuration management for checkoutapi.
//!
//! Configuration is a flat string map stored in ~/.cko/{app_name}/config.yaml.
//! Unset keys fall back to `CHECKOUT_*` environment variables, then to
//! defaults.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use cko_checkout::{Credentials, Environment, validate_api_key_format};
use thiserror::Error;
use tracing::{debug, warn};

/// Per-user directory under the home directory.
pub const CONFIG_DIR: &str = ".cko";

/// Config file name inside the app directory.
pub const CONFIG_FILE: &str = "config.yaml";

pub const SECRET_KEY: &str = "secretKey";
pub const PUBLIC_KEY: &str = "publicKey";
pub const ENVIRONMENT: &str = "environment";
pub const CLIENT_ID: &str = "clientId";

/// Keys the tool understands, in display order.
pub const KNOWN_KEYS: [&str; 4] = [SECRET_KEY, PUBLIC_KEY, ENVIRONMENT, CLIENT_ID];

pub const ENV_SECRET_KEY: &str = "CHECKOUT_SECRET_KEY";
pub const ENV_PUBLIC_KEY: &str = "CHECKOUT_PUBLIC_KEY";
pub const ENV_ENVIRONMENT: &str = "CHECKOUT_ENVIRONMENT";
pub const ENV_CLIENT_ID: &str = "CHECKOUT_CLIENT_ID";

const ENV_VARS: [&str; 4] = [ENV_SECRET_KEY, ENV_PUBLIC_KEY, ENV_ENVIRONMENT, ENV_CLIENT_ID];

/// Error type for configuration access.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value is neither stored nor in the environment.
    #[error("{0}")]
    Missing(String),

    /// A value was rejected by `set`.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Persistent key-value configuration with environment fallback.
///
/// Every mutation is written to disk immediately. The environment is
/// snapshotted when the store is opened.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    env: HashMap<String, String>,
}

/// Returns the default value of a known key.
fn default_for(key: &str) -> Option<&'static str> {
    match key {
        ENVIRONMENT => Some(Environment::default().as_str()),
        SECRET_KEY | PUBLIC_KEY | CLIENT_ID => Some(""),
        _ => None,
    }
}

fn env_var_for(key: &str) -> Option<&'static str> {
    match key {
        SECRET_KEY => Some(ENV_SECRET_KEY),
        PUBLIC_KEY => Some(ENV_PUBLIC_KEY),
        ENVIRONMENT => Some(ENV_ENVIRONMENT),
        CLIENT_ID => Some(ENV_CLIENT_ID),
        _ => None,
    }
}

fn capture_env() -> HashMap<String, String> {
    ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
        .collect()
}

/// Returns `<home>/.cko/<app_name>/config.yaml`.
pub fn default_config_path(home: &Path, app_name: &str) -> PathBuf {
    home.join(CONFIG_DIR).join(app_name).join(CONFIG_FILE)
}

impl ConfigStore {
    /// Opens the store at the default per-user location for `app_name`.
    pub fn open_default(app_name: &str) -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not find home directory")
        })?;
        Self::open(default_config_path(&home, app_name))
    }

    /// Opens the store at `path`, creating the directory if needed.
    ///
    /// A missing file is treated as an empty configuration; it is created on
    /// the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        debug!("loaded config from {}", path.display());

        Ok(Self {
            path,
            values,
            env: capture_env(),
        })
    }

    /// Replaces the environment snapshot used for fallbacks.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Returns the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored value, or the default for known keys.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| default_for(key).map(str::to_string))
    }

    /// Stores a value, overwriting any previous one.
    ///
    /// `environment` must name a known environment and is stored in its
    /// canonical form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = match key {
            ENVIRONMENT => value
                .parse::<Environment>()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason,
                })?
                .as_str()
                .to_string(),
            SECRET_KEY | PUBLIC_KEY => {
                if !validate_api_key_format(value) {
                    warn!("{} does not look like a Checkout.com API key", key);
                }
                value.to_string()
            }
            CLIENT_ID => value.to_string(),
            _ => {
                warn!("'{}' is not a recognized configuration key", key);
                value.to_string()
            }
        };

        self.values.insert(key.to_string(), value);
        self.save()
    }

    /// Returns every known key with its effective stored-or-default value,
    /// plus any other stored keys.
    pub fn get_all(&self) -> BTreeMap<String, String> {
        let mut all: BTreeMap<String, String> = KNOWN_KEYS
            .iter()
            .filter_map(|k| default_for(k).map(|v| (k.to_string(), v.to_string())))
            .collect();
        all.extend(self.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        all
    }

    /// Removes a key. Removing an absent key is a no-op.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Resets the configuration to its defaults.
    pub fn clear(&mut self) -> Result<()> {
        self.values.clear();
        self.save()
    }

    /// Returns the secret key from the store or `CHECKOUT_SECRET_KEY`.
    pub fn secret_key(&self) -> Result<String> {
        self.lookup(SECRET_KEY).ok_or_else(|| {
            ConfigError::Missing(format!(
                "Secret key not configured. Set it with: checkoutapi config set {} <your-secret-key>\n\
                 Or set {} environment variable.\n\
                 Get your API keys at: https://dashboard.checkout.com/",
                SECRET_KEY, ENV_SECRET_KEY
            ))
        })
    }

    /// Returns the public key, empty when unset.
    pub fn public_key(&self) -> String {
        self.lookup(PUBLIC_KEY).unwrap_or_default()
    }

    /// Returns the client ID, empty when unset.
    pub fn client_id(&self) -> String {
        self.lookup(CLIENT_ID).unwrap_or_default()
    }

    /// Returns the environment name, `sandbox` when unset.
    pub fn environment(&self) -> String {
        self.lookup(ENVIRONMENT)
            .unwrap_or_else(|| Environment::default().as_str().to_string())
    }

    /// Returns the parsed environment. Unknown names fall back to sandbox.
    pub fn api_environment(&self) -> Environment {
        let name = self.environment();
        name.parse().unwrap_or_else(|e| {
            warn!("{}, using sandbox", e);
            Environment::Sandbox
        })
    }

    /// Stored non-empty value first, then the environment variable.
    fn lookup(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
            .or_else(|| {
                env_var_for(key)
                    .and_then(|var| self.env.get(var))
                    .filter(|v| !v.is_empty())
                    .cloned()
            })
    }

    /// Saves the configuration to disk.
    fn save(&self) -> Result<()> {
        let content = serde_yaml::to_string(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Credentials for ConfigStore {
    fn secret_key(&self) -> cko_checkout::Result<String> {
        ConfigStore::secret_key(self)
            .map_err(|e| cko_checkout::Error::ConfigurationMissing(e.to_string()))
    }

    fn public_key(&self) -> String {
        ConfigStore::public_key(self)
    }
}

/// Masks the API key for display.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> ConfigStore {
        ConfigStore::open(dir.path().join("config.yaml"))
            .unwrap()
            .with_env(Vec::<(String, String)>::new())
    }

    #[test]
    fn test_defaults() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.get(ENVIRONMENT).as_deref(), Some("sandbox"));
        assert_eq!(store.get(SECRET_KEY).as_deref(), Some(""));
        assert_eq!(store.get("unknown"), None);
        assert_eq!(store.environment(), "sandbox");
        assert_eq!(store.public_key(), "");
        assert_eq!(store.client_id(), "");
    }

    #[test]
    fn test_set_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set(CLIENT_ID, "cli_ab12cd34ef").unwrap();
        store.set(CLIENT_ID, "cli_zz99").unwrap();

        let reopened = open_store(&dir);
        assert_eq!(reopened.get(CLIENT_ID).as_deref(), Some("cli_zz99"));
    }

    #[test]
    fn test_set_environment_is_validated() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set(ENVIRONMENT, "Production").unwrap();
        assert_eq!(store.get(ENVIRONMENT).as_deref(), Some("production"));
        assert_eq!(store.api_environment(), Environment::Production);

        let err = store.set(ENVIRONMENT, "staging").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(store.get(ENVIRONMENT).as_deref(), Some("production"));
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set("merchantName", "acme").unwrap();
        assert_eq!(store.get("merchantName").as_deref(), Some("acme"));
        assert_eq!(store.get_all()["merchantName"], "acme");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set(PUBLIC_KEY, "pk_sbox_0123456789abcdef").unwrap();

        store.delete(PUBLIC_KEY).unwrap();
        store.delete(PUBLIC_KEY).unwrap();
        store.delete("never-set").unwrap();
        assert_eq!(store.get(PUBLIC_KEY).as_deref(), Some(""));
    }

    #[test]
    fn test_clear_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set(SECRET_KEY, "sk_sbox_0123456789abcdef").unwrap();
        store.set(ENVIRONMENT, "production").unwrap();
        store.set("extra", "value").unwrap();

        store.clear().unwrap();

        let expected: BTreeMap<String, String> = [
            (SECRET_KEY, ""),
            (PUBLIC_KEY, ""),
            (ENVIRONMENT, "sandbox"),
            (CLIENT_ID, ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(store.get_all(), expected);
        assert_eq!(open_store(&dir).get_all(), expected);
    }

    #[test]
    fn test_secret_key_missing() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).with_env([(ENV_SECRET_KEY, "")]);

        let err = store.secret_key().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
        let msg = err.to_string();
        assert!(msg.contains("checkoutapi config set secretKey"));
        assert!(msg.contains(ENV_SECRET_KEY));
    }

    #[test]
    fn test_secret_key_env_fallback() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).with_env([(ENV_SECRET_KEY, "sk_from_env")]);
        assert_eq!(store.secret_key().unwrap(), "sk_from_env");
    }

    #[test]
    fn test_store_takes_precedence_over_env() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir).with_env([
            (ENV_SECRET_KEY, "sk_from_env"),
            (ENV_ENVIRONMENT, "production"),
            (ENV_CLIENT_ID, "cli_envenvenv"),
        ]);
        store.set(SECRET_KEY, "sk_from_store").unwrap();

        assert_eq!(store.secret_key().unwrap(), "sk_from_store");
        // Unset keys still come from the environment.
        assert_eq!(store.environment(), "production");
        assert_eq!(store.client_id(), "cli_envenvenv");
    }

    #[test]
    fn test_credentials_impl() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).with_env([(ENV_PUBLIC_KEY, "pk_env")]);

        let creds: &dyn Credentials = &store;
        assert_eq!(creds.public_key(), "pk_env");
        assert!(matches!(
            creds.secret_key(),
            Err(cko_checkout::Error::ConfigurationMissing(_))
        ));
    }

    #[test]
    fn test_empty_file_is_empty_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "").unwrap();

        let store = ConfigStore::open(&path).unwrap();
        assert_eq!(store.get(ENVIRONMENT).as_deref(), Some("sandbox"));
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path(Path::new("/home/someone"), "checkoutapi");
        assert_eq!(
            path,
            PathBuf::from("/home/someone/.cko/checkoutapi/config.yaml")
        );
    }

    #[test]
    fn test_open_creates_app_dir() {
        let home = TempDir::new().unwrap();
        let path = default_config_path(home.path(), "checkoutapi");

        let mut store = ConfigStore::open(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());

        store.set(CLIENT_ID, "cli_ab12cd34ef").unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key(""), "");
        assert_eq!(mask_api_key("short"), "*****");
        assert_eq!(mask_api_key("sk_sbox_abcd1234"), "sk_s********1234");
    }
}
