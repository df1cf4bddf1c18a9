//! API environments and base URL resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Production API host.
pub const PRODUCTION_HOST: &str = "api.checkout.com";

/// Sandbox API host.
pub const SANDBOX_HOST: &str = "api.sandbox.checkout.com";

const CLIENT_ID_PREFIX: &str = "cli_";
const TENANT_PREFIX_LEN: usize = 8;

/// Checkout.com API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Returns the configuration name of the environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }

    /// Returns the bare API host for this environment.
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_HOST,
            Environment::Production => PRODUCTION_HOST,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "unknown environment '{}' (expected 'sandbox' or 'production')",
                other
            )),
        }
    }
}

/// Extracts the tenant prefix from a client ID.
///
/// A leading `cli_` is removed and the first eight characters of what
/// remains are returned. Any string is accepted.
pub fn tenant_prefix(client_id: &str) -> String {
    client_id
        .strip_prefix(CLIENT_ID_PREFIX)
        .unwrap_or(client_id)
        .chars()
        .take(TENANT_PREFIX_LEN)
        .collect()
}

/// Resolves the fully-qualified API base URL.
///
/// # Example
///
/// ```
/// use cko_checkout::{Environment, resolve_base_url};
///
/// assert_eq!(
///     resolve_base_url(Environment::Production, "cli_ab12cd34ef"),
///     "https://ab12cd34.api.checkout.com"
/// );
/// assert_eq!(
///     resolve_base_url(Environment::Sandbox, ""),
///     "https://api.sandbox.checkout.com"
/// );
/// ```
pub fn resolve_base_url(environment: Environment, client_id: &str) -> String {
    let prefix = tenant_prefix(client_id);
    if prefix.is_empty() {
        format!("https://{}", environment.host())
    } else {
        format!("https://{}.{}", prefix, environment.host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hosts() {
        assert_eq!(
            resolve_base_url(Environment::Production, ""),
            "https://api.checkout.com"
        );
        assert_eq!(
            resolve_base_url(Environment::Sandbox, ""),
            "https://api.sandbox.checkout.com"
        );
    }

    #[test]
    fn test_tenant_prefix() {
        assert_eq!(tenant_prefix("cli_ab12cd34ef"), "ab12cd34");
        assert_eq!(tenant_prefix("ab12cd34ef"), "ab12cd34");
        assert_eq!(tenant_prefix("cli_abc"), "abc");
        assert_eq!(tenant_prefix("cli_"), "");
        assert_eq!(tenant_prefix(""), "");
        assert_eq!(tenant_prefix("xcli_yz"), "xcli_yz");
        assert_eq!(tenant_prefix("cli_cli_abcdefgh"), "cli_abcd");
        assert_eq!(tenant_prefix("cli_äöü"), "äöü");
    }

    #[test]
    fn test_prefixed_hosts() {
        assert_eq!(
            resolve_base_url(Environment::Production, "cli_ab12cd34ef"),
            "https://ab12cd34.api.checkout.com"
        );
        assert_eq!(
            resolve_base_url(Environment::Sandbox, "cli_ab12cd34ef"),
            "https://ab12cd34.api.sandbox.checkout.com"
        );
        // A client id that is only the marker behaves like an empty one.
        assert_eq!(
            resolve_base_url(Environment::Sandbox, "cli_"),
            "https://api.sandbox.checkout.com"
        );
    }

    #[test]
    fn test_depends_only_on_prefix() {
        for env in [Environment::Sandbox, Environment::Production] {
            assert_eq!(
                resolve_base_url(env, "cli_12345678aaaa"),
                resolve_base_url(env, "cli_12345678bbbb")
            );
            assert_eq!(
                resolve_base_url(env, "cli_12345678"),
                resolve_base_url(env, "12345678zz")
            );
        }
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("sandbox".parse::<Environment>(), Ok(Environment::Sandbox));
        assert_eq!(
            "Production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::default(), Environment::Sandbox);
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
