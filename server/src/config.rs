//! Server configuration from environment variables.
//!
//! Unset or unparsable values fall back to defaults so a bare `cargo leptos
//! serve` works without a `.env` file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_INBOX_CAPACITY: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Number of recent contact messages the in-memory inbox retains; older
    /// ones are evicted. `0` refuses every delivery.
    pub inbox_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT, inbox_capacity: DEFAULT_INBOX_CAPACITY }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, and `CONTACT_INBOX_CAPACITY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        Self {
            host,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            inbox_capacity: parse_or(&lookup, "CONTACT_INBOX_CAPACITY", DEFAULT_INBOX_CAPACITY),
        }
    }

    /// Socket address to bind, e.g. `"0.0.0.0:3000"`.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
