//! bb8 pool of `diesel-async` PostgreSQL connections backing the pet name
//! store.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool failures, carrying the driver's message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("failed to build connection pool: {0}")]
    Build(String),
    #[error("no database connection available: {0}")]
    Checkout(String),
}

impl PoolError {
    /// Driver message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Build(message) | Self::Checkout(message) => message,
        }
    }
}

/// Where to connect and how many connections to hold.
///
/// ```
/// use pet_names_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/pets").with_max_size(2);
/// assert_eq!(config.max_size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Ten connections at most, with a 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    pub fn with_max_size(self, max_size: u32) -> Self {
        Self { max_size, ..self }
    }

    pub fn with_checkout_timeout(self, checkout_timeout: Duration) -> Self {
        Self {
            checkout_timeout,
            ..self
        }
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Shared handle to the pool; clones point at the same connections.
#[derive(Clone)]
pub struct DbPool(Pool<AsyncPgConnection>);

impl DbPool {
    /// Build the pool from `config`.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let PoolConfig {
            database_url,
            max_size,
            checkout_timeout,
        } = config;
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);

        Pool::builder()
            .max_size(max_size)
            .connection_timeout(checkout_timeout)
            .build(manager)
            .await
            .map(Self)
            .map_err(|err| PoolError::Build(err.to_string()))
    }

    /// Check out one connection, waiting at most the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.0
            .get()
            .await
            .map_err(|err| PoolError::Checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_starts_from_service_defaults() {
        let config = PoolConfig::new("postgres://localhost/pets");

        assert_eq!(config.database_url, "postgres://localhost/pets");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.checkout_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    fn config_overrides_keep_the_url() {
        let config = PoolConfig::new("postgres://localhost/pets")
            .with_max_size(2)
            .with_checkout_timeout(Duration::from_secs(5));

        assert_eq!(config.database_url, "postgres://localhost/pets");
        assert_eq!(config.max_size(), 2);
        assert_eq!(config.checkout_timeout, Duration::from_secs(5));
    }

    #[rstest]
    #[case(PoolError::Build("invalid URL".into()), "invalid URL")]
    #[case(PoolError::Checkout("timed out".into()), "timed out")]
    fn message_strips_the_variant_prefix(#[case] error: PoolError, #[case] expected: &str) {
        assert_eq!(error.message(), expected);
        assert!(error.to_string().ends_with(expected));
    }
}
