//! HTTP server configuration object and helpers.

use std::ffi::OsString;
use std::net::SocketAddr;

use mockable::Env;
use ortho_config::OrthoConfig;
use pet_names_backend::outbound::persistence::DbPool;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Listener settings loaded via OrthoConfig (`SERVER_PORT`, `SERVER_HOST`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SERVER")]
pub struct ServerSettings {
    /// TCP port to listen on.
    #[ortho_config(default = 2022)]
    pub port: u16,
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
}

impl ServerSettings {
    /// Load settings from `SERVER_*` variables only; process arguments are
    /// never parsed, so the binary exposes no command-line flags.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when a variable holds an invalid value.
    pub fn from_env() -> std::io::Result<Self> {
        Self::load_from_iter([OsString::from("pet-names-server")]).map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid server settings: {err}"),
            )
        })
    }

    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the host is not an IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host();
        let ip = host.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("SERVER_HOST '{host}' is not an IP address: {err}"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Read `DATABASE_URL`, treating a blank value as unset.
pub fn database_url(env: &impl Env) -> Option<String> {
    env.string(DATABASE_URL_ENV)
        .filter(|value| !value.trim().is_empty())
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the PostgreSQL store.
    ///
    /// Without one the server keeps pet names in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
