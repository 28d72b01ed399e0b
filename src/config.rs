//! Service configuration
//!
//! Everything comes from the environment with working local defaults, so a
//! bare `comptoir` next to a local Neo4j just runs.

use std::env;

use crate::store::Neo4jSettings;

/// Which engine backend to construct at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Neo4j-compatible server over bolt (default)
    Neo4j,
    /// In-process demo graph, no engine required
    Memory,
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP bind address
    pub http_addr: String,
    /// HTTP port
    pub http_port: u16,
    /// Engine backend
    pub backend: Backend,
    /// Bolt endpoint settings (ignored for the memory backend)
    pub neo4j: Neo4jSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0".to_string(),
            http_port: 5001,
            backend: Backend::Neo4j,
            neo4j: Neo4jSettings::default(),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    ///
    /// Variables: `COMPTOIR_HTTP_ADDR`, `COMPTOIR_HTTP_PORT`,
    /// `COMPTOIR_BACKEND` (`neo4j` | `memory`), `NEO4J_URI`, `NEO4J_USER`,
    /// `NEO4J_PASSWORD`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http_addr: env_or("COMPTOIR_HTTP_ADDR", defaults.http_addr),
            http_port: env::var("COMPTOIR_HTTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_port),
            backend: match env::var("COMPTOIR_BACKEND").as_deref() {
                Ok("memory") => Backend::Memory,
                _ => Backend::Neo4j,
            },
            neo4j: Neo4jSettings {
                uri: env_or("NEO4J_URI", defaults.neo4j.uri),
                user: env_or("NEO4J_USER", defaults.neo4j.user),
                password: env_or("NEO4J_PASSWORD", defaults.neo4j.password),
            },
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.http_addr, "0.0.0.0");
        assert_eq!(config.http_port, 5001);
        assert_eq!(config.backend, Backend::Neo4j);
        assert_eq!(config.neo4j.uri, "bolt://localhost:7687");
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        env::set_var("COMPTOIR_HTTP_PORT", "not-a-port");
        let config = ServiceConfig::from_env();
        assert_eq!(config.http_port, 5001);
        env::remove_var("COMPTOIR_HTTP_PORT");
    }

    #[test]
    fn test_memory_backend_selection() {
        env::set_var("COMPTOIR_BACKEND", "memory");
        let config = ServiceConfig::from_env();
        assert_eq!(config.backend, Backend::Memory);
        env::remove_var("COMPTOIR_BACKEND");
    }
}
