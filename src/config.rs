use std::{env, net::SocketAddr};

use crate::errors::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_BIND_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            bind_port: DEFAULT_BIND_PORT,
        }
    }
}

impl Config {
    /// Loads the listener settings, starting from the fixed `0.0.0.0:3000`.
    ///
    /// `BIND_ADDR` and `BIND_PORT` are deployment overrides only; with neither
    /// set the service listens on the default socket.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(bind_addr) = env::var("BIND_ADDR")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            config.bind_addr = bind_addr;
        }
        if let Some(bind_port) = env::var("BIND_PORT")
            .ok()
            .map(|value| {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort)
            })
            .transpose()?
        {
            config.bind_port = bind_port;
        }

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // The process environment is shared between test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn parse_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var("BIND_ADDR");
        env::remove_var("BIND_PORT");

        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.bind_port, 3000);
        assert_eq!(
            config.bind_socket().expect("valid socket"),
            "0.0.0.0:3000".parse().expect("valid addr")
        );
    }

    #[test]
    fn overrides_are_applied() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("BIND_ADDR", "127.0.0.1");
        env::set_var("BIND_PORT", "8081");

        let config = Config::from_env().expect("config should parse");
        env::remove_var("BIND_ADDR");
        env::remove_var("BIND_PORT");

        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.bind_port, 8081);
    }

    #[test]
    fn invalid_port_fails() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var("BIND_ADDR");
        env::set_var("BIND_PORT", "abc");

        let err = Config::from_env().expect_err("expected invalid port error");
        env::remove_var("BIND_PORT");

        assert!(matches!(err, ConfigError::InvalidPort));
    }

    #[test]
    fn invalid_addr_fails() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("BIND_ADDR", "not an address");
        env::remove_var("BIND_PORT");

        let err = Config::from_env().expect_err("expected invalid socket error");
        env::remove_var("BIND_ADDR");

        assert!(matches!(err, ConfigError::InvalidSocket));
    }

    #[test]
    fn default_matches_fixed_listener() {
        let config = Config::default();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.bind_port, DEFAULT_BIND_PORT);
    }
}
