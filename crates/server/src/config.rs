use std::env;

use crate::errors::ConfigError;

/// Port used when `PORT` is not set, matching the platform's default target port.
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `PORT` falls back to [`DEFAULT_PORT`] when unset. A value that is not a
    /// valid port number is a startup error, a server coming up on the wrong
    /// port would be worse than one refusing to start.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_port_defaults_when_unset() {
        env::remove_var("PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn test_port_read_from_env() {
        env::set_var("PORT", "8080");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);

        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_port_rejects_values_that_are_not_ports() {
        env::set_var("PORT", "not-a-port");

        assert!(Config::from_env().is_err());

        env::remove_var("PORT");
    }
}
