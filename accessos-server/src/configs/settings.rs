use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Controller {
    pub url_template: String,
    pub timeout_secs: u64,
}

impl Controller {
    /// REST root of the controller identified by `serial`, without a trailing slash.
    pub fn base_url(&self, serial: &str) -> String {
        self.url_template
            .replace("{serial}", serial)
            .trim_end_matches('/')
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub controller: Controller,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn test_default_config_parses() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                include_str!("../../../configs/default.toml"),
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.controller.timeout_secs, 5);
    }

    #[test]
    fn test_base_url_substitutes_serial() {
        let controller = Controller {
            url_template: String::from("http://{serial}.local/api/v1/"),
            timeout_secs: 5,
        };

        assert_eq!(controller.base_url("in67434072"), "http://in67434072.local/api/v1");
    }

    #[test]
    fn test_base_url_without_placeholder_is_fixed() {
        let controller = Controller {
            url_template: String::from("http://127.0.0.1:8080/api/v1"),
            timeout_secs: 5,
        };

        assert_eq!(controller.base_url("ignored"), "http://127.0.0.1:8080/api/v1");
    }
}
