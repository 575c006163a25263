use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Identity material for the configured integration instance. All fields are
/// optional; credential precedence is applied in [`crate::auth`].
pub struct TemplatefetchConfig {
    pub username: Option<String>,
    pub token: Option<String>,
    pub app_password: Option<String>,
}

impl TemplatefetchConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            username: raw_config.username,
            token: raw_config.token,
            app_password: raw_config.app_password,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    username: Option<String>,
    token: Option<String>,
    app_password: Option<String>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("TEMPLATEFETCH").source(env))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn load_empty() {
        let env = HashMap::from([]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                username: None,
                token: None,
                app_password: None,
            }
        )
    }

    #[test]
    fn load_environment() {
        let env = HashMap::from([
            ("TEMPLATEFETCH_USERNAME".to_owned(), "user".to_owned()),
            ("TEMPLATEFETCH_TOKEN".to_owned(), "tok".to_owned()),
            ("TEMPLATEFETCH_APP_PASSWORD".to_owned(), "secret".to_owned()),
        ]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                username: Some("user".to_owned()),
                token: Some("tok".to_owned()),
                app_password: Some("secret".to_owned()),
            }
        )
    }
}
