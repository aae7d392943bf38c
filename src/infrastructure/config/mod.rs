use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::Serialize;

use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "menu-imagery.toml";
pub const ENV_PREFIX: &str = "MENU_IMAGERY_";

/// Loads [`AppConfig`] from defaults, an optional TOML file and the environment,
/// later sources overriding earlier ones. Every load is validated before it is returned.
pub struct ConfigService {
    config_file: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self {
            config_file: path.as_ref().to_path_buf(),
        }
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.config_file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(&self) -> Result<AppConfig> {
        validated(self.figment())
    }

    /// Like [`load`](Self::load), with `overrides` merged last. Keys the
    /// overrides leave out keep their file, environment or default value.
    pub fn load_with<T: Serialize>(&self, overrides: &T) -> Result<AppConfig> {
        validated(self.figment().merge(Serialized::defaults(overrides)))
    }
}

fn validated(figment: Figment) -> Result<AppConfig> {
    let config: AppConfig = figment.extract()?;
    config
        .validate()
        .map_err(|e| AppError::ConfigError(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::new().load().map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    output_dir = "menu_photos"
                    delay_ms = 250
                    random_window = 3
                "#,
            )?;
            jail.set_env("MENU_IMAGERY_DELAY_MS", "0");

            let config = ConfigService::new().load().map_err(|e| e.to_string())?;
            assert_eq!(config.output_dir, PathBuf::from("menu_photos"));
            assert_eq!(config.delay_ms, 0);
            assert_eq!(config.random_window, 3);
            assert_eq!(config.fallback_window, 10);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_path() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"candidate_selector = "img.result""#)?;

            let config = ConfigService::with_file("custom.toml")
                .load()
                .map_err(|e| e.to_string())?;
            assert_eq!(config.candidate_selector, "img.result");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        Jail::expect_with(|jail| {
            jail.set_env("MENU_IMAGERY_RANDOM_WINDOW", "0");

            let err = ConfigService::new().load().unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)));
            Ok(())
        });
    }

    #[test]
    fn test_overrides_win_over_env() {
        #[derive(Serialize)]
        struct Flags {
            delay_ms: u64,
        }

        Jail::expect_with(|jail| {
            jail.set_env("MENU_IMAGERY_DELAY_MS", "250");
            jail.set_env("MENU_IMAGERY_OUTPUT_DIR", "menu_photos");

            let config = ConfigService::new()
                .load_with(&Flags { delay_ms: 0 })
                .map_err(|e| e.to_string())?;
            assert_eq!(config.delay_ms, 0);
            assert_eq!(config.output_dir, PathBuf::from("menu_photos"));
            Ok(())
        });
    }
}
