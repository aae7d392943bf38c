use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

/// Fetch placeholder photographs for the items of a menu dataset.
///
/// Serializes to the configuration keys it overrides; flags left unset are
/// skipped so file and environment values stay in effect.
#[derive(Debug, Default, Parser, Serialize)]
#[command(name = "menu-imagery", version, about)]
pub struct Cli {
    /// CSV file with name, category and image columns (default: built-in menu)
    #[arg(long)]
    #[serde(rename = "csv_path", skip_serializing_if = "Option::is_none")]
    pub csv: Option<PathBuf>,

    /// Directory images are written into
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Pause after each item, in milliseconds
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::app_config::AppConfig;
    use crate::domain::error::AppError;
    use crate::infrastructure::config::ConfigService;
    use figment::Jail;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "menu-imagery",
            "--csv",
            "menu.csv",
            "--output-dir",
            "public/images",
            "--delay-ms",
            "0",
        ])
        .unwrap();

        Jail::expect_with(|jail| {
            jail.set_env("MENU_IMAGERY_DELAY_MS", "250");

            let config = ConfigService::new().load_with(&cli).map_err(|e| e.to_string())?;
            assert_eq!(config.csv_path, Some(PathBuf::from("menu.csv")));
            assert_eq!(config.output_dir, PathBuf::from("public/images"));
            assert_eq!(config.delay_ms, 0);
            Ok(())
        });
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["menu-imagery"]).unwrap();

        Jail::expect_with(|_jail| {
            let config = ConfigService::new().load_with(&cli).map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_flag_values_are_validated() {
        let cli = Cli {
            output_dir: Some(PathBuf::new()),
            ..Default::default()
        };

        Jail::expect_with(|_jail| {
            let err = ConfigService::new().load_with(&cli).unwrap_err();
            assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("output_dir")));
            Ok(())
        });
    }
}
