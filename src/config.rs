use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Marker, Player};

/// Symbol the console draws for an empty cell; no player may use it.
pub const EMPTY_GLYPH: char = '-';

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// The file did not exist and built-in defaults were used.
    Defaults,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub human: PlayerConfig,
    pub ai: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            human: PlayerConfig {
                name: "Player One".to_string(),
                marker: Marker::new('H'),
            },
            ai: PlayerConfig {
                name: "Player Two".to_string(),
                marker: Marker::new('A'),
            },
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub marker: Marker,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Wait for the enter key before the computer takes its turn.
    pub pause_before_ai: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            pause_before_ai: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let (config, source) = Self::load_with_source(path)?;
        if source == ConfigSource::Defaults {
            log::warn!("config file '{}' not found, using defaults", path.display());
        }
        Ok(config)
    }

    /// Like [`AppConfig::load_or_default`], but reports whether the defaults
    /// were used instead of logging it, for callers that set up logging from
    /// the loaded configuration.
    pub fn load_with_source(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, player) in [("human", &self.players.human), ("ai", &self.players.ai)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.name must not be empty"
                )));
            }
            let symbol = player.marker.symbol();
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.marker must be a visible character"
                )));
            }
            if symbol == EMPTY_GLYPH {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.marker must not be '{EMPTY_GLYPH}' (used for empty cells)"
                )));
            }
        }

        if self.players.human.marker == self.players.ai.marker {
            return Err(ConfigError::Validation(
                "players.human.marker and players.ai.marker must differ".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// The two players in turn order: the human always opens a round.
    pub fn players(&self) -> [Player; 2] {
        [
            Player::human(self.players.human.name.clone(), self.players.human.marker),
            Player::ai(self.players.ai.name.clone(), self.players.ai.marker),
        ]
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerKind;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players.human]
name = "Ada"
marker = "X"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.human.name, "Ada");
        assert_eq!(config.players.human.marker, Marker::new('X'));
        // Other fields should be defaults
        assert_eq!(config.players.ai.marker, Marker::new('A'));
        assert!(config.console.pause_before_ai);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.players.human.name, "Player One");
        assert_eq!(config.players.ai.name, "Player Two");
    }

    #[test]
    fn test_multi_character_marker_is_rejected() {
        let toml_str = r#"
[players.ai]
name = "Bot"
marker = "AI"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_shared_marker() {
        let mut config = AppConfig::default();
        config.players.ai.marker = Marker::new('H');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_glyph_marker() {
        let mut config = AppConfig::default();
        config.players.human.marker = Marker::new(EMPTY_GLYPH);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_marker() {
        let mut config = AppConfig::default();
        config.players.ai.marker = Marker::new(' ');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.human.name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_players_in_turn_order() {
        let [first, second] = AppConfig::default().players();
        assert_eq!(first.kind(), PlayerKind::Human);
        assert_eq!(first.marker(), Marker::new('H'));
        assert_eq!(second.kind(), PlayerKind::Ai);
        assert_eq!(second.name(), "Player Two");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.players.human.marker, Marker::new('H'));
    }

    #[test]
    fn test_missing_file_reports_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let (config, source) = AppConfig::load_with_source(&path).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.players.ai.marker, Marker::new('A'));
    }

    #[test]
    fn test_existing_file_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let (config, source) = AppConfig::load_with_source(&path).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[console]
pause_before_ai = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.console.pause_before_ai);
        // Others are defaults
        assert_eq!(config.players.ai.marker, Marker::new('A'));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(
            &path,
            "[players.human]\nname = \"A\"\nmarker = \"A\"\n",
        )
        .unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
