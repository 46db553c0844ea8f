use crate::error::ConfigError;
use lib_boardgame::RunnerOptions;
use lib_printer::{warn, Level};
use lib_reversi::{Glyphs, MAX_CELLS};
use serde::Deserialize;
use std::path::Path;

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board rows. When either dimension is missing, both are asked for at startup.
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    /// End the game once neither player can move, even with empty cells left.
    pub stop_when_blocked: bool,
    pub log_level: Level,
    pub glyphs: Glyphs,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: None,
            columns: None,
            stop_when_blocked: false,
            log_level: Level::Info,
            glyphs: Glyphs::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    /// The board size, if the config fixes one.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        match (self.rows, self.columns) {
            (Some(rows), Some(columns)) => Some((rows, columns)),
            _ => None,
        }
    }

    pub fn runner_options(&self) -> RunnerOptions {
        RunnerOptions {
            stop_when_blocked: self.stop_when_blocked,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in &[("rows", self.rows), ("columns", self.columns)] {
            if let Some(n) = value {
                if *n < 2 || n % 2 != 0 {
                    return Err(ConfigError::Validation(format!(
                        "{} must be an even number of at least 2, got {}",
                        name, n
                    )));
                }
            }
        }

        if self.rows.is_some() != self.columns.is_some() {
            return Err(ConfigError::Validation(
                "rows and columns must be given together".into(),
            ));
        }

        if let Some((rows, columns)) = self.dimensions() {
            if rows.checked_mul(columns).map_or(true, |cells| cells > MAX_CELLS) {
                return Err(ConfigError::Validation(format!(
                    "a {}x{} board has more than {} cells",
                    rows, columns, MAX_CELLS
                )));
            }
        }

        let Glyphs {
            player_one,
            player_two,
            empty,
        } = self.glyphs;

        for &glyph in &[player_one, player_two, empty] {
            if glyph.is_whitespace() || glyph == ',' {
                return Err(ConfigError::Validation(format!(
                    "glyph {:?} cannot be whitespace or a comma",
                    glyph
                )));
            }
        }

        if player_one.eq_ignore_ascii_case(&player_two)
            || player_one.eq_ignore_ascii_case(&empty)
            || player_two.eq_ignore_ascii_case(&empty)
        {
            return Err(ConfigError::Validation("glyphs must all differ".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(GameConfig::default(), GameConfig::parse("").unwrap());
    }

    #[test]
    fn parses_full_config() {
        let config = GameConfig::parse(
            r#"
            rows = 6
            columns = 10
            stop_when_blocked = true
            log_level = "warn"

            [glyphs]
            player_one = "B"
            player_two = "W"
            "#,
        )
        .unwrap();

        assert_eq!(Some((6, 10)), config.dimensions());
        assert!(config.runner_options().stop_when_blocked);
        assert_eq!(Level::Warn, config.log_level);
        assert_eq!('B', config.glyphs.player_one);
        assert_eq!('W', config.glyphs.player_two);
        assert_eq!('.', config.glyphs.empty);
    }

    #[test]
    fn rejects_odd_dimensions() {
        let err = GameConfig::parse("rows = 7\ncolumns = 8").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_oversized_boards() {
        let err = GameConfig::parse("rows = 4294967296\ncolumns = 4294967296").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = GameConfig::parse("rows = 2048\ncolumns = 1024").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        assert!(GameConfig::parse("rows = 1024\ncolumns = 1024").is_ok());
    }

    #[test]
    fn rejects_lone_dimension() {
        let err = GameConfig::parse("rows = 8").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_clashing_glyphs() {
        let err = GameConfig::parse("[glyphs]\nplayer_one = \"o\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = GameConfig::parse("[glyphs]\nempty = \" \"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_bad_toml() {
        let err = GameConfig::parse("rows = \"eight\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 4\ncolumns = 4").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(Some((4, 4)), config.dimensions());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert_eq!(GameConfig::default(), GameConfig::load_or_default(&path).unwrap());
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::FileRead { .. })));
    }
}
