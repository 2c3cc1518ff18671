use ::config::{Environment, Source, Value};
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::core::GameEngine;
use crate::core::engine::DEFAULT_ROW_SIZE;
use crate::ui::theme::THEME_NAMES;
use crate::utils::{GameError, GameResult};

/// Prefix for environment overrides, e.g. `TICTACTOE__GAME__ROW_SIZE=5`.
pub const ENV_PREFIX: &str = "TICTACTOE";

/// Overridable keys that must hold a whole number.
const INTEGER_KEYS: [&str; 2] = ["game.row_size", "game.fields_to_win"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub row_size: usize,
    /// Defaults to `row_size` when unset.
    pub fields_to_win: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub show_indices: bool,
    pub highlight_solution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            row_size: DEFAULT_ROW_SIZE,
            fields_to_win: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_indices: true,
            highlight_solution: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads the file at `path` and applies environment overrides on top.
    /// A missing file is created with the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::configuration(format!("Failed to read config file: {}", e)))?;

        let file_config: Config = toml::from_str(&content)
            .map_err(|e| GameError::configuration(format!("Failed to parse config file: {}", e)))?;

        let config = file_config.with_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Layers `TICTACTOE__SECTION__KEY` variables over this configuration.
    pub fn with_env_overrides(&self) -> GameResult<Self> {
        self.with_overrides_from(ENV_PREFIX)
    }

    fn with_overrides_from(&self, prefix: &str) -> GameResult<Self> {
        let environment = Environment::with_prefix(prefix)
            .separator("__")
            .try_parsing(true);

        // The config crate rounds floats into integer fields, so sizes are
        // checked before they reach deserialization.
        let overrides = environment.collect().map_err(|e| {
            GameError::configuration(format!("Failed to read environment overrides: {}", e))
        })?;
        for key in INTEGER_KEYS {
            if let Some(value) = overrides.get(key) {
                ensure_integer(key, value)?;
            }
        }

        let base = ::config::Config::try_from(self)
            .map_err(|e| GameError::configuration(format!("Failed to prepare config: {}", e)))?;

        ::config::Config::builder()
            .add_source(base)
            .add_source(environment)
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| {
                GameError::configuration(format!("Failed to apply environment overrides: {}", e))
            })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GameError::configuration(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| GameError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        if !THEME_NAMES.contains(&self.ui.theme.as_str()) {
            return Err(GameError::configuration(format!("Unknown theme: {}", self.ui.theme)));
        }

        GameEngine::validate_dimensions(self.game.row_size, self.fields_to_win())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(row_size) = cli_config.row_size {
            self.game.row_size = row_size;
            // A win length from the file may not fit the new board.
            if cli_config.fields_to_win.is_none() {
                self.game.fields_to_win = None;
            }
        }
        if let Some(fields_to_win) = cli_config.fields_to_win {
            self.game.fields_to_win = Some(fields_to_win);
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
    }

    pub fn fields_to_win(&self) -> usize {
        self.game.fields_to_win.unwrap_or(self.game.row_size)
    }

    /// Fresh engine for the configured board.
    pub fn new_engine(&self) -> GameResult<GameEngine> {
        GameEngine::with_fields_to_win(self.game.row_size, self.fields_to_win())
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`.
    pub fn log_filter(&self) -> String {
        format!("tic_tac_toe_engine={},tictactoe={},warn", self.logging.level, self.logging.level)
    }
}

fn ensure_integer(key: &str, value: &Value) -> GameResult<()> {
    let raw = value.clone().into_string().map_err(|e| {
        GameError::configuration(format!("Invalid override for {}: {}", key, e))
    })?;

    match raw.trim().parse::<usize>() {
        Ok(_) => Ok(()),
        Err(_) => Err(GameError::configuration(format!(
            "{} must be an integer, got {}",
            key, raw
        ))),
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub row_size: Option<usize>,
    pub fields_to_win: Option<usize>,
    pub theme: Option<String>,
    pub log_level: Option<String>,
    pub debug: bool,
}
