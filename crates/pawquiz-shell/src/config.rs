//! Shell configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level pawquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PawquizConfig {
    /// Question set to play when none is given on the command line.
    #[serde(default)]
    pub quiz_file: Option<PathBuf>,
    /// Keep the mascot still.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Width of the progress bar in cells.
    #[serde(default = "default_bar_width")]
    pub progress_bar_width: usize,
    /// Draw the mascot under each question.
    #[serde(default = "default_true")]
    pub show_mascot: bool,
}

fn default_bar_width() -> usize {
    20
}

fn default_true() -> bool {
    true
}

impl Default for PawquizConfig {
    fn default() -> Self {
        Self {
            quiz_file: None,
            reduced_motion: false,
            progress_bar_width: default_bar_width(),
            show_mascot: true,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `pawquiz.toml` in the current directory
/// 2. `~/.config/pawquiz/config.toml`
///
/// Environment variable overrides: `PAWQUIZ_QUIZ_FILE`, `PAWQUIZ_REDUCED_MOTION`.
pub fn load_config_from(path: Option<&Path>) -> Result<PawquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pawquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PawquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => PawquizConfig::default(),
    };

    if let Ok(file) = std::env::var("PAWQUIZ_QUIZ_FILE") {
        config.quiz_file = Some(PathBuf::from(file));
    }

    if let Ok(value) = std::env::var("PAWQUIZ_REDUCED_MOTION") {
        match parse_flag(&value) {
            Some(flag) => config.reduced_motion = flag,
            None => tracing::warn!("ignoring PAWQUIZ_REDUCED_MOTION={value:?}"),
        }
    }

    config.quiz_file = config
        .quiz_file
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    anyhow::ensure!(
        config.progress_bar_width >= 1,
        "progress_bar_width must be at least 1"
    );

    tracing::debug!(source = ?config_path, ?config, "configuration loaded");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pawquiz"))
}
