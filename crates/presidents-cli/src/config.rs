//! CLI configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use presidents_core::flashcards::{CardField, CardLayout};
use presidents_core::parser::parse_roster;
use presidents_core::{Mode, Roster};

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Default card faces for the flashcards command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardConfig {
    #[serde(default = "default_front")]
    pub front: Vec<CardField>,
    #[serde(default = "default_back")]
    pub back: Vec<CardField>,
}

fn default_front() -> Vec<CardField> {
    vec![CardField::Name]
}
fn default_back() -> Vec<CardField> {
    vec![CardField::Number]
}

impl Default for FlashcardConfig {
    fn default() -> Self {
        Self {
            front: default_front(),
            back: default_back(),
        }
    }
}

impl FlashcardConfig {
    pub fn layout(&self) -> CardLayout {
        CardLayout::new(self.front.clone(), self.back.clone())
    }
}

/// Top-level presidents configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresidentsConfig {
    /// Custom roster file; the built-in roster is used when unset.
    #[serde(default)]
    pub roster: Option<PathBuf>,
    /// Mode a quiz starts in.
    #[serde(default = "default_mode")]
    pub default_mode: Mode,
    #[serde(default)]
    pub flashcards: FlashcardConfig,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_mode() -> Mode {
    Mode::Practice
}

impl Default for PresidentsConfig {
    fn default() -> Self {
        Self {
            roster: None,
            default_mode: default_mode(),
            flashcards: FlashcardConfig::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl PresidentsConfig {
    /// The roster to quiz on: an explicit path wins over the configured one,
    /// which wins over the built-in roster.
    pub fn load_roster(&self, explicit: Option<&Path>) -> Result<Arc<Roster>> {
        match explicit.or(self.roster.as_deref()) {
            Some(path) => {
                let roster = parse_roster(path)?;
                tracing::info!(path = %path.display(), records = roster.len(), "using custom roster");
                Ok(Arc::new(roster))
            }
            None => Ok(Roster::builtin()),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let name = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        // Values are inserted verbatim and never rescanned
        result.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[start + 3 + len..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. the explicit path, which must exist
/// 2. `presidents.toml` in the current directory
/// 3. `~/.config/presidents/config.toml`
///
/// `PRESIDENTS_ROSTER` overrides the configured roster path.
pub fn load_config_from(path: Option<&Path>) -> Result<PresidentsConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("presidents.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<PresidentsConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => PresidentsConfig::default(),
    };

    if let Ok(roster) = std::env::var("PRESIDENTS_ROSTER") {
        if !roster.is_empty() {
            config.roster = Some(PathBuf::from(roster));
        }
    }

    config.roster = config
        .roster
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("presidents"))
}
