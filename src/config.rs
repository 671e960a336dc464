//! Player configuration
//!
//! Loaded from a TOML file under the user config directory. A missing file
//! means defaults; a malformed file is an error so typos do not silently
//! reset settings. `migrate_config` adds newly introduced fields to an
//! existing file without touching user edits or comments.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

/// Playback behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSection {
    /// Seek step for the rewind/forward keys, in seconds
    pub seek_step: f64,
    /// Start playback immediately once the lesson is loaded
    pub autoplay: bool,
}

impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            seek_step: 5.0,
            autoplay: true,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Color theme name: "lesson", "classic", or "ocean"
    pub theme: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: "lesson".to_string(),
        }
    }
}

/// Complete vlp configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerSection,
    pub ui: UiSection,
}

impl Config {
    /// Path of the config file: `<config dir>/vlp/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("vlp").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Write the configuration to its canonical path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Outcome of a config migration.
#[derive(Debug)]
pub struct MigrationResult {
    /// The migrated file content
    pub content: String,
    /// Added fields as `section.key` names
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add missing fields from the default configuration to an existing config
/// file, preserving user values, ordering, and comments.
pub fn migrate_config(existing: &str) -> Result<MigrationResult> {
    let mut doc = existing
        .parse::<DocumentMut>()
        .context("config file is not valid TOML")?;

    let defaults = toml::to_string_pretty(&Config::default())
        .context("failed to serialize default config")?;
    let default_doc: DocumentMut = defaults
        .parse()
        .context("failed to parse default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, item) in default_doc.iter() {
        let Some(table) = item.as_table() else {
            continue;
        };

        if doc.get(section).is_none() {
            doc[section] = toml_edit::table();
            sections_added.push(section.to_string());
        }

        for (key, value) in table.iter() {
            let present = doc[section]
                .as_table()
                .is_some_and(|t| t.contains_key(key));
            if !present {
                doc[section][key] = value.clone();
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
