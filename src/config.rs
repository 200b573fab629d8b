//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/doctree/doctree.toml`
//! 3. Local config: `<dir>/.doctree.toml`
//! 4. Environment variables: `DOCTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::IconTheme;

/// Raw icon overrides for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawIcons {
    pub container: Option<String>,
    pub leaf: Option<String>,
}

/// Raw settings for intermediate parsing.
///
/// `None` means "not specified, inherit from the layer below".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub seed_sample: Option<bool>,
    pub documents_file: Option<PathBuf>,
    pub indent: Option<usize>,
    pub icons: RawIcons,
}

/// Unified configuration for doctree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Seed new stores with the built-in sample document
    pub seed_sample: bool,
    /// JSON file with documents to load on start
    pub documents_file: Option<PathBuf>,
    /// Spaces per tree level when rendering
    pub indent: usize,
    /// Fallback icons for nodes without one
    pub icons: IconTheme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_sample: true,
            documents_file: None,
            indent: 2,
            icons: IconTheme::default(),
        }
    }
}

/// Get the XDG config directory for doctree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "doctree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("doctree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".doctree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(file) = &self.documents_file {
            let expanded = expand_path(file.to_string_lossy().as_ref());
            self.documents_file = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            seed_sample: overlay.seed_sample.unwrap_or(self.seed_sample),
            documents_file: overlay
                .documents_file
                .clone()
                .or_else(|| self.documents_file.clone()),
            indent: overlay.indent.unwrap_or(self.indent),
            icons: IconTheme {
                container: overlay
                    .icons
                    .container
                    .clone()
                    .unwrap_or_else(|| self.icons.container.clone()),
                leaf: overlay
                    .icons
                    .leaf
                    .clone()
                    .unwrap_or_else(|| self.icons.leaf.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.doctree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        let mut current = Self::load_layers(global.as_deref(), local_dir)?;
        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        Ok(current)
    }

    /// Merge defaults, an optional global file and an optional local directory.
    ///
    /// Environment variables are not consulted.
    pub fn load_layers(
        global_file: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current.expand_paths();
        Ok(current)
    }

    /// Apply DOCTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
            Environment::with_prefix("DOCTREE")
                .prefix_separator("_")
                .separator("__"),
        )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("seed_sample") {
            settings.seed_sample = val;
        }
        if let Ok(val) = config.get_string("documents_file") {
            settings.documents_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_int("indent") {
            settings.indent = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("indent must not be negative: {val}"),
            })?;
        }
        if let Ok(val) = config.get_string("icons.container") {
            settings.icons.container = val;
        }
        if let Ok(val) = config.get_string("icons.leaf") {
            settings.icons.leaf = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# doctree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/doctree/doctree.toml
#   Local:  <dir>/.doctree.toml
#   Env:    DOCTREE_* environment variables (DOCTREE_ICONS__LEAF=...)

# Seed the store with the built-in sample document
# seed_sample = true

# JSON file with documents to load (array of {id, name, treeData})
# documents_file = "~/.local/share/doctree/documents.json"

# Spaces per tree level when printing
# indent = 2

[icons]
# Icon for nodes with children that carry no icon
# container = "folder"

# Icon for leaf nodes that carry no icon
# leaf = "description"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_layers_when_loading_then_uses_defaults() {
        let settings = Settings::load_layers(None, None).expect("load defaults");
        assert_eq!(settings, Settings::default());
        assert!(settings.seed_sample);
        assert_eq!(settings.icons.leaf, "description");
    }

    #[test]
    fn given_tilde_in_documents_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            documents_file: Some(PathBuf::from("~/docs.json")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let file = settings.documents_file.expect("documents_file kept");
        assert!(
            file.to_string_lossy().starts_with(&home),
            "documents_file should start with home dir: {}",
            file.display()
        );
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            indent: Some(4),
            icons: RawIcons {
                container: None,
                leaf: Some("lock".into()),
            },
            ..RawSettings::default()
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.indent, 4);
        assert_eq!(result.icons.leaf, "lock");
        assert_eq!(result.icons.container, "folder");
        assert!(result.seed_sample);
        assert_eq!(result.documents_file, None);
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.seed_sample.is_none());
    }

    #[test]
    fn given_settings_when_serialized_then_round_trips() {
        let settings = Settings {
            indent: 3,
            ..Settings::default()
        };
        let parsed: Settings = toml::from_str(&settings.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }
}
