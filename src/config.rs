//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/arbor/arbor.toml`
//! 3. Local config: a file passed by the caller
//! 4. Environment variables: `ARBOR_*` prefix, `__` between nested keys

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{ArborError, ArborResult};

/// Delimiters and labels used when rendering nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Between a node id and its child list
    pub arrow: String,
    /// Opens the child list
    pub open: String,
    /// Closes the child list
    pub close: String,
    /// Between two rendered children
    pub separator: String,
    /// Append `(tag)` to tree view labels when the tag is set
    pub show_tags: bool,
    /// Shown when rendering a forest without any tree
    pub empty_label: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            arrow: " --> ".into(),
            open: "[ ".into(),
            close: " ]".into(),
            separator: " , ".into(),
            show_tags: false,
            empty_label: "Empty tree".into(),
        }
    }
}

/// Unified configuration for arbor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
}

/// Get the XDG config directory for arbor.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "arbor").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("arbor.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path, leaving it untouched on failure.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn config_err(e: config::ConfigError) -> ArborError {
    ArborError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence, reading `ARBOR_*` from the
    /// process environment.
    pub fn load(local: Option<&Path>) -> ArborResult<Self> {
        Self::load_with_env(local, None)
    }

    /// Load settings with layered precedence, using the XDG global config.
    ///
    /// # Arguments
    /// * `local` - Optional local config file; must exist when given
    /// * `env` - Variables to use instead of the process environment
    pub fn load_with_env(
        local: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> ArborResult<Self> {
        let global = global_config_path();
        Self::load_layers(global.as_deref(), local, env)
    }

    /// Load settings from explicit layers.
    ///
    /// A missing `global` file is skipped; a missing `local` file is an error.
    #[instrument(level = "debug", skip(env))]
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> ArborResult<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "using global config");
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(local_path) = local {
            let expanded = expand_path(local_path);
            if !expanded.is_file() {
                return Err(ArborError::Config {
                    message: format!("config file not found: {}", expanded.display()),
                });
            }
            debug!(path = %expanded.display(), "using local config");
            builder = builder.add_source(File::from(expanded).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("ARBOR")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}
