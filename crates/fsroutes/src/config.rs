// File: src/config.rs
// Purpose: Configuration parsing from fsroutes.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouteError};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "fsroutes.toml";

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Application directory containing `root.<ext>` (default: "app")
    #[serde(default = "default_app_dir")]
    pub app_dir: String,

    /// Directory containing route files, relative to `app_dir` (default: "routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Globs for files to ignore, on top of the always-ignored dotfiles
    #[serde(default)]
    pub ignored_route_files: Vec<String>,
}

// Default values
fn default_app_dir() -> String {
    "app".to_string()
}

fn default_routes_dir() -> String {
    "routes".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            routes_dir: default_routes_dir(),
            ignored_route_files: Vec::new(),
        }
    }
}

/// Inputs of a full routes build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutesOptions {
    pub app_dir: PathBuf,
    pub routes_dir: String,
    pub ignored_route_files: Vec<String>,
}

impl Default for RoutesOptions {
    fn default() -> Self {
        RoutingConfig::default().into()
    }
}

impl From<RoutingConfig> for RoutesOptions {
    fn from(routing: RoutingConfig) -> Self {
        Self {
            app_dir: PathBuf::from(routing.app_dir),
            routes_dir: routing.routes_dir,
            ignored_route_files: routing.ignored_route_files,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| RouteError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content).map_err(|e| RouteError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from default path (./fsroutes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Options for [`next_routes`](crate::next_routes) from this configuration
    pub fn routes_options(&self) -> RoutesOptions {
        self.routing.clone().into()
    }
}
