use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "lovely-labels";
const APP_CONFIG_FILE: &str = "config.json";

fn default_data_file() -> PathBuf {
    PathBuf::from("data/user_data.json")
}

fn default_preview_image() -> PathBuf {
    PathBuf::from("output/single_address_label.png")
}

fn default_placeholder_preview_image() -> PathBuf {
    PathBuf::from("output/default_single_address_label.png")
}

fn default_logo_image() -> PathBuf {
    PathBuf::from("images/ll_small.png")
}

fn default_sheet_command() -> String {
    "lovely-labels-sheet".to_string()
}

fn default_crop_command() -> String {
    "lovely-labels-crop".to_string()
}

/// Application-level settings from `config.json`. Every field has a
/// default matching the fixed paths the collaborators agree on, so a
/// missing or partial file is fine.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AppConfig {
    #[serde(default = "default_data_file")]
    pub(crate) data_file: PathBuf,
    #[serde(default = "default_preview_image")]
    pub(crate) preview_image: PathBuf,
    #[serde(default = "default_placeholder_preview_image")]
    pub(crate) placeholder_preview_image: PathBuf,
    #[serde(default = "default_logo_image")]
    pub(crate) logo_image: PathBuf,
    #[serde(default = "default_sheet_command")]
    pub(crate) sheet_command: String,
    #[serde(default = "default_crop_command")]
    pub(crate) crop_command: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            preview_image: default_preview_image(),
            placeholder_preview_image: default_placeholder_preview_image(),
            logo_image: default_logo_image(),
            sheet_command: default_sheet_command(),
            crop_command: default_crop_command(),
        }
    }
}

pub(crate) fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
