use configparser::ini::Ini;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::api::DEFAULT_BASE_URL;
use crate::error::Error;

pub const CONFIG_FILE: &str = "staffboard.ini";
const DEFAULT_PAGE_FILE: &str = "roster.html";

/// Local settings for a run. Everything has a default, so the tool works
/// with no config file at all.
pub struct Env {
    pub base_url: String,
    pub page_path: PathBuf,
    pub open_browser: bool,
}

impl Default for Env {
    fn default() -> Self {
        Env {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_path: default_page_path(),
            open_browser: true,
        }
    }
}

fn config_dir_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("staffboard"))
}

fn default_page_path() -> PathBuf {
    config_dir_path()
        .map(|dir| dir.join(DEFAULT_PAGE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE_FILE))
}

fn find_config_file() -> Option<PathBuf> {
    let mut locations = Vec::new();
    if let Some(dir) = config_dir_path() {
        locations.push(dir);
    }
    if let Ok(mut exe_path) = env::current_exe() {
        exe_path.pop();
        locations.push(exe_path);
    }

    for location in &locations {
        let config_file = location.join(CONFIG_FILE);
        if config_file.exists() {
            return Some(config_file);
        }
    }
    None
}

/// Load local settings, falling back to defaults when the file or individual
/// keys are absent.
pub fn load_config() -> Env {
    match find_config_file() {
        Some(path) => load_config_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to read {}: {}, using defaults", path.display(), e);
            Env::default()
        }),
        None => Env::default(),
    }
}

/// Load settings from a specific ini file.
pub fn load_config_from(path: &Path) -> Result<Env, Error> {
    let mut config = Ini::new();
    config.load(path).map_err(Error::Config)?;

    Ok(Env {
        base_url: config
            .get("Server", "baseUrl")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        page_path: config
            .get("Output", "pagePath")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_page_path),
        open_browser: config
            .getbool("Output", "openBrowser")
            .unwrap_or(Some(true))
            .unwrap_or(true),
    })
}
