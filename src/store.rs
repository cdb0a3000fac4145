//! Persistent token slot, the native analog of the page's `localStorage`
//! entry: one `token` key in an ini file under the user config directory.

use configparser::ini::Ini;
use std::path::{Path, PathBuf};

use crate::error::Error;

const STORE_FILE: &str = "staffboard.ini";
const AUTH_SECTION: &str = "Auth";
const TOKEN_KEY: &str = "token";

pub fn store_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("staffboard"))
}

pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> TokenStore {
        TokenStore { path: path.into() }
    }

    /// Store backed by the default config-dir location.
    pub fn default_store() -> Result<TokenStore, Error> {
        let dir = store_dir()
            .ok_or_else(|| Error::Store("could not determine config directory".to_string()))?;
        Ok(TokenStore::new(dir.join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the token under the `token` key, creating the file if needed.
    /// Existing unrelated keys in the file are preserved.
    pub fn save(&self, token: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Store(e.to_string()))?;
        }

        let mut config = Ini::new_cs();
        if self.path.exists() {
            config.load(&self.path).map_err(Error::Store)?;
        }
        config.setstr(AUTH_SECTION, TOKEN_KEY, Some(token));
        config
            .write(&self.path)
            .map_err(|e| Error::Store(e.to_string()))?;

        set_restrictive_permissions(&self.path);
        Ok(())
    }

    /// Reads the stored token back, if one was ever written.
    pub fn load(&self) -> Option<String> {
        let mut config = Ini::new_cs();
        config.load(&self.path).ok()?;
        config
            .get(AUTH_SECTION, TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }
}

/// Set restrictive file permissions (0600) on Unix to protect the token file.
#[cfg(unix)]
fn set_restrictive_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let permissions = std::fs::Permissions::from_mode(0o600);
    if let Err(e) = std::fs::set_permissions(path, permissions) {
        tracing::warn!(
            "Failed to set restrictive permissions on {}: {}",
            path.display(),
            e
        );
    }
}

/// No-op on non-Unix platforms.
#[cfg(not(unix))]
fn set_restrictive_permissions(_path: &Path) {}
