//! On-disk access token cache.
//!
//! The cloud service hands out long-lived access tokens on login; reusing
//! one across invocations avoids a credential exchange per command. The
//! cache is a single file holding the bare token string.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;

/// File-backed token store.
#[derive(Debug, Clone)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored token, if any. A missing file is not an error.
    pub fn load(&self) -> Result<Option<String>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_owned();
                if token.is_empty() {
                    Ok(None)
                } else {
                    debug!(path = %self.path.display(), "loaded stored access token");
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::TokenStore {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Persist a fresh token, creating parent directories as needed.
    pub fn store(&self, token: &str) -> Result<(), Error> {
        let io_err = |source| Error::TokenStore {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, token).map_err(io_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(io_err)?;
        }
        debug!(path = %self.path.display(), "stored access token");
        Ok(())
    }

    /// Drop the stored token (after the service rejected it).
    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::TokenStore {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
