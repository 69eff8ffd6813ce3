//! Token persistence.
//!
//! ARCHITECTURE
//! ============
//! One opaque token under one fixed key, written on successful login and
//! never deleted — a later login simply overwrites it. `FileTokenStore` is
//! the durable variant; `MemoryTokenStore` keeps the token in-process for
//! tests and embedding.

use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Fixed key the token is stored under.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore {
    /// Load the persisted token, if any.
    fn load(&self) -> io::Result<Option<String>>;
    /// Persist the token, overwriting any previous value.
    fn save(&self, token: &str) -> io::Result<()>;
}

/// File-backed store: the token lives in a file named [`TOKEN_KEY`] inside
/// the gatepass home directory.
///
/// Home resolution order:
/// 1. `GATEPASS_HOME` environment variable (if set)
/// 2. `~/.config/gatepass`
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let dir = match std::env::var("GATEPASS_HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => dirs::home_dir()
                .map(|h| h.join(".config").join("gatepass"))
                .unwrap_or_else(|| PathBuf::from(".gatepass")),
        };
        Self { dir }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(raw) => Ok(Some(raw.trim_end_matches('\n').to_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.token_path(), token)
    }
}

/// In-process store, the analog of the page-global token variable.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        let guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        let mut guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token.to_owned());
        Ok(())
    }
}

impl<S: TokenStore> TokenStore for &S {
    fn load(&self) -> io::Result<Option<String>> {
        (*self).load()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        (*self).save(token)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
