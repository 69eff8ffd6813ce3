//! Authenticated-session context.
//!
//! ARCHITECTURE
//! ============
//! Replaces a bare global token variable: the context owns the in-memory
//! token together with the store it is persisted to. `establish` is the only
//! write path, called once per successful login; reads happen through
//! `bearer_value` when building the Authorization header.

use crate::error::ApiError;
use crate::store::TokenStore;

/// Value sent when no token is present. Matches the header an unauthenticated
/// page would send (`Bearer null`); no guard exists, the backend rejects it.
const MISSING_TOKEN: &str = "null";

#[derive(Debug)]
pub struct SessionContext<S: TokenStore> {
    token: Option<String>,
    store: S,
}

impl<S: TokenStore> SessionContext<S> {
    /// Fresh context with no token in memory.
    pub fn new(store: S) -> Self {
        Self { token: None, store }
    }

    /// Context seeded from whatever token the store already holds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the store cannot be read.
    pub fn restore(store: S) -> Result<Self, ApiError> {
        let token = store.load()?;
        Ok(Self { token, store })
    }

    /// Set the in-memory token and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if persisting fails; the in-memory token
    /// is still set in that case.
    pub fn establish(&mut self, token: String) -> Result<(), ApiError> {
        let persisted = self.store.save(&token);
        self.token = Some(token);
        persisted?;
        Ok(())
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The value placed after `Bearer ` in the Authorization header:
    /// the token, or the literal `"null"` when none is present.
    #[must_use]
    pub fn bearer_value(&self) -> &str {
        self.token.as_deref().unwrap_or(MISSING_TOKEN)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
