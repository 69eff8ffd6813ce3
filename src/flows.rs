//! The three user-facing flows, the form-submission handlers of old.
//!
//! ERROR HANDLING
//! ==============
//! A backend rejection is rendered through the injected feedback strategy and
//! ends the flow with no destination. Transport, decode, and storage failures
//! propagate as `Err` for the caller to report.

use std::fmt;

use crate::api::{ApiClient, Credentials, CurrentUser};
use crate::error::ApiError;
use crate::feedback::Feedback;
use crate::session::SessionContext;
use crate::store::TokenStore;

/// Where the UI goes after a successful flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Profile,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Profile => write!(f, "profile"),
        }
    }
}

/// Register a new account.
///
/// On 201 the caller should continue at the login page. Any other backend
/// answer renders as a registration failure with no destination; the
/// backend's specific reason is not surfaced.
///
/// # Errors
///
/// Transport failures propagate as [`ApiError::Network`].
pub async fn register(
    api: &ApiClient,
    creds: &Credentials,
    feedback: &mut dyn Feedback,
) -> Result<Option<Destination>, ApiError> {
    match api.register(creds).await {
        Ok(()) => Ok(Some(Destination::Login)),
        Err(e) if e.is_rejection() => {
            tracing::warn!(error = %e, "registration rejected");
            feedback.registration_failed();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Log in and establish the session.
///
/// On success the token is set in memory and persisted, and the caller
/// should continue at the profile page. On rejection nothing is written to
/// the store.
///
/// # Errors
///
/// Transport and decode failures propagate, as does a token-store write
/// failure after a successful exchange.
pub async fn login<S: TokenStore>(
    api: &ApiClient,
    creds: &Credentials,
    session: &mut SessionContext<S>,
    feedback: &mut dyn Feedback,
) -> Result<Option<Destination>, ApiError> {
    match api.login(creds).await {
        Ok(token) => {
            session.establish(token)?;
            feedback.login_succeeded();
            Ok(Some(Destination::Profile))
        }
        Err(e) if e.is_rejection() => {
            tracing::warn!(error = %e, "login rejected");
            feedback.login_failed();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Fetch the current user with the session's bearer value.
///
/// Not invoked automatically by any other flow; callers opt in explicitly.
/// A session without a token still issues the request, as `Bearer null`.
///
/// # Errors
///
/// All backend rejections propagate here — there is no feedback strategy for
/// this flow, the caller renders the profile or the error itself.
pub async fn current_user<S: TokenStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
) -> Result<CurrentUser, ApiError> {
    api.current_user(session.bearer_value()).await
}
