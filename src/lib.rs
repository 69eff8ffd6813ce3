//! Client library for a username/password auth backend.
//!
//! Three operations — register, login, fetch-current-user — over plain JSON
//! HTTP, plus the pieces around them: a session context holding the bearer
//! token, a pluggable token store, and a pluggable feedback renderer for the
//! login/registration flows.

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod flows;
pub mod session;
pub mod store;

pub use api::{ApiClient, Credentials, CurrentUser};
pub use config::BackendConfig;
pub use error::ApiError;
pub use feedback::{AlertFeedback, Feedback, StatusLineFeedback};
pub use flows::Destination;
pub use session::SessionContext;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
