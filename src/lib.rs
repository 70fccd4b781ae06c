//! Minimal client for the DirectAdmin hosting control panel HTTP API.
//!
//! DirectAdmin has no typed API surface: every command is a form POST to a
//! `CMD_*` endpoint answering ad-hoc HTML, and the session lives in a cookie
//! persisted to a jar file on disk. This crate reproduces that contract:
//! login via form POST, then domain-pointer and file-manager commands over
//! the same cookie-backed primitive. Whether a command actually succeeded
//! server-side is only knowable by inspecting the returned body; apart from
//! the login check, any transport-successful response is reported as success.
//!
//! ```no_run
//! use directadmin_api::DirectAdminClient;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = DirectAdminClient::builder("mydomain.com", "mydomainuser", "mydomainpass")
//!     .domain("mydomain.com")
//!     .build()?;
//! let client = client.login().await?;
//! client.add_domain_pointer("newdomain.com", true).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod base;
pub mod builder;
mod cookies;
mod domain_pointer;
pub mod endpoints;
mod file_manager;

pub use auth::{AuthState, Authed, NotAuthed};
pub use base::{DirectAdminClient, SessionConfig};
pub use builder::DirectAdminClientBuilder;
pub use endpoints::Action;
