pub mod bookmark;
pub mod client;
pub mod config;
pub mod error;
pub mod job;
pub mod oauth;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::bookmark::{select_due, Account, Bookmark, ListResponse};
pub use crate::client::{Authenticator, BookmarkService, InstapaperClient, Session};
pub use crate::config::{default_config_path, Config};
pub use crate::error::{ArchiverError, Result};
pub use crate::job::{run, JobOptions, Summary};
