use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a run before any bookmark is touched.
///
/// Per-bookmark archive failures and listing failures are not errors; they are
/// reported through [`crate::job::Summary`] instead.
#[derive(Debug, Error)]
pub enum ArchiverError {
    #[error("Configuration file not found at {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("Failed to read configuration file {}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}", .path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Access token request failed with status {status}")]
    AuthRejected { status: u16, body: String },

    #[error("Access token response is missing {0}")]
    MalformedToken(&'static str),

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),
}

impl ArchiverError {
    /// Extra lines printed under the error message on stderr.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            ArchiverError::ConfigMissing(_) => vec![
                "Please create instapaper_config.json with your credentials.".to_string(),
                "See instapaper_config.example.json for format.".to_string(),
            ],
            ArchiverError::AuthRejected { body, .. } => vec![body.clone()],
            _ => Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiverError>;
