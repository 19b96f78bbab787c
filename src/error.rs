//! Typed errors for the auth, session and fixture layers
//!
//! The query engine has no failure modes: malformed criteria just produce
//! an empty (or full) result and out-of-range pages come back empty.

/// Failures surfaced by login / register
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already in use")]
    EmailAlreadyInUse,

    #[error("{0}")]
    Validation(String),

    /// Another login or register call is still in flight
    #[error("Another authentication request is already in progress")]
    OperationInProgress,

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Failures reading or writing the persisted session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session record is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures loading seed data
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported fixture version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
