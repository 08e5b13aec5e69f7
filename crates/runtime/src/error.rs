//! Error types surfaced by the advisory session.

/// Errors from session configuration calls.
///
/// Per-tick advice never fails: malformed collaborator input degrades to
/// neutral output inside the engine. Only explicit configuration by name
/// can be rejected.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown strategy profile: {0}")]
    UnknownStrategy(String),
}
