//! Default-application launch seam.
//!
//! Opening a URI delegates to the platform's default-handler mechanism,
//! which is an external collaborator this binary does not ship yet. The
//! interface exists so `open` fails loudly instead of silently no-opping.

use thiserror::Error;

/// Errors from launching a URI with the default application.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No platform launcher is wired in yet.
    #[error("opening '{0}' with the default application is not implemented")]
    Unimplemented(String),
}

/// Hands a URI to the platform's default-application handler.
///
/// # Errors
///
/// Always returns [`LaunchError::Unimplemented`] until a platform opener
/// is wired in.
pub fn launch_default_app(uri: &str) -> Result<(), LaunchError> {
    Err(LaunchError::Unimplemented(uri.to_string()))
}
