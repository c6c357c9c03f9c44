//! Result type alias for Quire

use super::errors::QuireError;

/// Result type alias for Quire operations
///
/// # Examples
///
/// ```
/// use quire::domain::result::Result;
/// use quire::domain::errors::QuireError;
///
/// fn failing_function() -> Result<()> {
///     Err(QuireError::Other("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, QuireError>;
