//! CLI command implementations

pub mod export;
pub mod init;
pub mod validate;

/// Exit code: success
pub const EXIT_OK: i32 = 0;

/// Exit code: strict mode and at least one record failed
pub const EXIT_RECORD_FAILURES: i32 = 1;

/// Exit code: configuration error
pub const EXIT_CONFIG: i32 = 2;

/// Exit code: the content provider fetch failed
pub const EXIT_FETCH: i32 = 4;

/// Exit code: any other fatal error
pub const EXIT_FATAL: i32 = 5;
