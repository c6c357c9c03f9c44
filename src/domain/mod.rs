//! Domain models and types for Quire.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Content records** ([`Record`]) as delivered by the content provider
//! - **Validated identifiers** ([`Slug`])
//! - **Error types** ([`QuireError`], [`ProviderError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use quire::domain::{Record, Slug};
//!
//! let record = Record::new(
//!     "hello",
//!     "Hi",
//!     "World",
//!     "2023-01-02T00:00:00Z",
//!     "2023-01-03T00:00:00Z",
//! )
//! .with_categories(["a", "b"]);
//!
//! let slug = Slug::new(record.slug.clone()).unwrap();
//! assert_eq!(slug.file_name(), "hello.md");
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

pub use errors::{ProviderError, QuireError};
pub use ids::Slug;
pub use record::Record;
pub use result::Result;
