//! HTTP collaborators: the product catalog and the order service.
//!
//! Both are consumed as opaque JSON endpoints through a shared `reqwest::Client`.

pub mod catalog;
pub mod error;
pub mod orders;

pub use catalog::*;
pub use error::*;
pub use orders::*;

/// Joins a base URL and an absolute path without doubling the `/`.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
