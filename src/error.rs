//! Sitemap error types.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Errors raised by registry validation, sitemap generation and publishing.
///
/// Validation errors (`InvalidInput`) are caller errors and never retried.
/// Precondition errors (`EmptyInput`, `TooManyUrls`, `SitemapTooLarge`) mean
/// the caller must adjust the registry contents and retry the whole call.
/// Ordering errors (`NothingToWrite`, `NotReady`) mean a generation step was
/// skipped. Transport errors carry no internal retry; retries are the
/// caller's responsibility.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("there are no URLs to process")]
    EmptyInput,

    #[error("too many URLs for a single sitemap: {count}")]
    TooManyUrls { count: usize },

    #[error("serialized sitemap is {size} bytes and exceeds the size limit")]
    SitemapTooLarge { size: usize },

    #[error("no sitemap to write; call create_sitemap first")]
    NothingToWrite,

    #[error("no public sitemap URL; call create_sitemap first")]
    NotReady,

    #[error("failed to write `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("request failed: {0}")]
    Http(String),
}
