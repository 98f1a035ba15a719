//! Sitemap generation and search-engine ping for static site tooling.
//!
//! Accumulates validated URL records, serializes them into sitemaps.org
//! `sitemap.xml` documents (50,000-URL cap per file, 10 MiB ceiling) plus an
//! optional `sitemap-index.xml`, writes the artifacts through an injected
//! file sink and pings search engines through an injected HTTP client.
//!
//! # Example
//!
//! ```
//! use sitemapper::{FsSink, SitemapGenerator};
//!
//! # fn main() -> Result<(), sitemapper::SitemapError> {
//! let dir = tempfile::tempdir().unwrap();
//! let mut generator = SitemapGenerator::new("https://example.com", dir.path());
//! generator.add_url("https://example.com/about", "0.5", "monthly", None)?;
//! generator.create_sitemap()?;
//! generator.write(&FsSink)?;
//! # Ok(())
//! # }
//! ```

pub mod date;
pub mod engines;
pub mod error;
pub mod generator;
pub mod http;
pub mod logger;
pub mod publisher;
pub mod record;
pub mod registry;
pub mod sink;

pub use engines::DEFAULT_SEARCH_ENGINES;
pub use error::{Result, SitemapError};
pub use generator::{
    MAX_SITEMAP_BYTES, MAX_URLS_PER_SITEMAP, SITEMAP_FILE_NAME, SITEMAP_INDEX_FILE_NAME,
    SITEMAP_NS, SitemapGenerator, index::SitemapIndex, sitemap::Sitemap,
};
pub use http::{HttpClient, PingResponse, ReqwestClient};
pub use publisher::PingOutcome;
pub use record::{ChangeFrequency, Priority, UrlInput, UrlRecord};
pub use registry::UrlRegistry;
pub use sink::{FileSink, FsSink};
