//! Sitemap document generation.
//!
//! Turns the contents of a [`UrlRegistry`] into one or more documents:
//!
//! - **Sitemap**: `urlset` listing page URLs for search-engine crawlers
//!   (`sitemap.xml`)
//! - **Sitemap index**: `sitemapindex` listing the generated sitemap files
//!   (`sitemap-index.xml`)
//!
//! Both conform to the sitemaps.org 0.9 schema.

pub mod index;
pub mod sitemap;

use crate::engines::{DEFAULT_SEARCH_ENGINES, merge_search_engines};
use crate::error::{Result, SitemapError};
use crate::record::UrlInput;
use crate::registry::UrlRegistry;
use self::index::SitemapIndex;
use self::sitemap::Sitemap;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// XML namespace shared by `urlset` and `sitemapindex` documents.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// File name assigned to a generated sitemap.
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

/// File name assigned to the generated sitemap index.
pub const SITEMAP_INDEX_FILE_NAME: &str = "sitemap-index.xml";

/// Hard cap on URLs rendered into one sitemap file.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// Byte ceiling for one serialized sitemap file (10 MiB).
pub const MAX_SITEMAP_BYTES: usize = 10_485_760;

/// One sitemap generation run: URL collection, serialization and publishing.
///
/// `base_url` builds the absolute public URLs (`loc` values and ping
/// targets); `base_path` is the local directory files are written under.
/// Not designed for concurrent mutation; use one instance per run.
pub struct SitemapGenerator {
    base_url: String,
    base_path: PathBuf,
    search_engines: Vec<String>,
    registry: UrlRegistry,
    sitemaps: Vec<Sitemap>,
    sitemap_index: Option<SitemapIndex>,
    sitemap_full_url: Option<String>,
}

impl SitemapGenerator {
    /// Create a generator with the built-in search-engine endpoints.
    pub fn new(base_url: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            base_path: base_path.into(),
            search_engines: DEFAULT_SEARCH_ENGINES.map(String::from).to_vec(),
            registry: UrlRegistry::new(),
            sitemaps: Vec::new(),
            sitemap_index: None,
            sitemap_full_url: None,
        }
    }

    /// Merge additional ping endpoint templates after the defaults.
    pub fn with_search_engines<I, S>(mut self, additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_engines = merge_search_engines(additional);
        self
    }

    /// See [`UrlRegistry::add_url`].
    pub fn add_url(
        &mut self,
        location: impl Into<String>,
        priority: &str,
        change_frequency: &str,
        last_modified: Option<String>,
    ) -> Result<()> {
        self.registry
            .add_url(location, priority, change_frequency, last_modified)
    }

    /// See [`UrlRegistry::add_urls`].
    pub fn add_urls(&mut self, inputs: &[UrlInput]) -> Result<()> {
        self.registry.add_urls(inputs)
    }

    /// Render the registry into a single `sitemap.xml` document.
    ///
    /// Preconditions are checked before any XML is built: the registry must
    /// be non-empty and hold at most [`MAX_URLS_PER_SITEMAP`] records. A
    /// document serializing above [`MAX_SITEMAP_BYTES`] is discarded, not
    /// recorded. Oversize batches are rejected, never chunked across files.
    pub fn create_sitemap(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            return Err(SitemapError::EmptyInput);
        }
        let count = self.registry.len();
        if count > MAX_URLS_PER_SITEMAP {
            return Err(SitemapError::TooManyUrls { count });
        }

        let sitemap = Sitemap::build(SITEMAP_FILE_NAME, self.registry.records())?;

        // Re-generation replaces the document with the same file name
        match self
            .sitemaps
            .iter_mut()
            .find(|existing| existing.file_name() == sitemap.file_name())
        {
            Some(existing) => *existing = sitemap,
            None => self.sitemaps.push(sitemap),
        }
        self.sitemap_full_url = Some(format!("{}/{}", self.base_url, SITEMAP_FILE_NAME));
        Ok(())
    }

    /// Build `sitemap-index.xml` referencing every generated sitemap file.
    ///
    /// Runs with zero generated sitemaps as well, yielding an empty index.
    /// Each entry's `lastmod` is the index-build time, not the sitemap's own
    /// build time.
    pub fn create_sitemap_index(&mut self) -> Result<()> {
        let index = SitemapIndex::build(SITEMAP_INDEX_FILE_NAME, &self.base_url, &self.sitemaps);
        self.sitemap_full_url = Some(format!("{}{}", self.base_url, SITEMAP_INDEX_FILE_NAME));
        self.sitemap_index = Some(index);
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn search_engines(&self) -> &[String] {
        &self.search_engines
    }

    pub fn registry(&self) -> &UrlRegistry {
        &self.registry
    }

    /// Generated sitemaps, in generation order.
    pub fn sitemaps(&self) -> &[Sitemap] {
        &self.sitemaps
    }

    pub fn sitemap_index(&self) -> Option<&SitemapIndex> {
        self.sitemap_index.as_ref()
    }

    /// Public URL of the most recently generated document.
    pub fn sitemap_full_url(&self) -> Option<&str> {
        self.sitemap_full_url.as_deref()
    }
}

/// Escape special XML characters.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
