//! `sitemapindex` document building.

use super::{SITEMAP_NS, escape_xml, sitemap::Sitemap};
use crate::date::DateTimeUtc;

/// A generated sitemap-index document listing sitemap file locations.
#[derive(Debug, Clone)]
pub struct SitemapIndex {
    file_name: String,
    xml: String,
}

impl SitemapIndex {
    /// Render one `sitemap` entry per generated file, in generation order.
    ///
    /// `lastmod` is the time the index is built, which may differ from each
    /// sitemap's own build time. An empty `sitemaps` slice yields an empty
    /// but well-formed index.
    pub fn build(file_name: &str, base_url: &str, sitemaps: &[Sitemap]) -> Self {
        let lastmod = DateTimeUtc::now().to_rfc3339();
        let mut xml = String::with_capacity(512);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<sitemapindex xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for sitemap in sitemaps {
            let loc = format!("{base_url}{}", sitemap.file_name());
            xml.push_str("  <sitemap>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&lastmod);
            xml.push_str("</lastmod>\n  </sitemap>\n");
        }

        xml.push_str("</sitemapindex>\n");

        Self {
            file_name: file_name.to_string(),
            xml,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn xml(&self) -> &str {
        &self.xml
    }
}
