//! `urlset` document building.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>0.5</priority>
//!     <changefreq>daily</changefreq>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::{MAX_SITEMAP_BYTES, SITEMAP_NS, escape_xml};
use crate::error::{Result, SitemapError};
use crate::record::UrlRecord;

/// A generated sitemap document, immutable once built.
#[derive(Debug, Clone)]
pub struct Sitemap {
    file_name: String,
    xml: String,
}

impl Sitemap {
    /// Render `records` in order into a `urlset` document.
    ///
    /// All four children are emitted for every record; `lastmod` is never
    /// omitted. Fails with `SitemapTooLarge` when the serialized form
    /// exceeds [`MAX_SITEMAP_BYTES`].
    pub fn build(file_name: &str, records: &[UrlRecord]) -> Result<Self> {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for record in records {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&record.loc));
            xml.push_str("</loc>\n    <priority>");
            xml.push_str(record.priority.as_str());
            xml.push_str("</priority>\n    <changefreq>");
            xml.push_str(record.changefreq.as_str());
            xml.push_str("</changefreq>\n    <lastmod>");
            xml.push_str(&record.lastmod);
            xml.push_str("</lastmod>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");

        let size = xml.len();
        if size > MAX_SITEMAP_BYTES {
            return Err(SitemapError::SitemapTooLarge { size });
        }

        Ok(Self {
            file_name: file_name.to_string(),
            xml,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> usize {
        self.xml.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ChangeFrequency, Priority, UrlRecord};

    fn record(loc: &str, priority: &str, changefreq: &str, lastmod: &str) -> UrlRecord {
        UrlRecord {
            loc: loc.to_string(),
            priority: priority.parse::<Priority>().unwrap(),
            changefreq: changefreq.parse::<ChangeFrequency>().unwrap(),
            lastmod: lastmod.to_string(),
        }
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap::build("sitemap.xml", &[]).unwrap();
        let xml = sitemap.xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_single_record_all_children() {
        let sitemap = Sitemap::build(
            "sitemap.xml",
            &[record(
                "https://example.com/a",
                "0.5",
                "daily",
                "2025-01-01T00:00:00Z",
            )],
        )
        .unwrap();
        let xml = sitemap.xml();

        assert!(xml.contains("<loc>https://example.com/a</loc>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<lastmod>2025-01-01T00:00:00Z</lastmod>"));
    }

    #[test]
    fn test_sitemap_preserves_record_order() {
        let sitemap = Sitemap::build(
            "sitemap.xml",
            &[
                record("https://example.com/a", "0.9", "daily", "2025-01-01"),
                record("https://example.com/b", "0.5", "weekly", "2025-01-02"),
                record("https://example.com/c", "0.1", "never", "2025-01-03"),
            ],
        )
        .unwrap();
        let xml = sitemap.xml();

        let a = xml.find("https://example.com/a").unwrap();
        let b = xml.find("https://example.com/b").unwrap();
        let c = xml.find("https://example.com/c").unwrap();
        assert!(a < b && b < c);
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_sitemap_escapes_loc() {
        let sitemap = Sitemap::build(
            "sitemap.xml",
            &[record(
                "https://example.com/search?q=a&b=c",
                "0.5",
                "daily",
                "2025-01-01",
            )],
        )
        .unwrap();

        assert!(
            sitemap
                .xml()
                .contains("<loc>https://example.com/search?q=a&amp;b=c</loc>")
        );
    }

    #[test]
    fn test_sitemap_size_matches_bytes() {
        let sitemap =
            Sitemap::build("sitemap.xml", &[record("https://example.com/", "1", "always", "2025-01-01")])
                .unwrap();
        assert_eq!(sitemap.size(), sitemap.xml().len());
    }

    #[test]
    fn test_sitemap_too_large_is_rejected() {
        // A few thousand very long locations push the document past 10 MiB
        let long_path = "x".repeat(4096);
        let records: Vec<UrlRecord> = (0..3000)
            .map(|i| {
                record(
                    &format!("https://example.com/{long_path}/{i}"),
                    "0.5",
                    "daily",
                    "2025-01-01",
                )
            })
            .collect();

        let err = Sitemap::build("sitemap.xml", &records).unwrap_err();
        assert!(matches!(
            err,
            SitemapError::SitemapTooLarge { size } if size > MAX_SITEMAP_BYTES
        ));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let sitemap = Sitemap::build(
            "sitemap.xml",
            &[record("https://example.com/", "0.5", "daily", "2025-01-01")],
        )
        .unwrap();

        let lines: Vec<&str> = sitemap.xml().lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }
}
