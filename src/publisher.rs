//! Publishing: file output and search-engine notification.
//!
//! Both operations run over injected capabilities ([`FileSink`],
//! [`HttpClient`]) so the generator itself stays free of I/O.

use crate::error::{Result, SitemapError};
use crate::generator::SitemapGenerator;
use crate::http::HttpClient;
use crate::sink::FileSink;
use crate::{debug, log};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::borrow::Cow;
use url::Url;

/// Characters escaped when embedding the sitemap URL as a query value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'#')
    .add(b'\'');

/// Result of pinging one search engine.
///
/// Transport failures are reported here with status `0` instead of aborting
/// the remaining engines.
#[derive(Debug, Clone)]
pub struct PingOutcome {
    /// Short host label of the engine (second-level domain + TLD).
    pub site: String,
    /// Full request URL the ping was sent to.
    pub request_url: String,
    /// HTTP status code, or `0` on transport failure.
    pub status: u16,
    /// Response body with HTML tags stripped and newlines collapsed, or the
    /// transport error text.
    pub message: String,
}

impl SitemapGenerator {
    /// Write the generated documents under `base_path`.
    ///
    /// The index (when present) is written first, then each sitemap, at
    /// `{base_path}/{file_name}`. Fails with `NothingToWrite` when no
    /// document has been generated; I/O failures surface as `Io` with no
    /// retry.
    pub fn write(&self, sink: &dyn FileSink) -> Result<()> {
        if self.sitemap_index().is_none() && self.sitemaps().is_empty() {
            return Err(SitemapError::NothingToWrite);
        }

        if let Some(index) = self.sitemap_index() {
            let path = self.base_path().join(index.file_name());
            sink.write(&path, index.xml().as_bytes())
                .map_err(|e| SitemapError::Io(path.clone(), e))?;
            log!("sitemap"; "wrote {}", path.display());
        }

        for sitemap in self.sitemaps() {
            let path = self.base_path().join(sitemap.file_name());
            sink.write(&path, sitemap.xml().as_bytes())
                .map_err(|e| SitemapError::Io(path.clone(), e))?;
            log!("sitemap"; "wrote {}", path.display());
        }

        Ok(())
    }

    /// Ping each configured search engine with the sitemap's public URL.
    ///
    /// Requests go out sequentially, one engine at a time; a failed request
    /// becomes an error entry in the returned list rather than aborting the
    /// rest. Fails with `NotReady` when no sitemap has been generated yet.
    pub fn notify_search_engines(&self, client: &dyn HttpClient) -> Result<Vec<PingOutcome>> {
        if self.sitemaps().is_empty() {
            return Err(SitemapError::NotReady);
        }
        let full_url = self.sitemap_full_url().ok_or(SitemapError::NotReady)?;
        let escaped = utf8_percent_encode(full_url, QUERY_VALUE).to_string();

        let mut outcomes = Vec::with_capacity(self.search_engines().len());
        for engine in self.search_engines() {
            let request_url = format!("{engine}{escaped}");
            debug!("notify"; "pinging {request_url}");
            let outcome = match client.get(&request_url) {
                Ok(response) => PingOutcome {
                    site: host_label(engine),
                    request_url,
                    status: response.status,
                    message: clean_body(&response.body),
                },
                Err(e) => PingOutcome {
                    site: host_label(engine),
                    request_url,
                    status: 0,
                    message: e.to_string(),
                },
            };
            log!("notify"; "{} -> {}", outcome.site, outcome.status);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

/// Second-level domain + TLD of an engine template's host.
fn host_label(template: &str) -> String {
    let Some(host) = Url::parse(template)
        .ok()
        .and_then(|url| url.host_str().map(String::from))
    else {
        return String::new();
    };

    let mut parts = host.rsplit('.');
    match (parts.next(), parts.next()) {
        (Some(tld), Some(sld)) => format!("{sld}.{tld}"),
        _ => host.clone(),
    }
}

/// Strip HTML tags and collapse newlines to spaces.
fn clean_body(body: &str) -> String {
    let stripped = strip_tags(body);
    stripped.replace(['\n', '\r'], " ")
}

/// Remove `<...>` tag regions from HTML.
fn strip_tags(html: &str) -> Cow<'_, str> {
    // Fast path: no markup at all
    if !html.contains('<') {
        return Cow::Borrowed(html);
    }

    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::PingResponse;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Sink that records writes instead of touching disk.
    #[derive(Default)]
    struct CaptureSink {
        writes: RefCell<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl FileSink for CaptureSink {
        fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
            self.writes
                .borrow_mut()
                .push((path.to_path_buf(), bytes.to_vec()));
            Ok(())
        }
    }

    /// Client that replays a canned response, recording requested URLs.
    struct MockHttpClient {
        response: std::result::Result<PingResponse, String>,
        requests: RefCell<Vec<String>>,
    }

    impl MockHttpClient {
        fn responding(status: u16, body: &str) -> Self {
            Self {
                response: Ok(PingResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> std::result::Result<PingResponse, SitemapError> {
            self.requests.borrow_mut().push(url.to_string());
            self.response
                .clone()
                .map_err(SitemapError::Http)
        }
    }

    fn generator_with_sitemap() -> SitemapGenerator {
        let mut generator = SitemapGenerator::new("https://example.com", "/tmp/site");
        generator
            .add_url("https://example.com/a", "0.5", "daily", None)
            .unwrap();
        generator.create_sitemap().unwrap();
        generator
    }

    #[test]
    fn test_write_without_documents_fails() {
        let generator = SitemapGenerator::new("https://example.com", "/tmp/site");
        let err = generator.write(&CaptureSink::default()).unwrap_err();
        assert!(matches!(err, SitemapError::NothingToWrite));
    }

    #[test]
    fn test_write_sitemap_only() {
        let generator = generator_with_sitemap();
        let sink = CaptureSink::default();
        generator.write(&sink).unwrap();

        let writes = sink.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, Path::new("/tmp/site/sitemap.xml"));
        assert!(String::from_utf8_lossy(&writes[0].1).contains("<urlset"));
    }

    #[test]
    fn test_write_index_before_sitemap() {
        let mut generator = generator_with_sitemap();
        generator.create_sitemap_index().unwrap();

        let sink = CaptureSink::default();
        generator.write(&sink).unwrap();

        let writes = sink.writes.borrow();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].0, Path::new("/tmp/site/sitemap-index.xml"));
        assert_eq!(writes[1].0, Path::new("/tmp/site/sitemap.xml"));
    }

    #[test]
    fn test_notify_before_create_sitemap_fails() {
        let generator = SitemapGenerator::new("https://example.com", "/tmp/site");
        let client = MockHttpClient::responding(200, "ok");
        let err = generator.notify_search_engines(&client).unwrap_err();

        assert!(matches!(err, SitemapError::NotReady));
        assert!(client.requests.borrow().is_empty());
    }

    #[test]
    fn test_notify_pings_each_engine_in_order() {
        let generator = generator_with_sitemap();
        let client = MockHttpClient::responding(200, "Thanks for submitting");
        let outcomes = generator.notify_search_engines(&client).unwrap();

        assert_eq!(outcomes.len(), 4);
        let sites: Vec<&str> = outcomes.iter().map(|o| o.site.as_str()).collect();
        assert_eq!(
            sites,
            ["yahooapis.com", "google.com", "ask.com", "bing.com"]
        );
        for outcome in &outcomes {
            assert_eq!(outcome.status, 200);
            assert_eq!(outcome.message, "Thanks for submitting");
        }
    }

    #[test]
    fn test_notify_escapes_sitemap_url_in_query() {
        let generator = generator_with_sitemap();
        let client = MockHttpClient::responding(200, "");
        generator.notify_search_engines(&client).unwrap();

        let requests = client.requests.borrow();
        assert!(
            requests[0].ends_with("?sitemap=https://example.com/sitemap.xml"),
            "got {}",
            requests[0]
        );
    }

    #[test]
    fn test_notify_failure_reported_per_engine() {
        let generator = generator_with_sitemap();
        let client = MockHttpClient::failing("connection refused");
        let outcomes = generator.notify_search_engines(&client).unwrap();

        // Every engine still gets its entry
        assert_eq!(outcomes.len(), 4);
        for outcome in &outcomes {
            assert_eq!(outcome.status, 0);
            assert!(outcome.message.contains("connection refused"));
        }
    }

    #[test]
    fn test_notify_strips_html_from_message() {
        let generator = generator_with_sitemap();
        let client =
            MockHttpClient::responding(200, "<html><body>Sitemap\nreceived</body></html>");
        let outcomes = generator.notify_search_engines(&client).unwrap();

        assert_eq!(outcomes[0].message, "Sitemap received");
    }

    #[test]
    fn test_host_label() {
        assert_eq!(
            host_label("http://www.google.com/webmasters/tools/ping?sitemap="),
            "google.com"
        );
        assert_eq!(
            host_label("http://submissions.ask.com/ping?sitemap="),
            "ask.com"
        );
        assert_eq!(host_label("http://localhost/ping?sitemap="), "localhost");
        assert_eq!(host_label("not a url"), "");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("plain text"), "plain text");
        assert_eq!(strip_tags("<p>hello</p>"), "hello");
        assert_eq!(strip_tags("<a href=\"x\">link</a> tail"), "link tail");
    }

    #[test]
    fn test_clean_body_collapses_newlines() {
        assert_eq!(clean_body("a\nb\r\nc"), "a b  c");
    }
}
