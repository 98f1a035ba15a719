//! Search-engine ping endpoint configuration.
//!
//! The built-in endpoints are injected at construction rather than held as
//! process-wide state, so callers can replace or extend them per instance.

/// Ping endpoint templates notified after sitemap generation.
///
/// Each template takes the sitemap's public URL as a query-string suffix.
pub const DEFAULT_SEARCH_ENGINES: [&str; 4] = [
    "http://search.yahooapis.com/SiteExplorerService/V1/ping?sitemap=",
    "http://www.google.com/webmasters/tools/ping?sitemap=",
    "http://submissions.ask.com/ping?sitemap=",
    "http://www.bing.com/webmaster/ping.aspx?siteMap=",
];

/// Merge additional templates after the built-in defaults.
pub fn merge_search_engines<I, S>(additional: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DEFAULT_SEARCH_ENGINES
        .into_iter()
        .map(String::from)
        .chain(additional.into_iter().map(Into::into))
        .collect()
}
