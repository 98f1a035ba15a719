//! URL record types and enumeration validation.
//!
//! A [`UrlRecord`] only exists after its `priority` and `changefreq` values
//! have passed validation against the fixed sets from the sitemaps.org
//! protocol, so downstream serialization never re-checks them.

use crate::error::SitemapError;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single `loc` value per the sitemaps.org protocol.
///
/// Declared for documentation purposes; not currently enforced at insertion.
pub const MAX_URL_LENGTH: usize = 2048;

/// Valid priority values, as canonical decimal strings.
///
/// Compared as strings rather than floats to avoid rounding ambiguity.
pub const ALLOWED_PRIORITIES: [&str; 10] = [
    "1", "0.9", "0.8", "0.7", "0.6", "0.5", "0.4", "0.3", "0.2", "0.1",
];

// ============================================================================
// ChangeFrequency
// ============================================================================

/// Crawler hint for how often a page's content changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    /// Wire form used in the `changefreq` element.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl FromStr for ChangeFrequency {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| {
                SitemapError::InvalidInput(format!(
                    "change frequency `{s}` is not allowed; must be one of {}",
                    Self::ALL.map(Self::as_str).join(", ")
                ))
            })
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Priority
// ============================================================================

/// Crawler hint for the relative importance of a URL.
///
/// Holds one of the ten canonical decimal strings from
/// [`ALLOWED_PRIORITIES`]; construction through `FromStr` is the only way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority(&'static str);

impl Priority {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl FromStr for Priority {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALLOWED_PRIORITIES
            .into_iter()
            .find(|allowed| *allowed == s)
            .map(Priority)
            .ok_or_else(|| {
                SitemapError::InvalidInput(format!(
                    "priority `{s}` is not allowed; must be one of {}",
                    ALLOWED_PRIORITIES.join(", ")
                ))
            })
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// UrlRecord
// ============================================================================

/// One validated sitemap entry.
///
/// `lastmod` is always present: insertion defaults it to the current time
/// when the caller supplies none.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub loc: String,
    pub priority: Priority,
    pub changefreq: ChangeFrequency,
    pub lastmod: String,
}

/// Structured batch-insertion input.
///
/// `url` and `change_frequency` are required; `priority` defaults to `"0.5"`
/// and `last_modified` to the insertion time.
#[derive(Debug, Clone)]
pub struct UrlInput {
    pub url: String,
    pub change_frequency: String,
    pub priority: Option<String>,
    pub last_modified: Option<String>,
}

impl UrlInput {
    pub fn new(url: impl Into<String>, change_frequency: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            change_frequency: change_frequency.into(),
            priority: None,
            last_modified: None,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_last_modified(mut self, last_modified: impl Into<String>) -> Self {
        self.last_modified = Some(last_modified.into());
        self
    }
}
