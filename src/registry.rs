//! Ordered, validated URL collection.

use crate::date::DateTimeUtc;
use crate::error::Result;
use crate::record::{ChangeFrequency, Priority, UrlInput, UrlRecord};

/// Default priority applied to batch inputs that carry none.
const DEFAULT_PRIORITY: &str = "0.5";

/// Holds the URL records submitted for one generation run.
///
/// Every record has passed enumeration validation at insertion time, and
/// insertion order is the iteration order used by serialization. One registry
/// models one run; concurrent runs use separate instances.
#[derive(Debug, Default)]
pub struct UrlRegistry {
    records: Vec<UrlRecord>,
}

impl UrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record after validating `priority` and `change_frequency`
    /// against the fixed sets.
    ///
    /// Both values are checked before any mutation, so a failed call leaves
    /// the registry untouched. When `last_modified` is `None` the current
    /// time is recorded in RFC 3339 form.
    pub fn add_url(
        &mut self,
        location: impl Into<String>,
        priority: &str,
        change_frequency: &str,
        last_modified: Option<String>,
    ) -> Result<()> {
        let changefreq: ChangeFrequency = change_frequency.parse()?;
        let priority: Priority = priority.parse()?;

        self.records.push(UrlRecord {
            loc: location.into(),
            priority,
            changefreq,
            lastmod: last_modified.unwrap_or_else(|| DateTimeUtc::now().to_rfc3339()),
        });
        Ok(())
    }

    /// Append a batch of structured inputs, in order.
    ///
    /// Validation happens per item via [`add_url`](Self::add_url); when a
    /// later item fails, the items before it stay committed. Callers wanting
    /// atomic batches must validate up front.
    pub fn add_urls(&mut self, inputs: &[UrlInput]) -> Result<()> {
        for input in inputs {
            self.add_url(
                input.url.clone(),
                input.priority.as_deref().unwrap_or(DEFAULT_PRIORITY),
                &input.change_frequency,
                input.last_modified.clone(),
            )?;
        }
        Ok(())
    }

    pub fn records(&self) -> &[UrlRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
