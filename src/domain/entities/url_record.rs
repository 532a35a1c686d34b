//! URL record entity: an alias mapped to its destination.

/// A stored alias with its destination and access counter.
///
/// `alias` and `original_url` never change after creation. `access_count`
/// starts at zero and only moves through
/// [`crate::domain::repositories::UrlRepository::increment_access_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub alias: String,
    pub original_url: String,
    pub access_count: u64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(alias: String, original_url: String, access_count: u64) -> Self {
        Self {
            alias,
            original_url,
            access_count,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub alias: String,
    pub original_url: String,
}

impl NewUrlRecord {
    pub fn new(alias: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            original_url: original_url.into(),
        }
    }

    /// The record as it exists right after a successful insert.
    pub fn into_record(self) -> UrlRecord {
        UrlRecord::new(self.alias, self.original_url, 0)
    }
}

/// Records ordered by descending access count.
///
/// `count` is the number of records returned, which is lower than the
/// requested limit when fewer records exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedUrls {
    pub count: usize,
    pub items: Vec<UrlRecord>,
}

impl RankedUrls {
    pub fn new(items: Vec<UrlRecord>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
