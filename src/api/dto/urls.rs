//! DTOs for the alias endpoints.

use serde::Serialize;

use crate::domain::entities::{RankedUrls, UrlRecord};

/// Response to a successful alias creation.
#[derive(Debug, Serialize)]
pub struct CreateUrlResponse {
    pub alias: String,
    pub original_url: String,
}

impl From<UrlRecord> for CreateUrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            alias: record.alias,
            original_url: record.original_url,
        }
    }
}

/// Body sent along with a redirect.
#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub message: String,
}

impl RedirectResponse {
    pub fn to(url: &str) -> Self {
        Self {
            message: format!("Redirecting to {url}"),
        }
    }
}

/// A single entry of the ranked listing.
#[derive(Debug, Serialize)]
pub struct UrlItem {
    pub alias: String,
    pub original_url: String,
    pub access_count: u64,
}

impl From<UrlRecord> for UrlItem {
    fn from(record: UrlRecord) -> Self {
        Self {
            alias: record.alias,
            original_url: record.original_url,
            access_count: record.access_count,
        }
    }
}

/// Ranked listing of the most accessed aliases.
#[derive(Debug, Serialize)]
pub struct ListUrlsResponse {
    pub limit: u32,
    pub count: usize,
    pub items: Vec<UrlItem>,
}

impl ListUrlsResponse {
    pub fn new(limit: u32, ranked: RankedUrls) -> Self {
        Self {
            limit,
            count: ranked.count,
            items: ranked.items.into_iter().map(UrlItem::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_shape() {
        let ranked = RankedUrls::new(vec![UrlRecord::new(
            "alias00".to_string(),
            "http://example.com/0".to_string(),
            100,
        )]);

        let value = serde_json::to_value(ListUrlsResponse::new(2, ranked)).unwrap();

        assert_eq!(
            value,
            json!({
                "limit": 2,
                "count": 1,
                "items": [
                    { "alias": "alias00", "original_url": "http://example.com/0", "access_count": 100 }
                ]
            })
        );
    }

    #[test]
    fn test_redirect_message() {
        assert_eq!(
            RedirectResponse::to("http://example.com").message,
            "Redirecting to http://example.com"
        );
    }
}
