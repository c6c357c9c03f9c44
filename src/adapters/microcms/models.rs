//! microCMS API models
//!
//! Wire shapes of the microCMS content API. These are kept apart from the
//! domain [`Record`] so the list envelope does not leak past the adapter.

use crate::adapters::provider::FetchedPage;
use crate::domain::Record;
use serde::Deserialize;

/// Response of the list endpoint `GET /api/v1/{endpoint}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Records of the requested page
    pub contents: Vec<Record>,

    /// Number of records in the whole collection
    #[serde(default)]
    pub total_count: Option<usize>,

    /// Offset of the page
    #[serde(default)]
    pub offset: Option<usize>,

    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<usize>,
}

impl From<ListResponse> for FetchedPage {
    fn from(response: ListResponse) -> Self {
        let page = FetchedPage::new(response.contents);
        match response.total_count {
            Some(total) => page.with_total_count(total),
            None => page,
        }
    }
}

/// Error body returned by microCMS on failures
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_deserialization() {
        let json = r#"{
            "contents": [
                {
                    "id": "abc",
                    "slug": "hello",
                    "title": "Hello",
                    "body": "<p>Hi</p>",
                    "publishedAt": "2022-03-01T00:00:00.000Z",
                    "revisedAt": "2022-03-02T00:00:00.000Z",
                    "categories": ["news"],
                    "tags": null
                }
            ],
            "totalCount": 12,
            "offset": 0,
            "limit": 10
        }"#;

        let response: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.contents.len(), 1);
        assert_eq!(response.total_count, Some(12));
        assert_eq!(response.limit, Some(10));

        let page = FetchedPage::from(response);
        assert_eq!(page.records[0].slug, "hello");
        assert_eq!(page.total_count, Some(12));
    }

    #[test]
    fn test_list_response_without_total() {
        let response: ListResponse = serde_json::from_str(r#"{"contents": []}"#).unwrap();
        let page = FetchedPage::from(response);
        assert!(page.records.is_empty());
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn test_list_response_missing_contents_is_error() {
        let result = serde_json::from_str::<ListResponse>(r#"{"totalCount": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"message": "X-MICROCMS-API-KEY header is invalid."}"#)
                .unwrap();
        assert!(err.message.contains("invalid"));
    }
}
