//! DTOs for the bookmark endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{UrlList, UrlStats};

/// Form posted to `/add`.
///
/// URLs longer than 2048 characters are rejected. A missing `url` field
/// deserializes as empty and is rejected by the service with
/// "URL is required".
#[derive(Debug, Deserialize, Validate)]
pub struct AddUrlForm {
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,
}

/// Form posted to `/delete`.
///
/// `urlsToDelete` is repeated once per selected checkbox, which serde's
/// urlencoded deserializer cannot collect, so the body is parsed by hand.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeleteUrlsForm {
    pub urls_to_delete: Vec<String>,
}

impl DeleteUrlsForm {
    pub const FIELD: &'static str = "urlsToDelete";

    pub fn parse(body: &[u8]) -> Self {
        let urls_to_delete = url::form_urlencoded::parse(body)
            .filter(|(key, _)| key == Self::FIELD)
            .map(|(_, value)| value.into_owned())
            .collect();

        Self { urls_to_delete }
    }
}

/// Response of `/list`.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub urls: Vec<String>,
    pub total_count: usize,
    pub domains: Vec<String>,
}

impl ListResponse {
    pub fn new(list: UrlList, stats: UrlStats) -> Self {
        Self {
            urls: list.urls,
            total_count: stats.total_count,
            domains: stats.domains,
        }
    }
}
