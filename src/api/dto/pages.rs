//! DTOs for page listing and related-link endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{PageSummary, RelatedLink};

/// Query parameters for the related-links endpoint.
///
/// Uses `serde_with` to parse the limit from the query string as an integer.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RelatedQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
}

/// Listing of every generated page.
#[derive(Debug, Serialize)]
pub struct PageListResponse {
    pub total: usize,
    pub items: Vec<PageSummary>,
}

/// Cross-links for one page.
#[derive(Debug, Serialize)]
pub struct RelatedResponse {
    pub slug: String,
    pub limit: usize,
    pub items: Vec<RelatedLink>,
}
