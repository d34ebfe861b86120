//! Value types produced by the content generators.

use serde::Serialize;

use crate::domain::entities::PageKind;

/// A single FAQ question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Cross-link to another generated page, projected at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    pub slug: String,
    pub label: String,
}

/// Everything a renderer needs to produce one landing page.
///
/// Produced by [`crate::application::services::PageService::render`]; the same
/// slug always yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPage {
    pub slug: String,
    pub canonical_url: String,
    pub title: String,
    pub description: String,
    pub intro: Vec<String>,
    pub local: Vec<String>,
    pub faq: Vec<FaqItem>,
    pub related: Vec<RelatedLink>,
}

/// Listing row for one generated page, used by sitemaps and route listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub slug: String,
    pub kind: PageKind,
    pub title: String,
    pub label: String,
    pub url: String,
}
