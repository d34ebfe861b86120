//! Landing page assembly service.

use askama::Template;
use std::sync::Arc;
use url::Url;

use crate::application::content::{faq_block, intro_block, local_block};
use crate::application::metadata::{page_description, page_title};
use crate::application::related::link_label;
use crate::application::services::PageCatalog;
use crate::domain::entities::{LandingPage, PageEntry, PageSummary, RelatedLink};
use crate::utils::slug::is_valid_slug;

/// Service that turns catalog entries into renderable pages.
///
/// Every method is a pure function of the catalog, the base URL and the
/// related-link limit fixed at construction, so the service is freely shared
/// across request handlers.
pub struct PageService {
    catalog: Arc<PageCatalog>,
    base_url: Url,
    related_limit: usize,
}

impl PageService {
    /// Creates a new page service.
    ///
    /// # Arguments
    ///
    /// - `catalog` - Enumerated pages and slug index
    /// - `base_url` - Public site root used for canonical and sitemap URLs
    /// - `related_limit` - Number of cross-links rendered per page
    pub fn new(catalog: Arc<PageCatalog>, mut base_url: Url, related_limit: usize) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            catalog,
            base_url,
            related_limit,
        }
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    pub fn related_limit(&self) -> usize {
        self.related_limit
    }

    /// Resolves a slug to its entry, rejecting malformed slugs without a lookup.
    pub fn resolve(&self, slug: &str) -> Option<&PageEntry> {
        if !is_valid_slug(slug) {
            return None;
        }
        self.catalog.resolve(slug)
    }

    /// Renders the full landing page for a slug.
    ///
    /// Returns `None` if the slug is not a taxonomy page.
    pub fn render(&self, slug: &str) -> Option<LandingPage> {
        self.resolve(slug).map(|entry| self.render_entry(entry))
    }

    /// Renders the full landing page for an entry.
    pub fn render_entry(&self, entry: &PageEntry) -> LandingPage {
        LandingPage {
            slug: entry.slug.clone(),
            canonical_url: self.page_url(&entry.slug),
            title: page_title(entry),
            description: page_description(entry),
            intro: intro_block(entry),
            local: local_block(entry),
            faq: faq_block(entry),
            related: self.related_links_for(entry, self.related_limit),
        }
    }

    /// Cross-links for a slug, or `None` if the slug is not a taxonomy page.
    pub fn related_links(&self, slug: &str, limit: usize) -> Option<Vec<RelatedLink>> {
        self.resolve(slug)
            .map(|entry| self.related_links_for(entry, limit))
    }

    fn related_links_for(&self, entry: &PageEntry, limit: usize) -> Vec<RelatedLink> {
        self.catalog
            .related(entry, limit)
            .into_iter()
            .map(RelatedLink::from_entry)
            .collect()
    }

    /// Listing of every page in enumeration order.
    pub fn summaries(&self) -> Vec<PageSummary> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| PageSummary {
                slug: entry.slug.clone(),
                kind: entry.kind,
                title: page_title(entry),
                label: link_label(entry),
                url: self.page_url(&entry.slug),
            })
            .collect()
    }

    /// Absolute public URL of the site root.
    pub fn home_url(&self) -> String {
        self.base_url.to_string()
    }

    /// Absolute public URL of a page.
    pub fn page_url(&self, slug: &str) -> String {
        format!("{}{}", self.base_url, slug)
    }

    /// Renders a sitemaps.org `urlset` with the home page and every enumerated page.
    ///
    /// # Errors
    ///
    /// Returns the template error if rendering fails.
    pub fn sitemap_xml(&self) -> Result<String, askama::Error> {
        let urls = std::iter::once(self.home_url())
            .chain(
                self.catalog
                    .entries()
                    .iter()
                    .map(|entry| self.page_url(&entry.slug)),
            )
            .collect();

        SitemapTemplate { urls }.render()
    }
}

/// Template for `templates/sitemap.xml`; `<loc>` values are XML-escaped.
#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate {
    urls: Vec<String>,
}
