//! Page catalog: the enumerated taxonomy plus a slug index.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::application::related::related_entries;
use crate::domain::entities::{PageEntry, PageKind};
use crate::domain::taxonomy::Taxonomy;

/// Enumerated page entries with O(1) slug resolution.
///
/// The catalog is built once from a [`Taxonomy`] and is read-only afterwards,
/// so it can be shared behind an `Arc` by any number of request handlers.
///
/// Resolution keeps the "first enumerated entry wins" contract: if a taxonomy
/// ever produced the same slug twice, the later entry is skipped from the index
/// (and logged), exactly as a linear scan would never reach it.
#[derive(Debug, Clone)]
pub struct PageCatalog {
    entries: Vec<PageEntry>,
    index: HashMap<String, usize>,
}

impl PageCatalog {
    /// Builds a catalog from a taxonomy.
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let entries = taxonomy.enumerate();
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if index.contains_key(&entry.slug) {
                warn!(slug = %entry.slug, "Duplicate page slug, keeping first entry");
                continue;
            }
            index.insert(entry.slug.clone(), position);
        }

        info!(
            pages = entries.len(),
            cities = entries.iter().filter(|e| e.kind == PageKind::City).count(),
            city_niches = entries.iter().filter(|e| e.kind == PageKind::CityNiche).count(),
            neighborhoods = entries
                .iter()
                .filter(|e| e.kind == PageKind::Neighborhood)
                .count(),
            "Page catalog built"
        );

        Self { entries, index }
    }

    /// Builds the catalog of the shipped reference taxonomy.
    pub fn reference() -> Self {
        Self::new(&Taxonomy::reference())
    }

    /// All entries in enumeration order.
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a slug to its entry.
    ///
    /// Returns `None` for any slug that is not a taxonomy page; most incoming
    /// paths are expected to take this branch.
    pub fn resolve(&self, slug: &str) -> Option<&PageEntry> {
        let found = self.index.get(slug).map(|&position| &self.entries[position]);
        if found.is_none() {
            debug!(slug, "Slug not in page catalog");
        }
        found
    }

    /// Returns up to `limit` entries to cross-link from `entry`.
    pub fn related(&self, entry: &PageEntry, limit: usize) -> Vec<&PageEntry> {
        related_entries(&self.entries, entry, limit)
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

static REFERENCE_CATALOG: LazyLock<PageCatalog> = LazyLock::new(PageCatalog::reference);

/// Enumerates every page of the reference taxonomy.
pub fn enumerate_entries() -> Vec<PageEntry> {
    REFERENCE_CATALOG.entries().to_vec()
}

/// Resolves a slug against the reference taxonomy.
pub fn resolve_entry(slug: &str) -> Option<PageEntry> {
    REFERENCE_CATALOG.resolve(slug).cloned()
}

/// Related entries for `entry` within the reference taxonomy.
pub fn related_entries_for(entry: &PageEntry, limit: usize) -> Vec<PageEntry> {
    REFERENCE_CATALOG
        .related(entry, limit)
        .into_iter()
        .cloned()
        .collect()
}
