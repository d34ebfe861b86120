//! Internal-link graph between generated pages.
//!
//! # Adjacency Rules
//!
//! - **City** → every niche page in the same city
//! - **CityNiche** → the city page of its city, niche pages sharing the niche in
//!   another city, and niche pages sharing the city with another niche
//! - **Neighborhood / fallback** → every city page
//!
//! Candidates keep enumeration order and the list is cut at `limit`. The source
//! entry is never part of its own result.

use crate::domain::entities::{PageEntry, PageSubject, RelatedLink};

/// Default number of cross-links per page.
pub const DEFAULT_RELATED_LIMIT: usize = 6;

/// Returns up to `limit` entries from `entries` to cross-link from `entry`.
pub fn related_entries<'a>(
    entries: &'a [PageEntry],
    entry: &PageEntry,
    limit: usize,
) -> Vec<&'a PageEntry> {
    let source = entry.subject();

    entries
        .iter()
        .filter(|candidate| candidate.slug != entry.slug)
        .filter(|candidate| is_adjacent(source, candidate.subject()))
        .take(limit)
        .collect()
}

fn is_adjacent(source: PageSubject<'_>, candidate: PageSubject<'_>) -> bool {
    match (source, candidate) {
        (PageSubject::City { city }, PageSubject::CityNiche { city: other, .. }) => city == other,
        (PageSubject::City { .. }, _) => false,

        (PageSubject::CityNiche { city, .. }, PageSubject::City { city: other }) => city == other,
        (
            PageSubject::CityNiche { niche, city },
            PageSubject::CityNiche {
                niche: other_niche,
                city: other_city,
            },
        ) => (niche == other_niche) != (city == other_city),
        (PageSubject::CityNiche { .. }, _) => false,

        (PageSubject::Neighborhood { .. } | PageSubject::Fallback, PageSubject::City { .. }) => {
            true
        }
        (PageSubject::Neighborhood { .. } | PageSubject::Fallback, _) => false,
    }
}

/// Human-facing anchor text for a link to `entry`.
pub fn link_label(entry: &PageEntry) -> String {
    match entry.subject() {
        PageSubject::City { city } => format!("Leads B2B em {city}"),
        PageSubject::CityNiche { niche, city } => format!("{niche} em {city}"),
        PageSubject::Neighborhood { neighborhood } => format!("Bairro {neighborhood}"),
        PageSubject::Fallback => entry.slug.clone(),
    }
}

impl RelatedLink {
    /// Projects an entry into a cross-link.
    pub fn from_entry(entry: &PageEntry) -> Self {
        Self {
            slug: entry.slug.clone(),
            label: link_label(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PageKind;
    use crate::domain::taxonomy::{Place, Taxonomy};

    fn slugs(related: &[&PageEntry]) -> Vec<String> {
        related.iter().map(|e| e.slug.clone()).collect()
    }

    fn find<'a>(entries: &'a [PageEntry], slug: &str) -> &'a PageEntry {
        entries.iter().find(|e| e.slug == slug).unwrap()
    }

    #[test]
    fn test_city_links_to_its_niche_pages() {
        let entries = Taxonomy::reference().enumerate();
        let santos = find(&entries, "geracao-de-leads-b2b-santos");

        let related = related_entries(&entries, santos, DEFAULT_RELATED_LIMIT);

        assert_eq!(
            slugs(&related),
            vec![
                "prospeccao-b2b-dentistas-santos",
                "prospeccao-b2b-imobiliarias-santos",
                "prospeccao-b2b-contadores-santos",
            ]
        );
        assert!(!related.contains(&santos));
    }

    #[test]
    fn test_uncovered_city_has_no_niche_links() {
        let entries = Taxonomy::reference().enumerate();
        let guaruja = find(&entries, "geracao-de-leads-b2b-guaruja");

        assert!(related_entries(&entries, guaruja, DEFAULT_RELATED_LIMIT).is_empty());
    }

    #[test]
    fn test_city_niche_links() {
        let entries = Taxonomy::reference().enumerate();
        let source = find(&entries, "prospeccao-b2b-dentistas-santos");

        let related = related_entries(&entries, source, 10);

        assert_eq!(
            slugs(&related),
            vec![
                "geracao-de-leads-b2b-santos",
                "prospeccao-b2b-dentistas-praia-grande",
                "prospeccao-b2b-dentistas-sao-paulo",
                "prospeccao-b2b-imobiliarias-santos",
                "prospeccao-b2b-contadores-santos",
            ]
        );
    }

    #[test]
    fn test_city_niche_excludes_unrelated_pairs() {
        let entries = Taxonomy::reference().enumerate();
        let source = find(&entries, "prospeccao-b2b-dentistas-santos");

        let related = related_entries(&entries, source, 10);

        assert!(
            !slugs(&related).contains(&"prospeccao-b2b-imobiliarias-praia-grande".to_string())
        );
        assert!(!slugs(&related).contains(&"geracao-de-leads-b2b-praia-grande".to_string()));
    }

    #[test]
    fn test_limit_truncates_prefix() {
        let entries = Taxonomy::reference().enumerate();
        let source = find(&entries, "prospeccao-b2b-dentistas-santos");

        let related = related_entries(&entries, source, 2);

        assert_eq!(
            slugs(&related),
            vec![
                "geracao-de-leads-b2b-santos",
                "prospeccao-b2b-dentistas-praia-grande",
            ]
        );
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let entries = Taxonomy::reference().enumerate();
        for entry in &entries {
            assert!(related_entries(&entries, entry, 0).is_empty());
        }
    }

    #[test]
    fn test_neighborhood_links_to_cities() {
        let mut taxonomy = Taxonomy::reference();
        taxonomy.neighborhoods = vec![Place::new("Gonzaga", None)];
        let entries = taxonomy.enumerate();
        let gonzaga = find(&entries, "empresas-no-bairro-gonzaga");

        let related = related_entries(&entries, gonzaga, DEFAULT_RELATED_LIMIT);

        assert_eq!(related.len(), 5);
        assert!(related.iter().all(|e| e.kind == PageKind::City));
    }

    #[test]
    fn test_fallback_links_to_cities() {
        let entries = Taxonomy::reference().enumerate();
        let mut broken = PageEntry::city_niche("Dentistas", "Santos", None);
        broken.niche = None;
        broken.slug = "broken".to_string();

        let related = related_entries(&entries, &broken, 3);

        assert_eq!(
            slugs(&related),
            vec![
                "geracao-de-leads-b2b-praia-grande",
                "geracao-de-leads-b2b-santos",
                "geracao-de-leads-b2b-sao-paulo",
            ]
        );
    }

    #[test]
    fn test_self_exclusion_and_bound_for_all_entries() {
        let entries = Taxonomy::reference().enumerate();

        for entry in &entries {
            for limit in 0..=entries.len() {
                let related = related_entries(&entries, entry, limit);
                assert!(related.len() <= limit);
                assert!(related.iter().all(|r| r.slug != entry.slug));
            }
        }
    }

    #[test]
    fn test_link_labels() {
        assert_eq!(
            link_label(&PageEntry::city("Santos", None)),
            "Leads B2B em Santos"
        );
        assert_eq!(
            link_label(&PageEntry::city_niche("Dentistas", "Santos", None)),
            "Dentistas em Santos"
        );
        assert_eq!(
            link_label(&PageEntry::neighborhood("Gonzaga", None)),
            "Bairro Gonzaga"
        );

        let link = RelatedLink::from_entry(&PageEntry::city("Santos", None));
        assert_eq!(link.slug, "geracao-de-leads-b2b-santos");
    }
}
