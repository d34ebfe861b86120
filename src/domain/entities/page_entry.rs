//! Page entry entity: the identity of one generatable landing page.

use serde::{Deserialize, Serialize};

use crate::utils::slug::{build_city_niche_slug, build_city_slug, build_neighborhood_slug};

/// Kind of generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    City,
    CityNiche,
    Neighborhood,
}

impl PageKind {
    /// Stable lowercase name used in logs, JSON and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::City => "city",
            PageKind::CityNiche => "city_niche",
            PageKind::Neighborhood => "neighborhood",
        }
    }
}

/// One generatable landing page.
///
/// Entries are plain values: they are rebuilt from the taxonomy on every
/// enumeration and never mutated or persisted. The `slug` is derived from the
/// kind and display names by the constructors below.
///
/// Fields are public so that callers can represent partially populated data;
/// anything that does not match its kind is rendered through the fallback
/// templates (see [`PageEntry::subject`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageEntry {
    pub slug: String,
    pub kind: PageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    /// Administrative region code. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Exhaustive dispatch view of a [`PageEntry`].
///
/// Every generator matches on this instead of on [`PageKind`], so an entry
/// missing a field its kind requires lands in `Fallback` rather than in a
/// half-filled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSubject<'a> {
    City { city: &'a str },
    CityNiche { niche: &'a str, city: &'a str },
    Neighborhood { neighborhood: &'a str },
    Fallback,
}

impl PageEntry {
    /// Creates a city-wide page entry.
    pub fn city(city: impl Into<String>, region: Option<String>) -> Self {
        let city = city.into();
        Self {
            slug: build_city_slug(&city),
            kind: PageKind::City,
            city: Some(city),
            niche: None,
            neighborhood: None,
            region,
        }
    }

    /// Creates a niche-in-city page entry.
    pub fn city_niche(
        niche: impl Into<String>,
        city: impl Into<String>,
        region: Option<String>,
    ) -> Self {
        let niche = niche.into();
        let city = city.into();
        Self {
            slug: build_city_niche_slug(&niche, &city),
            kind: PageKind::CityNiche,
            city: Some(city),
            niche: Some(niche),
            neighborhood: None,
            region,
        }
    }

    /// Creates a neighborhood page entry.
    pub fn neighborhood(neighborhood: impl Into<String>, region: Option<String>) -> Self {
        let neighborhood = neighborhood.into();
        Self {
            slug: build_neighborhood_slug(&neighborhood),
            kind: PageKind::Neighborhood,
            city: None,
            niche: None,
            neighborhood: Some(neighborhood),
            region,
        }
    }

    /// Returns the dispatch view of this entry.
    pub fn subject(&self) -> PageSubject<'_> {
        match (
            self.kind,
            self.city.as_deref(),
            self.niche.as_deref(),
            self.neighborhood.as_deref(),
        ) {
            (PageKind::City, Some(city), None, _) => PageSubject::City { city },
            (PageKind::CityNiche, Some(city), Some(niche), _) => {
                PageSubject::CityNiche { niche, city }
            }
            (PageKind::Neighborhood, _, _, Some(neighborhood)) => {
                PageSubject::Neighborhood { neighborhood }
            }
            _ => PageSubject::Fallback,
        }
    }

    /// Returns true if the entry carries exactly the fields its kind requires.
    pub fn is_well_formed(&self) -> bool {
        !matches!(self.subject(), PageSubject::Fallback)
    }
}
