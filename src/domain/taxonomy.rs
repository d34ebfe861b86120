//! Static taxonomy of anchor cities, niches and neighborhoods.
//!
//! The taxonomy is plain data: enumeration, slugging and content generation are
//! functions over it, so growing coverage (adding neighborhoods, raising the
//! combination cap) never touches generation logic.
//!
//! # Enumeration Order
//!
//! 1. One `City` entry per anchor city, in declaration order
//! 2. One `CityNiche` entry per pair of the first `combination_cap` niches and the
//!    first `combination_cap` cities, niche-major, city-minor
//! 3. One `Neighborhood` entry per declared neighborhood
//!
//! The cap bounds the number of niche-in-city pages so that coverage grows as a
//! capacity decision instead of a combinatorial explosion of thin pages.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::PageEntry;
use crate::utils::slug::slugify;

/// Number of leading niches and cities combined into `CityNiche` pages.
pub const DEFAULT_COMBINATION_CAP: usize = 3;

/// Errors raised while loading or validating a taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read taxonomy file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid taxonomy JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty {field} name in taxonomy")]
    EmptyName { field: &'static str },

    #[error("{field} name '{name}' has no slug-safe characters")]
    UnsluggableName { field: &'static str, name: String },

    #[error("Duplicate page slug '{slug}'")]
    DuplicateSlug { slug: String },
}

/// A named place with an optional administrative region code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, region: Option<&str>) -> Self {
        Self {
            name: name.into(),
            region: region.map(str::to_string),
        }
    }
}

/// The closed universe of generatable pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub cities: Vec<Place>,
    pub niches: Vec<String>,
    #[serde(default)]
    pub neighborhoods: Vec<Place>,
    #[serde(default = "default_combination_cap")]
    pub combination_cap: usize,
}

fn default_combination_cap() -> usize {
    DEFAULT_COMBINATION_CAP
}

impl Taxonomy {
    /// The shipped taxonomy: five anchor cities on the São Paulo coast and capital,
    /// five business niches, no neighborhoods yet.
    pub fn reference() -> Self {
        Self {
            cities: vec![
                Place::new("Praia Grande", Some("SP")),
                Place::new("Santos", Some("SP")),
                Place::new("São Paulo", Some("SP")),
                Place::new("Guarujá", Some("SP")),
                Place::new("São Vicente", Some("SP")),
            ],
            niches: vec![
                "Dentistas".to_string(),
                "Imobiliárias".to_string(),
                "Contadores".to_string(),
                "Clínicas".to_string(),
                "Restaurantes".to_string(),
            ],
            neighborhoods: Vec::new(),
            combination_cap: DEFAULT_COMBINATION_CAP,
        }
    }

    /// Loads a taxonomy from a JSON file and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read,
    /// [`CatalogError::Json`] if it is not a taxonomy document, or any
    /// validation error from [`Taxonomy::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let taxonomy: Taxonomy = serde_json::from_str(&raw)?;
        taxonomy.validate()?;

        Ok(taxonomy)
    }

    /// Enumerates every page entry in deterministic order.
    pub fn enumerate(&self) -> Vec<PageEntry> {
        let cap = self.combination_cap;
        let mut entries = Vec::with_capacity(
            self.cities.len()
                + cap.min(self.niches.len()) * cap.min(self.cities.len())
                + self.neighborhoods.len(),
        );

        entries.extend(
            self.cities
                .iter()
                .map(|city| PageEntry::city(city.name.clone(), city.region.clone())),
        );

        for niche in self.niches.iter().take(cap) {
            for city in self.cities.iter().take(cap) {
                entries.push(PageEntry::city_niche(
                    niche.clone(),
                    city.name.clone(),
                    city.region.clone(),
                ));
            }
        }

        entries.extend(self.neighborhoods.iter().map(|neighborhood| {
            PageEntry::neighborhood(neighborhood.name.clone(), neighborhood.region.clone())
        }));

        entries
    }

    /// Validates that every name produces a usable slug and that no two
    /// enumerated entries share a slug.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let names = self
            .cities
            .iter()
            .map(|p| ("city", p.name.as_str()))
            .chain(self.niches.iter().map(|n| ("niche", n.as_str())))
            .chain(
                self.neighborhoods
                    .iter()
                    .map(|p| ("neighborhood", p.name.as_str())),
            );

        for (field, name) in names {
            if name.trim().is_empty() {
                return Err(CatalogError::EmptyName { field });
            }
            if slugify(name).is_empty() {
                return Err(CatalogError::UnsluggableName {
                    field,
                    name: name.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for entry in self.enumerate() {
            if !seen.insert(entry.slug.clone()) {
                return Err(CatalogError::DuplicateSlug { slug: entry.slug });
            }
        }

        Ok(())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::reference()
    }
}
