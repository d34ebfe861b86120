//! Slug derivation for generated landing pages.
//!
//! Every page kind owns a fixed namespace prefix, so slugs of different kinds can
//! never collide. Within a kind, uniqueness follows from the uniqueness of the
//! display names declared in the taxonomy.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Namespace prefix for city-wide pages.
pub const CITY_PREFIX: &str = "geracao-de-leads-b2b";

/// Namespace prefix for niche-in-city pages.
pub const CITY_NICHE_PREFIX: &str = "prospeccao-b2b";

/// Namespace prefix for neighborhood pages.
pub const NEIGHBORHOOD_PREFIX: &str = "empresas-no-bairro";

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("static slug pattern"));

/// Converts a display name into its URL slug form.
///
/// # Rules
///
/// 1. The name is decomposed (NFD) and combining marks are dropped (`ã` → `a`, `š` → `s`)
/// 2. Letters without a decomposition are transliterated (`ł` → `l`, `ß` → `ss`)
/// 3. Letters are lowercased
/// 4. Every run of other characters becomes a single hyphen
/// 5. Leading and trailing hyphens are removed
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("São Paulo"), "sao-paulo");
/// assert_eq!(slugify("Košice"), "kosice");
/// assert_eq!(slugify("  Praia   Grande "), "praia-grande");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    let letters = name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase);

    for c in letters {
        let mut buf = [0u8; 4];
        let folded = if c.is_ascii_alphanumeric() {
            Some(&*c.encode_utf8(&mut buf))
        } else {
            transliterate(c)
        };

        match folded {
            Some(ascii) => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push_str(ascii);
            }
            None => pending_hyphen = true,
        }
    }

    slug
}

/// ASCII spelling of lowercase letters that NFD leaves intact.
fn transliterate(c: char) -> Option<&'static str> {
    let ascii = match c {
        'ł' => "l",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    };
    Some(ascii)
}

/// Builds the slug of a city-wide page: `{city-prefix}-{city}`.
pub fn build_city_slug(city: &str) -> String {
    format!("{}-{}", CITY_PREFIX, slugify(city))
}

/// Builds the slug of a niche-in-city page: `{niche-prefix}-{niche}-{city}`.
pub fn build_city_niche_slug(niche: &str, city: &str) -> String {
    format!("{}-{}-{}", CITY_NICHE_PREFIX, slugify(niche), slugify(city))
}

/// Builds the slug of a neighborhood page: `{neighborhood-prefix}-{neighborhood}`.
pub fn build_neighborhood_slug(neighborhood: &str) -> String {
    format!("{}-{}", NEIGHBORHOOD_PREFIX, slugify(neighborhood))
}

/// Returns true if `slug` has the shape every generated slug has.
///
/// Used by routing to reject paths that cannot possibly be taxonomy pages
/// before touching the slug index.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}
