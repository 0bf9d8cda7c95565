//! Text normalization for identity keys

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::text::{collapse_whitespace, decode_latex};

/// Prefixes stripped from DOIs, checked longest first
const DOI_PREFIXES: &[&str] = &[
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "https://doi.org/",
    "http://doi.org/",
    "dx.doi.org/",
    "doi.org/",
    "doi:",
];

/// Normalize a DOI for comparison
///
/// - Converts to lowercase
/// - Strips resolver URLs and the `doi:` scheme
/// - Removes trailing punctuation
pub(crate) fn normalize_doi(doi: &str) -> Option<String> {
    let mut result = doi.trim().to_lowercase();
    for prefix in DOI_PREFIXES {
        if let Some(stripped) = result.strip_prefix(prefix) {
            result = stripped.trim_start().to_string();
            break;
        }
    }
    let result = result.trim_end_matches(['.', ',', ';', ':']).trim();
    if result.is_empty() {
        None
    } else {
        Some(result.to_string())
    }
}

/// Normalize a title for comparison
///
/// - Decodes LaTeX, so `{T}he` and `The` agree
/// - Folds diacritics (NFKD, combining marks dropped)
/// - Converts to lowercase and collapses whitespace
/// - Removes a trailing period
pub(crate) fn normalize_title(title: &str) -> String {
    let folded: String = decode_latex(title)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    collapse_whitespace(&folded.to_lowercase())
        .trim_end_matches('.')
        .to_string()
}

pub(crate) fn normalize_year(year: &str) -> String {
    collapse_whitespace(&decode_latex(year))
}
