//! AASTeX journal macros
//!
//! Astronomy databases export journal names as macros (`\apj`, `\mnras`).
//! These are expanded to full titles before abbreviation.

use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;

const JOURNAL_MACROS: &[(&str, &str)] = &[
    ("aj", "Astronomical Journal"),
    ("apj", "Astrophysical Journal"),
    ("apjl", "Astrophysical Journal Letters"),
    ("apjs", "Astrophysical Journal Supplement Series"),
    ("mnras", "Monthly Notices of the Royal Astronomical Society"),
    ("aap", "Astronomy and Astrophysics"),
    ("aaps", "Astronomy and Astrophysics Supplement Series"),
    ("pasp", "Publications of the Astronomical Society of the Pacific"),
    ("pasj", "Publications of the Astronomical Society of Japan"),
    ("araa", "Annual Review of Astronomy and Astrophysics"),
    ("baas", "Bulletin of the American Astronomical Society"),
    ("jcap", "Journal of Cosmology and Astroparticle Physics"),
    ("grl", "Geophysical Research Letters"),
    ("jgr", "Journal of Geophysical Research"),
    ("prl", "Physical Review Letters"),
    ("pra", "Physical Review A"),
    ("prb", "Physical Review B"),
    ("prc", "Physical Review C"),
    ("prd", "Physical Review D"),
    ("pre", "Physical Review E"),
    ("physrep", "Physics Reports"),
    ("nphysa", "Nuclear Physics A"),
    ("ao", "Applied Optics"),
    ("procspie", "Proceedings of the SPIE"),
    ("nat", "Nature"),
    ("ssr", "Space Science Reviews"),
    ("apss", "Astrophysics and Space Science"),
    ("na", "New Astronomy"),
    ("nar", "New Astronomy Reviews"),
    ("jcp", "Journal of Chemical Physics"),
];

lazy_static! {
    static ref MACROS: HashMap<&'static str, &'static str> =
        JOURNAL_MACROS.iter().copied().collect();
}

/// Expand a journal value that is a single macro, `\apj` or bare `apj`.
///
/// Bare names only match when written in lower case, so a real title such
/// as "Nature" is never mistaken for a macro. Anything else is returned
/// unchanged.
pub fn expand_journal_macro(value: &str) -> Cow<'_, str> {
    let trimmed = value.trim();
    let name = match trimmed.strip_prefix('\\') {
        Some(stripped) => stripped.to_ascii_lowercase(),
        None if trimmed.chars().all(|c| c.is_ascii_lowercase()) => trimmed.to_string(),
        None => return Cow::Borrowed(value),
    };
    match MACROS.get(name.as_str()) {
        Some(full) => Cow::Borrowed(full),
        None => Cow::Borrowed(value),
    }
}

/// Whether a journal value is a known macro
pub fn is_journal_macro(value: &str) -> bool {
    matches!(expand_journal_macro(value), Cow::Borrowed(s) if s != value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_latex_form() {
        assert_eq!(expand_journal_macro("\\apj"), "Astrophysical Journal");
        assert_eq!(
            expand_journal_macro(" \\MNRAS "),
            "Monthly Notices of the Royal Astronomical Society"
        );
    }

    #[test]
    fn test_expand_bare_form() {
        assert_eq!(expand_journal_macro("prl"), "Physical Review Letters");
        assert_eq!(expand_journal_macro("PRL"), "PRL");
    }

    #[test]
    fn test_unknown_returns_original() {
        assert_eq!(expand_journal_macro("\\unknown"), "\\unknown");
        assert_eq!(expand_journal_macro("Nature"), "Nature");
    }

    #[test]
    fn test_is_macro() {
        assert!(is_journal_macro("\\aj"));
        assert!(!is_journal_macro("Astronomical Journal"));
    }
}
