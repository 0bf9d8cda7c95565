//! File name suggestions from bibliographic metadata
//!
//! The first rule whose inputs are all present wins:
//! 1. `Surname_Journal_Year.ext`
//! 2. `Surname_Year_Title.ext`
//! 3. `Surname_Title.ext`

mod rename;

use bibflow_bibtex::BibEntry;
use lazy_static::lazy_static;
use regex::Regex;

use crate::text::{collapse_whitespace, decode_latex, first_author_surname};

pub use rename::{apply_rename, unique_path, unique_path_with, RenameCandidate};

lazy_static! {
    static ref ILLEGAL_CHARS: Regex = Regex::new(r#"[:/\\?%*|"<>\x00-\x1f]"#).unwrap();
}

pub const DEFAULT_EXTENSION: &str = "pdf";
pub const UNKNOWN_SURNAME: &str = "Unknown";
pub const UNTITLED: &str = "Untitled";

const MAX_JOURNAL_CHARS: usize = 40;
const MAX_TITLE_CHARS: usize = 50;

/// Suggest a `.pdf` file name
pub fn suggest_filename(author: &str, year: &str, title: &str, journal: Option<&str>) -> String {
    suggest_filename_with_extension(author, year, title, journal, DEFAULT_EXTENSION)
}

/// Suggest a file name ending in `extension` (with or without the dot;
/// empty for no extension)
pub fn suggest_filename_with_extension(
    author: &str,
    year: &str,
    title: &str,
    journal: Option<&str>,
    extension: &str,
) -> String {
    let surname = first_author_surname(author)
        .map(|s| sanitize_stripped(&s, usize::MAX))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_SURNAME.to_string());
    let year = sanitize_stripped(&decode_latex(year), usize::MAX);
    let title = sanitize_spaced(&decode_latex(title), MAX_TITLE_CHARS);
    let journal = journal
        .map(|j| sanitize_stripped(&decode_latex(j), MAX_JOURNAL_CHARS))
        .unwrap_or_default();

    let stem = if !journal.is_empty() && !year.is_empty() {
        format!("{surname}_{journal}_{year}")
    } else if !year.is_empty() && !title.is_empty() {
        format!("{surname}_{year}_{title}")
    } else if !title.is_empty() {
        format!("{surname}_{title}")
    } else {
        format!("{surname}_{UNTITLED}")
    };

    match extension.trim_start_matches('.') {
        "" => stem,
        ext => format!("{stem}.{ext}"),
    }
}

/// Suggest a file name for an entry's metadata
pub fn suggest_filename_for_entry(entry: &BibEntry, extension: &str) -> String {
    suggest_filename_with_extension(
        entry.author().unwrap_or_default(),
        entry.year().unwrap_or_default(),
        entry.title().unwrap_or_default(),
        entry.journal(),
        extension,
    )
}

/// Illegal characters removed
fn sanitize_stripped(s: &str, max_chars: usize) -> String {
    truncate(&collapse_whitespace(&ILLEGAL_CHARS.replace_all(s, "")), max_chars)
}

/// Illegal characters replaced with spaces
fn sanitize_spaced(s: &str, max_chars: usize) -> String {
    truncate(&collapse_whitespace(&ILLEGAL_CHARS.replace_all(s, " ")), max_chars)
}

/// At most `max_chars`, without leading or trailing dots and spaces
fn truncate(s: &str, max_chars: usize) -> String {
    let s = trim_dots(s);
    let s = match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    };
    trim_dots(s).to_string()
}

fn trim_dots(s: &str) -> &str {
    s.trim_matches(|c: char| c == '.' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_rule() {
        assert_eq!(
            suggest_filename("Salman, Oguz Umut", "2023", "A Title", Some("Phys. Rev. B")),
            "Salman_Phys. Rev. B_2023.pdf"
        );
    }

    #[test]
    fn test_title_rule_without_journal() {
        assert_eq!(
            suggest_filename("Salman, Oguz Umut", "2023", "A Title", None),
            "Salman_2023_A Title.pdf"
        );
        assert_eq!(
            suggest_filename("Salman, Oguz Umut", "2023", "A Title", Some("  ")),
            "Salman_2023_A Title.pdf"
        );
    }

    #[test]
    fn test_surname_title_rule_without_year() {
        assert_eq!(
            suggest_filename("Oguz Umut Salman", "", "A Title", Some("Phys. Rev. B")),
            "Salman_A Title.pdf"
        );
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(suggest_filename("", "", "", None), "Unknown_Untitled.pdf");
        assert_eq!(suggest_filename("", "2020", "Paper", None), "Unknown_2020_Paper.pdf");
    }

    #[test]
    fn test_illegal_characters() {
        assert_eq!(
            suggest_filename("Doe, J.", "2020", "What? A/B: \"test\"", None),
            "Doe_2020_What A B test.pdf"
        );
        assert_eq!(
            suggest_filename("Doe, J.", "2020", "x", Some("J. Phys.: Cond<Matter>")),
            "Doe_J. Phys. CondMatter_2020.pdf"
        );
    }

    #[test]
    fn test_braces_removed() {
        assert_eq!(
            suggest_filename("{Schr\\\"odinger}, E.", "1926", "{Q}uantisierung", None),
            "Schrödinger_1926_Quantisierung.pdf"
        );
    }

    #[test]
    fn test_truncation() {
        let long_title = "word ".repeat(20);
        let name = suggest_filename("Doe, J.", "2020", &long_title, None);
        let title_part = name
            .strip_prefix("Doe_2020_")
            .and_then(|s| s.strip_suffix(".pdf"))
            .unwrap();
        assert!(title_part.chars().count() <= 50);
        assert!(!title_part.ends_with(' '));

        let long_journal = "Journal ".repeat(10);
        let name = suggest_filename("Doe, J.", "2020", "x", Some(&long_journal));
        let journal_part = name.strip_prefix("Doe_").unwrap().rsplit_once('_').unwrap().0;
        assert!(journal_part.chars().count() <= 40);
    }

    #[test]
    fn test_dot_runs_are_trimmed() {
        assert_eq!(
            suggest_filename("Salman, O.", "2023", "...", None),
            "Salman_Untitled.pdf"
        );
        assert_eq!(
            suggest_filename("Salman, O.", "2023", "Why. . .", None),
            "Salman_2023_Why.pdf"
        );
        assert_eq!(
            suggest_filename("Salman, O.", "2023", "x", Some("Phys. Rev. Lett.")),
            "Salman_Phys. Rev. Lett_2023.pdf"
        );
        assert_eq!(
            suggest_filename("{.}", "2023", ".hidden", None),
            "Unknown_2023_hidden.pdf"
        );
    }

    #[test]
    fn test_custom_extension() {
        assert_eq!(
            suggest_filename_with_extension("Doe, J.", "2020", "T", None, ".djvu"),
            "Doe_2020_T.djvu"
        );
        assert_eq!(
            suggest_filename_with_extension("Doe, J.", "2020", "T", None, ""),
            "Doe_2020_T"
        );
    }

    #[test]
    fn test_for_entry() {
        let entry = BibEntry::parse(
            "@article{k, author = {Salman, O. U.}, year = 2023, title = {T}, journal = {Phys. Rev. B}}",
        )
        .unwrap();
        assert_eq!(
            suggest_filename_for_entry(&entry, "pdf"),
            "Salman_Phys. Rev. B_2023.pdf"
        );
    }
}
