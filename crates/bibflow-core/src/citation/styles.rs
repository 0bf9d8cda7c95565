//! Per-style citation layouts

use super::{CitationFields, UNKNOWN_AUTHOR};

/// Append a period unless the text already ends a sentence
fn terminate(text: &str) -> String {
    if text.ends_with(['.', '?', '!']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// Title in double quotes with a closing mark inside the quotes:
/// `"Title."`, or `"Why?"` when the title has its own.
fn quoted(title: &str, mark: char) -> String {
    if title.ends_with(['.', '?', '!']) {
        format!("\"{title}\"")
    } else {
        format!("\"{title}{mark}\"")
    }
}

/// Join names as `A, B, <last_sep>C`; two names use `pair_sep`
fn join_names(names: &[String], pair_sep: &str, last_sep: &str) -> String {
    match names {
        [] => UNKNOWN_AUTHOR.to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first}{pair_sep}{second}"),
        [init @ .., last] => format!("{}{last_sep}{last}", init.join(", ")),
    }
}

/// Journal clause shared by MLA, Harvard and IEEE: `Journal, vol. V, pp. P`
fn labelled_source(fields: &CitationFields) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(journal) = &fields.journal {
        parts.push(journal.clone());
    }
    if let Some(volume) = &fields.volume {
        parts.push(format!("vol. {volume}"));
    }
    if let Some(pages) = &fields.pages {
        parts.push(format!("pp. {pages}"));
    }
    parts
}

/// `Author (Year). Title. Journal, Volume, Pages.`
pub(super) fn apa(fields: &CitationFields) -> String {
    let authors = join_names(&fields.authors, ", & ", ", & ");
    let mut out = format!("{authors} ({}). {}", fields.year, terminate(&fields.title));
    if let Some(journal) = &fields.journal {
        let mut source = vec![journal.clone()];
        source.extend(fields.volume.clone());
        source.extend(fields.pages.clone());
        out.push(' ');
        out.push_str(&terminate(&source.join(", ")));
    }
    out
}

/// `Author. "Title." Journal, vol. Volume, Year, pp. Pages.`
pub(super) fn mla(fields: &CitationFields) -> String {
    let authors = match fields.authors.as_slice() {
        [first, _, _, ..] => format!("{first}, et al"),
        names => join_names(names, " and ", ", and "),
    };
    let mut parts = Vec::new();
    if let Some(journal) = &fields.journal {
        parts.push(journal.clone());
    }
    if let Some(volume) = &fields.volume {
        parts.push(format!("vol. {volume}"));
    }
    parts.push(fields.year.clone());
    if let Some(pages) = &fields.pages {
        parts.push(format!("pp. {pages}"));
    }
    format!(
        "{} {} {}",
        terminate(&authors),
        quoted(&fields.title, '.'),
        terminate(&parts.join(", "))
    )
}

/// `Author. "Title." Journal Volume (Year): Pages.`
pub(super) fn chicago(fields: &CitationFields) -> String {
    let authors = join_names(&fields.authors, " and ", ", and ");
    let head = format!("{} {}", terminate(&authors), quoted(&fields.title, '.'));
    let Some(journal) = &fields.journal else {
        return format!("{head} {}", terminate(&fields.year));
    };

    let mut source = journal.clone();
    if let Some(volume) = &fields.volume {
        source.push(' ');
        source.push_str(volume);
    }
    source.push_str(&format!(" ({})", fields.year));
    if let Some(pages) = &fields.pages {
        source.push_str(": ");
        source.push_str(pages);
    }
    format!("{head} {}", terminate(&source))
}

/// `Author Year, 'Title', Journal, vol. Volume, pp. Pages.`
pub(super) fn harvard(fields: &CitationFields) -> String {
    let authors = join_names(&fields.authors, " and ", " and ");
    let mut parts = vec![format!("{authors} {}", fields.year), format!("'{}'", fields.title)];
    parts.extend(labelled_source(fields));
    terminate(&parts.join(", "))
}

/// `[Index] Author, "Title," Journal, vol. Volume, pp. Pages, Year.`
pub(super) fn ieee(fields: &CitationFields, index: usize) -> String {
    let authors = join_names(&fields.authors, " and ", ", and ");
    let title = quoted(&fields.title, ',');
    let mut parts = labelled_source(fields);
    parts.push(fields.year.clone());
    format!("[{index}] {authors}, {title} {}", terminate(&parts.join(", ")))
}
