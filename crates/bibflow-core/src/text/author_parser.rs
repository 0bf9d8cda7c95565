//! Author list parsing
//!
//! Provides functions for:
//! - Splitting a BibTeX author field on " and " without breaking brace groups
//! - Tokenizing a single name at top-level whitespace, ties and commas
//! - Extracting the first author's surname

use super::latex::decode_latex;

/// Split `s` at every top-level occurrence of `pred`, keeping brace groups whole
fn split_top_level(s: &str, pred: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut escaped = false;
    for (idx, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            c if depth == 0 && pred(c) => {
                parts.push(&s[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Split an author field into individual names.
///
/// Whitespace (including newlines) is collapsed first, so separators split
/// across lines are still found. `and` inside a brace group, as in
/// `{Barnes and Noble}`, does not separate names.
pub fn split_authors(author_field: &str) -> Vec<String> {
    let words = split_top_level(author_field, char::is_whitespace);
    let mut names = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for word in words.into_iter().filter(|w| !w.is_empty()) {
        if word.eq_ignore_ascii_case("and") {
            if !current.is_empty() {
                names.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(word);
        }
    }
    if !current.is_empty() {
        names.push(current.join(" "));
    }
    names
}

/// Tokens of a name separated by whitespace or a `~` tie, with brace groups
/// and escapes such as `\~n` kept whole
pub fn name_tokens(name: &str) -> Vec<&str> {
    split_top_level(name, |c| c.is_whitespace() || c == '~')
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect()
}

/// Comma-separated parts of a name (`von Last, Jr, First`), trimmed
pub fn name_parts(name: &str) -> Vec<&str> {
    split_top_level(name, |c| c == ',')
        .into_iter()
        .map(str::trim)
        .collect()
}

/// Raw surname of a single name, markup intact.
///
/// "Last, First" yields the text before the comma; otherwise the last token.
pub fn raw_surname(name: &str) -> Option<&str> {
    let parts = name_parts(name);
    if parts.len() > 1 {
        return Some(parts[0]).filter(|s| !s.is_empty());
    }
    name_tokens(name).last().copied()
}

/// Display surname of the first author, with LaTeX decoded
pub fn first_author_surname(author_field: &str) -> Option<String> {
    let authors = split_authors(author_field);
    let first = authors.first()?;
    let surname = decode_latex(raw_surname(first)?);
    if surname.is_empty() {
        None
    } else {
        Some(surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_authors() {
        assert_eq!(
            split_authors("Smith, John and Doe, Jane"),
            vec!["Smith, John", "Doe, Jane"]
        );
        assert_eq!(
            split_authors("Smith, John\n    and  Doe, Jane"),
            vec!["Smith, John", "Doe, Jane"]
        );
        assert_eq!(split_authors("  "), Vec::<String>::new());
    }

    #[test]
    fn test_split_keeps_braced_and() {
        assert_eq!(
            split_authors("{Barnes and Noble} and Roe, R."),
            vec!["{Barnes and Noble}", "Roe, R."]
        );
    }

    #[test]
    fn test_name_tokens_keep_groups() {
        assert_eq!(
            name_tokens("Jean {de la} Fontaine"),
            vec!["Jean", "{de la}", "Fontaine"]
        );
    }

    #[test]
    fn test_name_tokens_split_ties() {
        assert_eq!(name_tokens("Donald~E.~Knuth"), vec!["Donald", "E.", "Knuth"]);
        assert_eq!(name_tokens("{Jos~Maria} Pe\\~na"), vec!["{Jos~Maria}", "Pe\\~na"]);
    }

    #[test]
    fn test_first_author_surname() {
        assert_eq!(
            first_author_surname("Salman, Oguz Umut and Roe, R."),
            Some("Salman".to_string())
        );
        assert_eq!(
            first_author_surname("Albert Einstein"),
            Some("Einstein".to_string())
        );
        assert_eq!(
            first_author_surname("Schr{\\\"o}dinger, Erwin"),
            Some("Schrödinger".to_string())
        );
        assert_eq!(
            first_author_surname("Donald~E.~Knuth"),
            Some("Knuth".to_string())
        );
        assert_eq!(first_author_surname(""), None);
    }
}
