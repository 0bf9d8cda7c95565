//! Author field passes
//!
//! Normalization only tidies the list: whitespace is collapsed and names
//! are joined with " and ". Shortening rewrites every name as
//! "Initials Surname". Both are idempotent.

use crate::text::{name_parts, name_tokens, split_authors};

/// Collapse whitespace and normalize separators in an author field
pub fn normalize_author_list(field: &str) -> String {
    split_authors(field).join(" and ")
}

/// Shorten every name of an author field to "Initials Surname"
pub fn shorten_author_list(field: &str, dots: bool) -> String {
    split_authors(field)
        .iter()
        .map(|name| shorten_name(name, dots))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Shorten one name.
///
/// "Salman, Oguz Umut" and "Oguz Umut Salman" both become "O. U. Salman".
/// Lower-case particles stay with the surname ("J. van der Waals"). A
/// "Last, Jr, First" name keeps its three-part form with the given names
/// reduced, since "Jr" cannot follow the surname unambiguously.
pub fn shorten_name(name: &str, dots: bool) -> String {
    if name.eq_ignore_ascii_case("others") {
        return name.to_string();
    }

    let parts = name_parts(name);
    match parts.as_slice() {
        [surname, given] => join_name(&initials(given, dots), surname),
        [surname, suffix, given] => {
            let given = initials(given, dots);
            if given.is_empty() {
                format!("{surname}, {suffix}")
            } else {
                format!("{surname}, {suffix}, {given}")
            }
        }
        _ => {
            let tokens = name_tokens(name);
            if tokens.len() < 2 {
                return name.to_string();
            }
            // Surname starts at the first lower-case particle, else the last token
            let start = tokens
                .iter()
                .enumerate()
                .skip(1)
                .take(tokens.len() - 2)
                .find(|(_, t)| is_particle(t))
                .map(|(i, _)| i)
                .unwrap_or(tokens.len() - 1);
            let given = tokens[..start].join(" ");
            let surname = tokens[start..].join(" ");
            join_name(&initials(&given, dots), &surname)
        }
    }
}

fn join_name(initials: &str, surname: &str) -> String {
    if initials.is_empty() {
        surname.to_string()
    } else {
        format!("{initials} {surname}")
    }
}

fn is_particle(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_lowercase())
}

/// Initials of the given names, separated by spaces.
///
/// Hyphenated names keep the hyphen ("Jean-Paul" → "J.-P."); run-together
/// initials are separated ("O.U." → "O. U.").
fn initials(given: &str, dots: bool) -> String {
    let mut out = Vec::new();
    for token in name_tokens(given) {
        let pieces: Vec<String> = token
            .split('-')
            .filter_map(|piece| piece_initials(piece, dots))
            .collect();
        if !pieces.is_empty() {
            out.push(pieces.join("-"));
        }
    }
    out.join(" ")
}

/// Initials of one hyphen-free piece of a given name.
///
/// A piece without any letter (`&`, `\&`) is kept as written.
fn piece_initials(piece: &str, dots: bool) -> Option<String> {
    if piece.is_empty() {
        return None;
    }
    if !piece.chars().any(char::is_alphabetic) {
        return Some(piece.to_string());
    }
    let dot = if dots { "." } else { "" };
    if piece.starts_with('{') || piece.starts_with('\\') {
        return group_initial(piece).map(|initial| format!("{initial}{dot}"));
    }
    let letters: Vec<String> = piece
        .split('.')
        .filter_map(|part| part.chars().next())
        .map(|c| format!("{}{dot}", c.to_uppercase()))
        .collect();
    if letters.is_empty() {
        None
    } else {
        Some(letters.join(" "))
    }
}

/// Accent control symbols that combine with the following letter
const ACCENT_SYMBOLS: &str = "'\"^`~=.";

/// Initial of a name that starts with markup: the leading brace group
/// (`{\"O}mer` → `{\"O}`) or an accent command with its letter
/// (`\"Omer` → `\"O`, `\'{E}mile` → `\'{E}`).
fn group_initial(piece: &str) -> Option<String> {
    if piece.starts_with('{') {
        let group = leading_group(piece).unwrap_or_else(|| piece.trim_end_matches('.'));
        return Some(group.to_string());
    }

    let mut chars = piece.char_indices().skip(1);
    let (_, symbol) = chars.next()?;
    if symbol.is_ascii_alphabetic() {
        // Control word such as \O or \L: keep it whole
        return Some(piece.trim_end_matches('.').to_string());
    }
    if ACCENT_SYMBOLS.contains(symbol) {
        match chars.next() {
            Some((idx, letter)) if letter.is_alphabetic() => {
                return Some(piece[..idx + letter.len_utf8()].to_string());
            }
            Some((idx, '{')) => {
                if let Some(group) = leading_group(&piece[idx..]) {
                    return Some(piece[..idx + group.len()].to_string());
                }
            }
            _ => {}
        }
    }
    Some(piece.trim_end_matches('.').to_string())
}

/// The brace group `piece` starts with, if it closes
fn leading_group(piece: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut escaped = false;
    for (idx, c) in piece.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&piece[..=idx]);
                }
            }
            _ => {}
        }
    }
    None
}
