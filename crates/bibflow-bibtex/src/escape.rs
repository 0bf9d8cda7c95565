//! Markup escaping for field values
//!
//! Escaping leaves existing escapes and LaTeX control sequences alone, so
//! running it over its own output changes nothing. Balanced brace groups
//! are BibTeX structure and are kept; only braces without a partner are
//! escaped.

use std::borrow::Cow;

/// Characters that form a complete escape when preceded by a backslash.
/// Includes the accent control symbols (`\'e`, `\"o`, `\^o`, ...).
const ESCAPE_SYMBOLS: &str = "&%$#_{}\\'\"`^~=.";

/// Byte offsets of `{` and `}` that have no partner, ignoring escaped braces
fn unmatched_braces(value: &str) -> Vec<usize> {
    let mut open = Vec::new();
    let mut unmatched = Vec::new();
    let mut chars = value.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => open.push(idx),
            '}' => {
                if open.pop().is_none() {
                    unmatched.push(idx);
                }
            }
            _ => {}
        }
    }
    unmatched.extend(open);
    unmatched
}

/// Escape characters that are structurally significant in LaTeX/BibTeX.
///
/// `& % $ # _` gain a backslash; `~`, `^` and a stray `\` become
/// `\textasciitilde{}`, `\textasciicircum{}` and `\textbackslash{}`;
/// unbalanced braces become `\{` / `\}`.
pub fn escape_markup(value: &str) -> String {
    let unmatched = unmatched_braces(value);
    let chars: Vec<(usize, char)> = value.char_indices().collect();
    let mut out = String::with_capacity(value.len() + 8);

    let mut i = 0;
    while i < chars.len() {
        let (idx, c) = chars[i];
        match c {
            '\\' => match chars.get(i + 1).map(|&(_, next)| next) {
                Some(next) if ESCAPE_SYMBOLS.contains(next) => {
                    out.push('\\');
                    out.push(next);
                    i += 2;
                    continue;
                }
                Some(next) if next.is_ascii_alphabetic() => {
                    // Control word such as \emph or \textasciitilde
                    out.push('\\');
                    i += 1;
                    while let Some(&(_, letter)) = chars.get(i) {
                        if !letter.is_ascii_alphabetic() {
                            break;
                        }
                        out.push(letter);
                        i += 1;
                    }
                    continue;
                }
                _ => out.push_str("\\textbackslash{}"),
            },
            '{' | '}' if unmatched.contains(&idx) => {
                out.push('\\');
                out.push(c);
            }
            '&' | '%' | '$' | '#' | '_' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
        i += 1;
    }
    out
}

/// Make a value safe to wrap in braces.
///
/// Escapes unpartnered braces and a trailing lone backslash; everything
/// else is returned as is.
pub fn balance_braces(value: &str) -> Cow<'_, str> {
    let unmatched = unmatched_braces(value);
    let trailing_backslash = (value.len() - value.trim_end_matches('\\').len()) % 2 == 1;
    if unmatched.is_empty() && !trailing_backslash {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + unmatched.len() + 16);
    for (idx, c) in value.char_indices() {
        if unmatched.contains(&idx) {
            out.push('\\');
        }
        out.push(c);
    }
    if trailing_backslash {
        out.pop();
        out.push_str("\\textbackslash{}");
    }
    Cow::Owned(out)
}

/// Whether every unescaped brace in `text` has a partner
pub fn is_balanced(text: &str) -> bool {
    unmatched_braces(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape_markup("10%"), "10\\%");
        assert_eq!(escape_markup("$100"), "\\$100");
        assert_eq!(escape_markup("A & B"), "A \\& B");
        assert_eq!(escape_markup("snake_case #1"), "snake\\_case \\#1");
    }

    #[test]
    fn test_escape_tilde_caret_backslash() {
        assert_eq!(escape_markup("a~b"), "a\\textasciitilde{}b");
        assert_eq!(escape_markup("x^2"), "x\\textasciicircum{}2");
        assert_eq!(escape_markup("C:\\ 1"), "C:\\textbackslash{} 1");
    }

    #[test]
    fn test_escape_keeps_latex_commands() {
        assert_eq!(escape_markup("Schr\\\"odinger"), "Schr\\\"odinger");
        assert_eq!(escape_markup("\\emph{All} of it"), "\\emph{All} of it");
        assert_eq!(escape_markup("The {LaTeX} Guide"), "The {LaTeX} Guide");
    }

    #[test]
    fn test_escape_unbalanced_braces() {
        assert_eq!(escape_markup("open { only"), "open \\{ only");
        assert_eq!(escape_markup("close } only"), "close \\} only");
        assert_eq!(escape_markup("{ok} }"), "{ok} \\}");
    }

    #[test]
    fn test_escape_is_idempotent() {
        for input in [
            "A & B 50% $x$ #1 a_b",
            "tilde ~ caret ^ slash \\ end",
            "stray { brace",
            "already \\& escaped \\%",
            "\\textbackslash{} kept",
        ] {
            let once = escape_markup(input);
            assert_eq!(escape_markup(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_balance_braces() {
        assert_eq!(balance_braces("fine {x}"), "fine {x}");
        assert!(matches!(balance_braces("fine {x}"), Cow::Borrowed(_)));
        assert_eq!(balance_braces("a { b"), "a \\{ b");
        assert_eq!(balance_braces("ends \\"), "ends \\textbackslash{}");
        assert_eq!(balance_braces("ends \\\\"), "ends \\\\");
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced("{a {b}}"));
        assert!(is_balanced("\\{ escaped"));
        assert!(!is_balanced("{a"));
    }

    proptest::proptest! {
        #[test]
        fn prop_escape_is_idempotent(value in r#"[a-z {}\\&%$#_~^'"]{0,24}"#) {
            let once = escape_markup(&value);
            proptest::prop_assert_eq!(escape_markup(&once), once.clone());
            proptest::prop_assert!(is_balanced(&once));
        }
    }
}
