//! LaTeX decoding for display
//!
//! Field values keep their LaTeX markup; citations and file names want
//! plain text. Decoding removes grouping braces, resolves escapes and the
//! common accent commands, and drops other control words while keeping
//! their arguments.

use unicode_normalization::UnicodeNormalization;

/// Combining mark for a one-character accent command (`\"o`, `\'e`, ...)
fn symbol_accent(c: char) -> Option<char> {
    match c {
        '\'' => Some('\u{0301}'),
        '`' => Some('\u{0300}'),
        '^' => Some('\u{0302}'),
        '"' => Some('\u{0308}'),
        '~' => Some('\u{0303}'),
        '=' => Some('\u{0304}'),
        '.' => Some('\u{0307}'),
        _ => None,
    }
}

/// Combining mark for a lettered accent command (`\c{c}`, `\v{s}`, ...)
fn word_accent(word: &str) -> Option<char> {
    match word {
        "c" => Some('\u{0327}'),
        "v" => Some('\u{030C}'),
        "u" => Some('\u{0306}'),
        "H" => Some('\u{030B}'),
        "k" => Some('\u{0328}'),
        "r" => Some('\u{030A}'),
        _ => None,
    }
}

/// Replacement text for a control word, if it stands for a character
fn word_symbol(word: &str) -> Option<&'static str> {
    Some(match word {
        "ss" => "ß",
        "o" => "ø",
        "O" => "Ø",
        "aa" => "å",
        "AA" => "Å",
        "ae" => "æ",
        "AE" => "Æ",
        "oe" => "œ",
        "OE" => "Œ",
        "l" => "ł",
        "L" => "Ł",
        "i" => "ı",
        "j" => "ȷ",
        "textbackslash" => "\\",
        "textasciitilde" => "~",
        "textasciicircum" => "^",
        "textendash" => "–",
        "textemdash" => "—",
        "textunderscore" => "_",
        "textampersand" => "&",
        _ => return None,
    })
}

/// Read the argument of an accent: an optional brace group around one
/// character, possibly a dotless `\i`/`\j`. Returns the base character.
fn accent_argument(chars: &[char], i: &mut usize) -> Option<char> {
    while chars.get(*i).is_some_and(|c| c.is_whitespace()) {
        *i += 1;
    }
    let braced = chars.get(*i) == Some(&'{');
    if braced {
        *i += 1;
    }
    let base = match chars.get(*i)? {
        '\\' if matches!(chars.get(*i + 1), Some('i') | Some('j')) => {
            *i += 2;
            if chars[*i - 1] == 'i' {
                'i'
            } else {
                'j'
            }
        }
        &c => {
            *i += 1;
            c
        }
    };
    if braced && chars.get(*i) == Some(&'}') {
        *i += 1;
    }
    Some(base)
}

/// Decode LaTeX markup into plain, NFC-normalized text with collapsed whitespace
pub fn decode_latex(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                let Some(&next) = chars.get(i + 1) else {
                    out.push('\\');
                    break;
                };
                if let Some(mark) = symbol_accent(next) {
                    i += 2;
                    if let Some(base) = accent_argument(&chars, &mut i) {
                        out.push(base);
                        out.push(mark);
                    }
                    continue;
                }
                if "&%$#_{}".contains(next) {
                    out.push(next);
                    i += 2;
                    continue;
                }
                if next == '\\' {
                    out.push(' ');
                    i += 2;
                    continue;
                }
                if next.is_ascii_alphabetic() {
                    let start = i + 1;
                    let mut end = start;
                    while chars.get(end).is_some_and(|c| c.is_ascii_alphabetic()) {
                        end += 1;
                    }
                    let word: String = chars[start..end].iter().collect();
                    i = end;
                    if let Some(mark) = word_accent(&word) {
                        if let Some(base) = accent_argument(&chars, &mut i) {
                            out.push(base);
                            out.push(mark);
                        }
                    } else if let Some(symbol) = word_symbol(&word) {
                        out.push_str(symbol);
                        if chars.get(i) == Some(&'{') && chars.get(i + 1) == Some(&'}') {
                            i += 2;
                        } else if chars.get(i) == Some(&' ') {
                            i += 1;
                        }
                    }
                    continue;
                }
                // Other control symbols (\, \; \!) are spacing
                out.push(' ');
                i += 2;
            }
            '{' | '}' | '$' => i += 1,
            '~' => {
                out.push(' ');
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    collapse_whitespace(&out.nfc().collect::<String>())
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_grouping_braces() {
        assert_eq!(decode_latex("The {LaTeX} {C}ompanion"), "The LaTeX Companion");
    }

    #[test]
    fn test_decodes_accents() {
        assert_eq!(decode_latex("Schr{\\\"o}dinger"), "Schrödinger");
        assert_eq!(decode_latex("Schr\\\"odinger"), "Schrödinger");
        assert_eq!(decode_latex("Erd\\H{o}s"), "Erdős");
        assert_eq!(decode_latex("Fran\\c{c}ois"), "François");
        assert_eq!(decode_latex("na\\\"{\\i}ve"), "naïve");
    }

    #[test]
    fn test_decodes_escapes_and_symbols() {
        assert_eq!(decode_latex("A \\& B, 50\\%"), "A & B, 50%");
        assert_eq!(decode_latex("Stra\\ss e"), "Straße");
        assert_eq!(decode_latex("back\\textbackslash{}slash"), "back\\slash");
    }

    #[test]
    fn test_drops_formatting_commands() {
        assert_eq!(decode_latex("\\emph{Very} important"), "Very important");
        assert_eq!(decode_latex("$x$ marks"), "x marks");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(decode_latex("  spread\n\tout   text "), "spread out text");
        assert_eq!(decode_latex("non~breaking"), "non breaking");
    }
}
