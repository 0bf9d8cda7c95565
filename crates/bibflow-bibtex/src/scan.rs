//! Delimiter depth scanning
//!
//! Record and field boundaries are found by counting brace depth over the
//! raw bytes. All delimiters are ASCII, so scanning bytes of a UTF-8 string
//! never lands inside a multi-byte character. A backslash escapes the byte
//! that follows it (`\{` and `\}` never change the depth).

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0, one_of},
    IResult,
};

/// Parse a record header: `@`, optional whitespace, a type name, optional
/// whitespace and the opening delimiter.
///
/// Returns the remaining input (just after the opening delimiter), the type
/// name and the delimiter that was found.
pub(crate) fn record_header(input: &str) -> IResult<&str, (&str, char)> {
    let (rest, _) = char('@')(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, entry_type) = take_while1(|c: char| c.is_ascii_alphabetic())(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, open) = one_of("{(")(rest)?;
    Ok((rest, (entry_type, open)))
}

/// Byte offset of the opening delimiter if a record header starts at `at`.
pub(crate) fn header_open(input: &str, at: usize) -> Option<usize> {
    let tail = input.get(at..)?;
    let (rest, _) = record_header(tail).ok()?;
    Some(input.len() - rest.len() - 1)
}

/// Find the index of the byte that closes the group opened at `open`.
///
/// `open` must point at `{` or `(`. Braces nest to any depth. A `(` group
/// closes at the first `)` seen at brace depth zero.
pub(crate) fn find_group_end(bytes: &[u8], open: usize) -> Option<usize> {
    let closer = match bytes.get(open)? {
        b'{' => b'}',
        b'(' => b')',
        _ => return None,
    };

    let mut depth = 0usize;
    let mut pos = open + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 1,
            b'{' => depth += 1,
            b'}' if depth > 0 => depth -= 1,
            b'}' if closer == b'}' => return Some(pos),
            b')' if closer == b')' && depth == 0 => return Some(pos),
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Find the closing quote of a quoted value opened at `open`.
///
/// Quotes nested inside braces do not terminate the value.
pub(crate) fn find_quote_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = open + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 1,
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'"' if depth == 0 => return Some(pos),
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Start of the next record header that begins a line, searching from `from`.
///
/// Used to cut an unterminated record short so it cannot swallow the
/// records that follow it.
pub(crate) fn next_line_header(input: &str, from: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut pos = from;
    while pos < bytes.len() {
        if bytes[pos] == b'\n' {
            let mut at = pos + 1;
            while at < bytes.len() && (bytes[at] == b' ' || bytes[at] == b'\t') {
                at += 1;
            }
            if at < bytes.len() && bytes[at] == b'@' && header_open(input, at).is_some() {
                return Some(at);
            }
        }
        pos += 1;
    }
    None
}
