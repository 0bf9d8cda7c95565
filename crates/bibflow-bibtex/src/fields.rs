//! Field extraction
//!
//! Values are read with the same depth scanner as records, so a title such
//! as `{The {LaTeX} {C}ompanion}` comes back whole. Supported value forms:
//! braced, quoted, bare numbers and bare macro names, joined with `#`.

use crate::scan::{find_group_end, find_quote_end, record_header};

/// Iterator over `name = value` pairs of a record body.
///
/// Stops at the end of the body, at the record's closing delimiter, or at
/// the first piece of syntax it cannot read. Names are yielded as written.
pub struct FieldScanner<'a> {
    body: &'a str,
    pos: usize,
}

impl<'a> FieldScanner<'a> {
    /// Scan a record body that starts after the citation key's comma
    pub fn new(body: &'a str) -> Self {
        Self { body, pos: 0 }
    }

    fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        let body = self.body;
        let bytes = body.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    fn read_name(&mut self) -> Option<&'a str> {
        let body = self.body;
        let start = self.pos;
        self.skip_while(|b| b.is_ascii_alphanumeric() || b"_-:.+".contains(&b));
        let end = self.pos;
        (end > start).then(|| &body[start..end])
    }

    /// Read one value part; `None` on syntax that cannot start a value
    fn read_part(&mut self) -> Option<String> {
        let body = self.body;
        let bytes = body.as_bytes();
        match bytes.get(self.pos)? {
            b'{' => {
                let open = self.pos;
                match find_group_end(bytes, open) {
                    Some(close) => {
                        self.pos = close + 1;
                        Some(body[open + 1..close].to_string())
                    }
                    None => {
                        self.pos = bytes.len();
                        Some(body[open + 1..].to_string())
                    }
                }
            }
            b'"' => {
                let open = self.pos;
                match find_quote_end(bytes, open) {
                    Some(close) => {
                        self.pos = close + 1;
                        Some(body[open + 1..close].to_string())
                    }
                    None => {
                        self.pos = bytes.len();
                        Some(body[open + 1..].to_string())
                    }
                }
            }
            _ => {
                let start = self.pos;
                self.skip_while(|b| !b",#}){\"".contains(&b) && b != b'\n');
                let token = body[start..self.pos].trim();
                (!token.is_empty()).then(|| token.to_string())
            }
        }
    }
}

impl<'a> Iterator for FieldScanner<'a> {
    type Item = (&'a str, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_while(|b| b.is_ascii_whitespace() || b == b',');
        let name = self.read_name()?;
        self.skip_while(|b| b.is_ascii_whitespace());
        if self.body.as_bytes().get(self.pos) != Some(&b'=') {
            self.pos = self.body.len();
            return None;
        }
        self.pos += 1;

        let mut value = String::new();
        loop {
            self.skip_while(|b| b.is_ascii_whitespace());
            match self.read_part() {
                Some(part) => value.push_str(&part),
                None => break,
            }
            self.skip_while(|b| b.is_ascii_whitespace());
            if self.body.as_bytes().get(self.pos) == Some(&b'#') {
                self.pos += 1;
            } else {
                break;
            }
        }

        let value = value
            .trim()
            .trim_end_matches(|c: char| c == ',' || c.is_whitespace());
        Some((name, value.to_string()))
    }
}

/// Extract a field's raw value from one record's text (case-insensitive name).
///
/// Accepts a whole record (`@type{key, ...}`) or a bare field list.
/// Returns `None` when the field is missing; callers pick their own fallback.
pub fn extract_field(entry_text: &str, name: &str) -> Option<String> {
    let trimmed = entry_text.trim_start();
    let body = match record_header(trimmed) {
        Ok((body, _)) => match body.find(',') {
            Some(pos) => &body[pos + 1..],
            None => return None,
        },
        Err(_) => trimmed,
    };

    FieldScanner::new(body)
        .find(|(field, _)| field.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}
