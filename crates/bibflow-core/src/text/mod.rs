//! Text processing module
//!
//! Utilities shared by the citation, filename and deduplication modules:
//! - LaTeX decoding for display
//! - Author list splitting and surname extraction

mod author_parser;
mod latex;

pub use author_parser::{
    first_author_surname, name_parts, name_tokens, raw_surname, split_authors,
};
pub use latex::{collapse_whitespace, decode_latex};
