//! Word tokenization and the inverted index behind contact search.

pub mod inverted_index;

pub use inverted_index::{normalize_query, tokenize, tokenize_all, InvertedIndex};
