//! Bloom filter with an accuracy harness.
//!
//! [`BloomFilter`] is a classic fixed-size filter with salted multi-hash
//! `add`/`check`. [`Evaluator`] loads a reference word list into a filter
//! alongside an exact ground-truth set, then scores a query word list into
//! a [`ConfusionMatrix`]. [`WordList`] streams Latin-1 word lists one
//! trimmed line at a time.

pub mod bloom;
pub mod corpus;
pub mod error;
pub mod eval;

pub use bloom::BloomFilter;
pub use corpus::WordList;
pub use error::{Error, Result};
pub use eval::{ConfusionMatrix, Evaluator};
