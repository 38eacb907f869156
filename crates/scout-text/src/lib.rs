//! Text normalization and term-frequency similarity for scout.
//!
//! This crate turns free text into comparable term vectors:
//!
//! - **Tokenizing**: `"Node.js, React!"` becomes `["node", "js", "react"]`
//! - **Vectorizing**: tokens are counted into a sparse term-frequency map
//! - **Similarity**: two term vectors are compared with cosine similarity
//!
//! There is no stemming, no stopword removal and no IDF weighting. Scores are meant to be
//! cheap enough to recompute for every candidate on every search.
//!
//! # Example
//!
//! ```
//! use scout_text::{TermVector, cosine_similarity, tokenize};
//!
//! let query = TermVector::from_text("rust engineer");
//! let profile = TermVector::from_text("Senior Rust Engineer, Berlin");
//! assert!(cosine_similarity(&query, &profile) > 0.5);
//! assert_eq!(tokenize("C++ / Go"), vec!["go"]);
//! ```

#![warn(missing_docs)]

mod similarity;
mod tokenize;
mod vector;

pub use similarity::cosine_similarity;
pub use tokenize::{MIN_TOKEN_LEN, tokenize};
pub use vector::TermVector;
