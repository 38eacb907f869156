//! scout: candidate search for recruiting dashboards.
//!
//! scout ranks a snapshot of candidate profiles against a free-text query and a set of
//! structured filters. Each candidate gets a keyword score (distinct query terms found in
//! the profile) and a semantic score (cosine similarity of term-frequency vectors); the
//! configured mode blends them. Open jobs can be turned into a ready-made search, and
//! ranked candidates can be submitted to a job in bulk.

#![warn(missing_docs)]

pub mod cli;
