//! # FaqClaw Engine
//!
//! The question-matching core. Free text goes in, the closest catalog
//! question (or nothing) comes out.
//!
//! ## How it works
//! ```text
//! "how long is the internship?"
//!   ↓ Normalizer (lowercase + base forms)
//! "how long is the internship"
//!   ↓ TF-IDF over {query} ∪ catalog questions, built fresh per call
//! cosine scores, one per question
//!   ↓ stable argmax, accept only if score > threshold
//! Some("What is the internship duration?") → catalog answer
//! ```
//!
//! The engine is synchronous, allocation-only, and total: any string
//! input yields either a catalog question or `None`, never an error.
//! Rebuilding the vocabulary per call keeps it stateless — correctness
//! is a function of the current catalog content alone.

pub mod catalog;
pub mod matcher;
pub mod normalize;
pub mod tfidf;

pub use catalog::{Catalog, QaEntry};
pub use matcher::{DEFAULT_THRESHOLD, Matcher};
pub use normalize::Normalizer;
