//! Corpus aggregation: flatten an issue snapshot into one text blob.

pub mod aggregator;

pub use aggregator::{CorpusStats, aggregate};
