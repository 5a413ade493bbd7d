//! Lexical analysis: cleanup, tokenization, filtering, frequency counting.
//!
//! The pipeline runs per corpus line: regex cleanup, NFKC normalization,
//! morphological tokenization, then an ordered chain of stateless token
//! filters. Surviving tokens are keyed by their base (dictionary) form so
//! inflected variants collapse into one lexical entry.
//!
//! The morphological analyzer itself is a capability behind
//! [`MorphologicalTokenizer`]: the rest of the pipeline only sees
//! [`Morpheme`] values (surface form, base form, part of speech), so filter
//! logic is testable with hand-built fixtures and never touches the
//! dictionary.

pub mod cleanup;
pub mod engine;
pub mod filters;
pub mod frequency;
pub mod tokenize;

pub use cleanup::TextCleaner;
pub use engine::{AnalysisOptions, LexicalAnalyzer};
pub use filters::{
    CompoundNounFilter, FilterChain, NumericReplaceFilter, OneCharacterFilter, PosKeepFilter,
    TokenFilter,
};
pub use frequency::frequency_table;
pub use tokenize::{Morpheme, MorphologicalTokenizer};
