use anyhow::Result;
use unicode_normalization::UnicodeNormalization;

use super::cleanup::TextCleaner;
use super::filters::{
    CompoundNounFilter, FilterChain, NumericReplaceFilter, OneCharacterFilter, PosKeepFilter,
    TokenFilter,
};
use super::frequency::frequency_table;
use super::tokenize::MorphologicalTokenizer;

/// Toggles for the optional filter stages. The reference behavior leaves
/// both off.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    pub replace_numerics: bool,
    pub drop_single_chars: bool,
}

/// The per-line pipeline: cleanup, NFKC normalization, tokenization, filter
/// chain, base-form extraction.
pub struct LexicalAnalyzer {
    cleaner: TextCleaner,
    tokenizer: MorphologicalTokenizer,
    chain: FilterChain,
}

impl LexicalAnalyzer {
    pub fn new(options: AnalysisOptions) -> Result<Self> {
        let mut filters: Vec<Box<dyn TokenFilter>> = Vec::new();
        if options.replace_numerics {
            filters.push(Box::new(NumericReplaceFilter));
        }
        filters.push(Box::new(CompoundNounFilter));
        filters.push(Box::new(PosKeepFilter::content_words()));
        if options.drop_single_chars {
            filters.push(Box::new(OneCharacterFilter::new()?));
        }

        Ok(Self {
            cleaner: TextCleaner::new()?,
            tokenizer: MorphologicalTokenizer::new()?,
            chain: FilterChain::new(filters),
        })
    }

    /// Analyze a corpus into the surviving token stream and its frequency
    /// table. Empty input yields empty results, not an error.
    pub fn analyze(&self, text: &str) -> Result<(Vec<String>, Vec<(String, u64)>)> {
        let mut words = Vec::new();
        for line in text.lines() {
            let cleaned = self.cleaner.clean(line);
            let normalized: String = cleaned.nfkc().collect();
            let tokens = self.tokenizer.tokenize(&normalized)?;
            let kept = self.chain.apply(tokens);
            // Lines where everything is filtered out simply contribute nothing
            words.extend(kept.into_iter().map(|token| token.base).filter(|base| !base.is_empty()));
        }

        let table = frequency_table(&words);
        Ok((words, table))
    }
}
