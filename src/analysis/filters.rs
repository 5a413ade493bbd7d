use anyhow::{Context, Result};
use regex::Regex;

use super::tokenize::{Morpheme, POS_NOUN};

/// A stateless transformation over the token stream.
///
/// Filters run in order, each consuming the stream the previous one
/// produced; a filter may collapse several tokens into one or drop tokens
/// entirely. Chains are rebuilt per run, never shared.
pub trait TokenFilter {
    fn apply(&self, tokens: Vec<Morpheme>) -> Vec<Morpheme>;
}

/// Ordered list of filters applied left to right.
pub struct FilterChain {
    filters: Vec<Box<dyn TokenFilter>>,
}

impl FilterChain {
    pub fn new(filters: Vec<Box<dyn TokenFilter>>) -> Self {
        Self { filters }
    }

    pub fn apply(&self, tokens: Vec<Morpheme>) -> Vec<Morpheme> {
        self.filters.iter().fold(tokens, |stream, filter| filter.apply(stream))
    }
}

/// Fuse runs of adjacent noun tokens into one compound noun.
///
/// The fused token's surface and base form are the concatenated surfaces,
/// tagged 名詞/複合. Reduces sparsity of multi-word technical terms.
pub struct CompoundNounFilter;

impl TokenFilter for CompoundNounFilter {
    fn apply(&self, tokens: Vec<Morpheme>) -> Vec<Morpheme> {
        let mut merged: Vec<Morpheme> = Vec::with_capacity(tokens.len());
        for token in tokens {
            match merged.last_mut() {
                Some(prev) if prev.is_noun() && token.is_noun() => {
                    prev.surface.push_str(&token.surface);
                    prev.base = prev.surface.clone();
                    prev.pos_detail = "複合".to_string();
                }
                _ => merged.push(token),
            }
        }
        merged
    }
}

/// Keep only tokens whose part-of-speech major class is in the allow list.
pub struct PosKeepFilter {
    keep: Vec<String>,
}

impl PosKeepFilter {
    pub fn new(keep: &[&str]) -> Self {
        Self { keep: keep.iter().map(|pos| pos.to_string()).collect() }
    }

    /// The reference allow list: nouns, verbs, adjectives, adverbs.
    pub fn content_words() -> Self {
        Self::new(&["名詞", "動詞", "形容詞", "副詞"])
    }
}

impl TokenFilter for PosKeepFilter {
    fn apply(&self, tokens: Vec<Morpheme>) -> Vec<Morpheme> {
        tokens.into_iter().filter(|token| self.keep.iter().any(|pos| token.pos == *pos)).collect()
    }
}

/// Collapse numeral nouns (名詞,数) to one canonical `0` token.
/// Off by default; toggleable without touching the rest of the chain.
pub struct NumericReplaceFilter;

impl TokenFilter for NumericReplaceFilter {
    fn apply(&self, tokens: Vec<Morpheme>) -> Vec<Morpheme> {
        tokens
            .into_iter()
            .map(|mut token| {
                if token.pos == POS_NOUN && token.pos_detail == "数" {
                    token.surface = "0".to_string();
                    token.base = "0".to_string();
                }
                token
            })
            .collect()
    }
}

/// Drop single-character kana/Latin/digit tokens. Off by default.
pub struct OneCharacterFilter {
    single: Regex,
}

impl OneCharacterFilter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            single: Regex::new("^[あ-んア-ンa-zA-Z0-9ー]$")
                .context("Failed to compile single-character pattern")?,
        })
    }
}

impl TokenFilter for OneCharacterFilter {
    fn apply(&self, tokens: Vec<Morpheme>) -> Vec<Morpheme> {
        tokens.into_iter().filter(|token| !self.single.is_match(&token.surface)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(surface: &str, pos: &str, pos_detail: &str) -> Morpheme {
        Morpheme {
            surface: surface.to_string(),
            base: surface.to_string(),
            pos: pos.to_string(),
            pos_detail: pos_detail.to_string(),
        }
    }

    #[test]
    fn test_compound_noun_filter_fuses_adjacent_nouns() {
        let tokens = vec![
            token("単体", "名詞", "一般"),
            token("テスト", "名詞", "一般"),
            token("を", "助詞", "格助詞"),
            token("実行", "名詞", "サ変接続"),
        ];

        let merged = CompoundNounFilter.apply(tokens);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].surface, "単体テスト");
        assert_eq!(merged[0].base, "単体テスト");
        assert_eq!(merged[0].pos, "名詞");
        assert_eq!(merged[0].pos_detail, "複合");
        // A non-noun breaks the run; the following noun stays separate
        assert_eq!(merged[2].surface, "実行");
    }

    #[test]
    fn test_pos_keep_filter_drops_particles() {
        let tokens = vec![
            token("晴天", "名詞", "一般"),
            token("です", "助動詞", "*"),
            token("は", "助詞", "係助詞"),
            token("走る", "動詞", "自立"),
            token("。", "記号", "句点"),
        ];

        let kept = PosKeepFilter::content_words().apply(tokens);

        let surfaces: Vec<&str> = kept.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["晴天", "走る"]);
    }

    #[test]
    fn test_numeric_replace_filter_collapses_numerals() {
        let tokens = vec![token("100", "名詞", "数"), token("件", "名詞", "接尾")];

        let replaced = NumericReplaceFilter.apply(tokens);

        assert_eq!(replaced[0].surface, "0");
        assert_eq!(replaced[0].base, "0");
        assert_eq!(replaced[1].surface, "件");
    }

    #[test]
    fn test_one_character_filter_drops_short_tokens() {
        let filter = OneCharacterFilter::new().unwrap();
        let tokens = vec![
            token("a", "名詞", "一般"),
            token("ー", "名詞", "一般"),
            token("空", "名詞", "一般"),
            token("デバッグ", "名詞", "一般"),
        ];

        let kept = filter.apply(tokens);

        let surfaces: Vec<&str> = kept.iter().map(|t| t.surface.as_str()).collect();
        // Single kanji survive; the pattern targets kana, Latin and digits
        assert_eq!(surfaces, vec!["空", "デバッグ"]);
    }

    #[test]
    fn test_chain_applies_filters_in_order() {
        let chain = FilterChain::new(vec![
            Box::new(CompoundNounFilter),
            Box::new(PosKeepFilter::content_words()),
        ]);
        let tokens = vec![
            token("結合", "名詞", "サ変接続"),
            token("テスト", "名詞", "一般"),
            token("が", "助詞", "格助詞"),
            token("落ちる", "動詞", "自立"),
        ];

        let out = chain.apply(tokens);

        let surfaces: Vec<&str> = out.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["結合テスト", "落ちる"]);
    }

    #[test]
    fn test_empty_stream_passes_through() {
        let chain = FilterChain::new(vec![
            Box::new(CompoundNounFilter),
            Box::new(PosKeepFilter::content_words()),
        ]);
        assert!(chain.apply(Vec::new()).is_empty());
    }
}
