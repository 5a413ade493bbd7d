use anyhow::{Context, Result};
use lindera::dictionary::{DictionaryKind, load_dictionary_from_kind};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;

/// Part-of-speech tag for nouns in the IPADIC tag set.
pub const POS_NOUN: &str = "名詞";

/// One morphological token, reduced to the fields the filter chain and the
/// frequency counter consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    /// Dictionary form; inflected variants share one base form.
    pub base: String,
    /// Part-of-speech major class (名詞, 動詞, ...).
    pub pos: String,
    /// First sub-classification (数 for numerals, 複合 after compounding).
    pub pos_detail: String,
}

impl Morpheme {
    pub fn is_noun(&self) -> bool {
        self.pos == POS_NOUN
    }
}

/// Adapter over the morphological analyzer.
///
/// Loading the dictionary is the expensive part, so one instance is built
/// per run and reused across every line of every project.
pub struct MorphologicalTokenizer {
    inner: Tokenizer,
}

// IPADIC detail layout: [0] POS, [1] sub-class, ... [6] base form
const DETAIL_POS: usize = 0;
const DETAIL_POS_SUB: usize = 1;
const DETAIL_BASE_FORM: usize = 6;

impl MorphologicalTokenizer {
    pub fn new() -> Result<Self> {
        let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
            .context("Failed to load the IPADIC dictionary")?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self { inner: Tokenizer::new(segmenter) })
    }

    /// Segment one normalized line into morphemes.
    pub fn tokenize(&self, line: &str) -> Result<Vec<Morpheme>> {
        let mut tokens = self.inner.tokenize(line).context("Failed to tokenize line")?;

        let mut morphemes = Vec::with_capacity(tokens.len());
        for token in tokens.iter_mut() {
            let surface = token.text.to_string();
            let details = token.details();
            let pos = details.get(DETAIL_POS).copied().unwrap_or("UNK").to_string();
            let pos_detail = details.get(DETAIL_POS_SUB).copied().unwrap_or("*").to_string();
            // Unknown words carry no dictionary form; fall back to the surface
            let base = match details.get(DETAIL_BASE_FORM) {
                Some(base) if *base != "*" => base.to_string(),
                _ => surface.clone(),
            };
            morphemes.push(Morpheme { surface, base, pos, pos_detail });
        }
        Ok(morphemes)
    }
}
