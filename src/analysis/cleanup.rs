use anyhow::{Context, Result};
use regex::Regex;

/// Regex-based line cleanup, applied before tokenization.
///
/// Order matters: URLs first (they contain punctuation the later passes
/// would shred), then email addresses, then the ASCII and Unicode symbol
/// ranges. Every match is replaced by a single space.
pub struct TextCleaner {
    url: Regex,
    email: Regex,
    ascii_symbols: Regex,
    unicode_symbols: Regex,
}

impl TextCleaner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            url: Regex::new(r"https?://[\w/:%#$&?()~.=+-]+")
                .context("Failed to compile URL pattern")?,
            email: Regex::new(r"\w+([-+.]\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*")
                .context("Failed to compile email pattern")?,
            ascii_symbols: Regex::new(r"[!-/:-@\[-`{-~]")
                .context("Failed to compile ASCII symbol pattern")?,
            unicode_symbols: Regex::new(r"[■-♯①-⑨]")
                .context("Failed to compile Unicode symbol pattern")?,
        })
    }

    pub fn clean(&self, line: &str) -> String {
        let line = self.url.replace_all(line, " ");
        let line = self.email.replace_all(&line, " ");
        let line = self.ascii_symbols.replace_all(&line, " ");
        let line = self.unicode_symbols.replace_all(&line, " ");
        line.into_owned()
    }
}
