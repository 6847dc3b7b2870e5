use std::fmt;

/// Language tag a caller asks the pipeline to translate into.
///
/// The tag is passed verbatim to the translation and synthesis
/// capabilities; only emptiness is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationTarget(String);

impl TranslationTarget {
    pub fn parse(tag: &str) -> Result<Self, InvalidTarget> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(InvalidTarget);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranslationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("target language is required")]
pub struct InvalidTarget;
