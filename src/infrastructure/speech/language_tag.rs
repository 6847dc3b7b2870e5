use crate::application::ports::SynthesisError;
use crate::domain::TranslationTarget;

/// Accepts BCP 47 style tags such as `es`, `pt-BR` or `zh_TW`.
pub fn validate_language(language: &TranslationTarget) -> Result<(), SynthesisError> {
    let tag = language.as_str();
    let mut parts = tag.splitn(2, ['-', '_']);

    let primary = parts.next().unwrap_or_default();
    let primary_ok = (2..=3).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic());

    let region_ok = match parts.next() {
        Some(region) => {
            (2..=4).contains(&region.len()) && region.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => true,
    };

    if primary_ok && region_ok {
        Ok(())
    } else {
        Err(SynthesisError::UnsupportedLanguage(tag.to_string()))
    }
}
