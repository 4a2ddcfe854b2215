//! Fence tag vocabulary
//!
//! Documents use short tags after the opening backticks (`py`, `c++`), cells use canonical
//! language identifiers (`python`, `cpp`). Both lookups fall back to their input, so tags the
//! table does not know about survive a round trip untouched.
//!
//! Several tags may name the same language. Only the last one registered for a language is
//! used when writing, so `py2` and `py` come back as `py3`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fence tags and the language each one stands for, in registration order.
pub const LANGUAGE_TAGS: &[(&str, &str)] = &[
    ("bat", "batch"),
    ("c++", "cpp"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("cs", "csharp"),
    ("py", "python"),
    ("py2", "python"),
    ("py3", "python"),
];

static TAG_TO_LANGUAGE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGE_TAGS.iter().copied().collect());

// Later pairs overwrite earlier ones for the same language.
static LANGUAGE_TO_TAG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    LANGUAGE_TAGS
        .iter()
        .map(|&(tag, language)| (language, tag))
        .collect()
});

/// Resolve a fence tag to a language identifier.
pub fn language_for_tag(tag: &str) -> &str {
    TAG_TO_LANGUAGE.get(tag).copied().unwrap_or(tag)
}

/// Pick the fence tag written for a language identifier.
pub fn tag_for_language(language: &str) -> &str {
    LANGUAGE_TO_TAG.get(language).copied().unwrap_or(language)
}
