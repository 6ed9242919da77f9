use std::sync::LazyLock;

use regex::Regex;
use socialite_core::{HandleNormalizer, PipelineSettings};
use unicode_normalization::UnicodeNormalization;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Username normalization selected by `slugify_usernames`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernameNormalizer {
    #[default]
    Identity,
    Slugify,
}

impl UsernameNormalizer {
    pub fn from_settings(settings: &PipelineSettings) -> Self {
        if settings.slugify_usernames {
            Self::Slugify
        } else {
            Self::Identity
        }
    }
}

impl HandleNormalizer for UsernameNormalizer {
    fn normalize(&self, raw: &str) -> String {
        match self {
            Self::Identity => raw.to_owned(),
            Self::Slugify => slugify(raw),
        }
    }
}

/// Lowercase ASCII slug: word characters kept, whitespace and hyphen runs
/// collapsed into a single hyphen.
///
/// Input is decomposed (NFKD) first so accented letters keep their base
/// letter; whatever is still outside ASCII afterwards is dropped.
pub fn slugify(value: &str) -> String {
    let ascii: String = value.nfkd().filter(char::is_ascii).collect();
    let cleaned = DISALLOWED.replace_all(&ascii, "");
    let lowered = cleaned.trim().to_ascii_lowercase();
    SEPARATORS.replace_all(&lowered, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Alice Smith"), "alice-smith");
        assert_eq!(slugify("  John--Paul   Jones "), "john-paul-jones");
        assert_eq!(slugify("o'brien.jr"), "obrienjr");
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_strips_accents() {
        assert_eq!(slugify("Zoë Café"), "zoe-cafe");
        assert_eq!(slugify("José Zoë"), "jose-zoe");
        assert_eq!(slugify("Ångström"), "angstrom");
        assert_eq!(slugify("ﬁle"), "file");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn test_from_settings() {
        let mut settings = PipelineSettings::default();
        assert_eq!(
            UsernameNormalizer::from_settings(&settings),
            UsernameNormalizer::Identity
        );

        settings.slugify_usernames = true;
        let normalizer = UsernameNormalizer::from_settings(&settings);
        assert_eq!(normalizer, UsernameNormalizer::Slugify);
        assert_eq!(normalizer.normalize("Alice Smith"), "alice-smith");
    }

    #[test]
    fn test_identity_keeps_input() {
        assert_eq!(
            UsernameNormalizer::Identity.normalize("Alice Smith!"),
            "Alice Smith!"
        );
    }

    #[quickcheck]
    fn prop_slug_is_stable(value: String) -> bool {
        let slug = slugify(&value);
        slugify(&slug) == slug
    }

    #[quickcheck]
    fn prop_slug_uses_safe_alphabet(value: String) -> bool {
        slugify(&value)
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    }
}
