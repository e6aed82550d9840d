// Lenient parsing of enumerated tool parameters

/// An enumerated parameter value.
///
/// Parsing is case-insensitive and ignores surrounding whitespace.
/// Unrecognised values never fail a call: optional fields fall back to
/// their default, required fields fall back to generic content.
pub trait Choice: Sized + Copy + Default + PartialEq + 'static {
    /// Every known value, in display order
    const ALL: &'static [Self];

    /// Canonical lowercase key, as documented in the tool schema
    fn key(self) -> &'static str;

    /// Extra accepted spellings
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == wanted || c.aliases().contains(&wanted.as_str()))
    }

    /// Display label, e.g. "Mid-range"
    fn label(self) -> String {
        capitalize(self.key())
    }
}

/// Resolves raw parameter strings and records fallback notes
#[derive(Debug, Default)]
pub struct Resolver {
    notes: Vec<String>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an optional field; unknown values become the default
    pub fn optional<C: Choice>(&mut self, field: &str, raw: &str) -> C {
        if raw.trim().is_empty() {
            return C::default();
        }
        match C::parse(raw) {
            Some(choice) => choice,
            None => {
                let fallback = C::default();
                tracing::debug!(field, given = raw, fallback = fallback.key(), "unrecognised value");
                self.notes.push(format!(
                    "{}: '{}' not recognised, showing {} guidance",
                    field,
                    raw.trim(),
                    fallback.key()
                ));
                fallback
            }
        }
    }

    /// Resolve a required field; unknown values yield `None`
    pub fn required<C: Choice>(&mut self, field: &str, raw: &str) -> Option<C> {
        let parsed = C::parse(raw);
        if parsed.is_none() {
            tracing::debug!(field, given = raw, "unrecognised value, using generic content");
            self.notes.push(format!(
                "{}: '{}' not recognised, showing guidance for every option ({})",
                field,
                raw.trim(),
                C::ALL.iter().map(|c| c.key()).collect::<Vec<_>>().join(", ")
            ));
        }
        parsed
    }

    pub fn into_notes(self) -> Vec<String> {
        self.notes
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// True if `word` appears in `text` as a whole word, ignoring case
pub fn mentions_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    enum Size {
        Small,
        #[default]
        Medium,
        Large,
    }

    impl Choice for Size {
        const ALL: &'static [Self] = &[Size::Small, Size::Medium, Size::Large];

        fn key(self) -> &'static str {
            match self {
                Size::Small => "small",
                Size::Medium => "medium",
                Size::Large => "large",
            }
        }

        fn aliases(self) -> &'static [&'static str] {
            match self {
                Size::Large => &["big"],
                _ => &[],
            }
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(Size::parse("SMALL"), Some(Size::Small));
        assert_eq!(Size::parse("  large "), Some(Size::Large));
        assert_eq!(Size::parse("Big"), Some(Size::Large));
        assert_eq!(Size::parse("huge"), None);
        assert_eq!(Size::Medium.label(), "Medium");
    }

    #[test]
    fn test_optional_falls_back_to_default() {
        let mut resolver = Resolver::new();
        let size: Size = resolver.optional("audience_size", "gigantic");
        assert_eq!(size, Size::Medium);

        let size: Size = resolver.optional("audience_size", "small");
        assert_eq!(size, Size::Small);

        let size: Size = resolver.optional("audience_size", "");
        assert_eq!(size, Size::Medium);

        let notes = resolver.into_notes();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("'gigantic'"));
        assert!(notes[0].contains("medium"));
    }

    #[test]
    fn test_required_returns_none() {
        let mut resolver = Resolver::new();
        let size: Option<Size> = resolver.required("size", "tiny");
        assert_eq!(size, None);
        let notes = resolver.into_notes();
        assert!(notes[0].contains("small, medium, large"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("youtube"), "Youtube");
        assert_eq!(capitalize("MID-RANGE"), "Mid-range");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("26-35"), "26-35");
    }

    #[test]
    fn test_mentions_word() {
        assert!(mentions_word("An AI tutor for kids", "ai"));
        assert!(mentions_word("ai-powered notes", "ai"));
        assert!(!mentions_word("Retail email marketing", "ai"));
    }
}
