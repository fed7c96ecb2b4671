//! Resolution of every displayed value through its fallback chain.
//!
//! Each field declares one chain, consulted in order:
//!
//! 1. a language-specific source (fixed Hindi headlines, Hindi microcopy line)
//! 2. the effective copy
//! 3. a literal default
//!
//! Headlines in Hindi stop at step 1 and never look at loaded copy. Every
//! other field reads the same copy in both languages. Empty strings count as
//! missing.

use crate::content::{EffectiveContent, Faq, Feature};
use crate::i18n::{hindi_headlines, Language};
use crate::page::Region;
use crate::populate::RegionValue;
use crate::tone::Tone;

/// A single-string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    HeroTitle,
    HeroSubtitle,
    CtaPrimary,
    CtaSecondary,
    Microcopy,
    PricingPhrase,
}

impl TextField {
    pub const ALL: [TextField; 6] = [
        TextField::HeroTitle,
        TextField::HeroSubtitle,
        TextField::CtaPrimary,
        TextField::CtaSecondary,
        TextField::Microcopy,
        TextField::PricingPhrase,
    ];

    /// Literal shown when no other source has a value.
    pub fn default_text(&self) -> &'static str {
        match self {
            TextField::HeroTitle => "Dhanda Booster",
            TextField::HeroSubtitle => {
                "Book a 30-minute consultation and get ROI-driven fixes within hours."
            }
            TextField::CtaPrimary => "Book — ₹499",
            TextField::CtaSecondary => "See How",
            TextField::Microcopy => "Enter your best email — we’ll send your booking link.",
            TextField::PricingPhrase => "One focused 30-minute session for ₹499.",
        }
    }

    pub fn region(&self) -> Region {
        match self {
            TextField::HeroTitle => Region::HeroTitle,
            TextField::HeroSubtitle => Region::HeroSubtitle,
            TextField::CtaPrimary => Region::CtaPrimary,
            TextField::CtaSecondary => Region::CtaSecondary,
            TextField::Microcopy => Region::Microcopy,
            TextField::PricingPhrase => Region::PricingPhrase,
        }
    }

    pub fn for_region(region: Region) -> Option<TextField> {
        TextField::ALL.into_iter().find(|f| f.region() == region)
    }
}

/// Index of the Hindi line in `microcopy`.
const MICROCOPY_HINDI_INDEX: usize = 2;

fn non_empty(s: Option<&String>) -> Option<&str> {
    s.map(String::as_str).filter(|s| !s.is_empty())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_bullets() -> Vec<String> {
    strings(&[
        "Clear next steps in 30 minutes",
        "Practical fixes, not theory",
        "Built for small business owners",
    ])
}

fn default_features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Growth audit".to_string(),
            description: "We find what is slowing your business down.".to_string(),
        },
        Feature {
            title: "Action plan".to_string(),
            description: "A short list of fixes ranked by return.".to_string(),
        },
    ]
}

fn default_social_proof() -> Vec<String> {
    strings(&["Trusted by small business founders across India"])
}

fn default_faqs() -> Vec<Faq> {
    vec![Faq {
        question: "How long is the consultation?".to_string(),
        answer: "30 minutes over video, booked at a time that suits you.".to_string(),
    }]
}

fn default_process() -> Vec<String> {
    strings(&["Book a slot", "Share your numbers", "Get your fix list"])
}

/// Resolves displayed values for one page session's copy and tone.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    content: &'a EffectiveContent,
    tone: Tone,
}

impl<'a> Resolver<'a> {
    pub fn new(content: &'a EffectiveContent, tone: Tone) -> Self {
        Self { content, tone }
    }

    /// Resolve a text field for `language`. Always yields a value.
    pub fn resolve_string(&self, field: TextField, language: Language) -> String {
        self.language_specific(field, language)
            .or_else(|| self.from_content(field, language))
            .unwrap_or_else(|| field.default_text())
            .to_string()
    }

    fn language_specific(&self, field: TextField, language: Language) -> Option<&'a str> {
        if language.is_canonical() {
            return None;
        }
        let content = self.content;
        match field {
            TextField::HeroTitle => Some(hindi_headlines(self.tone).hero),
            TextField::HeroSubtitle => Some(hindi_headlines(self.tone).subhead),
            TextField::Microcopy => content
                .microcopy
                .as_ref()
                .and_then(|lines| non_empty(lines.get(MICROCOPY_HINDI_INDEX))),
            _ => None,
        }
    }

    fn from_content(&self, field: TextField, language: Language) -> Option<&'a str> {
        let content = self.content;
        match field {
            // Non-canonical headlines come only from the fixed table
            TextField::HeroTitle | TextField::HeroSubtitle if !language.is_canonical() => None,
            TextField::HeroTitle => non_empty(content.hero.as_ref()),
            TextField::HeroSubtitle => non_empty(content.subhead.as_ref()),
            TextField::CtaPrimary => non_empty(content.cta_primary.as_ref()),
            TextField::CtaSecondary => non_empty(content.cta_secondary.as_ref()),
            TextField::Microcopy => content
                .microcopy
                .as_ref()
                .and_then(|lines| non_empty(lines.first())),
            TextField::PricingPhrase => content
                .pricing_phrases
                .as_ref()
                .and_then(|phrases| non_empty(phrases.first())),
        }
    }

    /// Resolve the full value for a content region.
    ///
    /// Returns `None` for regions that are not filled from copy (the embed
    /// target and the language toggle).
    pub fn resolve_region(&self, region: Region, language: Language) -> Option<RegionValue> {
        if let Some(field) = TextField::for_region(region) {
            return Some(RegionValue::Text(self.resolve_string(field, language)));
        }

        let content = self.content;
        let value = match region {
            Region::Bullets => {
                RegionValue::Bullets(content.bullets.clone().unwrap_or_else(default_bullets))
            }
            Region::Features => {
                RegionValue::Features(content.features.clone().unwrap_or_else(default_features))
            }
            Region::SocialProof => RegionValue::SocialProof(
                content
                    .social_proof
                    .clone()
                    .unwrap_or_else(default_social_proof),
            ),
            Region::FaqList => {
                RegionValue::Faqs(content.faqs.clone().unwrap_or_else(default_faqs))
            }
            Region::Process => {
                RegionValue::Steps(content.process.clone().unwrap_or_else(default_process))
            }
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{merge, ContentDocument};

    // ==================== Helper Functions ====================

    fn content(doc: ContentDocument) -> EffectiveContent {
        merge(Some(doc), None)
    }

    fn full_copy() -> EffectiveContent {
        content(ContentDocument {
            hero: Some("Fix growth blockers fast".to_string()),
            subhead: Some("Book a consult".to_string()),
            cta_primary: Some("Book now".to_string()),
            cta_secondary: Some("How it works".to_string()),
            microcopy: Some(vec![
                "Enter email".to_string(),
                "unused".to_string(),
                "ईमेल डालें".to_string(),
            ]),
            pricing_phrases: Some(vec!["Only ₹499".to_string(), "Second".to_string()]),
            ..Default::default()
        })
    }

    // ==================== English Chain Tests ====================

    #[test]
    fn test_english_uses_content() {
        let copy = full_copy();
        let resolver = Resolver::new(&copy, Tone::Direct);
        assert_eq!(
            resolver.resolve_string(TextField::HeroTitle, Language::ENGLISH),
            "Fix growth blockers fast"
        );
        assert_eq!(
            resolver.resolve_string(TextField::HeroSubtitle, Language::ENGLISH),
            "Book a consult"
        );
        assert_eq!(
            resolver.resolve_string(TextField::PricingPhrase, Language::ENGLISH),
            "Only ₹499"
        );
        assert_eq!(
            resolver.resolve_string(TextField::Microcopy, Language::ENGLISH),
            "Enter email"
        );
    }

    #[test]
    fn test_english_defaults_when_content_empty() {
        let copy = EffectiveContent::default();
        let resolver = Resolver::new(&copy, Tone::Direct);
        for field in TextField::ALL {
            assert_eq!(
                resolver.resolve_string(field, Language::ENGLISH),
                field.default_text()
            );
        }
    }

    #[test]
    fn test_empty_string_falls_back_to_default() {
        let copy = content(ContentDocument {
            hero: Some(String::new()),
            pricing_phrases: Some(vec![]),
            ..Default::default()
        });
        let resolver = Resolver::new(&copy, Tone::Direct);
        assert_eq!(
            resolver.resolve_string(TextField::HeroTitle, Language::ENGLISH),
            "Dhanda Booster"
        );
        assert_eq!(
            resolver.resolve_string(TextField::PricingPhrase, Language::ENGLISH),
            TextField::PricingPhrase.default_text()
        );
    }

    // ==================== Hindi Chain Tests ====================

    #[test]
    fn test_hindi_headlines_ignore_content() {
        let with_copy = full_copy();
        let without_copy = EffectiveContent::default();

        for tone in Tone::ALL {
            let a = Resolver::new(&with_copy, tone);
            let b = Resolver::new(&without_copy, tone);
            for field in [TextField::HeroTitle, TextField::HeroSubtitle] {
                assert_eq!(
                    a.resolve_string(field, Language::HINDI),
                    b.resolve_string(field, Language::HINDI),
                    "{:?} for {} must not depend on copy",
                    field,
                    tone
                );
            }
        }
    }

    #[test]
    fn test_hindi_headlines_follow_tone() {
        let copy = EffectiveContent::default();
        for tone in Tone::ALL {
            let resolver = Resolver::new(&copy, tone);
            assert_eq!(
                resolver.resolve_string(TextField::HeroTitle, Language::HINDI),
                hindi_headlines(tone).hero
            );
            assert_eq!(
                resolver.resolve_string(TextField::HeroSubtitle, Language::HINDI),
                hindi_headlines(tone).subhead
            );
        }
    }

    #[test]
    fn test_hindi_microcopy_prefers_third_line() {
        let copy = full_copy();
        let resolver = Resolver::new(&copy, Tone::Helpful);
        assert_eq!(
            resolver.resolve_string(TextField::Microcopy, Language::HINDI),
            "ईमेल डालें"
        );
    }

    #[test]
    fn test_hindi_microcopy_falls_back_to_first_line() {
        let copy = content(ContentDocument {
            microcopy: Some(vec!["Only English".to_string()]),
            ..Default::default()
        });
        let resolver = Resolver::new(&copy, Tone::Direct);
        assert_eq!(
            resolver.resolve_string(TextField::Microcopy, Language::HINDI),
            "Only English"
        );
    }

    #[test]
    fn test_cta_is_language_invariant() {
        let copy = full_copy();
        let resolver = Resolver::new(&copy, Tone::Playful);
        assert_eq!(
            resolver.resolve_string(TextField::CtaPrimary, Language::HINDI),
            resolver.resolve_string(TextField::CtaPrimary, Language::ENGLISH)
        );
    }

    // ==================== Region Tests ====================

    #[test]
    fn test_resolve_region_lists_from_content() {
        let copy = content(ContentDocument {
            bullets: Some(vec!["A".to_string(), "B".to_string()]),
            ..Default::default()
        });
        let resolver = Resolver::new(&copy, Tone::Direct);
        assert_eq!(
            resolver.resolve_region(Region::Bullets, Language::ENGLISH),
            Some(RegionValue::Bullets(vec!["A".to_string(), "B".to_string()]))
        );
    }

    #[test]
    fn test_resolve_region_list_defaults_not_empty() {
        let copy = EffectiveContent::default();
        let resolver = Resolver::new(&copy, Tone::Direct);
        for region in Region::CONTENT {
            let value = resolver
                .resolve_region(region, Language::ENGLISH)
                .expect("content region resolves");
            assert!(!value.is_empty(), "{} resolved empty", region);
        }
    }

    #[test]
    fn test_resolve_region_skips_non_content() {
        let copy = EffectiveContent::default();
        let resolver = Resolver::new(&copy, Tone::Direct);
        assert!(resolver
            .resolve_region(Region::EmbedTarget, Language::ENGLISH)
            .is_none());
        assert!(resolver
            .resolve_region(Region::LangToggle, Language::ENGLISH)
            .is_none());
    }

    #[test]
    fn test_field_region_mapping() {
        for field in TextField::ALL {
            assert_eq!(TextField::for_region(field.region()), Some(field));
        }
        assert_eq!(TextField::for_region(Region::Bullets), None);
    }
}
