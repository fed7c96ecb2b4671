use std::fmt;

/// The named regions of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HeroTitle,
    HeroSubtitle,
    CtaPrimary,
    CtaSecondary,
    Microcopy,
    Bullets,
    Features,
    PricingPhrase,
    SocialProof,
    FaqList,
    Process,
    EmbedTarget,
    /// The language toggle control. Optional: never synthesized.
    LangToggle,
}

impl Region {
    /// Regions that must exist before rendering, in insertion order.
    pub const ANCHORED: [Region; 12] = [
        Region::HeroTitle,
        Region::HeroSubtitle,
        Region::CtaPrimary,
        Region::CtaSecondary,
        Region::Microcopy,
        Region::Bullets,
        Region::Features,
        Region::PricingPhrase,
        Region::SocialProof,
        Region::FaqList,
        Region::Process,
        Region::EmbedTarget,
    ];

    /// Regions filled from copy on the initial render.
    pub const CONTENT: [Region; 11] = [
        Region::HeroTitle,
        Region::HeroSubtitle,
        Region::CtaPrimary,
        Region::CtaSecondary,
        Region::Microcopy,
        Region::Bullets,
        Region::Features,
        Region::PricingPhrase,
        Region::SocialProof,
        Region::FaqList,
        Region::Process,
    ];

    /// Element id of the region in the hosting page.
    pub fn id(&self) -> &'static str {
        match self {
            Region::HeroTitle => "hero-title",
            Region::HeroSubtitle => "hero-sub",
            Region::CtaPrimary => "cta-primary",
            Region::CtaSecondary => "cta-secondary",
            Region::Microcopy => "microcopy",
            Region::Bullets => "bullets",
            Region::Features => "features",
            Region::PricingPhrase => "pricing-phrase",
            Region::SocialProof => "social-proof",
            Region::FaqList => "faq-list",
            Region::Process => "process",
            Region::EmbedTarget => "calendlyInline",
            Region::LangToggle => "langBtn",
        }
    }

    /// Tag used when the region has to be synthesized.
    pub fn kind(&self) -> &'static str {
        match self {
            Region::HeroTitle => "h1",
            Region::HeroSubtitle => "p",
            Region::CtaPrimary | Region::CtaSecondary | Region::LangToggle => "button",
            _ => "div",
        }
    }

    /// Whether the region holds a list of item nodes rather than plain text.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Region::Bullets
                | Region::Features
                | Region::SocialProof
                | Region::FaqList
                | Region::Process
        )
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id())
    }
}

/// Styling class given to a synthesized anchor, if any.
pub fn placeholder_class(id: &str) -> Option<&'static str> {
    match id {
        "bullets" => Some("bullets"),
        "features" | "social-proof" => Some("features"),
        "faq-list" => Some("faq-list"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = Region::ANCHORED.iter().map(Region::id).collect();
        ids.push(Region::LangToggle.id());
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Region::HeroTitle.kind(), "h1");
        assert_eq!(Region::HeroSubtitle.kind(), "p");
        assert_eq!(Region::CtaSecondary.kind(), "button");
        assert_eq!(Region::EmbedTarget.kind(), "div");
    }

    #[test]
    fn test_content_regions_exclude_embed_target() {
        assert!(!Region::CONTENT.contains(&Region::EmbedTarget));
        assert!(Region::ANCHORED.contains(&Region::EmbedTarget));
        assert!(!Region::ANCHORED.contains(&Region::LangToggle));
    }

    #[test]
    fn test_placeholder_classes() {
        assert_eq!(placeholder_class("bullets"), Some("bullets"));
        assert_eq!(placeholder_class("social-proof"), Some("features"));
        assert_eq!(placeholder_class("faq-list"), Some("faq-list"));
        assert_eq!(placeholder_class("hero-title"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::EmbedTarget.to_string(), "#calendlyInline");
    }
}
