use crate::tone::Tone;

/// Pre-authored headline pair for one tone in a non-canonical language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineStrings {
    /// Hero title
    pub hero: &'static str,

    /// Subheadline under the hero title
    pub subhead: &'static str,
}

// ==================== Hindi Strings ====================

pub const HINDI_DIRECT: HeadlineStrings = HeadlineStrings {
    hero: "अपनी ग्रोथ की रुकावटें — जल्दी ठीक करें।",
    subhead: "30 मिनट की कंसल्टेशन बुक करें और कुछ ही घंटों में ROI-ड्रिवन फ़िक्स पाएं।",
};

pub const HINDI_HELPFUL: HeadlineStrings = HeadlineStrings {
    hero: "विकासशील संस्थापकों के लिए स्पष्टता और सिस्टम।",
    subhead: "दोस्ताना, व्यावहारिक बिजनेस कंसल्टेशन — छोटे व्यवसायों के लिए।",
};

pub const HINDI_PLAYFUL: HeadlineStrings = HeadlineStrings {
    hero: "धन्दा ड्रामा? चलो ठीक करें 🚀",
    subhead: "30 मिनट की चटख़ सलाह — जल्द क्लैरिटी।",
};

/// Fixed Hindi headline pair for a tone.
///
/// Hindi headlines never come from loaded copy.
pub fn hindi_headlines(tone: Tone) -> &'static HeadlineStrings {
    match tone {
        Tone::Direct => &HINDI_DIRECT,
        Tone::Helpful => &HINDI_HELPFUL,
        Tone::Playful => &HINDI_PLAYFUL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_non_empty_headlines() {
        for tone in Tone::ALL {
            let strings = hindi_headlines(tone);
            assert!(!strings.hero.is_empty(), "{} hero empty", tone);
            assert!(!strings.subhead.is_empty(), "{} subhead empty", tone);
        }
    }

    #[test]
    fn test_tones_have_distinct_headlines() {
        assert_ne!(hindi_headlines(Tone::Direct), hindi_headlines(Tone::Helpful));
        assert_ne!(hindi_headlines(Tone::Helpful), hindi_headlines(Tone::Playful));
        assert_ne!(hindi_headlines(Tone::Direct), hindi_headlines(Tone::Playful));
    }

    #[test]
    fn test_playful_hero() {
        assert!(hindi_headlines(Tone::Playful).hero.contains("🚀"));
    }
}
