//! Editorial tone and page variant identity.
//!
//! Both are read once from the hosting page's data attributes. The tone picks
//! the override copy document and the fixed Hindi headlines; the variant is
//! only reported.

use std::fmt;
use tracing::warn;

/// Page variant used when the hosting page does not declare one.
pub const DEFAULT_VARIANT: &str = "clean-pro";

/// Editorial tone of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Direct,
    Helpful,
    Playful,
}

impl Tone {
    /// All tones, in declaration order.
    pub const ALL: [Tone; 3] = [Tone::Direct, Tone::Helpful, Tone::Playful];

    /// Parse a tone code, returning `None` for anything unknown.
    pub fn from_code(code: &str) -> Option<Tone> {
        match code.trim() {
            "direct" => Some(Tone::Direct),
            "helpful" => Some(Tone::Helpful),
            "playful" => Some(Tone::Playful),
            _ => None,
        }
    }

    /// Read a tone from a page attribute.
    ///
    /// A missing attribute means `direct`. An unknown value also falls back
    /// to `direct` and is logged, since there is no copy document for it.
    pub fn from_attr(attr: Option<&str>) -> Tone {
        match attr {
            None => Tone::default(),
            Some(code) => Tone::from_code(code).unwrap_or_else(|| {
                warn!("Unknown tone '{}', falling back to '{}'", code, Tone::default());
                Tone::default()
            }),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tone::Direct => "direct",
            Tone::Helpful => "helpful",
            Tone::Playful => "playful",
        }
    }

    /// Path of this tone's override document, relative to the page.
    pub fn copy_path(&self) -> String {
        format!("copy/{}.json", self.code())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read the variant identifier from a page attribute, defaulting to `clean-pro`.
pub fn variant_from_attr(attr: Option<&str>) -> String {
    match attr.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_VARIANT.to_string(),
    }
}
