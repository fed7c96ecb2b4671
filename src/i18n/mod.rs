//! Page languages and the fixed per-language strings.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages
//! - `language`: Validated `Language` type; the page session's current language
//! - `strings`: Pre-authored Hindi headline pairs, one per tone
//!
//! # Example
//!
//! ```rust,ignore
//! use landing_copy::i18n::{hindi_headlines, Language};
//! use landing_copy::tone::Tone;
//!
//! let lang = Language::canonical().toggled();
//! assert_eq!(lang, Language::HINDI);
//! let headlines = hindi_headlines(Tone::Playful);
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{hindi_headlines, HeadlineStrings};
