//! Copy documents: loading, parsing and layering.
//!
//! A page draws its copy from two JSON documents, `copy/common.json` shared
//! by every tone and `copy/{tone}.json` with tone-specific overrides. Either
//! may be missing or broken; [`merge`] treats an absent document as empty.

mod document;
mod loader;
mod merge;

pub use document::{ContentDocument, Faq, Feature};
pub use loader::{ContentLoader, CopySource, LoadedCopy, SHARED_COPY_PATH};
pub use merge::{merge, EffectiveContent};
