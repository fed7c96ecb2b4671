use std::ops::Deref;

use tracing::debug;

use super::ContentDocument;

/// The single merged view of the page copy used for every render.
///
/// Built once per page load from the shared and tone documents and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveContent(ContentDocument);

impl Deref for EffectiveContent {
    type Target = ContentDocument;

    fn deref(&self) -> &ContentDocument {
        &self.0
    }
}

impl From<ContentDocument> for EffectiveContent {
    fn from(doc: ContentDocument) -> Self {
        EffectiveContent(doc)
    }
}

/// Merge the shared document with the tone document.
///
/// An absent document counts as empty. The tone document wins on every
/// top-level field it defines; fields defined on one side only pass through.
pub fn merge(
    shared: Option<ContentDocument>,
    variant: Option<ContentDocument>,
) -> EffectiveContent {
    let shared = shared.unwrap_or_default();
    let variant = variant.unwrap_or_default();

    debug!(
        "Merging copy: shared defines {:?}, tone defines {:?}",
        shared.defined_fields(),
        variant.defined_fields()
    );

    EffectiveContent(shared.overlay(variant))
}
