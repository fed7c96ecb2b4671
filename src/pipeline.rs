//! The render pipeline: anchors, load, merge, resolve, populate.

use tracing::info;

use crate::content::{merge, ContentLoader};
use crate::page::{ensure_all, Page};
use crate::session::{apply, Event, Session};
use crate::tone::{variant_from_attr, Tone};

/// A rendered page together with the session that drives it.
#[derive(Debug, Clone)]
pub struct LandingPage {
    pub page: Page,
    pub session: Session,
}

impl LandingPage {
    /// Render `page` with copy from `loader`.
    ///
    /// Never fails: missing regions are synthesized, failed documents are
    /// treated as empty, and every field falls back to a literal default.
    pub async fn render(loader: &ContentLoader, mut page: Page) -> LandingPage {
        let tone = Tone::from_attr(page.data("tone"));
        let variant = variant_from_attr(page.data("variant"));

        ensure_all(&mut page);

        let loaded = loader.load_pair(tone).await;
        let content = merge(loaded.shared, loaded.variant);

        let mut session = Session::new(tone, variant, content);
        let written = apply(&mut page, session.initial_render());

        info!(
            "Landing page rendered - tone: {}, variant: {} ({} regions)",
            session.tone(),
            session.variant(),
            written
        );

        LandingPage { page, session }
    }

    /// Handle a user event and apply its outcome to the page.
    pub fn dispatch(&mut self, event: Event) -> usize {
        let outcome = self.session.handle(event);
        apply(&mut self.page, outcome)
    }

    pub fn to_html(&self) -> String {
        self.page.to_html()
    }
}
