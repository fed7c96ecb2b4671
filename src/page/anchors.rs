//! Anchor provisioning: make sure every region exists before it is written.

use tracing::debug;

use super::{placeholder_class, Element, Page, Region};

/// Return the element with `id`, creating it first if the page lacks it.
///
/// A synthesized element gets the requested tag, the id, and a styling class
/// for the list regions. It is appended to the primary container, or to the
/// body when the page has none. Calling this again for the same id is a no-op.
pub fn ensure<'a>(page: &'a mut Page, id: &str, kind: &str) -> &'a mut Element {
    if page.element(id).is_none() {
        let mut el = Element::new(kind).with_id(id);
        if let Some(class) = placeholder_class(id) {
            el.add_class(class);
        }
        debug!("Synthesized missing anchor #{} <{}>", id, kind);
        page.container_mut().append(el);
    }
    page.element_mut(id).expect("anchor exists after ensure")
}

pub fn ensure_region(page: &mut Page, region: Region) -> &mut Element {
    ensure(page, region.id(), region.kind())
}

/// Provision every anchored region. Returns how many had to be synthesized.
pub fn ensure_all(page: &mut Page) -> usize {
    let mut created = 0;
    for region in Region::ANCHORED {
        if page.region(region).is_none() {
            created += 1;
        }
        ensure_region(page, region);
    }
    if created > 0 {
        debug!("Synthesized {} of {} anchors", created, Region::ANCHORED.len());
    }
    created
}
