//! Writing resolved values into page regions.
//!
//! Every write replaces the region's previous contents, so populating the
//! same region again never duplicates items. Copy text is always inserted as
//! text nodes, never parsed as markup.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::content::{Faq, Feature};
use crate::page::{Element, Node, Page, Region};

/// A fully resolved value for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionValue {
    Text(String),
    Bullets(Vec<String>),
    Features(Vec<Feature>),
    SocialProof(Vec<String>),
    Faqs(Vec<Faq>),
    /// Process steps; ordinals are computed when rendered
    Steps(Vec<String>),
    /// The scheduling widget descriptor
    Embed(Element),
}

impl RegionValue {
    /// Number of rendered items (1 for text and embeds).
    pub fn len(&self) -> usize {
        match self {
            RegionValue::Text(_) | RegionValue::Embed(_) => 1,
            RegionValue::Bullets(items)
            | RegionValue::SocialProof(items)
            | RegionValue::Steps(items) => items.len(),
            RegionValue::Features(items) => items.len(),
            RegionValue::Faqs(items) => items.len(),
        }
    }

    /// True when rendering would leave the region blank.
    pub fn is_empty(&self) -> bool {
        match self {
            RegionValue::Text(s) => s.is_empty(),
            _ => self.len() == 0,
        }
    }

    /// Render into child nodes, one per list item, in order.
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            RegionValue::Text(s) => vec![Node::Text(s)],
            RegionValue::Embed(el) => vec![Node::Element(el)],
            RegionValue::Bullets(items) => items
                .into_iter()
                .map(|b| {
                    Element::new("div")
                        .with_class("bullet")
                        .with_child(Element::new("strong").with_text(b))
                        .into()
                })
                .collect(),
            RegionValue::Features(items) => items
                .into_iter()
                .map(|f| {
                    Element::new("div")
                        .with_class("card")
                        .with_child(Element::new("h3").with_text(f.title))
                        .with_child(Element::new("p").with_text(f.description))
                        .into()
                })
                .collect(),
            RegionValue::SocialProof(items) => items
                .into_iter()
                .map(|s| {
                    Element::new("div")
                        .with_class("card")
                        .with_child(Element::new("strong").with_text(s))
                        .into()
                })
                .collect(),
            RegionValue::Faqs(items) => items
                .into_iter()
                .map(|f| {
                    Element::new("details")
                        .with_child(Element::new("summary").with_text(f.question))
                        .with_child(Element::new("p").with_text(f.answer))
                        .into()
                })
                .collect(),
            RegionValue::Steps(items) => items
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    Element::new("div")
                        .with_class("step")
                        .with_child(Element::new("strong").with_text(format!("Step {}", i + 1)))
                        .with_child(
                            Element::new("div")
                                .with_class("small")
                                .with_text(strip_step_prefix(step)),
                        )
                        .into()
                })
                .collect(),
        }
    }
}

static STEP_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn step_prefix_regex() -> &'static Regex {
    STEP_PREFIX_REGEX.get_or_init(|| Regex::new(r"^Step \d+:\s*").expect("valid step regex"))
}

/// Remove a leading "Step N: " so the computed ordinal is not shown twice.
pub fn strip_step_prefix(text: &str) -> &str {
    match step_prefix_regex().find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Write `value` into `region`, replacing whatever was there.
///
/// Nothing happens when the region is missing from the page or `value` is
/// `None`; the region keeps its current contents. Returns whether a write
/// took place.
pub fn populate(page: &mut Page, region: Region, value: Option<RegionValue>) -> bool {
    let Some(value) = value else {
        debug!("No value for {}, leaving it untouched", region);
        return false;
    };
    let Some(el) = page.region_mut(region) else {
        debug!("Region {} missing, skipping", region);
        return false;
    };

    let items = value.len();
    el.clear();
    el.children.extend(value.into_nodes());
    debug!("Populated {} ({} items)", region, items);
    true
}
