//! In-memory page model.
//!
//! Stands in for the hosting document: a body with data attributes, an
//! optional `.container`, head scripts, the location fragment and any
//! windows opened by outbound actions. Serializes to HTML.

mod anchors;
mod html;
mod node;
mod region;

pub use anchors::{ensure, ensure_all, ensure_region};
pub use html::{escape_attr, escape_text};
pub use node::{Element, Node};
pub use region::{placeholder_class, Region};

use tracing::debug;

/// Class marking the page's primary container.
pub const CONTAINER_CLASS: &str = "container";

/// A window opened by the page (target plus URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    pub url: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub head_scripts: Vec<Element>,
    pub body: Element,
    fragment: Option<String>,
    opened_windows: Vec<OpenedWindow>,
}

impl Page {
    /// An empty page whose body holds a single primary container.
    pub fn new() -> Self {
        let container = Element::new("main").with_class(CONTAINER_CLASS);
        Self::with_body(Element::new("body").with_child(container))
    }

    /// An empty page without a primary container.
    pub fn without_container() -> Self {
        Self::with_body(Element::new("body"))
    }

    pub fn with_body(body: Element) -> Self {
        Self {
            title: String::new(),
            head_scripts: Vec::new(),
            body,
            fragment: None,
            opened_windows: Vec::new(),
        }
    }

    /// A page skeleton with the language toggle in place, as a hosting
    /// template would ship it. Content regions are left to the anchors.
    pub fn skeleton(with_container: bool) -> Self {
        let mut page = if with_container {
            Page::new()
        } else {
            Page::without_container()
        };
        page.container_mut().append(
            Element::new(Region::LangToggle.kind())
                .with_id(Region::LangToggle.id())
                .with_text(""),
        );
        page
    }

    /// Set a `data-*` attribute on the body.
    pub fn set_data(&mut self, name: &str, value: impl Into<String>) {
        self.body.attrs.insert(format!("data-{}", name), value.into());
    }

    /// Read a `data-*` attribute from the body.
    pub fn data(&self, name: &str) -> Option<&str> {
        self.body.attr(&format!("data-{}", name))
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    pub fn region(&self, region: Region) -> Option<&Element> {
        self.element(region.id())
    }

    pub fn region_mut(&mut self, region: Region) -> Option<&mut Element> {
        self.element_mut(region.id())
    }

    pub fn has_container(&self) -> bool {
        self.body.find_by_class(CONTAINER_CLASS).is_some()
    }

    /// The primary container, or the body when there is none.
    pub fn container_mut(&mut self) -> &mut Element {
        if self.has_container() {
            return self
                .body
                .find_by_class_mut(CONTAINER_CLASS)
                .expect("container was just found");
        }
        &mut self.body
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Navigate to `#fragment`.
    pub fn set_fragment(&mut self, fragment: &str) {
        let fragment = fragment.trim_start_matches('#');
        debug!("Navigating to #{}", fragment);
        self.fragment = Some(fragment.to_string());
    }

    pub fn opened_windows(&self) -> &[OpenedWindow] {
        &self.opened_windows
    }

    pub fn open_window(&mut self, url: &str, target: &str) {
        debug!("Opening {} in {}", url, target);
        self.opened_windows.push(OpenedWindow {
            url: url.to_string(),
            target: target.to_string(),
        });
    }

    /// Append a script element to the head.
    pub fn inject_script(&mut self, script: Element) {
        self.head_scripts.push(script);
    }

    /// Number of head scripts with this `src`.
    pub fn script_count(&self, src: &str) -> usize {
        self.head_scripts
            .iter()
            .filter(|s| s.attr("src") == Some(src))
            .count()
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
        if !self.title.is_empty() {
            out.push_str("<title>");
            out.push_str(&escape_text(&self.title));
            out.push_str("</title>");
        }
        for script in &self.head_scripts {
            html::write_element(script, &mut out);
        }
        out.push_str("</head>");
        html::write_element(&self.body, &mut out);
        out.push_str("</html>\n");
        out
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
