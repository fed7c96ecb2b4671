//! Third-party scheduling widget.
//!
//! The widget needs two things on the page: a descriptor element inside the
//! embed target, which the vendor script scans for, and the vendor script
//! itself. The descriptor is recreated on every activation; the script is
//! injected at most once per page session.

use tracing::{debug, info};

use crate::page::{Element, Region};
use crate::populate::RegionValue;
use crate::session::{Effect, Outcome, RegionUpdate};

/// Booking page the embed shows.
pub const SCHEDULING_URL: &str = "https://calendly.com/dhandabooster/30min";

/// Vendor script that turns descriptors into live embeds.
pub const WIDGET_SCRIPT_SRC: &str = "https://assets.calendly.com/assets/external/widget.js";

pub const EMBED_CLASS: &str = "calendly-inline-widget";

const EMBED_STYLE: &str = "min-width:320px;height:700px;";

/// The element the vendor script turns into an inline booking widget.
pub fn embed_descriptor() -> Element {
    Element::new("div")
        .with_class(EMBED_CLASS)
        .with_attr("data-url", SCHEDULING_URL)
        .with_attr("style", EMBED_STYLE)
}

/// The async script tag for the vendor script.
pub fn script_element() -> Element {
    Element::new("script")
        .with_attr("src", WIDGET_SCRIPT_SRC)
        .with_attr("async", "")
}

/// Tracks whether the vendor script has been injected.
///
/// Starts false and flips to true exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetLoadFlag {
    loaded: bool,
}

impl WidgetLoadFlag {
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Inject the vendor script unless that already happened.
    ///
    /// Returns the injection effect on the first call and `None` afterwards.
    pub fn ensure_script_loaded(&mut self) -> Option<Effect> {
        if self.loaded {
            debug!("Widget script already loaded");
            return None;
        }
        self.loaded = true;
        info!("Loading widget script {}", WIDGET_SCRIPT_SRC);
        Some(Effect::InjectScript(script_element()))
    }
}

/// Open the booking widget in the embed target.
///
/// Replaces the target's contents with a fresh descriptor, scrolls to it,
/// and makes sure the vendor script is present.
pub fn activate(flag: &mut WidgetLoadFlag) -> Outcome {
    let mut outcome = Outcome::default();
    outcome.updates.push(RegionUpdate {
        region: Region::EmbedTarget,
        value: RegionValue::Embed(embed_descriptor()),
    });
    outcome
        .effects
        .push(Effect::SetFragment(Region::EmbedTarget.id().to_string()));
    outcome.effects.extend(flag.ensure_script_loaded());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Descriptor Tests ====================

    #[test]
    fn test_embed_descriptor_attributes() {
        let el = embed_descriptor();
        assert_eq!(el.tag, "div");
        assert!(el.has_class(EMBED_CLASS));
        assert_eq!(el.attr("data-url"), Some(SCHEDULING_URL));
        assert!(el.attr("style").unwrap().contains("min-width:320px"));
    }

    #[test]
    fn test_script_element_is_async() {
        let el = script_element();
        assert_eq!(el.tag, "script");
        assert_eq!(el.attr("src"), Some(WIDGET_SCRIPT_SRC));
        assert_eq!(el.attr("async"), Some(""));
    }

    // ==================== Load Flag Tests ====================

    #[test]
    fn test_flag_starts_unloaded() {
        assert!(!WidgetLoadFlag::default().is_loaded());
    }

    #[test]
    fn test_ensure_script_loaded_once() {
        let mut flag = WidgetLoadFlag::default();
        let injections = (0..5)
            .filter_map(|_| flag.ensure_script_loaded())
            .count();
        assert_eq!(injections, 1);
        assert!(flag.is_loaded());
    }

    // ==================== Activation Tests ====================

    #[test]
    fn test_activate_first_time_injects_script() {
        let mut flag = WidgetLoadFlag::default();
        let outcome = activate(&mut flag);

        assert_eq!(outcome.updates.len(), 1);
        assert_eq!(outcome.updates[0].region, Region::EmbedTarget);
        assert!(outcome
            .effects
            .contains(&Effect::SetFragment("calendlyInline".to_string())));
        assert!(outcome
            .effects
            .iter()
            .any(|e| matches!(e, Effect::InjectScript(_))));
    }

    #[test]
    fn test_activate_again_recreates_descriptor_only() {
        let mut flag = WidgetLoadFlag::default();
        activate(&mut flag);
        let outcome = activate(&mut flag);

        assert_eq!(outcome.updates.len(), 1);
        assert_eq!(
            outcome.effects,
            vec![Effect::SetFragment("calendlyInline".to_string())]
        );
    }
}
