//! Page session: the mutable state of one page view and its event handlers.
//!
//! Handlers are pure with respect to the page: [`Session::handle`] turns an
//! event into an [`Outcome`] (region writes plus side effects) and
//! [`apply`] is the thin adapter that carries it out on a [`Page`].

use tracing::{debug, info};

use crate::content::EffectiveContent;
use crate::i18n::Language;
use crate::page::{Element, Page, Region};
use crate::populate::{populate, RegionValue};
use crate::resolve::{Resolver, TextField};
use crate::tone::Tone;
use crate::widget::{self, WidgetLoadFlag};

/// Placeholder destination of the payment action.
pub const PAYMENT_URL: &str = "https://placeholder.pay/razorpay-link";

/// Body class enabling focus outlines for keyboard users.
pub const SHOW_FOCUS_CLASS: &str = "show-focus";

/// A user action on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The language toggle was pressed
    ToggleLanguage,
    CtaPrimaryClicked,
    CtaSecondaryClicked,
    /// A key was released; carries the key name (e.g. "Tab")
    KeyUp(String),
    /// The payment placeholder was triggered
    OpenPayment,
}

/// A side effect outside the named regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to a fragment of the current page
    SetFragment(String),
    /// Append a script element to the document head
    InjectScript(Element),
    /// Open a URL in another browsing context
    OpenWindow { url: String, target: String },
    /// Add a class to the document body
    AddBodyClass(String),
}

/// A resolved value destined for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUpdate {
    pub region: Region,
    pub value: RegionValue,
}

/// Everything an event handler wants done to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub updates: Vec<RegionUpdate>,
    pub effects: Vec<Effect>,
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.effects.is_empty()
    }

    /// Value written to `region` by this outcome, if any.
    pub fn update_for(&self, region: Region) -> Option<&RegionValue> {
        self.updates
            .iter()
            .rev()
            .find(|u| u.region == region)
            .map(|u| &u.value)
    }

    fn push_text(&mut self, region: Region, text: impl Into<String>) {
        self.updates.push(RegionUpdate {
            region,
            value: RegionValue::Text(text.into()),
        });
    }
}

/// State owned by a single page view.
#[derive(Debug, Clone)]
pub struct Session {
    tone: Tone,
    variant: String,
    content: EffectiveContent,
    language: Language,
    widget: WidgetLoadFlag,
}

impl Session {
    /// Start a session in the canonical language with the widget unloaded.
    pub fn new(tone: Tone, variant: impl Into<String>, content: EffectiveContent) -> Self {
        Self {
            tone,
            variant: variant.into(),
            content,
            language: Language::canonical(),
            widget: WidgetLoadFlag::default(),
        }
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn content(&self) -> &EffectiveContent {
        &self.content
    }

    pub fn widget_loaded(&self) -> bool {
        self.widget.is_loaded()
    }

    /// Fill every content region for the current language and preload the
    /// widget script.
    pub fn initial_render(&mut self) -> Outcome {
        let resolver = Resolver::new(&self.content, self.tone);
        let mut outcome = Outcome::default();

        for region in Region::CONTENT {
            if let Some(value) = resolver.resolve_region(region, self.language) {
                outcome.updates.push(RegionUpdate { region, value });
            }
        }
        outcome.push_text(Region::LangToggle, self.language.toggle_label());
        outcome.effects.extend(self.widget.ensure_script_loaded());
        outcome
    }

    /// Handle one user event.
    pub fn handle(&mut self, event: Event) -> Outcome {
        debug!("Handling {:?}", event);
        match event {
            Event::ToggleLanguage => self.toggle_language(),
            Event::CtaPrimaryClicked | Event::CtaSecondaryClicked => {
                widget::activate(&mut self.widget)
            }
            Event::KeyUp(key) if key == "Tab" => Outcome {
                updates: Vec::new(),
                effects: vec![Effect::AddBodyClass(SHOW_FOCUS_CLASS.to_string())],
            },
            Event::KeyUp(_) => Outcome::default(),
            Event::OpenPayment => Outcome {
                updates: Vec::new(),
                effects: vec![Effect::OpenWindow {
                    url: PAYMENT_URL.to_string(),
                    target: "_blank".to_string(),
                }],
            },
        }
    }

    /// Switch language and re-resolve the regions that depend on it.
    ///
    /// List regions are not re-rendered.
    fn toggle_language(&mut self) -> Outcome {
        self.language = self.language.toggled();
        info!(
            "Language switched to {} ({})",
            self.language,
            self.language.native_name()
        );

        let resolver = Resolver::new(&self.content, self.tone);
        let mut outcome = Outcome::default();
        for field in [
            TextField::HeroTitle,
            TextField::HeroSubtitle,
            TextField::CtaPrimary,
            TextField::Microcopy,
        ] {
            outcome.push_text(field.region(), resolver.resolve_string(field, self.language));
        }
        outcome.push_text(Region::LangToggle, self.language.toggle_label());
        outcome
    }
}

/// Carry out an outcome on the page. Returns how many regions were written.
///
/// Updates for regions the page lacks are skipped.
pub fn apply(page: &mut Page, outcome: Outcome) -> usize {
    let mut written = 0;
    for update in outcome.updates {
        if populate(page, update.region, Some(update.value)) {
            written += 1;
        }
    }

    for effect in outcome.effects {
        match effect {
            Effect::SetFragment(fragment) => page.set_fragment(&fragment),
            Effect::InjectScript(script) => page.inject_script(script),
            Effect::OpenWindow { url, target } => page.open_window(&url, &target),
            Effect::AddBodyClass(class) => page.body.add_class(&class),
        }
    }
    written
}
