//! Landing page copy pipeline.
//!
//! Loads a shared and a tone-specific copy document, merges them, resolves
//! every displayed string through its fallback chain and writes the result
//! into the page's named regions. A page session then handles the language
//! toggle, the call-to-action buttons (which open the scheduling widget) and
//! the payment placeholder.

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod page;
pub mod pipeline;
pub mod populate;
pub mod resolve;
pub mod session;
pub mod tone;
pub mod widget;

pub use pipeline::LandingPage;
