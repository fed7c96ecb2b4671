use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::path::PathBuf;

use crate::content::CopySource;
use crate::i18n::Language;
use crate::page::Page;

#[derive(Debug, Clone)]
pub struct Config {
    // Copy
    pub copy_source: CopySource,

    // Page attributes (as the hosting page would declare them)
    pub tone: Option<String>,
    pub variant: Option<String>,
    pub with_container: bool,

    // Output
    pub render_language: Language,
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // COPY_DIR wins over PAGE_URL
            copy_source: copy_source_from(
                std::env::var("COPY_DIR").ok(),
                std::env::var("PAGE_URL").ok(),
            )?,

            tone: non_empty_var("PAGE_TONE"),
            variant: non_empty_var("PAGE_VARIANT"),
            with_container: std::env::var("PAGE_CONTAINER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),

            render_language: match non_empty_var("RENDER_LANGUAGE") {
                Some(code) => Language::from_code(&code).context("Invalid RENDER_LANGUAGE")?,
                None => Language::canonical(),
            },
            output_path: non_empty_var("OUTPUT_PATH").map(PathBuf::from),
        })
    }

    /// The hosting page skeleton with this configuration's data attributes.
    pub fn page(&self) -> Page {
        let mut page = Page::skeleton(self.with_container);
        if let Some(tone) = &self.tone {
            page.set_data("tone", tone.clone());
        }
        if let Some(variant) = &self.variant {
            page.set_data("variant", variant.clone());
        }
        page
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn copy_source_from(copy_dir: Option<String>, page_url: Option<String>) -> Result<CopySource> {
    if let Some(dir) = copy_dir.filter(|d| !d.trim().is_empty()) {
        return Ok(CopySource::Dir(PathBuf::from(dir)));
    }
    match page_url.filter(|u| !u.trim().is_empty()) {
        Some(url) => {
            let page_url = Url::parse(url.trim()).context("PAGE_URL is not a valid URL")?;
            Ok(CopySource::Http { page_url })
        }
        None => bail!("Either COPY_DIR or PAGE_URL must be set"),
    }
}
