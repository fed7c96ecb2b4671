use anyhow::{Context, Result};
use landing_copy::config::Config;
use landing_copy::content::ContentLoader;
use landing_copy::session::Event;
use landing_copy::LandingPage;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("landing_copy=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    info!("Rendering landing page");
    let loader = ContentLoader::new(config.copy_source.clone());
    let mut landing = LandingPage::render(&loader, config.page()).await;

    if landing.session.language() != config.render_language {
        landing.dispatch(Event::ToggleLanguage);
    }

    let html = landing.to_html();
    match &config.output_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
