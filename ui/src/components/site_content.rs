use dioxus::prelude::*;

use landing_common::content::SiteContent;

const SITE_JSON: &str = include_str!("../../content/site.json");

/// Parse the bundled content document. Errors are logged and returned as
/// display text for the error banner.
pub fn load_site_content() -> Result<SiteContent, String> {
    match SiteContent::from_json(SITE_JSON) {
        Ok(content) => {
            tracing::info!(
                faq = content.faq.len(),
                menu = content.menu.len(),
                "Loaded site content"
            );
            Ok(content)
        }
        Err(err) => {
            tracing::error!("Invalid site content: {err}");
            Err(err.to_string())
        }
    }
}

/// Read-only site content provided at the top of the app.
pub fn use_site_content() -> Signal<SiteContent> {
    use_context::<Signal<SiteContent>>()
}
