//! Static site configuration: page metadata and the external hosts artwork
//! may be served from. These carry no runtime behavior beyond being written
//! into the live document once at mount (index.html holds the same values
//! for first paint, before the app boots).

pub const SITE_NAME: &str = "RHYTM";
pub const SITE_TITLE: &str = "RHYTM - AI-Powered Music Curation for DJs";
pub const SITE_DESCRIPTION: &str =
    "AI-powered music curation for DJs. Discover, curate, and sync tracks effortlessly.";
pub const SITE_URL: &str = "https://rhytm.app";
pub const THEME_COLOR: &str = "#10B981";

/// Hosts, other than our own, that section artwork is allowed to load from.
pub const ALLOWED_IMAGE_HOSTS: &[&str] = &["www.soundhelix.com"];

/// Write the canonical title and description into the document. Keeps the
/// rendered metadata in sync with the constants above if index.html drifts.
pub fn apply_page_metadata() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(SITE_TITLE);
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        let _ = meta.set_attribute("content", SITE_DESCRIPTION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_constants_are_consistent() {
        assert!(SITE_TITLE.starts_with(SITE_NAME));
        assert!(SITE_URL.starts_with("https://"));
        assert!(!SITE_DESCRIPTION.is_empty());
    }
}
