//! Raw activity observations awaiting classification

use serde::{Deserialize, Serialize};

/// One observed (app, window title, URL) snapshot captured from the
/// operating system.
///
/// Samples are transient: the capture subsystem produces them on every
/// app/window/URL transition and hands them to the classifier. Only the
/// resulting classified activity is persisted, and by the storage layer,
/// not this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySample {
    pub app_name: String,
    pub window_title: String,
    pub url: Option<String>,
}

impl ActivitySample {
    /// Create a sample without a URL (native, non-browser apps).
    pub fn new(app_name: impl Into<String>, window_title: impl Into<String>) -> Self {
        Self { app_name: app_name.into(), window_title: window_title.into(), url: None }
    }

    /// Attach the page URL reported by a browser enricher.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The URL attribute as a match target; absent URLs read as empty.
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_or_empty_defaults_to_empty_string() {
        let sample = ActivitySample::new("Terminal", "~/src");
        assert_eq!(sample.url_or_empty(), "");

        let sample = sample.with_url("https://github.com/user/repo");
        assert_eq!(sample.url_or_empty(), "https://github.com/user/repo");
    }
}
