use tracing::{debug, warn};

use crate::translate::Language;

pub const CATALOG_UNAVAILABLE: &str = "Could not load languages from backend.";

/// Ordered language list plus the selected target code
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
    selected: String,
    notice: Option<String>,
}

impl LanguageCatalog {
    pub fn new(default_target: impl Into<String>) -> Self {
        Self {
            languages: Vec::new(),
            selected: default_target.into(),
            notice: None,
        }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Advisory left behind by a failed catalog load
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    /// Replace the list, keeping the selection when it is still offered
    pub fn replace(&mut self, languages: Vec<Language>) {
        self.languages = languages;
        if !self.contains(&self.selected) {
            if let Some(first) = self.languages.first() {
                debug!(
                    "Target language {} not in catalog, falling back to {}",
                    self.selected, first.code
                );
                self.selected = first.code.clone();
            }
        }
    }

    /// Record a failed load; the selector stays empty
    pub fn fail(&mut self) {
        warn!("Language catalog unavailable");
        self.languages.clear();
        self.notice = Some(CATALOG_UNAVAILABLE.to_string());
    }

    /// Select a target offered by the catalog. Unknown codes are ignored.
    pub fn select(&mut self, code: &str) -> bool {
        if !self.contains(code) {
            debug!("Ignoring selection of unknown language {}", code);
            return false;
        }
        self.selected = code.to_string();
        true
    }
}
