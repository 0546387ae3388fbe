//! View model rendered by the page.
//!
//! Fields holding empty strings are sent as `null` so the page only
//! draws sections that have content.

use serde::Serialize;

use crate::controller::TranslateController;

pub const SUBMIT_LABEL: &str = "Translate & Speak";
pub const SUBMIT_LABEL_LOADING: &str = "Translating…";
pub const AUTOPLAY_HINT: &str =
    "If audio doesn't play, check your browser's autoplay policy or click play.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub text: String,
    pub target_lang: String,
    pub languages: Vec<LanguageOption>,
    pub loading: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub banner: Option<String>,
    pub detected_source_lang: Option<String>,
    pub translated_text: Option<String>,
    pub audio_url: Option<String>,
    pub autoplay_hint: Option<&'static str>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ViewModel {
    pub fn from_controller(controller: &TranslateController) -> Self {
        let loading = controller.state().is_loading();
        let result = controller.state().result();
        let audio_url = result
            .and_then(|r| r.playable_audio_url())
            .map(str::to_string);

        Self {
            text: controller.text().to_string(),
            target_lang: controller.target_lang().to_string(),
            languages: controller
                .catalog()
                .languages()
                .iter()
                .map(|l| LanguageOption {
                    code: l.code.clone(),
                    label: l.option_label(),
                })
                .collect(),
            loading,
            submit_enabled: controller.can_submit(),
            submit_label: if loading { SUBMIT_LABEL_LOADING } else { SUBMIT_LABEL },
            banner: controller.banner().and_then(non_empty),
            detected_source_lang: result.and_then(|r| non_empty(&r.detected_source_lang)),
            translated_text: result.and_then(|r| non_empty(&r.translated_text)),
            autoplay_hint: audio_url.as_ref().map(|_| AUTOPLAY_HINT),
            audio_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::{Language, TranslationResult};

    #[test]
    fn idle_view_before_catalog() {
        let controller = TranslateController::new("hi");
        let view = ViewModel::from_controller(&controller);
        assert!(view.languages.is_empty());
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_LABEL);
        assert_eq!(view.banner, None);
        assert_eq!(view.target_lang, "hi");
    }

    #[test]
    fn loading_view_hides_previous_result() {
        let mut controller = TranslateController::new("hi");
        controller.apply_catalog(Ok(vec![Language {
            code: "hi".to_string(),
            name: "Hindi".to_string(),
            tts_supported: true,
        }]));
        controller.set_text("hello");
        let first = controller.begin_submission().unwrap();
        controller.complete_submission(
            first.seq,
            Ok(TranslationResult {
                translated_text: "नमस्ते".to_string(),
                detected_source_lang: "en".to_string(),
                audio_url: Some("https://example.com/a.mp3".to_string()),
                ..Default::default()
            }),
        );
        let view = ViewModel::from_controller(&controller);
        assert_eq!(view.audio_url.as_deref(), Some("https://example.com/a.mp3"));
        assert_eq!(view.autoplay_hint, Some(AUTOPLAY_HINT));
        assert_eq!(view.languages[0].label, "Hindi (hi) • TTS");

        controller.begin_submission().unwrap();
        let view = ViewModel::from_controller(&controller);
        assert!(view.loading);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_LABEL_LOADING);
        assert_eq!(view.translated_text, None);
        assert_eq!(view.detected_source_lang, None);
        assert_eq!(view.audio_url, None);
        assert_eq!(view.banner, None);
    }
}
