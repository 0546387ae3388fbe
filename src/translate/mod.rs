pub mod interface;

pub use interface::{Language, TranslationRequest, TranslationResult, TranslationService};
