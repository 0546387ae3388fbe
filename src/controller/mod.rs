pub mod catalog;
pub mod session;
pub mod state;
pub mod translate_controller;

pub use catalog::{LanguageCatalog, CATALOG_UNAVAILABLE};
pub use session::{Session, SubmitError};
pub use state::UiState;
pub use translate_controller::{Submission, TranslateController};
