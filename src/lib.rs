//! Bilingual (Indonesian/English) content core for the Elaeis Berkelana
//! site: localization of destination records, translation progress,
//! draft editing, and the client for the remote content API.

pub mod api;
pub mod bilingual;
pub mod config;
pub mod destination;
pub mod draft;
pub mod error;
pub mod language;
pub mod loader;
pub mod localized;
pub mod progress;

pub use bilingual::{BilingualArray, BilingualText};
pub use destination::BilingualDestination;
pub use draft::DestinationDraft;
pub use language::{Language, LanguageStore};
pub use localized::LocalizedDestination;
pub use progress::TranslationProgress;
