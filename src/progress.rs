//! Translation completion percentages for draft records.
//!
//! The evaluator is stateless: it recomputes from the current field values
//! on every call and holds nothing of its own.

use serde::{Deserialize, Serialize};

use crate::draft::{DraftField, LanguageFields};

/// Fields every language variant must fill before a save is clean.
pub const REQUIRED_FIELDS: [DraftField; 3] = [
    DraftField::Title,
    DraftField::Village,
    DraftField::Description,
];

/// Per-language completion percentages, the same shape the content API's
/// translation-status endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationProgress {
    pub id: u8,
    pub en: u8,
    pub overall: u8,
}

impl TranslationProgress {
    pub fn is_complete(&self) -> bool {
        self.id == 100 && self.en == 100
    }
}

/// Completion percentage of one language bucket, rounded to the nearest
/// integer.
pub fn language_percentage(fields: &LanguageFields) -> u8 {
    percentage(filled_count(fields), REQUIRED_FIELDS.len())
}

pub fn evaluate(id: &LanguageFields, en: &LanguageFields) -> TranslationProgress {
    let id_filled = filled_count(id);
    let en_filled = filled_count(en);
    TranslationProgress {
        id: percentage(id_filled, REQUIRED_FIELDS.len()),
        en: percentage(en_filled, REQUIRED_FIELDS.len()),
        overall: percentage(id_filled + en_filled, REQUIRED_FIELDS.len() * 2),
    }
}

fn filled_count(fields: &LanguageFields) -> usize {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !fields.get(**field).trim().is_empty())
        .count()
}

fn percentage(filled: usize, total: usize) -> u8 {
    ((filled as f64 / total as f64) * 100.0).round() as u8
}
