use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Content languages supported by the site. Indonesian is the default and
/// the fallback for every bilingual read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code used on the wire and in `Accept-Language` headers.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "id" => Some(Language::Indonesian),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Native display name, for language switcher labels.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Indonesian => "Bahasa Indonesia",
            Language::English => "English",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::Indonesian => Language::English,
            Language::English => Language::Indonesian,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| format!("unknown language code: {}", s))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    language: Language,
    #[serde(rename = "updatedAt")]
    updated_at: DateTime<Utc>,
}

/// Persisted language preference with change notification. One writer
/// (`set`), any number of `subscribe` readers.
pub struct LanguageStore {
    path: PathBuf,
    tx: watch::Sender<Language>,
}

impl LanguageStore {
    /// Open the store, restoring the persisted preference when present.
    /// A missing or unreadable file falls back to `default_language`.
    pub fn open(path: impl Into<PathBuf>, default_language: Language) -> Self {
        let path = path.into();
        let initial = Self::restore(&path).unwrap_or(default_language);
        let (tx, _) = watch::channel(initial);
        Self { path, tx }
    }

    fn restore(path: &Path) -> Option<Language> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<StoredPreference>(&content) {
            Ok(stored) => Some(stored.language),
            Err(e) => {
                warn!("Ignoring malformed preference file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn current(&self) -> Language {
        *self.tx.borrow()
    }

    /// Switch the active language, persist it, and notify subscribers.
    pub fn set(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let stored = StoredPreference {
            language,
            updated_at: Utc::now(),
        };
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&stored)?)?;
        fs::rename(&tmp, &self.path)?;
        self.tx.send_replace(language);
        debug!("Language preference set to {}", language);
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        assert_eq!(Language::from_code("id"), Some(Language::Indonesian));
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Indonesian.code(), "id");
    }

    #[test]
    fn default_is_indonesian() {
        assert_eq!(Language::default(), Language::Indonesian);
    }

    #[test]
    fn store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("language.json");

        let store = LanguageStore::open(&path, Language::Indonesian);
        assert_eq!(store.current(), Language::Indonesian);
        store.set(Language::English).unwrap();

        let reopened = LanguageStore::open(&path, Language::Indonesian);
        assert_eq!(reopened.current(), Language::English);
    }

    #[test]
    fn malformed_preference_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("language.json");
        fs::write(&path, "not json at all").unwrap();

        let store = LanguageStore::open(&path, Language::English);
        assert_eq!(store.current(), Language::English);
    }

    #[test]
    fn subscribers_see_changes() {
        let dir = tempfile::tempdir().unwrap();
        let store = LanguageStore::open(dir.path().join("language.json"), Language::Indonesian);
        let mut rx = store.subscribe();

        store.set(Language::English).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::English);
    }
}
