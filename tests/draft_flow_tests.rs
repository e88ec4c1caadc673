use std::sync::Mutex;

use async_trait::async_trait;

use elaeis_content::api::ContentApi;
use elaeis_content::bilingual::BilingualText;
use elaeis_content::destination::BilingualDestination;
use elaeis_content::draft::{DestinationDraft, DraftField, SaveGate, SubmitOutcome};
use elaeis_content::error::{ApiError, SubmitError};
use elaeis_content::language::Language;
use elaeis_content::progress::TranslationProgress;

#[derive(Debug)]
enum RecordedCall {
    Create(BilingualDestination),
    Update(String, BilingualDestination),
}

/// In-memory stand-in for the remote content API.
struct MockApi {
    calls: Mutex<Vec<RecordedCall>>,
    fail_with: Option<String>,
}

impl MockApi {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentApi for MockApi {
    async fn fetch_destination(
        &self,
        _slug: &str,
        _language: Language,
    ) -> Result<BilingualDestination, ApiError> {
        Err(ApiError::rejected("not wired in this mock"))
    }

    async fn fetch_raw(&self, _slug: &str) -> Result<BilingualDestination, ApiError> {
        Err(ApiError::rejected("not wired in this mock"))
    }

    async fn create_destination(
        &self,
        destination: &BilingualDestination,
    ) -> Result<BilingualDestination, ApiError> {
        if let Some(message) = &self.fail_with {
            return Err(ApiError::rejected(message.clone()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Create(destination.clone()));
        let mut saved = destination.clone();
        saved.id = Some("srv-1".to_string());
        Ok(saved)
    }

    async fn update_destination(
        &self,
        id: &str,
        destination: &BilingualDestination,
    ) -> Result<BilingualDestination, ApiError> {
        if let Some(message) = &self.fail_with {
            return Err(ApiError::rejected(message.clone()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Update(id.to_string(), destination.clone()));
        Ok(destination.clone())
    }

    async fn delete_destination(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn translation_status(&self, _slug: &str) -> Result<TranslationProgress, ApiError> {
        Ok(TranslationProgress::default())
    }
}

struct Approve;

impl SaveGate for Approve {
    fn allow_incomplete(&self, _progress: &TranslationProgress) -> bool {
        true
    }
}

struct Decline;

impl SaveGate for Decline {
    fn allow_incomplete(&self, _progress: &TranslationProgress) -> bool {
        false
    }
}

/// Fails the test if consulted: complete drafts must not prompt.
struct MustNotPrompt;

impl SaveGate for MustNotPrompt {
    fn allow_incomplete(&self, progress: &TranslationProgress) -> bool {
        panic!(
            "gate consulted for a complete draft (id {}%, en {}%)",
            progress.id, progress.en
        );
    }
}

fn half_translated_draft() -> DestinationDraft {
    let mut draft = DestinationDraft::new();
    draft.common.slug = "desa-sawit-lestari".to_string();
    draft.set_field(Language::Indonesian, DraftField::Title, "Desa Sawit Lestari");
    draft.set_field(Language::Indonesian, DraftField::Description, "Desa wisata.");
    draft.set_field(Language::Indonesian, DraftField::Village, "Sangatta");
    draft
}

fn fully_translated_draft() -> DestinationDraft {
    let mut draft = half_translated_draft();
    draft.set_field(Language::English, DraftField::Title, "Lestari Palm Village");
    draft.set_field(Language::English, DraftField::Description, "A village tour.");
    draft.set_field(Language::English, DraftField::Village, "Sangatta");
    draft
}

#[tokio::test]
async fn declining_an_incomplete_save_changes_nothing() {
    let api = MockApi::new();
    let mut draft = half_translated_draft();
    let before = draft.clone();

    let outcome = draft.submit(&api, &Decline).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Declined));
    assert_eq!(draft, before);
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn approved_incomplete_save_creates_and_resets() {
    let api = MockApi::new();
    let mut draft = half_translated_draft();
    assert_eq!(draft.progress().id, 100);
    assert_eq!(draft.progress().en, 0);

    let outcome = draft.submit(&api, &Approve).await.unwrap();

    match outcome {
        SubmitOutcome::Created(saved) => {
            assert_eq!(saved.id.as_deref(), Some("srv-1"));
            assert_eq!(saved.slug, "desa-sawit-lestari");
        }
        other => panic!("expected create, got {:?}", other),
    }
    // Create mode resets to a blank draft.
    assert_eq!(draft.field(Language::Indonesian, DraftField::Title), "");
    assert_eq!(draft.common.slug, "");
    assert!(draft.bound_id.is_none());
}

#[tokio::test]
async fn complete_draft_submits_without_prompting() {
    let api = MockApi::new();
    let mut draft = fully_translated_draft();
    assert!(draft.progress().is_complete());

    let outcome = draft.submit(&api, &MustNotPrompt).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn bound_draft_updates_and_keeps_state() {
    let api = MockApi::new();
    let stored = BilingualDestination {
        id: Some("64f0aa".to_string()),
        slug: "desa-sawit-lestari".to_string(),
        title: BilingualText::new("Desa Sawit Lestari", "Lestari Palm Village"),
        description: BilingualText::new("Desa wisata.", "A village tour."),
        village: BilingualText::new("Sangatta", "Sangatta"),
        ..Default::default()
    };
    let mut draft = DestinationDraft::from_destination(&stored);
    let before = draft.clone();

    let outcome = draft.submit(&api, &MustNotPrompt).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Updated(_)));
    // Edit mode leaves the draft as-is.
    assert_eq!(draft, before);

    let calls = api.calls.lock().unwrap();
    match &calls[0] {
        RecordedCall::Update(id, payload) => {
            assert_eq!(id, "64f0aa");
            assert_eq!(payload.slug, "desa-sawit-lestari");
        }
        other => panic!("expected update, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_save_surfaces_message_and_keeps_draft() {
    let api = MockApi::failing("slug already taken");
    let mut draft = fully_translated_draft();
    let before = draft.clone();

    let error = draft.submit(&api, &MustNotPrompt).await.unwrap_err();

    match error {
        SubmitError::Api(ApiError::Rejected { message }) => {
            assert_eq!(message, "slug already taken");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    // No rollback, no reset: everything typed is still there.
    assert_eq!(draft, before);
}

#[tokio::test]
async fn invalid_slug_is_rejected_before_any_network_call() {
    let api = MockApi::new();
    let mut draft = fully_translated_draft();
    draft.common.slug = "Not A Slug".to_string();

    let error = draft.submit(&api, &MustNotPrompt).await.unwrap_err();
    assert!(matches!(error, SubmitError::InvalidSlug(_)));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn payload_carries_empty_strings_for_missing_language() {
    let api = MockApi::new();
    let mut draft = half_translated_draft();

    draft.submit(&api, &Approve).await.unwrap();

    let calls = api.calls.lock().unwrap();
    match &calls[0] {
        RecordedCall::Create(payload) => {
            assert_eq!(
                payload.title,
                BilingualText::new("Desa Sawit Lestari", "")
            );
            assert_eq!(payload.village, BilingualText::new("Sangatta", ""));
        }
        other => panic!("expected create, got {:?}", other),
    }
}
