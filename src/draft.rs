//! Editable draft state for the bilingual admin form.
//!
//! A draft keeps one bucket per language for the core scalar fields, a
//! shared bucket for language-neutral fields, and the nested collections
//! bilingual in place. On submit the buckets merge back into a single
//! `BilingualDestination` payload; the aggregate stays the one source of
//! truth for both language variants.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::ContentApi;
use crate::bilingual::{BilingualArray, BilingualText};
use crate::destination::{
    is_valid_slug, BilingualDestination, Coordinates, DestinationKind, GalleryItem, ProgramDay,
    RegionRef, ResourceLibrary, Testimonial,
};
use crate::error::SubmitError;
use crate::language::Language;
use crate::progress::{self, TranslationProgress};

/// The per-language scalar fields addressable in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Village,
}

/// One language's bucket of scalar fields, edited side by side with the
/// other language's.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub village: String,
}

impl LanguageFields {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Village => &self.village,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Village => self.village = value,
        }
    }
}

/// Language-neutral fields shared by both variants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFields {
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: DestinationKind,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_impact_score: Option<f32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Decides whether a save may proceed while either translation is below
/// 100%. Interactive callers prompt the administrator; tests answer
/// directly.
pub trait SaveGate: Send + Sync {
    fn allow_incomplete(&self, progress: &TranslationProgress) -> bool;
}

/// What a submission did.
#[derive(Debug)]
pub enum SubmitOutcome {
    Created(BilingualDestination),
    Updated(BilingualDestination),
    /// The gate was consulted and the administrator declined; nothing was
    /// sent and the draft is unchanged.
    Declined,
}

fn new_draft_uid() -> String {
    Uuid::new_v4().to_string()
}

/// Editable draft of a destination record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDraft {
    /// Local instance identifier, only used for log correlation.
    #[serde(default = "new_draft_uid", skip_serializing)]
    draft_uid: String,
    /// Persisted identifier once the draft is bound to a stored record;
    /// `None` means submitting creates a new destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound_id: Option<String>,
    #[serde(default)]
    pub id: LanguageFields,
    #[serde(default)]
    pub en: LanguageFields,
    #[serde(default)]
    pub common: CommonFields,
    #[serde(default)]
    pub program_duration: BilingualText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiaries: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_benefits: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_organizations: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_certifications: Option<BilingualArray>,
    #[serde(default)]
    pub programs: Vec<ProgramDay>,
    #[serde(default)]
    pub resources: ResourceLibrary,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
}

impl Default for DestinationDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl DestinationDraft {
    /// Blank create-mode draft.
    pub fn new() -> Self {
        DestinationDraft {
            draft_uid: new_draft_uid(),
            bound_id: None,
            id: LanguageFields::default(),
            en: LanguageFields::default(),
            common: CommonFields::default(),
            program_duration: BilingualText::default(),
            beneficiaries: None,
            challenges: None,
            requirements: None,
            key_benefits: None,
            partner_organizations: None,
            sustainability_certifications: None,
            programs: Vec::new(),
            resources: ResourceLibrary::default(),
            testimonials: Vec::new(),
            gallery: Vec::new(),
        }
    }

    /// Edit-mode draft seeded from a stored record. Legacy plain values
    /// populate the Indonesian bucket and leave English empty.
    pub fn from_destination(destination: &BilingualDestination) -> Self {
        DestinationDraft {
            draft_uid: new_draft_uid(),
            bound_id: destination.id.clone(),
            id: language_bucket(destination, Language::Indonesian),
            en: language_bucket(destination, Language::English),
            common: CommonFields {
                slug: destination.slug.clone(),
                country: region_id(&destination.country),
                province: region_id(&destination.province),
                kind: destination.kind,
                images: destination.images.clone(),
                cover_image: destination.cover_image.clone(),
                banner: destination.banner.clone(),
                social_impact_score: destination.social_impact_score,
                featured: destination.featured,
                coordinates: destination.coordinates,
            },
            program_duration: destination.program_duration.clone(),
            beneficiaries: destination.beneficiaries.clone(),
            challenges: destination.challenges.clone(),
            requirements: destination.requirements.clone(),
            key_benefits: destination.key_benefits.clone(),
            partner_organizations: destination.partner_organizations.clone(),
            sustainability_certifications: destination.sustainability_certifications.clone(),
            programs: destination.programs.clone(),
            resources: destination.resources.clone(),
            testimonials: destination.testimonials.clone(),
            gallery: destination.gallery.clone(),
        }
    }

    /// Load a draft from a JSON or YAML file, by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading draft file {}", path.display()))?;
        let draft = if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing draft file {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing draft file {}", path.display()))?
        };
        Ok(draft)
    }

    pub fn field(&self, language: Language, field: DraftField) -> &str {
        self.bucket(language).get(field)
    }

    /// Update one field in one language bucket.
    pub fn set_field(&mut self, language: Language, field: DraftField, value: impl Into<String>) {
        self.bucket_mut(language).set(field, value);
    }

    fn bucket(&self, language: Language) -> &LanguageFields {
        match language {
            Language::Indonesian => &self.id,
            Language::English => &self.en,
        }
    }

    fn bucket_mut(&mut self, language: Language) -> &mut LanguageFields {
        match language {
            Language::Indonesian => &mut self.id,
            Language::English => &mut self.en,
        }
    }

    /// Set the social impact score, clamped to the 0..=100 display scale.
    pub fn set_impact_score(&mut self, score: f32) {
        self.common.social_impact_score = Some(score.clamp(0.0, 100.0));
    }

    /// Append a blank program day numbered after the current last one.
    pub fn add_program(&mut self) -> &mut ProgramDay {
        let day = self.programs.len() as u32 + 1;
        self.programs.push(ProgramDay {
            day,
            ..Default::default()
        });
        self.programs.last_mut().unwrap()
    }

    /// Remove one program day; the remaining days are renumbered so the
    /// sequence stays contiguous 1..N.
    pub fn remove_program(&mut self, index: usize) -> Option<ProgramDay> {
        if index >= self.programs.len() {
            return None;
        }
        let removed = self.programs.remove(index);
        self.renumber_programs();
        Some(removed)
    }

    fn renumber_programs(&mut self) {
        for (position, program) in self.programs.iter_mut().enumerate() {
            program.day = position as u32 + 1;
        }
    }

    /// Current completion percentages across both language buckets.
    pub fn progress(&self) -> TranslationProgress {
        progress::evaluate(&self.id, &self.en)
    }

    /// Merge both buckets into the bilingual wire payload. Missing language
    /// values stay as empty strings inside the pairs so the shape remains
    /// well-formed.
    pub fn to_payload(&self) -> BilingualDestination {
        BilingualDestination {
            id: self.bound_id.clone(),
            slug: self.common.slug.clone(),
            title: BilingualText::new(self.id.title.clone(), self.en.title.clone()),
            description: BilingualText::new(
                self.id.description.clone(),
                self.en.description.clone(),
            ),
            village: BilingualText::new(self.id.village.clone(), self.en.village.clone()),
            program_duration: self.program_duration.clone(),
            beneficiaries: self.beneficiaries.clone(),
            challenges: self.challenges.clone(),
            requirements: self.requirements.clone(),
            key_benefits: self.key_benefits.clone(),
            partner_organizations: self.partner_organizations.clone(),
            sustainability_certifications: self.sustainability_certifications.clone(),
            images: self.common.images.clone(),
            cover_image: self.common.cover_image.clone(),
            banner: self.common.banner.clone(),
            kind: self.common.kind,
            social_impact_score: self.common.social_impact_score,
            featured: self.common.featured,
            coordinates: self.common.coordinates,
            country: self.common.country.clone().map(RegionRef::Id),
            province: self.common.province.clone().map(RegionRef::Id),
            programs: self.programs.clone(),
            resources: self.resources.clone(),
            testimonials: self.testimonials.clone(),
            gallery: self.gallery.clone(),
        }
    }

    /// Persist the draft. Incomplete translations go through the gate
    /// first; a declined gate leaves the draft untouched. Create mode
    /// resets to a blank draft on success, edit mode keeps the state, and
    /// a failed request keeps everything the administrator typed.
    pub async fn submit(
        &mut self,
        api: &dyn ContentApi,
        gate: &dyn SaveGate,
    ) -> Result<SubmitOutcome, SubmitError> {
        let progress = self.progress();
        if !progress.is_complete() && !gate.allow_incomplete(&progress) {
            info!(
                "Incomplete save of draft {} declined (id {}%, en {}%)",
                self.draft_uid, progress.id, progress.en
            );
            return Ok(SubmitOutcome::Declined);
        }

        if !is_valid_slug(&self.common.slug) {
            return Err(SubmitError::InvalidSlug(self.common.slug.clone()));
        }

        let payload = self.to_payload();
        match &self.bound_id {
            Some(id) => {
                debug!("Updating destination {}", id);
                let saved = api.update_destination(id, &payload).await?;
                Ok(SubmitOutcome::Updated(saved))
            }
            None => {
                debug!("Creating destination {}", payload.slug);
                let saved = api.create_destination(&payload).await?;
                info!("Created destination {}", saved.slug);
                *self = DestinationDraft::new();
                Ok(SubmitOutcome::Created(saved))
            }
        }
    }
}

fn language_bucket(destination: &BilingualDestination, language: Language) -> LanguageFields {
    LanguageFields {
        title: destination.title.side(language).to_string(),
        description: destination.description.side(language).to_string(),
        village: destination.village.side(language).to_string(),
    }
}

fn region_id(region: &Option<RegionRef>) -> Option<String> {
    match region {
        Some(RegionRef::Id(id)) => Some(id.clone()),
        Some(RegionRef::Populated(populated)) => populated.id.clone(),
        None => None,
    }
}
