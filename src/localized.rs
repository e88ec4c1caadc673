//! Single-language projections of the bilingual aggregate.
//!
//! A `LocalizedDestination` is built fresh on every read and discarded
//! after rendering. The projection never mutates its source, never fails,
//! and keeps language-neutral fields byte-for-byte identical to the
//! aggregate. Required bilingual scalars fall back to Indonesian and then
//! to the empty string; optional bilingual fields stay absent when absent.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bilingual::{BilingualArray, BilingualText};
use crate::destination::{
    BilingualDestination, Coordinates, DestinationKind, GalleryItem, GalleryMediaKind,
    ProgramDay, Region, RegionRef, ResourceLibrary, Testimonial,
};
use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub slug: String,
    /// The language this view was projected for.
    pub current_language: Language,
    pub title: String,
    pub description: String,
    pub village: String,
    pub program_duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiaries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_organizations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability_certifications: Option<Vec<String>>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(rename = "type")]
    pub kind: DestinationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_impact_score: Option<f32>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<LocalizedRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<LocalizedRegion>,
    pub programs: Vec<LocalizedProgramDay>,
    pub resources: LocalizedResourceLibrary,
    pub testimonials: Vec<LocalizedTestimonial>,
    pub gallery: Vec<LocalizedGalleryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedRegion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedProgramDay {
    pub day: u32,
    pub title: String,
    pub activities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economic_impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LocalizedResourceLibrary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedTestimonial {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedGalleryItem {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: GalleryMediaKind,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl BilingualDestination {
    /// Collapse the aggregate into a single-language view.
    pub fn localize(&self, language: Language) -> LocalizedDestination {
        LocalizedDestination {
            id: self.id.clone(),
            slug: self.slug.clone(),
            current_language: language,
            title: self.title.get(language).to_string(),
            description: self.description.get(language).to_string(),
            village: self.village.get(language).to_string(),
            program_duration: self.program_duration.get(language).to_string(),
            beneficiaries: localize_array(&self.beneficiaries, language),
            challenges: localize_array(&self.challenges, language),
            requirements: localize_array(&self.requirements, language),
            key_benefits: localize_array(&self.key_benefits, language),
            partner_organizations: localize_array(&self.partner_organizations, language),
            sustainability_certifications: localize_array(
                &self.sustainability_certifications,
                language,
            ),
            images: self.images.clone(),
            cover_image: self.cover_image.clone(),
            banner: self.banner.clone(),
            kind: self.kind,
            social_impact_score: self.social_impact_score,
            featured: self.featured,
            coordinates: self.coordinates,
            country: self.country.as_ref().map(|region| region.localize(language)),
            province: self.province.as_ref().map(|region| region.localize(language)),
            programs: self
                .programs
                .iter()
                .map(|program| program.localize(language))
                .collect(),
            resources: self.resources.localize(language),
            testimonials: self
                .testimonials
                .iter()
                .map(|testimonial| testimonial.localize(language))
                .collect(),
            gallery: self.gallery.iter().map(|item| item.localize(language)).collect(),
        }
    }
}

impl RegionRef {
    /// A bare reference carries no name; it localizes to an empty-name stub.
    pub fn localize(&self, language: Language) -> LocalizedRegion {
        match self {
            RegionRef::Id(id) => LocalizedRegion {
                id: Some(id.clone()),
                name: String::new(),
            },
            RegionRef::Populated(region) => region.localize(language),
        }
    }
}

impl Region {
    pub fn localize(&self, language: Language) -> LocalizedRegion {
        LocalizedRegion {
            id: self.id.clone(),
            name: self.name.get(language).to_string(),
        }
    }
}

impl ProgramDay {
    pub fn localize(&self, language: Language) -> LocalizedProgramDay {
        LocalizedProgramDay {
            day: self.day,
            title: self.title.get(language).to_string(),
            activities: self.activities.get(language).to_vec(),
            benefits: localize_text(&self.benefits, language),
            social_impact: localize_text(&self.social_impact, language),
            economic_impact: localize_text(&self.economic_impact, language),
            environmental_impact: localize_text(&self.environmental_impact, language),
            notes: localize_text(&self.notes, language),
            images: self.images.clone(),
            videos: self.videos.clone(),
        }
    }
}

impl ResourceLibrary {
    pub fn localize(&self, language: Language) -> LocalizedResourceLibrary {
        LocalizedResourceLibrary {
            research: localize_array(&self.research, language),
            documentation: localize_array(&self.documentation, language),
            training: localize_array(&self.training, language),
            equipment: localize_array(&self.equipment, language),
            community: localize_array(&self.community, language),
            sustainability: localize_array(&self.sustainability, language),
            certification: localize_array(&self.certification, language),
            monitoring: localize_array(&self.monitoring, language),
            education: localize_array(&self.education, language),
            development: localize_array(&self.development, language),
            other: localize_array(&self.other, language),
        }
    }
}

impl Testimonial {
    pub fn localize(&self, language: Language) -> LocalizedTestimonial {
        LocalizedTestimonial {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            rating: self.rating,
            date: self.date,
            verified: self.verified,
            location: self.location.clone(),
            role: localize_text(&self.role, language),
            comment: self.comment.get(language).to_string(),
        }
    }
}

impl GalleryItem {
    pub fn localize(&self, language: Language) -> LocalizedGalleryItem {
        LocalizedGalleryItem {
            url: self.url.clone(),
            kind: self.kind,
            featured: self.featured,
            caption: localize_text(&self.caption, language),
        }
    }
}

fn localize_text(value: &Option<BilingualText>, language: Language) -> Option<String> {
    value.as_ref().map(|text| text.get(language).to_string())
}

fn localize_array(value: &Option<BilingualArray>, language: Language) -> Option<Vec<String>> {
    value.as_ref().map(|items| items.get(language).to_vec())
}
