use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bilingual::{BilingualArray, BilingualText};

/// Kind of destination presented on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    #[default]
    Village,
    Plantation,
    Mill,
    Research,
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Country/province reference: either a bare identifier or the populated
/// record the API embeds when the query asked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionRef {
    Id(String),
    Populated(Region),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: BilingualText,
}

/// One day of a destination's visit program. `day` is 1-based and the
/// sequence stays contiguous through draft edits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDay {
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub title: BilingualText,
    #[serde(default)]
    pub activities: BilingualArray,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_impact: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_impact: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_impact: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<String>,
}

/// The named resource buckets attached to a destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceLibrary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development: Option<BilingualArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<BilingualArray>,
}

impl ResourceLibrary {
    pub fn is_empty(&self) -> bool {
        self.research.is_none()
            && self.documentation.is_none()
            && self.training.is_none()
            && self.equipment.is_none()
            && self.community.is_none()
            && self.sustainability.is_none()
            && self.certification.is_none()
            && self.monitoring.is_none()
            && self.education.is_none()
            && self.development.is_none()
            && self.other.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<BilingualText>,
    #[serde(default)]
    pub comment: BilingualText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryMediaKind {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: GalleryMediaKind,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<BilingualText>,
}

/// The full bilingual destination aggregate as stored by the content API.
/// Every field is serde-defaulted so partial server payloads and legacy
/// records decode without errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BilingualDestination {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: BilingualText,
    #[serde(default)]
    pub description: BilingualText,
    #[serde(default)]
    pub village: BilingualText,
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: DestinationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_impact_score: Option<f32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<RegionRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<RegionRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub programs: Vec<ProgramDay>,
    #[serde(default, skip_serializing_if = "ResourceLibrary::is_empty")]
    pub resources: ResourceLibrary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryItem>,
}

/// Slugs are language-neutral, lowercase kebab-case identifiers, unique
/// across all destinations.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 96 {
        return false;
    }
    let pattern = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    pattern.is_match(slug)
}
