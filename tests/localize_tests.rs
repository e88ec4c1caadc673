use std::path::Path;

use elaeis_content::destination::BilingualDestination;
use elaeis_content::language::Language;

fn load_fixture(name: &str) -> BilingualDestination {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests").join("data").join(name);
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn english_view_falls_back_per_field() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::English);

    assert_eq!(localized.title, "Lestari Palm Village");
    // English description is empty in the fixture; Indonesian wins.
    assert_eq!(
        localized.description,
        "Desa wisata di tengah kebun sawit rakyat."
    );
    assert_eq!(localized.village, "South Sangatta");
    assert_eq!(localized.program_duration, "3 days 2 nights");
    assert_eq!(localized.current_language, Language::English);
}

#[test]
fn indonesian_view_uses_indonesian_content() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::Indonesian);
    assert_eq!(localized.title, "Desa Sawit Lestari");
    assert_eq!(localized.current_language, Language::Indonesian);
}

#[test]
fn empty_english_array_falls_back_to_indonesian_list() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::English);
    assert_eq!(
        localized.challenges.as_deref(),
        Some(&["Akses jalan musim hujan".to_string()][..])
    );
}

#[test]
fn legacy_plain_array_passes_through_for_both_languages() {
    let destination = load_fixture("destination.json");
    let expected = vec!["Legacy benefit".to_string()];
    assert_eq!(
        destination.localize(Language::Indonesian).key_benefits,
        Some(expected.clone())
    );
    assert_eq!(
        destination.localize(Language::English).key_benefits,
        Some(expected)
    );
}

#[test]
fn language_neutral_fields_survive_unchanged() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::English);

    assert_eq!(localized.images, destination.images);
    assert_eq!(localized.cover_image, destination.cover_image);
    assert_eq!(localized.social_impact_score, Some(82.5));
    assert!(localized.featured);
    let coordinates = localized.coordinates.unwrap();
    assert_eq!(coordinates.latitude, 0.5071);
}

#[test]
fn populated_and_bare_regions_both_resolve() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::English);

    let country = localized.country.unwrap();
    assert_eq!(country.id.as_deref(), Some("c-idn"));
    assert_eq!(country.name, "Indonesia");

    // Province is a bare reference; it becomes an empty-name stub.
    let province = localized.province.unwrap();
    assert_eq!(province.id.as_deref(), Some("p-kaltim"));
    assert_eq!(province.name, "");
}

#[test]
fn programs_keep_day_order_and_fall_back_individually() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::English);

    let days: Vec<u32> = localized.programs.iter().map(|p| p.day).collect();
    assert_eq!(days, vec![1, 2]);

    assert_eq!(localized.programs[0].title, "Grove");
    // Day 2 has no English title or activities; Indonesian wins.
    assert_eq!(localized.programs[1].title, "Pabrik");
    assert_eq!(localized.programs[1].activities, vec!["Kunjungan pabrik"]);
    assert_eq!(localized.programs[1].notes.as_deref(), Some("Bring a hat"));
    assert_eq!(localized.programs[0].images, vec!["p1.jpg"]);
}

#[test]
fn resource_buckets_localize_independently_and_absence_propagates() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::English);

    assert_eq!(
        localized.resources.training.as_deref(),
        Some(&["Harvest module".to_string()][..])
    );
    // "other" has no English items; falls back.
    assert_eq!(
        localized.resources.other.as_deref(),
        Some(&["Peta desa".to_string()][..])
    );
    assert!(localized.resources.research.is_none());
    assert!(localized.resources.monitoring.is_none());
}

#[test]
fn testimonials_and_gallery_localize_in_place() {
    let destination = load_fixture("destination.json");
    let localized = destination.localize(Language::English);

    let testimonial = &localized.testimonials[0];
    assert_eq!(testimonial.name, "Budi");
    assert_eq!(testimonial.rating, 4.5);
    assert!(testimonial.verified);
    assert_eq!(testimonial.role.as_deref(), Some("Farmer"));
    assert_eq!(testimonial.comment, "Amazing");

    assert_eq!(localized.gallery.len(), 2);
    // Caption with empty English falls back; missing caption stays absent.
    assert_eq!(localized.gallery[0].caption.as_deref(), Some("Pagi di kebun"));
    assert!(localized.gallery[1].caption.is_none());
}

#[test]
fn server_localized_payload_is_handled_idempotently() {
    // The display endpoint may project server-side; every bilingual field
    // then arrives as plain content and passes through unchanged for any
    // requested language.
    let destination = load_fixture("localized.json");

    let en_view = destination.localize(Language::English);
    assert_eq!(en_view.title, "Lestari Palm Village");
    assert_eq!(en_view.programs[0].title, "Grove");
    assert_eq!(en_view.programs[0].activities, vec!["Joint harvest"]);

    let id_view = destination.localize(Language::Indonesian);
    assert_eq!(id_view.title, "Lestari Palm Village");
}

#[test]
fn aggregate_serializes_back_without_coercing_legacy_fields() {
    let destination = load_fixture("destination.json");
    let value = serde_json::to_value(&destination).unwrap();

    // Pair fields keep the pair shape, legacy fields keep the flat shape.
    assert_eq!(value["title"]["id"], "Desa Sawit Lestari");
    assert_eq!(value["keyBenefits"], serde_json::json!(["Legacy benefit"]));
    assert_eq!(value["province"], "p-kaltim");
}
