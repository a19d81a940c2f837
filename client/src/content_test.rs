use super::*;

// =============================================================
// Default content
// =============================================================

#[test]
fn galesburg_content_validates() {
    let site = SiteContent::galesburg();
    assert_eq!(site.validate(), Ok(()));
}

#[test]
fn galesburg_has_four_sections_in_page_order() {
    let site = SiteContent::galesburg();
    let ids: Vec<&str> = site.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["hero", "gallery", "booking", "contact"]);

    let labels: Vec<&str> = site.sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Home", "Gallery", "Booking", "Contact"]);
}

#[test]
fn galesburg_gallery_is_ordered() {
    let site = SiteContent::galesburg();
    assert_eq!(site.gallery.len(), 3);
    for (i, item) in site.gallery.iter().enumerate() {
        assert!(item.src.ends_with(&format!("haircut{}.jpg", i + 1)));
        assert_eq!(item.alt, format!("Barbershop work sample {}", i + 1));
    }
}

#[test]
fn galesburg_profile_fields_are_populated() {
    let profile = SiteContent::galesburg().profile;
    assert_eq!(profile.name, "Eli's Barbershop of Galesburg");
    assert!(profile.booking_url.starts_with("https://"));
    // Stable listing URL only; the share link's tracking params stay out.
    assert!(!profile.booking_url.contains('?'));
    assert!(profile.map_embed_url.starts_with("https://"));
    assert!(!profile.address.is_empty());
    assert!(!profile.hours.is_empty());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_duplicate_section_ids() {
    let mut site = SiteContent::galesburg();
    site.sections.push(NavSection::new("gallery", "More Work"));

    assert_eq!(
        site.validate(),
        Err(ContentError::DuplicateSectionId("gallery".to_owned()))
    );
}

#[test]
fn validate_accepts_empty_section_list() {
    let mut site = SiteContent::galesburg();
    site.sections.clear();
    assert_eq!(site.validate(), Ok(()));
}

#[test]
fn content_error_display_names_the_id() {
    let err = ContentError::DuplicateSectionId("booking".to_owned());
    assert_eq!(err.to_string(), "duplicate nav section id: booking");
}

// =============================================================
// Asset URL resolution
// =============================================================

#[test]
fn asset_url_with_empty_base_is_root_relative() {
    assert_eq!(asset_url("", "assets/hero-image.jpg"), "/assets/hero-image.jpg");
}

#[test]
fn asset_url_joins_base_and_path() {
    assert_eq!(asset_url("/my-app", "assets/x.jpg"), "/my-app/assets/x.jpg");
}

#[test]
fn asset_url_normalizes_redundant_slashes() {
    assert_eq!(asset_url("/my-app/", "/assets/x.jpg"), "/my-app/assets/x.jpg");
}
