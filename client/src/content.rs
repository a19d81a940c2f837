//! Static site content: business identity, gallery list, nav sections.
//!
//! DESIGN
//! ======
//! Everything the page displays is an immutable record built once at startup.
//! Keeping it in one typed value (rather than scattered literals in the view
//! tree) makes the render step a pure function of its inputs and gives tests
//! a single construction point.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Business identity and the two external provider URLs.
///
/// The booking URL and map embed URL are opaque third-party resources; the
/// site only links/frames them and takes no responsibility for their content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,
    pub hours: String,
    pub booking_url: String,
    pub map_embed_url: String,
}

/// One gallery image. List order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
}

/// One navigation entry. `id` must match the anchor id of exactly one
/// rendered region; `label` is the visible link text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

impl NavSection {
    pub fn new(id: &str, label: &str) -> Self {
        Self { id: id.to_owned(), label: label.to_owned() }
    }
}

/// Full content record handed to the view tree via context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: BusinessProfile,
    pub gallery: Vec<GalleryItem>,
    pub sections: Vec<NavSection>,
}

/// Content-level defects detectable before render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentError {
    /// Two nav sections share an id, so anchor navigation would be ambiguous.
    DuplicateSectionId(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSectionId(id) => write!(f, "duplicate nav section id: {id}"),
        }
    }
}

impl SiteContent {
    /// The live site content for Eli's Barbershop of Galesburg.
    pub fn galesburg() -> Self {
        let base = public_url();
        Self {
            profile: BusinessProfile {
                name: "Eli's Barbershop of Galesburg".to_owned(),
                address: "247 E. Main Street, Galesburg IL 61401".to_owned(),
                phone: "(309) 349-0244".to_owned(),
                email: "hello@elisbarbershop.com".to_owned(),
                instagram: "elis_barbershop_galesburg".to_owned(),
                hours: "Tues: 12pm - 6pm | Wed thru Sat: 9am - 6pm | Sun & Mon: Closed".to_owned(),
                // The provider's share link carries tracking query params
                // (hl, gei, rwg_token); only the stable listing path is kept.
                booking_url: "https://booksy.com/en-us/1132493_elis-barbershop-of-galesburg_barber-shop_18668_galesburg".to_owned(),
                map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3708.0743934335524!2d-90.36914912331837!3d40.94761247135914!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x87e1bff45c4f2b95%3A0x38d7ab8b683946df!2sEli%E2%80%99s%20Barbershop%20of%20Galesburg!5e1!3m2!1sen!2sus!4v1755296873188!5m2!1sen!2sus".to_owned(),
            },
            gallery: (1..=3)
                .map(|n| GalleryItem {
                    src: asset_url(base, &format!("assets/haircut{n}.jpg")),
                    alt: format!("Barbershop work sample {n}"),
                })
                .collect(),
            sections: vec![
                NavSection::new("hero", "Home"),
                NavSection::new("gallery", "Gallery"),
                NavSection::new("booking", "Booking"),
                NavSection::new("contact", "Contact"),
            ],
        }
    }

    /// Check the anchor invariant: every nav section id must be unique.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateSectionId` for the first repeated id.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            if seen.contains(&section.id.as_str()) {
                return Err(ContentError::DuplicateSectionId(section.id.clone()));
            }
            seen.push(&section.id);
        }
        Ok(())
    }
}

/// Build-time base path for asset URLs (empty in dev, e.g. `/my-app` when the
/// site is deployed under a sub-path).
pub fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Join a base path and an asset path into a root-relative URL, normalizing
/// the slash between them.
pub fn asset_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
