//! Contact region: icon-labelled business details beside the map embed.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::content::BusinessProfile;

/// Contact region. Left column lists the contact fields, right column embeds
/// the external map provider in a lazy, borderless iframe.
#[component]
pub fn Contact(profile: BusinessProfile) -> impl IntoView {
    let map_src = profile.map_embed_url.clone();
    let rows = contact_rows(&profile);

    view! {
        <section id="contact" class="contact">
            <div class="contact__info">
                <h2 class="contact__heading">"Get in Touch"</h2>
                <div class="contact__rows">
                    {rows
                        .into_iter()
                        .map(|(icon, text)| view! {
                            <div class="contact__row">
                                <i class=format!("{icon} contact__icon")></i>
                                <p>{text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="contact__map">
                <iframe
                    class="contact__map-frame"
                    src=map_src
                    allowfullscreen="true"
                    title="Map to the shop"
                    {..leptos::attr::loading("lazy")}
                ></iframe>
            </div>
        </section>
    }
}

/// Contact fields as `(icon class, display text)` rows, in display order.
/// The instagram handle is shown with its `@` prefix.
fn contact_rows(profile: &BusinessProfile) -> Vec<(&'static str, String)> {
    vec![
        ("fas fa-map-marker-alt", profile.address.clone()),
        ("fas fa-phone", profile.phone.clone()),
        ("fas fa-envelope", profile.email.clone()),
        ("fab fa-instagram", format!("@{}", profile.instagram)),
        ("fas fa-clock", profile.hours.clone()),
    ]
}
