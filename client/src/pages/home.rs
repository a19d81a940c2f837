//! The single-page layout: header, hero, gallery, booking, contact, footer.

use leptos::prelude::*;

use crate::components::booking::Booking;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::content::SiteContent;

/// Home page — the only route. Region order is fixed and mirrors the nav
/// section order, so every nav id lands on exactly one anchor below.
#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<SiteContent>();

    view! {
        <div class="site">
            <Header name=site.profile.name.clone() sections=site.sections.clone()/>
            <main>
                <Hero/>
                <Gallery items=site.gallery.clone()/>
                <Booking booking_url=site.profile.booking_url.clone()/>
                <Contact profile=site.profile.clone()/>
            </main>
            <Footer name=site.profile.name/>
        </div>
    }
}
