//! Full-viewport hero banner with the booking call-to-action.

use leptos::prelude::*;

use crate::content::{asset_url, public_url};
use crate::state::ui::UiState;
use crate::util::scroll::scroll_to_section;

/// Hero region: background image, headline, sub-headline, and a CTA that
/// scroll-navigates to the booking region.
#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let background = format!(
        "background-image: url('{}')",
        asset_url(public_url(), "assets/hero-image.jpg")
    );

    view! {
        <section id="hero" class="hero" style=background>
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__headline">"Classic, Custom Cuts."</h1>
                <p class="hero__subline">
                    "Experience a blend of classic techniques and modern styles. \
                     Our commitment is to give you a look that defines you."
                </p>
                <a
                    class="hero__cta"
                    href="#booking"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ui.update(UiState::close_menu);
                        let _ = scroll_to_section("booking");
                    }
                >
                    "Book an Appointment"
                    <i class="fas fa-chevron-right hero__cta-icon"></i>
                </a>
            </div>
        </section>
    }
}
