//! Booking call-to-action with the outbound scheduling link.
//!
//! The scheduling provider is an opaque external resource: the link opens a
//! new browsing context and must not leak a referrer or window opener.

use leptos::prelude::*;

/// Booking region: heading, blurb, and the external booking link.
#[component]
pub fn Booking(booking_url: String) -> impl IntoView {
    view! {
        <section id="booking" class="booking">
            <div class="booking__content">
                <h2 class="booking__heading">"Ready for a Fresh Look?"</h2>
                <p class="booking__blurb">
                    "Our team is ready to provide you with the perfect haircut, \
                     shave, or style. Book your appointment now for a \
                     personalized experience."
                </p>
                <a
                    class="booking__link"
                    href=booking_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <i class="fas fa-calendar booking__icon"></i>
                    "Book Now"
                </a>
            </div>
        </section>
    }
}
