//! Work gallery: heading plus an order-preserving image grid.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::content::GalleryItem;

/// Gallery region. Renders exactly one image per item, in list order; the
/// grid is one column on narrow viewports and three on wide ones (CSS).
#[component]
pub fn Gallery(items: Vec<GalleryItem>) -> impl IntoView {
    view! {
        <section id="gallery" class="gallery">
            <div class="gallery__intro">
                <h2 class="gallery__heading">"Our Work"</h2>
                <p class="gallery__blurb">
                    "A glimpse into the styles and precision we bring to every \
                     client. Our passion is in the details."
                </p>
            </div>
            <div class="gallery__grid">
                {gallery_figures(&items)
                    .into_iter()
                    .map(|(src, alt)| view! {
                        <figure class="gallery__card">
                            <img class="gallery__image" src=src alt=alt/>
                        </figure>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Resolve items to `(src, alt)` pairs in display order.
fn gallery_figures(items: &[GalleryItem]) -> Vec<(String, String)> {
    items.iter().map(|item| (item.src.clone(), item.alt.clone())).collect()
}
