//! Sticky page header: home link, horizontal nav, mobile menu.
//!
//! DESIGN
//! ======
//! Wide viewports show the horizontal nav list; narrow viewports swap it for
//! a toggle button (CSS media query decides which is visible). The vertical
//! dropdown renders only while the menu flag is set, and any nav click closes
//! it before scrolling.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

#[cfg(all(test, feature = "ssr"))]
#[path = "header_render_test.rs"]
mod header_render_test;

use leptos::prelude::*;

use crate::content::NavSection;
use crate::state::ui::UiState;
use crate::util::scroll::scroll_to_section;

/// Page header with anchor navigation.
#[component]
pub fn Header(name: String, sections: Vec<NavSection>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.get().menu_open;

    let entries = nav_entries(&sections);
    let dropdown_entries = entries.clone();

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <a
                    class="site-header__home"
                    href="#hero"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ui.update(UiState::close_menu);
                        let _ = scroll_to_section("hero");
                    }
                >
                    {name}
                </a>
                <nav class="site-nav site-nav--horizontal">
                    {entries.iter().cloned().map(|e| nav_item(ui, e)).collect_view()}
                </nav>
                <button
                    class="site-header__menu-toggle"
                    aria-label=move || menu_toggle_label(menu_open())
                    aria-expanded=move || if menu_open() { "true" } else { "false" }
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=menu_open>
                <nav class="site-nav site-nav--dropdown">
                    {dropdown_entries.iter().cloned().map(|e| nav_item(ui, e)).collect_view()}
                </nav>
            </Show>
        </header>
    }
}

/// One nav link. Closes the mobile menu, then scrolls; a missing anchor is
/// already logged by the scroll helper and is otherwise a no-op.
fn nav_item(ui: RwSignal<UiState>, entry: NavEntry) -> impl IntoView {
    let NavEntry { id, href, label } = entry;
    view! {
        <a
            class="site-nav__link"
            href=href
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ui.update(UiState::close_menu);
                let _ = scroll_to_section(&id);
            }
        >
            {label}
        </a>
    }
}

/// A nav section resolved into link form.
#[derive(Clone, Debug, PartialEq, Eq)]
struct NavEntry {
    id: String,
    href: String,
    label: String,
}

/// Map nav sections to link entries, preserving input order.
fn nav_entries(sections: &[NavSection]) -> Vec<NavEntry> {
    sections
        .iter()
        .map(|s| NavEntry {
            id: s.id.clone(),
            href: format!("#{}", s.id),
            label: s.label.clone(),
        })
        .collect()
}

/// Accessible label for the mobile menu toggle.
fn menu_toggle_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}
