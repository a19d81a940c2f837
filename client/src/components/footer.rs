//! Page footer with the copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::util::clock::current_year;

/// Footer region. The year defaults to the real clock; tests pass a fixed
/// value through the prop.
#[component]
pub fn Footer(name: String, #[prop(optional)] year: Option<i32>) -> impl IntoView {
    let line = copyright_line(&name, year.unwrap_or_else(current_year));

    view! {
        <footer class="site-footer">
            <p class="site-footer__line">{line}</p>
        </footer>
    }
}

/// Copyright line as rendered in the footer.
fn copyright_line(name: &str, year: i32) -> String {
    format!("\u{a9} {year} {name}. All rights reserved.")
}
