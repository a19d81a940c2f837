//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::SiteContent;
use crate::pages::home::HomePage;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the static site content and the mobile menu state as contexts,
/// then routes the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = SiteContent::galesburg();
    debug_assert!(site.validate().is_ok(), "site content failed validation");
    let title = site.profile.name.clone();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(site);

    view! {
        <Stylesheet id="leptos" href="/pkg/site.css"/>
        <Stylesheet
            id="font-awesome"
            href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
        />
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
