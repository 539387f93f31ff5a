//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::auth::AuthPage;
use crate::util::motion::{self, ReducedMotion};

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
/// Provides the reduced-motion context and mounts the auth page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Effects only run in the browser, so SSR keeps the default.
    let reduced_motion = RwSignal::new(false);
    Effect::new(move || reduced_motion.set(motion::read_preference()));
    provide_context(ReducedMotion(reduced_motion.read_only()));

    view! {
        <Stylesheet id="leptos" href="/pkg/authform.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
            </Routes>
        </Router>
    }
}
