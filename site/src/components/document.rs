//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::HomeView;
use crate::home::HomeState;

/// Document title
pub const SITE_TITLE: &str = "S-Steel Construction";

/// The complete HTML document for the homepage
#[component]
pub fn HomeDocument(
    /// Current view state
    state: HomeState,
    /// CSS embedded in `<head>`, see [`crate::styles::stylesheet`]
    stylesheet: String,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{SITE_TITLE}</title>
                <style>{stylesheet}</style>
            </head>
            <body>
                <HomeView state=state />
            </body>
        </html>
    }
}
