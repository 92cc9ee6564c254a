use leptos::prelude::*;

use crate::types::Route;

/// Title banner with the two primary actions
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero animate-fade-in">
            <h1 class="hero-title">"S-Steel Construction"</h1>
            <p class="hero-tagline">
                "Professional Steel Construction Solutions - Building Your Future"
            </p>
            <div class="actions">
                <a href=Route::Projects.path() class="btn btn-ghost">
                    "View Projects"
                </a>
                <a
                    href=Route::Contact.path()
                    class="btn btn-solid bg-industrial-orange hover:bg-industrial-orange-dark"
                >
                    "Get Quote"
                </a>
            </div>
        </section>
    }
}
