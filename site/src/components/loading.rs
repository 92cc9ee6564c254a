use leptos::prelude::*;

/// Spinner shown while the featured projects are in flight
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
