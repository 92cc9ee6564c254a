//! The homepage body for each [`HomeState`].

use leptos::prelude::*;

use super::{CallToAction, Hero, LoadingScreen, ProjectGallery, StatsStrip};
use crate::home::HomeState;
use crate::types::{Project, STATS};

/// Renders the homepage for the given state: spinner only while loading,
/// full page otherwise.
#[component]
pub fn HomeView(
    /// Current view state
    state: HomeState,
) -> impl IntoView {
    match state {
        HomeState::Loading => view! { <LoadingScreen /> }.into_any(),
        HomeState::Populated(projects) => view! { <HomeContent projects=projects /> }.into_any(),
        HomeState::Empty => view! { <HomeContent projects=Vec::new() /> }.into_any(),
    }
}

#[component]
fn HomeContent(projects: Vec<Project>) -> impl IntoView {
    view! {
        <div class="home-page font-sans">
            <Hero />
            <StatsStrip stats=STATS />
            <ProjectGallery projects=projects />
            <CallToAction />
        </div>
    }
}
