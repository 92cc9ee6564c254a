//! Featured projects gallery.
//!
//! Cards show the project image when one exists. If the image fails to load
//! in the browser, an inline `onerror` handler hides it and reveals the
//! title tile that sits right after it. Projects without any image URL get
//! the tile directly and no `<img>` element at all.

use leptos::prelude::*;

use super::{Icon, ICON_ARROW_RIGHT, ICON_BUILDING};
use crate::types::{Project, Route, FEATURED_LIMIT};

/// Delay between card entrance animations
const CARD_STAGGER_MS: usize = 50;

/// Swaps a broken image for the fallback tile (its next sibling).
const IMAGE_FALLBACK_JS: &str =
    "this.style.display='none';this.nextElementSibling.style.display='flex';";

/// Gallery section: header plus either the card grid or the empty panel.
#[component]
pub fn ProjectGallery(
    /// Projects in display order; at most eight are shown
    projects: Vec<Project>,
) -> impl IntoView {
    let body = if projects.is_empty() {
        view! { <EmptyGallery /> }.into_any()
    } else {
        view! {
            <div class="gallery-grid">
                {projects
                    .into_iter()
                    .take(FEATURED_LIMIT)
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="gallery">
            <div class="gallery-header">
                <h2 class="gallery-title text-steel-blue">"Featured Projects"</h2>
                <a
                    href=Route::Projects.path()
                    class="gallery-link text-industrial-orange hover:text-industrial-orange-dark"
                >
                    "View All"
                    <Icon path=ICON_ARROW_RIGHT size="16" />
                </a>
            </div>
            {body}
        </section>
    }
}

/// A single project card
#[component]
pub fn ProjectCard(
    /// Project to show
    project: Project,
    /// Position in the grid, drives the entrance stagger
    #[prop(default = 0)]
    index: usize,
) -> impl IntoView {
    let image = project.image_url().map(str::to_string);
    let fallback_style = if image.is_some() {
        "display:none"
    } else {
        "display:flex"
    };
    let delay = format!("animation-delay: {}ms", index * CARD_STAGGER_MS);
    let alt = project.title.clone();
    let tile_title = project.title.clone();

    view! {
        <article
            class="project-card shadow-steel hover:shadow-steel-lg animate-fade-in"
            style=delay
            data-project-id=project.id.to_string()
        >
            <div class="card-media">
                {image.map(|src| view! {
                    <img
                        class="card-image"
                        src=src
                        alt=alt
                        loading="lazy"
                        onerror=IMAGE_FALLBACK_JS
                    />
                })}
                <div class="card-fallback" style=fallback_style>
                    {tile_title}
                </div>
            </div>
            <div class="card-body">
                <h4 class="card-title text-steel-blue">{project.title}</h4>
                <span class="card-category text-industrial-orange">{project.category}</span>
            </div>
        </article>
    }
}

/// Shown instead of the grid when the API returned no projects
#[component]
pub fn EmptyGallery() -> impl IntoView {
    view! {
        <div class="gallery-empty">
            <Icon path=ICON_BUILDING size="48" />
            <p class="text-steel-gray">"No projects available"</p>
        </div>
    }
}
