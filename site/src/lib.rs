//! # ssteel-site
//!
//! Homepage renderer for the S-Steel Construction marketing site.
//!
//! The homepage fetches the featured projects once, falls back to placeholder
//! projects when that fails, and renders a hero, a stats strip, a gallery of
//! up to eight project cards and a call to action. Rendering is pure Leptos
//! SSR: no reactive runtime or hydration, just static HTML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ssteel_site::{api::HttpProjectSource, home, render_home_page, theme::Theme};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let theme = Theme::steel();
//! let source = HttpProjectSource::new("http://localhost:5001", None)?;
//!
//! let mut page = home::mount(source);
//! if let Some(state) = page.settled().await {
//!     std::fs::write("index.html", render_home_page(&state, &theme))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - projects, stats, navigation targets
//! - [`theme`] - design tokens
//! - [`styles`] - CSS generated from the tokens
//! - [`api`] - featured-projects source (HTTP)
//! - [`home`] - mount / settle / unmount lifecycle and view state
//! - [`components`] - Leptos UI components
//! - [`config`] - configuration file and CLI override resolution

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod components;
pub mod config;
pub mod home;
pub mod styles;
pub mod theme;
pub mod types;

use components::{HomeDocument, HomeView};
use home::HomeState;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use theme::Theme;

/// Render the complete homepage document for `state`.
///
/// The theme is compiled into the embedded stylesheet.
///
/// ```rust
/// use ssteel_site::{home::HomeState, render_home_page, theme::Theme};
///
/// let html = render_home_page(&HomeState::Loading, &Theme::steel());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_home_page(state: &HomeState, theme: &Theme) -> String {
    let doc = view! {
        <HomeDocument state=state.clone() stylesheet=styles::stylesheet(theme) />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the homepage body (no `<html>`/`<head>`), e.g. for embedding.
pub fn render_home_fragment(state: &HomeState) -> String {
    view! { <HomeView state=state.clone() /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{placeholder_projects, Project};

    fn card_count(html: &str) -> usize {
        html.matches("class=\"project-card").count()
    }

    fn lettered(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| {
                let letter = char::from(b'A' + i as u8).to_string();
                Project::new(i as i64 + 1, letter, "commercial").with_image(format!("/img/{}.jpg", i + 1))
            })
            .collect()
    }

    #[test]
    fn loading_shows_spinner_only() {
        let html = render_home_fragment(&HomeState::Loading);

        assert!(html.contains("class=\"spinner\""));
        assert!(!html.contains("S-Steel Construction"));
        assert!(!html.contains("Featured Projects"));
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn populated_page_has_all_sections() {
        let html = render_home_page(&HomeState::Populated(lettered(2)), &Theme::steel());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("class=\"spinner\""));
        for text in [
            "S-Steel Construction",
            "View Projects",
            "Get Quote",
            "500+",
            "25+",
            "200+",
            "100%",
            "Featured Projects",
            "Ready to Start Your Project?",
            "Contact Us",
            "Our Services",
        ] {
            assert!(html.contains(text), "missing {text}");
        }
        for href in ["href=\"/projects\"", "href=\"/contact\"", "href=\"/services\""] {
            assert!(html.contains(href), "missing {href}");
        }
        assert_eq!(html.matches("class=\"stat-tile").count(), 4);
        assert_eq!(card_count(&html), 2);
    }

    #[test]
    fn gallery_never_shows_more_than_eight() {
        // 9 projects A..I: only A..H are rendered, in order.
        let html = render_home_fragment(&HomeState::Populated(lettered(9)));

        assert_eq!(card_count(&html), 8);
        assert!(html.contains("/img/8.jpg"));
        assert!(!html.contains("/img/9.jpg"));
        let positions: Vec<_> = (1..=8)
            .map(|i| html.find(&format!("/img/{i}.jpg")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_state_shows_panel_not_placeholders() {
        let html = render_home_fragment(&HomeState::Empty);

        assert!(html.contains("No projects available"));
        assert!(!html.contains("Office Complex"));
        assert_eq!(card_count(&html), 0);
        assert!(html.contains("Featured Projects"));
    }

    #[test]
    fn placeholders_render_in_fixed_order() {
        let html = render_home_fragment(&HomeState::Populated(placeholder_projects()));

        assert_eq!(card_count(&html), 4);
        let order: Vec<_> = ["Office Complex", "Industrial Plant", "Bridge Project", "Residential Complex"]
            .iter()
            .map(|t| html.find(t).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn imageless_project_gets_title_tile() {
        let html = render_home_fragment(&HomeState::Populated(vec![Project::new(
            5,
            "Parking Deck",
            "infrastructure",
        )]));

        assert!(!html.contains("<img"));
        assert!(html.contains("class=\"card-fallback\" style=\"display:flex;\""));
        assert!(html.contains("Parking Deck"));
    }

    #[test]
    fn image_card_keeps_hidden_fallback_tile() {
        let mut project = Project::new(6, "Steel Mill", "industrial");
        project.main_image = Some("http://localhost:5001/uploads/mill.jpg".into());
        let html = render_home_fragment(&HomeState::Populated(vec![project]));

        assert!(html.contains("src=\"http://localhost:5001/uploads/mill.jpg\""));
        assert!(html.contains("onerror="));
        assert!(html.contains("class=\"card-fallback\" style=\"display:none;\""));
    }

    #[test]
    fn project_text_is_escaped() {
        let html = render_home_fragment(&HomeState::Populated(vec![Project::new(
            7,
            "<script>alert(1)</script>",
            "commercial",
        )]));

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn document_embeds_theme_css() {
        let html = render_home_page(&HomeState::Empty, &Theme::steel());

        assert!(html.contains("<title>S-Steel Construction</title>"));
        assert!(html.contains("--steel-blue: #2c3e50"));
        assert!(html.contains(".animate-fade-in{animation:fadeIn 0.5s ease-in-out}"));
    }
}
