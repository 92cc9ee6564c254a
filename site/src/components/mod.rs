//! Leptos SSR components for the homepage.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument
//! └── HomeView (per HomeState)
//!     ├── LoadingScreen          (Loading)
//!     └── HomeContent            (Populated / Empty)
//!         ├── Hero
//!         ├── StatsStrip
//!         ├── ProjectGallery
//!         │   ├── ProjectCard    (up to 8)
//!         │   └── EmptyGallery   (no projects)
//!         └── CallToAction
//! ```
//!
//! Components are usually rendered through [`crate::render_home_page`], but
//! can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use ssteel_site::components::{Hero, ProjectGallery};
//!
//! view! {
//!     <Hero />
//!     <ProjectGallery projects=projects />
//! }
//! ```

mod cta;
mod document;
mod gallery;
mod hero;
mod icons;
mod loading;
mod page;
mod stats;

pub use cta::CallToAction;
pub use document::{HomeDocument, SITE_TITLE};
pub use gallery::{EmptyGallery, ProjectCard, ProjectGallery};
pub use hero::Hero;
pub use icons::*;
pub use loading::LoadingScreen;
pub use page::HomeView;
pub use stats::StatsStrip;
