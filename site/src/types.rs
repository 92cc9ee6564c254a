//! Homepage data types.
//!
//! Projects arrive from the projects API and are displayed as-is; the only
//! inspection this crate does is picking an image URL. Stats are a
//! compile-time table.
//!
//! # Example
//!
//! ```rust
//! use ssteel_site::types::Project;
//!
//! let project: Project = serde_json::from_str(
//!     r#"{"id": 7, "title": "Warehouse", "category": "industrial", "main_image": null}"#,
//! ).unwrap();
//!
//! assert_eq!(project.id.to_string(), "7");
//! assert_eq!(project.image_url(), None);
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of projects the gallery shows.
pub const FEATURED_LIMIT: usize = 8;

/// Image the placeholder projects point at.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";

/// Opaque project identifier.
///
/// The API sends integer ids today, but nothing here depends on that, so
/// string ids are accepted too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    /// Numeric id (database row id)
    Number(i64),
    /// Any other id representation
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(value: i64) -> Self {
        ProjectId::Number(value)
    }
}

impl From<i32> for ProjectId {
    fn from(value: i32) -> Self {
        ProjectId::Number(value.into())
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        ProjectId::Text(value.to_string())
    }
}

/// A featured project as returned by `GET /api/projects?featured=true`.
///
/// Unknown fields (status, size, timestamps, ...) are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque identifier
    pub id: ProjectId,
    /// Display title
    pub title: String,
    /// Open category label (`commercial`, `industrial`, ...). The column is
    /// nullable, so `null` reads as an empty label.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    /// Main image URL, preferred over `image`
    #[serde(default)]
    pub main_image: Option<String>,
    /// Secondary image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Long description (not shown on the homepage)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project site location (not shown on the homepage)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Completion year (not shown on the homepage)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<serde_json::Value>,
}

impl Project {
    /// Build a project with no image and no descriptive fields.
    pub fn new(id: impl Into<ProjectId>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            main_image: None,
            image: None,
            description: None,
            location: None,
            year: None,
        }
    }

    /// Set `image` (builder style).
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// The URL a card should display: `main_image`, then `image`.
    /// Empty strings count as absent.
    pub fn image_url(&self) -> Option<&str> {
        [self.main_image.as_deref(), self.image.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The four projects shown when the featured list cannot be fetched.
pub fn placeholder_projects() -> Vec<Project> {
    [
        (1, "Office Complex", "commercial"),
        (2, "Industrial Plant", "industrial"),
        (3, "Bridge Project", "infrastructure"),
        (4, "Residential Complex", "residential"),
    ]
    .into_iter()
    .map(|(id, title, category)| Project::new(id, title, category).with_image(PLACEHOLDER_IMAGE))
    .collect()
}

/// Glyph shown on a stat tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    /// Office building
    Building,
    /// Clock face
    Clock,
    /// Group of people
    Users,
    /// Shield with check mark
    ShieldCheck,
}

/// One tile of the stats strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatEntry {
    /// Caption under the value (`Projects`, `Years`, ...)
    pub label: &'static str,
    /// Headline figure (`500+`, `100%`, ...)
    pub value: &'static str,
    /// Glyph above the value
    pub icon: StatIcon,
}

/// Company stats shown under the hero.
pub const STATS: &[StatEntry] = &[
    StatEntry {
        label: "Projects",
        value: "500+",
        icon: StatIcon::Building,
    },
    StatEntry {
        label: "Years",
        value: "25+",
        icon: StatIcon::Clock,
    },
    StatEntry {
        label: "Clients",
        value: "200+",
        icon: StatIcon::Users,
    },
    StatEntry {
        label: "Safety",
        value: "100%",
        icon: StatIcon::ShieldCheck,
    },
];

/// Navigation targets owned by the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Full project listing
    Projects,
    /// Contact form
    Contact,
    /// Services overview
    Services,
}

impl Route {
    /// Link target of the route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Projects => "/projects",
            Route::Contact => "/contact",
            Route::Services => "/services",
        }
    }
}
