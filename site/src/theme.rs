//! Design tokens for the site.
//!
//! A [`Theme`] maps symbolic token names (color roles, spacing steps, shadow
//! presets, keyframe sequences, ...) to concrete CSS values. It is built once
//! at startup, optionally extended from a TOML file, and then handed to the
//! renderer by reference. Nothing reads tokens from global state.
//!
//! ```rust
//! use ssteel_site::theme::Theme;
//!
//! let theme = Theme::steel();
//! assert_eq!(theme.colors["steel-blue"].default, "var(--steel-blue)");
//! assert_eq!(theme.animations["fade-in"].to_css(), "fadeIn 0.5s ease-in-out");
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A color role with its variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRole {
    /// Base value
    pub default: String,
    /// `-light` variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    /// `-dark` variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

impl ColorRole {
    fn vars(name: &str, light: bool, dark: bool) -> Self {
        Self {
            default: format!("var(--{name})"),
            light: light.then(|| format!("var(--{name}-light)")),
            dark: dark.then(|| format!("var(--{name}-dark)")),
        }
    }

    /// `(suffix, value)` pairs; the default variant has an empty suffix.
    pub fn variants(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("", Some(self.default.as_str())),
            ("-light", self.light.as_deref()),
            ("-dark", self.dark.as_deref()),
        ]
        .into_iter()
        .filter_map(|(suffix, value)| value.map(|v| (suffix, v)))
    }
}

/// Timing function of an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// `linear`
    Linear,
    /// `ease`
    Ease,
    /// `ease-in`
    EaseIn,
    /// `ease-out`
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// A named animation bound to a keyframe sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Name of the entry in [`Theme::keyframes`]
    pub keyframes: String,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Timing function
    pub easing: Easing,
}

impl Animation {
    fn new(keyframes: &str, duration_ms: u32, easing: Easing) -> Self {
        Self {
            keyframes: keyframes.to_string(),
            duration_ms,
            easing,
        }
    }

    /// Value of the CSS `animation` shorthand, e.g. `fadeIn 0.5s ease-in-out`.
    pub fn to_css(&self) -> String {
        let seconds = f64::from(self.duration_ms) / 1000.0;
        format!("{} {}s {}", self.keyframes, seconds, self.easing.as_css())
    }
}

/// One CSS declaration inside a keyframe step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS property name
    pub property: String,
    /// CSS value
    pub value: String,
}

/// A keyframe step at `offset` percent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyframeStep {
    /// Percentage, 0 to 100
    pub offset: u8,
    /// Declarations in emission order
    pub declarations: Vec<Declaration>,
}

impl KeyframeStep {
    fn new(offset: u8, declarations: &[(&str, &str)]) -> Self {
        Self {
            offset,
            declarations: declarations
                .iter()
                .map(|(property, value)| Declaration {
                    property: property.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

/// One layer of a box shadow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    /// Horizontal offset (px)
    pub x: i32,
    /// Vertical offset (px)
    pub y: i32,
    /// Blur radius (px)
    pub blur: u32,
    /// Spread radius (px)
    #[serde(default)]
    pub spread: i32,
    /// Shadow color
    pub rgb: [u8; 3],
    /// Alpha, 0.0 to 1.0
    pub opacity: f64,
}

impl ShadowLayer {
    const fn new(y: i32, blur: u32, spread: i32, rgb: [u8; 3], opacity: f64) -> Self {
        Self {
            x: 0,
            y,
            blur,
            spread,
            rgb,
            opacity,
        }
    }

    pub fn to_css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!(
            "{} {} {} {} rgba({r}, {g}, {b}, {})",
            px(self.x),
            px(self.y),
            px(self.blur as i32),
            px(self.spread),
            self.opacity
        )
    }
}

fn px(value: i32) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}

/// CSS value of a multi-layer shadow preset.
pub fn shadow_css(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(ShadowLayer::to_css)
        .collect::<Vec<_>>()
        .join(", ")
}

const STEEL_RGB: [u8; 3] = [44, 62, 80];
const ORANGE_RGB: [u8; 3] = [230, 126, 34];

/// Immutable design-token configuration.
///
/// `Default` is an empty theme; [`Theme::steel`] holds the site's tokens.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color roles by name (`steel-blue`, ...)
    pub colors: BTreeMap<String, ColorRole>,
    /// Font stacks by name
    pub font_family: BTreeMap<String, Vec<String>>,
    /// Animations by utility name (`fade-in`, ...)
    pub animations: BTreeMap<String, Animation>,
    /// Keyframe sequences by CSS name (`fadeIn`, ...)
    pub keyframes: BTreeMap<String, Vec<KeyframeStep>>,
    /// Grid column templates
    pub grid_columns: BTreeMap<String, String>,
    /// Extra spacing steps
    pub spacing: BTreeMap<String, String>,
    /// Extra border radii
    pub radius: BTreeMap<String, String>,
    /// Multi-layer box shadows
    pub shadows: BTreeMap<String, Vec<ShadowLayer>>,
}

impl Theme {
    /// The S-Steel Construction tokens.
    pub fn steel() -> Self {
        let colors = [
            ("steel-blue", ColorRole::vars("steel-blue", true, true)),
            ("industrial-orange", ColorRole::vars("industrial-orange", true, true)),
            ("steel-gray", ColorRole::vars("steel-gray", true, true)),
            ("charcoal", ColorRole::vars("charcoal", true, false)),
        ];

        let animations = [
            ("fade-in", Animation::new("fadeIn", 500, Easing::EaseInOut)),
            ("slide-up", Animation::new("slideUp", 300, Easing::EaseOut)),
            ("scale-in", Animation::new("scaleIn", 200, Easing::EaseOut)),
        ];

        let keyframes = [
            (
                "fadeIn",
                vec![
                    KeyframeStep::new(0, &[("opacity", "0")]),
                    KeyframeStep::new(100, &[("opacity", "1")]),
                ],
            ),
            (
                "slideUp",
                vec![
                    KeyframeStep::new(0, &[("transform", "translateY(20px)"), ("opacity", "0")]),
                    KeyframeStep::new(100, &[("transform", "translateY(0)"), ("opacity", "1")]),
                ],
            ),
            (
                "scaleIn",
                vec![
                    KeyframeStep::new(0, &[("transform", "scale(0.95)"), ("opacity", "0")]),
                    KeyframeStep::new(100, &[("transform", "scale(1)"), ("opacity", "1")]),
                ],
            ),
        ];

        let shadows = [
            (
                "steel",
                vec![
                    ShadowLayer::new(4, 6, -1, STEEL_RGB, 0.1),
                    ShadowLayer::new(2, 4, -1, STEEL_RGB, 0.06),
                ],
            ),
            (
                "steel-lg",
                vec![
                    ShadowLayer::new(10, 15, -3, STEEL_RGB, 0.1),
                    ShadowLayer::new(4, 6, -2, STEEL_RGB, 0.05),
                ],
            ),
            (
                "orange",
                vec![
                    ShadowLayer::new(4, 6, -1, ORANGE_RGB, 0.1),
                    ShadowLayer::new(2, 4, -1, ORANGE_RGB, 0.06),
                ],
            ),
            (
                "orange-lg",
                vec![
                    ShadowLayer::new(10, 15, -3, ORANGE_RGB, 0.1),
                    ShadowLayer::new(4, 6, -2, ORANGE_RGB, 0.05),
                ],
            ),
        ];

        Self {
            colors: owned(colors),
            font_family: owned([(
                "sans",
                vec!["Inter".to_string(), "system-ui".to_string(), "sans-serif".to_string()],
            )]),
            animations: owned(animations),
            keyframes: owned(keyframes),
            grid_columns: owned([
                ("auto-fill-250", "repeat(auto-fill, minmax(250px, 1fr))".to_string()),
                ("auto-fit-300", "repeat(auto-fit, minmax(300px, 1fr))".to_string()),
            ]),
            spacing: owned([("18", "4.5rem".to_string()), ("22", "5.5rem".to_string())]),
            radius: owned([("xl", "1rem".to_string()), ("2xl", "1.5rem".to_string())]),
            shadows: owned(shadows),
        }
    }

    /// Site tokens extended with the overrides in a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file {}", path.display()))?;
        let overrides = Self::from_toml(&data)
            .with_context(|| format!("failed to parse theme file {}", path.display()))?;
        Ok(Self::steel().extend(overrides))
    }

    /// Parse a (possibly partial) theme from TOML.
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Merge `other` over `self`: tokens in `other` replace tokens with the
    /// same name, all other tokens are kept.
    pub fn extend(mut self, other: Theme) -> Self {
        self.colors.extend(other.colors);
        self.font_family.extend(other.font_family);
        self.animations.extend(other.animations);
        self.keyframes.extend(other.keyframes);
        self.grid_columns.extend(other.grid_columns);
        self.spacing.extend(other.spacing);
        self.radius.extend(other.radius);
        self.shadows.extend(other.shadows);
        self
    }

    /// Look up a color variant: `None` variant means the default.
    pub fn color(&self, role: &str, variant: Option<&str>) -> Option<&str> {
        let role = self.colors.get(role)?;
        match variant {
            None => Some(role.default.as_str()),
            Some("light") => role.light.as_deref(),
            Some("dark") => role.dark.as_deref(),
            Some(_) => None,
        }
    }
}

fn owned<V, const N: usize>(entries: [(&str, V); N]) -> BTreeMap<String, V> {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
