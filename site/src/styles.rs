//! CSS for the homepage.
//!
//! The stylesheet has three parts:
//!
//! - [`PALETTE_CSS`] - the global `:root` custom properties that color tokens
//!   point at (`--steel-blue`, `--industrial-orange-dark`, ...)
//! - [`BASE_CSS`] - layout classes used by the components
//! - [`theme_css`] - utility classes and `@keyframes` generated from a [`Theme`]
//!
//! ```rust
//! use ssteel_site::styles::stylesheet;
//! use ssteel_site::theme::Theme;
//!
//! let css = stylesheet(&Theme::steel());
//! assert!(css.contains(".bg-steel-blue{background-color:var(--steel-blue)}"));
//! assert!(css.contains("@keyframes fadeIn{0%{opacity:0}100%{opacity:1}}"));
//! ```

use std::fmt::Write;

use crate::theme::{shadow_css, Theme};

/// Concrete values behind the color tokens.
pub const PALETTE_CSS: &str = r#"
:root {
    --steel-blue: #2c3e50;
    --steel-blue-light: #34495e;
    --steel-blue-dark: #1a252f;
    --industrial-orange: #e67e22;
    --industrial-orange-light: #f39c12;
    --industrial-orange-dark: #d35400;
    --steel-gray: #7f8c8d;
    --steel-gray-light: #95a5a6;
    --steel-gray-dark: #5d6d7e;
    --charcoal: #2c2c2c;
    --charcoal-light: #3d3d3d;
}
"#;

/// Layout for the homepage sections.
pub const BASE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    height: 100%;
    margin: 0;
}

body {
    background: #f5f6f7;
    color: var(--charcoal);
    line-height: 1.5;
}

a {
    text-decoration: none;
}

.home-page {
    height: 100%;
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 16px;
    overflow: hidden;
}

/* Loading */
.loading-screen {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
}

.spinner {
    width: 32px;
    height: 32px;
    border-radius: 9999px;
    border: 2px solid var(--steel-blue);
    border-top-color: transparent;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* Hero */
.hero {
    background: linear-gradient(to right, var(--steel-blue), var(--industrial-orange));
    border-radius: 8px;
    padding: 24px;
    color: #fff;
}

.hero-title {
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0 0 8px;
}

.hero-tagline {
    font-size: 0.875rem;
    opacity: 0.9;
    margin: 0 0 16px;
}

.actions {
    display: flex;
    gap: 12px;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    padding: 8px 16px;
    border-radius: 4px;
    font-size: 0.875rem;
    font-weight: 500;
    transition: background-color 0.2s, color 0.2s;
}

.btn-ghost {
    background: rgba(255, 255, 255, 0.2);
    color: #fff;
}

.btn-ghost:hover {
    background: rgba(255, 255, 255, 0.3);
}

.btn-solid {
    color: #fff;
}

.btn-light {
    background: #fff;
    font-weight: 600;
}

.btn-light:hover {
    background: #f3f4f6;
}

.btn-outline {
    border: 1px solid #fff;
    color: #fff;
    font-weight: 600;
}

.btn-outline:hover {
    background: #fff;
    color: var(--industrial-orange);
}

/* Stats */
.stats-strip {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 12px;
}

.stat-tile {
    background: #fff;
    border-radius: 8px;
    padding: 12px;
    text-align: center;
    animation-fill-mode: both;
}

.stat-icon {
    display: block;
    margin: 0 auto 4px;
}

.stat-value {
    font-size: 1.125rem;
    font-weight: 700;
}

.stat-label {
    font-size: 0.75rem;
}

/* Gallery */
.gallery {
    flex: 1;
    display: flex;
    flex-direction: column;
    min-height: 0;
}

.gallery-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 12px;
}

.gallery-title {
    font-size: 1.125rem;
    font-weight: 700;
    margin: 0;
}

.gallery-link {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    font-size: 0.875rem;
    font-weight: 500;
}

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 12px;
}

.project-card {
    background: #fff;
    border-radius: 8px;
    overflow: hidden;
    transition: box-shadow 0.2s;
    animation-fill-mode: both;
}

.card-media {
    position: relative;
    height: 96px;
    background: #e5e7eb;
}

.card-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.2s;
}

.project-card:hover .card-image {
    transform: scale(1.05);
}

.card-fallback {
    width: 100%;
    height: 100%;
    align-items: center;
    justify-content: center;
    padding: 8px;
    text-align: center;
    color: #fff;
    font-size: 0.875rem;
    font-weight: 600;
    background: linear-gradient(to bottom right, var(--steel-blue), var(--industrial-orange));
}

.card-body {
    padding: 12px;
}

.card-title {
    font-size: 0.875rem;
    font-weight: 600;
    margin: 0 0 4px;
}

.card-category {
    font-size: 0.75rem;
    text-transform: capitalize;
}

.gallery-empty {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    background: #fff;
    border: 1px solid #f3f4f6;
    border-radius: 8px;
    padding: 24px;
}

.gallery-empty svg {
    fill: #d1d5db;
    margin-bottom: 8px;
}

/* Call to action */
.cta {
    background: linear-gradient(to right, var(--industrial-orange), var(--industrial-orange-dark));
    border-radius: 8px;
    padding: 16px;
    text-align: center;
    color: #fff;
}

.cta-title {
    font-weight: 700;
    margin: 0 0 8px;
}

.cta .actions {
    justify-content: center;
}
"#;

/// Utility classes and keyframes generated from the theme tokens.
pub fn theme_css(theme: &Theme) -> String {
    let mut css = String::new();

    for (role, color) in &theme.colors {
        for (suffix, value) in color.variants() {
            let name = format!("{role}{suffix}");
            rule(&mut css, &format!(".bg-{name}"), "background-color", value);
            rule(&mut css, &format!(".text-{name}"), "color", value);
            rule(&mut css, &format!(".border-{name}"), "border-color", value);
            rule(&mut css, &format!(".hover\\:bg-{name}:hover"), "background-color", value);
            rule(&mut css, &format!(".hover\\:text-{name}:hover"), "color", value);
        }
    }

    for (name, families) in &theme.font_family {
        rule(&mut css, &format!(".font-{name}"), "font-family", &families.join(", "));
    }

    for (name, layers) in &theme.shadows {
        let value = shadow_css(layers);
        rule(&mut css, &format!(".shadow-{name}"), "box-shadow", &value);
        rule(&mut css, &format!(".hover\\:shadow-{name}:hover"), "box-shadow", &value);
    }

    for (name, animation) in &theme.animations {
        rule(&mut css, &format!(".animate-{name}"), "animation", &animation.to_css());
    }

    for (name, steps) in &theme.keyframes {
        let _ = write!(css, "@keyframes {name}{{");
        for step in steps {
            let _ = write!(css, "{}%{{", step.offset);
            let body = step
                .declarations
                .iter()
                .map(|d| format!("{}:{}", d.property, d.value))
                .collect::<Vec<_>>()
                .join(";");
            css.push_str(&body);
            css.push('}');
        }
        css.push_str("}\n");
    }

    for (name, template) in &theme.grid_columns {
        rule(&mut css, &format!(".grid-cols-{name}"), "grid-template-columns", template);
    }

    for (step, length) in &theme.spacing {
        for (prefix, property) in [
            ("p", "padding"),
            ("m", "margin"),
            ("gap", "gap"),
            ("h", "height"),
            ("w", "width"),
        ] {
            rule(&mut css, &format!(".{prefix}-{step}"), property, length);
        }
    }

    for (name, radius) in &theme.radius {
        rule(&mut css, &format!(".rounded-{name}"), "border-radius", radius);
    }

    css
}

fn rule(css: &mut String, selector: &str, property: &str, value: &str) {
    let _ = writeln!(css, "{selector}{{{property}:{value}}}");
}

/// Complete stylesheet embedded in the rendered document.
pub fn stylesheet(theme: &Theme) -> String {
    format!("{PALETTE_CSS}\n{BASE_CSS}\n{}", theme_css(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorRole, Theme};

    #[test]
    fn color_utilities_cover_every_variant() {
        let css = theme_css(&Theme::steel());

        assert!(css.contains(".text-industrial-orange{color:var(--industrial-orange)}"));
        assert!(css.contains(".bg-steel-gray-light{background-color:var(--steel-gray-light)}"));
        assert!(css.contains(
            ".hover\\:bg-industrial-orange-dark:hover{background-color:var(--industrial-orange-dark)}"
        ));
        assert!(css.contains(".border-charcoal-light{border-color:var(--charcoal-light)}"));
        assert!(!css.contains("charcoal-dark"));
    }

    #[test]
    fn token_utilities_use_theme_values() {
        let css = theme_css(&Theme::steel());

        assert!(css.contains(".animate-fade-in{animation:fadeIn 0.5s ease-in-out}"));
        assert!(css.contains(
            ".shadow-steel{box-shadow:0 4px 6px -1px rgba(44, 62, 80, 0.1), 0 2px 4px -1px rgba(44, 62, 80, 0.06)}"
        ));
        assert!(css.contains(
            ".grid-cols-auto-fit-300{grid-template-columns:repeat(auto-fit, minmax(300px, 1fr))}"
        ));
        assert!(css.contains(".p-18{padding:4.5rem}"));
        assert!(css.contains(".gap-22{gap:5.5rem}"));
        assert!(css.contains(".rounded-2xl{border-radius:1.5rem}"));
        assert!(css.contains(".font-sans{font-family:Inter, system-ui, sans-serif}"));
    }

    #[test]
    fn keyframes_keep_declaration_order() {
        let css = theme_css(&Theme::steel());
        assert!(css.contains(
            "@keyframes slideUp{0%{transform:translateY(20px);opacity:0}100%{transform:translateY(0);opacity:1}}"
        ));
    }

    #[test]
    fn empty_theme_generates_nothing() {
        assert!(theme_css(&Theme::default()).is_empty());
    }

    #[test]
    fn overridden_color_is_used_verbatim() {
        let mut theme = Theme::default();
        theme.colors.insert(
            "brand".into(),
            ColorRole {
                default: "#112233".into(),
                light: None,
                dark: None,
            },
        );

        let css = theme_css(&theme);
        assert!(css.contains(".bg-brand{background-color:#112233}"));
        assert!(!css.contains("brand-light"));
    }

    #[test]
    fn palette_defines_every_referenced_variable() {
        let theme = Theme::steel();
        for color in theme.colors.values() {
            for (_, value) in color.variants() {
                let var = value.trim_start_matches("var(").trim_end_matches(')');
                assert!(PALETTE_CSS.contains(&format!("{var}:")), "missing {var}");
            }
        }
    }
}
