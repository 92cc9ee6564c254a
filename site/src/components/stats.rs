//! Four-column stats strip under the hero.

use leptos::prelude::*;

use super::{stat_icon_path, Icon};
use crate::types::StatEntry;

/// Delay between stat tile entrance animations
const STAT_STAGGER_MS: usize = 100;

/// One tile per entry, entering one after another
#[component]
pub fn StatsStrip(
    /// Tiles in display order
    stats: &'static [StatEntry],
) -> impl IntoView {
    view! {
        <div class="stats-strip">
            {stats.iter().enumerate().map(|(index, stat)| {
                let delay = format!("animation-delay: {}ms", index * STAT_STAGGER_MS);
                let icon = stat_icon_path(stat.icon);
                view! {
                    <div class="stat-tile shadow-steel animate-slide-up" style=delay>
                        <span class="stat-icon text-industrial-orange">
                            <Icon path=icon size="24" />
                        </span>
                        <div class="stat-value text-steel-blue">{stat.value}</div>
                        <div class="stat-label text-steel-gray">{stat.label}</div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
