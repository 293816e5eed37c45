//! Status badge component

use leptos::prelude::*;

/// A colored badge; green for active states, gray otherwise
#[component]
pub fn StatusBadge(label: String, active: bool) -> impl IntoView {
    let (color, bg) = if active {
        ("#155724", "#d4edda")
    } else {
        ("#383d41", "#e2e3e5")
    };

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span style=style>{label}</span>
    }
}
