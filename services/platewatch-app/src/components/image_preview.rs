//! Base64 image preview with error handling

use leptos::prelude::*;
use pw_images::{classify, ImageOutcome};

/// Displays an optional base64 snapshot payload.
///
/// An absent payload renders the "No image" placeholder; a payload that
/// fails the syntactic pre-filter renders the "Invalid image" box. A valid
/// payload renders the normalized data URI; if the browser then fails to
/// decode it, the `error` event flips a sticky signal and the component
/// shows the invalid box for the rest of its lifetime.
#[component]
pub fn ImagePreview(
    base64_string: Option<String>,
    alt: String,
    #[prop(default = 200)] width: u32,
    #[prop(default = 150)] height: u32,
) -> impl IntoView {
    let decode_failed = RwSignal::new(false);

    let box_style = move |color: &str| {
        format!(
            "display: flex; align-items: center; justify-content: center; \
             width: {}px; height: {}px; background-color: #f3f4f6; \
             border: 1px solid #e5e7eb; border-radius: 0.375rem; \
             font-size: 0.85em; color: {};",
            width, height, color
        )
    };

    match classify(base64_string.as_deref()) {
        ImageOutcome::Missing => {
            view! { <div style=box_style("#6b7280")>"No image"</div> }.into_any()
        }
        ImageOutcome::Invalid => {
            view! { <div style=box_style("#dc2626")>"Invalid image"</div> }.into_any()
        }
        ImageOutcome::Valid(src) => view! {
            {move || {
                if decode_failed.get() {
                    view! { <div style=box_style("#dc2626")>"Invalid image"</div> }.into_any()
                } else {
                    view! {
                        <img
                            src=src.clone()
                            alt=alt.clone()
                            width=width
                            height=height
                            style="border-radius: 0.375rem; object-fit: cover;"
                            on:error=move |_| decode_failed.set(true)
                        />
                    }
                    .into_any()
                }
            }}
        }
        .into_any(),
    }
}
