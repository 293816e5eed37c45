//! Modal dialog for a larger image rendering

use leptos::prelude::*;

use crate::components::image_preview::ImagePreview;

/// A trigger button that opens a modal with a 400x300 preview
#[component]
pub fn ImageDialog(title: &'static str, base64_string: Option<String>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <span style="margin-right: 0.5rem;">
            <button
                style="padding: 0.25em 0.6em; border: 1px solid #dee2e6; border-radius: 0.25rem; background: #fff; cursor: pointer; font-size: 0.85em;"
                on:click=move |_| open.set(true)
            >
                {title}
            </button>
            {move || {
                open.get().then(|| view! {
                    <div style="position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.4);">
                        <div style="background: #fff; border-radius: 0.5rem; padding: 1.5rem; max-width: 28rem;">
                            <h3 style="margin-top: 0;">{title}</h3>
                            <div style="display: flex; justify-content: center; padding: 1rem;">
                                <ImagePreview
                                    base64_string=base64_string.clone()
                                    alt=title.to_string()
                                    width=400
                                    height=300
                                />
                            </div>
                            <div style="text-align: right;">
                                <button
                                    style="padding: 0.25em 0.8em;"
                                    on:click=move |_| open.set(false)
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                })
            }}
        </span>
    }
}
