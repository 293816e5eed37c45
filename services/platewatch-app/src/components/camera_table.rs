//! Camera configurations table component

use leptos::prelude::*;

use crate::api::CameraResponse;
use crate::components::status_badge::StatusBadge;

/// Displays camera configurations with type labels and status badges
#[component]
pub fn CameraTable(cameras: Vec<CameraResponse>) -> impl IntoView {
    view! {
        <section>
            <h2>"Cameras Data"</h2>
            {if cameras.is_empty() {
                view! { <p>"No cameras configured."</p> }.into_any()
            } else {
                view! {
                    <table style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr style="border-bottom: 2px solid #dee2e6;">
                                <th style="padding: 0.5rem; text-align: left;">"ID"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Type"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Source"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Status"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Created At"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {cameras.into_iter().map(|c| {
                                let active = c.is_active();
                                view! {
                                    <tr style="border-bottom: 1px solid #dee2e6;">
                                        <td style="padding: 0.5rem;">{c.id}</td>
                                        <td style="padding: 0.5rem;">{c.kind_label()}</td>
                                        <td style="padding: 0.5rem;">{c.source.clone()}</td>
                                        <td style="padding: 0.5rem;">
                                            <StatusBadge label=c.status.clone() active=active />
                                        </td>
                                        <td style="padding: 0.5rem;">{c.created_at.clone()}</td>
                                    </tr>
                                }
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </section>
    }
}
