//! Detection-zone marker table component

use leptos::prelude::*;

use crate::api::MarkerResponse;
use crate::components::status_badge::StatusBadge;

/// Displays detection-zone markers with their camera and rectangle bounds
#[component]
pub fn MarkerTable(markers: Vec<MarkerResponse>) -> impl IntoView {
    view! {
        <section>
            <h2>"Geo Markers Data"</h2>
            {if markers.is_empty() {
                view! { <p>"No geo markers defined."</p> }.into_any()
            } else {
                view! {
                    <table style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr style="border-bottom: 2px solid #dee2e6;">
                                <th style="padding: 0.5rem; text-align: left;">"ID"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Camera"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Coordinates"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Created At"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {markers.into_iter().map(|m| {
                                let camera_badge = m.camera.as_ref().map(|c| {
                                    let active = c.is_active();
                                    view! { <StatusBadge label=c.status.clone() active=active /> }
                                });
                                let coordinates = format!("X: {}-{}, Y: {}-{}", m.x1, m.x2, m.y1, m.y2);
                                view! {
                                    <tr style="border-bottom: 1px solid #dee2e6;">
                                        <td style="padding: 0.5rem;">{m.id}</td>
                                        <td style="padding: 0.5rem;">
                                            {format!("Camera #{} ", m.camera_id)}
                                            {camera_badge}
                                        </td>
                                        <td style="padding: 0.5rem;">{coordinates}</td>
                                        <td style="padding: 0.5rem;">{m.created_at.clone()}</td>
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
