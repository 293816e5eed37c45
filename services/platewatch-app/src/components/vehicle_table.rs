//! Vehicle events table component

use leptos::prelude::*;

use crate::api::VehicleResponse;
use crate::components::image_dialog::ImageDialog;
use crate::components::image_preview::ImagePreview;
use crate::components::status_badge::StatusBadge;

/// Displays detected vehicles with image dialogs and inline previews
#[component]
pub fn VehicleTable(vehicles: Vec<VehicleResponse>) -> impl IntoView {
    view! {
        <section>
            <h2>"Vehicles Data"</h2>
            {if vehicles.is_empty() {
                view! { <p>"No vehicles detected."</p> }.into_any()
            } else {
                view! {
                    <table style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr style="border-bottom: 2px solid #dee2e6;">
                                <th style="padding: 0.5rem; text-align: left;">"ID"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Vehicle Number"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Camera"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Timestamp"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Status"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Images"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Preview"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {vehicles.into_iter().map(|v| {
                                let camera_badge = v.camera.as_ref().map(|c| {
                                    let active = c.is_active();
                                    view! { <StatusBadge label=c.status.clone() active=active /> }
                                });
                                let active = v.is_active();
                                view! {
                                    <tr style="border-bottom: 1px solid #dee2e6;">
                                        <td style="padding: 0.5rem;">{v.id}</td>
                                        <td style="padding: 0.5rem;">{v.number.clone()}</td>
                                        <td style="padding: 0.5rem;">
                                            {format!("Camera #{} ", v.camera_id)}
                                            {camera_badge}
                                        </td>
                                        <td style="padding: 0.5rem;">{v.time_stamp.clone()}</td>
                                        <td style="padding: 0.5rem;">
                                            <StatusBadge label=v.status_label().to_string() active=active />
                                        </td>
                                        <td style="padding: 0.5rem;">
                                            <ImageDialog title="Vehicle" base64_string=v.vehicle_image.clone() />
                                            <ImageDialog title="Numberplate" base64_string=v.numberplate_image.clone() />
                                            <ImageDialog title="Person" base64_string=v.person_image.clone() />
                                        </td>
                                        <td style="padding: 0.5rem;">
                                            <ImagePreview
                                                base64_string=v.vehicle_image.clone()
                                                alt=format!("Vehicle {}", v.id)
                                                width=60
                                                height=45
                                            />
                                        </td>
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
