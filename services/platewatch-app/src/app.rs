//! Main App component

use leptos::prelude::*;

use crate::api::{fetch_dashboard, CameraResponse, DashboardResponse, MarkerResponse, UserResponse, VehicleResponse};
use crate::components::camera_table::CameraTable;
use crate::components::marker_table::MarkerTable;
use crate::components::user_table::UserTable;
use crate::components::vehicle_table::VehicleTable;

/// The four dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Vehicles,
    Cameras,
    Markers,
    Users,
}

/// Root application component
///
/// Fetches the dashboard snapshot exactly once; there is no refresh and no
/// retry. The fetch suspends while the backend load is still running, so a
/// slow backend keeps the page on the loading fallback.
#[component]
pub fn App() -> impl IntoView {
    let dashboard = Resource::new(
        || (),
        |_| async move {
            fetch_dashboard()
                .await
                .unwrap_or_else(|error| DashboardResponse::Failed { error })
        },
    );

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 1100px; margin: 0 auto; padding: 1rem;">
            <h1>"Vehicle Monitoring System"</h1>
            <Suspense fallback=move || view! { <p>"Loading data..."</p> }>
                {move || {
                    dashboard.get().map(|snapshot| match snapshot {
                        DashboardResponse::Loading => {
                            view! { <p>"Loading data..."</p> }.into_any()
                        }
                        DashboardResponse::Failed { error } => {
                            view! {
                                <div style="display: flex; height: 60vh; align-items: center; justify-content: center;">
                                    <div style="width: 600px; border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem;">
                                        <h2 style="color: #dc2626; margin-top: 0;">"Error"</h2>
                                        <p>{error}</p>
                                    </div>
                                </div>
                            }
                            .into_any()
                        }
                        DashboardResponse::Loaded { users, cameras, markers, vehicles } => {
                            view! {
                                <Dashboard users=users cameras=cameras markers=markers vehicles=vehicles />
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </main>
    }
}

/// Tab bar plus the table for the selected tab
#[component]
fn Dashboard(
    users: Vec<UserResponse>,
    cameras: Vec<CameraResponse>,
    markers: Vec<MarkerResponse>,
    vehicles: Vec<VehicleResponse>,
) -> impl IntoView {
    let tab = RwSignal::new(Tab::Vehicles);

    view! {
        <nav style="margin-bottom: 1rem;">
            <TabButton tab=tab target=Tab::Vehicles label="Vehicles" />
            <TabButton tab=tab target=Tab::Cameras label="Cameras" />
            <TabButton tab=tab target=Tab::Markers label="Geo Markers" />
            <TabButton tab=tab target=Tab::Users label="Users" />
        </nav>
        {move || match tab.get() {
            Tab::Vehicles => view! { <VehicleTable vehicles=vehicles.clone() /> }.into_any(),
            Tab::Cameras => view! { <CameraTable cameras=cameras.clone() /> }.into_any(),
            Tab::Markers => view! { <MarkerTable markers=markers.clone() /> }.into_any(),
            Tab::Users => view! { <UserTable users=users.clone() /> }.into_any(),
        }}
    }
}

#[component]
fn TabButton(tab: RwSignal<Tab>, target: Tab, label: &'static str) -> impl IntoView {
    let style = move || {
        let weight = if tab.get() == target { "600" } else { "400" };
        format!(
            "padding: 0.5rem 1rem; border: none; border-radius: 0.375rem; background: #f3f4f6; cursor: pointer; margin-right: 0.5rem; font-weight: {};",
            weight
        )
    };

    view! {
        <button style=style on:click=move |_| tab.set(target)>{label}</button>
    }
}
