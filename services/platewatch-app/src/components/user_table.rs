//! User accounts table component

use leptos::prelude::*;

use crate::api::UserResponse;

/// Displays user accounts
#[component]
pub fn UserTable(users: Vec<UserResponse>) -> impl IntoView {
    view! {
        <section>
            <h2>"Users Data"</h2>
            {if users.is_empty() {
                view! { <p>"No users registered."</p> }.into_any()
            } else {
                view! {
                    <table style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr style="border-bottom: 2px solid #dee2e6;">
                                <th style="padding: 0.5rem; text-align: left;">"ID"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Name"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Email"</th>
                                <th style="padding: 0.5rem; text-align: left;">"Created At"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {users.into_iter().map(|u| {
                                view! {
                                    <tr style="border-bottom: 1px solid #dee2e6;">
                                        <td style="padding: 0.5rem;">{u.id}</td>
                                        <td style="padding: 0.5rem;">{u.name.clone()}</td>
                                        <td style="padding: 0.5rem;">{u.email.clone()}</td>
                                        <td style="padding: 0.5rem;">{u.created_at.clone()}</td>
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
