//! Platform user list with "All Users" and "Dashboard Users" tabs.
//!
//! Switching tabs refetches; a response for a tab the user already left is
//! dropped by the page's request gate.

#[cfg(test)]
#[path = "user_list_test.rs"]
mod user_list_test;

use leptos::prelude::*;

use crate::components::panel::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::api::{ApiClient, into_data};
use crate::net::types::UserRecord;
use crate::net::users::{fetch_dashboard_user_list, fetch_user_list};
use crate::state::fetch::{FetchState, spawn_fetch};
use crate::state::toast::ToastState;
use crate::util::filter::filter_users;
use crate::util::format::status_tone;
use crate::util::mounted::MountFlag;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserTab {
    #[default]
    All,
    Dashboard,
}

impl UserTab {
    pub const TABS: [Self; 2] = [Self::All, Self::Dashboard];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Users",
            Self::Dashboard => "Dashboard Users",
        }
    }

    pub fn failure(self) -> &'static str {
        match self {
            Self::All => "Failed to fetch user list",
            Self::Dashboard => "Failed to fetch dashboard user list",
        }
    }
}

#[component]
pub fn UserListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gate = MountFlag::on_current_owner().gate();
    let users = RwSignal::new(FetchState::<Vec<UserRecord>>::default());
    let tab = RwSignal::new(UserTab::default());
    let search = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        let api = api.clone();
        let current = tab.get_untracked();
        spawn_fetch(users, &gate, toasts, async move {
            let result = match current {
                UserTab::All => fetch_user_list(&api).await,
                UserTab::Dashboard => fetch_dashboard_user_list(&api).await,
            };
            into_data(result, current.failure())
        });
    });

    // Refetch whenever the tab changes (and once on mount).
    Effect::new(move || {
        tab.track();
        load.run(());
    });

    view! {
        <section class="page user-list-page">
            <h1 class="page__title">"Users"</h1>
            <div class="tabs">
                {UserTab::TABS
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <input
                class="search-input"
                type="search"
                placeholder="Search by name or email"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            {move || match users.get() {
                FetchState::Loading => view! { <LoadingPanel message="Loading users..."/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load/> }.into_any(),
                FetchState::Ready(list) => {
                    let rows = filter_users(&list, &search.get());
                    if rows.is_empty() {
                        return view! { <EmptyPanel message="No users found."/> }.into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|user| {
                                        let status = if user.active { "active" } else { "inactive" };
                                        view! {
                                            <tr>
                                                <td>
                                                    <span class="avatar">{user.initial()}</span>
                                                    {user.name}
                                                </td>
                                                <td>{user.email}</td>
                                                <td>
                                                    <span class=format!("badge badge--{}", status_tone(status))>
                                                        {if user.active { "Active" } else { "Inactive" }}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
