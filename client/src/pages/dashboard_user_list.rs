//! Dashboard users with search, status and balance filters, and suspension.
//!
//! Suspend/unsuspend update the row in place on success; the list is not
//! refetched.

#[cfg(test)]
#[path = "dashboard_user_list_test.rs"]
mod dashboard_user_list_test;

use leptos::prelude::*;

use crate::components::panel::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::admin::{suspend_user, unsuspend_user};
use crate::net::api::{ApiClient, into_ack, into_data};
use crate::net::types::UserRecord;
use crate::net::users::fetch_dashboard_user_list;
use crate::state::fetch::{FetchState, spawn_fetch, spawn_task};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::filter::{ActiveFilter, BalanceRange, filter_dashboard_users};
use crate::util::format::{format_amount, status_tone};
use crate::util::mounted::MountFlag;

/// Set the suspension flag of `user_id`. Returns whether the row was found.
pub fn mark_suspended(users: &mut [UserRecord], user_id: &str, suspended: bool) -> bool {
    match users.iter_mut().find(|u| u.id == user_id) {
        Some(user) => {
            user.suspended = suspended;
            true
        }
        None => false,
    }
}

/// Reason entered in the suspend dialog, or the message to show instead.
///
/// # Errors
///
/// Returns a user-facing message when the reason is blank.
pub fn suspension_reason(raw: &str) -> Result<String, &'static str> {
    let reason = raw.trim();
    if reason.is_empty() {
        Err("Please provide a reason for suspension")
    } else {
        Ok(reason.to_owned())
    }
}

#[component]
pub fn DashboardUserListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mounted = MountFlag::on_current_owner();
    let users = RwSignal::new(FetchState::<Vec<UserRecord>>::default());

    let search = RwSignal::new(String::new());
    let active = RwSignal::new(ActiveFilter::default());
    let min_balance = RwSignal::new(String::new());
    let max_balance = RwSignal::new(String::new());

    let suspend_target = RwSignal::new(None::<UserRecord>);
    let suspend_reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load = Callback::new({
        let api = api.clone();
        let gate = mounted.gate();
        move |()| {
            let api = api.clone();
            spawn_fetch(users, &gate, toasts, async move {
                into_data(fetch_dashboard_user_list(&api).await, "Failed to fetch dashboard user list")
            });
        }
    });
    load.run(());

    let set_suspended = Callback::new({
        let api = api.clone();
        let mounted = mounted.clone();
        move |(user_id, reason): (String, Option<String>)| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let api = api.clone();
            let mounted = mounted.clone();
            spawn_task(async move {
                let suspend = reason.is_some();
                let result = match reason {
                    Some(reason) => into_ack(suspend_user(&api, &user_id, &reason).await, "Failed to suspend user"),
                    None => into_ack(unsuspend_user(&api, &user_id).await, "Failed to unsuspend user"),
                };
                mounted.run_if_live(|| {
                    busy.set(false);
                    match result {
                        Ok(()) => {
                            users.update(|s| {
                                s.update_ready(|list| {
                                    mark_suspended(list, &user_id, suspend);
                                });
                            });
                            suspend_target.set(None);
                            notify_success(toasts, if suspend { "User suspended" } else { "User unsuspended" });
                        }
                        Err(message) => notify_error(toasts, message),
                    }
                });
            });
        }
    });

    let confirm_suspend = move |_| {
        let Some(user) = suspend_target.get_untracked() else {
            return;
        };
        match suspension_reason(&suspend_reason.get_untracked()) {
            Ok(reason) => set_suspended.run((user.id, Some(reason))),
            Err(message) => notify_error(toasts, message),
        }
    };

    view! {
        <section class="page dashboard-users-page">
            <h1 class="page__title">"Dashboard Users"</h1>
            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by name or email"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    on:change=move |ev| active.set(ActiveFilter::parse(&event_target_value(&ev)))
                >
                    {ActiveFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option value=f.as_str() selected=move || active.get() == f>
                                    {f.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    class="filters__number"
                    type="number"
                    placeholder="Min balance"
                    prop:value=move || min_balance.get()
                    on:input=move |ev| min_balance.set(event_target_value(&ev))
                />
                <input
                    class="filters__number"
                    type="number"
                    placeholder="Max balance"
                    prop:value=move || max_balance.get()
                    on:input=move |ev| max_balance.set(event_target_value(&ev))
                />
            </div>
            {move || match users.get() {
                FetchState::Loading => view! { <LoadingPanel message="Loading users..."/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load/> }.into_any(),
                FetchState::Ready(list) => {
                    let range = BalanceRange::parse(&min_balance.get(), &max_balance.get());
                    let rows = filter_dashboard_users(&list, &search.get(), active.get(), range);
                    if rows.is_empty() {
                        return view! { <EmptyPanel message="No users match the current filters."/> }.into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Balance"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|user| {
                                        let status = if user.suspended {
                                            "suspended"
                                        } else if user.active {
                                            "active"
                                        } else {
                                            "inactive"
                                        };
                                        let role = user.role_label().to_owned();
                                        let balance = format_amount(user.balance.unwrap_or(0.0));
                                        let user_id = user.id.clone();
                                        let suspended = user.suspended;
                                        let target = user.clone();
                                        view! {
                                            <tr>
                                                <td>{user.name}</td>
                                                <td>{user.email}</td>
                                                <td>{role}</td>
                                                <td>{balance}</td>
                                                <td>
                                                    <span class=format!("badge badge--{}", status_tone(status))>
                                                        {crate::util::format::capitalize(status)}
                                                    </span>
                                                </td>
                                                <td>
                                                    {if suspended {
                                                        view! {
                                                            <button
                                                                class="btn btn--small"
                                                                disabled=move || busy.get()
                                                                on:click=move |_| set_suspended.run((user_id.clone(), None))
                                                            >
                                                                "Unsuspend"
                                                            </button>
                                                        }
                                                        .into_any()
                                                    } else {
                                                        view! {
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| {
                                                                    suspend_reason.set(String::new());
                                                                    suspend_target.set(Some(target.clone()));
                                                                }
                                                            >
                                                                "Suspend"
                                                            </button>
                                                        }
                                                        .into_any()
                                                    }}
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
            <Show when=move || suspend_target.get().is_some()>
                <div class="modal-backdrop">
                    <div class="modal" role="dialog" aria-modal="true">
                        <h2 class="modal__title">
                            "Suspend "
                            {move || suspend_target.get().map(|u| u.name).unwrap_or_default()}
                        </h2>
                        <textarea
                            class="modal__textarea"
                            placeholder="Reason for suspension"
                            prop:value=move || suspend_reason.get()
                            on:input=move |ev| suspend_reason.set(event_target_value(&ev))
                        ></textarea>
                        <div class="modal__actions">
                            <button class="btn" on:click=move |_| suspend_target.set(None)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=confirm_suspend
                            >
                                "Suspend"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
