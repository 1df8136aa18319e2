//! Contact request triage: search, status filter, and status changes.

#[cfg(test)]
#[path = "contact_list_test.rs"]
mod contact_list_test;

use leptos::prelude::*;

use crate::components::panel::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::api::{ApiClient, into_ack, into_data};
use crate::net::contacts::{fetch_contacts, update_contact_status};
use crate::net::types::{ContactRequest, ContactStatus};
use crate::state::fetch::{FetchState, settle, spawn_task};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::filter::filter_contacts;
use crate::util::format::{format_opt_date, status_tone};
use crate::util::mounted::MountFlag;

/// Status filter value from the select; anything unrecognised means "all".
pub fn parse_status_filter(raw: &str) -> Option<ContactStatus> {
    ContactStatus::parse(raw)
}

/// Apply a confirmed status change to the loaded rows.
pub fn apply_status(contacts: &mut [ContactRequest], contact_id: &str, status: ContactStatus) -> bool {
    match contacts.iter_mut().find(|c| c.id == contact_id) {
        Some(contact) => {
            contact.status = status;
            true
        }
        None => false,
    }
}

#[component]
pub fn ContactListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mounted = MountFlag::on_current_owner();
    let contacts = RwSignal::new(FetchState::<Vec<ContactRequest>>::default());
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(None::<ContactStatus>);

    let load = Callback::new({
        let api = api.clone();
        let gate = mounted.gate();
        move |()| {
            let ticket = gate.begin();
            contacts.set(FetchState::Loading);
            let api = api.clone();
            spawn_task(async move {
                let result = into_data(fetch_contacts(&api).await, "Failed to fetch contact requests");
                let loaded = result.is_ok();
                settle(contacts, &ticket, toasts, result);
                if loaded && ticket.is_current() {
                    notify_success(toasts, "Contact requests loaded successfully");
                }
            });
        }
    });
    load.run(());

    let change_status = Callback::new(move |(contact_id, status): (String, ContactStatus)| {
        let api = api.clone();
        let mounted = mounted.clone();
        spawn_task(async move {
            let result = into_ack(
                update_contact_status(&api, &contact_id, status).await,
                "Failed to update status",
            );
            mounted.run_if_live(|| match result {
                Ok(()) => {
                    contacts.update(|s| {
                        s.update_ready(|list| {
                            apply_status(list, &contact_id, status);
                        });
                    });
                    notify_success(toasts, "Status updated successfully");
                }
                Err(message) => notify_error(toasts, message),
            });
        });
    });

    view! {
        <section class="page contact-list-page">
            <h1 class="page__title">"Contact Requests"</h1>
            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by name, email or subject"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    on:change=move |ev| status_filter.set(parse_status_filter(&event_target_value(&ev)))
                >
                    <option value="all">"All statuses"</option>
                    {ContactStatus::ASSIGNABLE
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || match contacts.get() {
                FetchState::Loading => view! { <LoadingPanel message="Loading contact requests..."/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load/> }.into_any(),
                FetchState::Ready(list) => {
                    let rows = filter_contacts(&list, &search.get(), status_filter.get());
                    if rows.is_empty() {
                        return view! { <EmptyPanel message="No contact requests found."/> }.into_any();
                    }
                    view! {
                        <ul class="contact-list">
                            {rows
                                .into_iter()
                                .map(|contact| {
                                    let id = contact.id.clone();
                                    let current = contact.status;
                                    view! {
                                        <li class="contact-card">
                                            <div class="contact-card__head">
                                                <span class="contact-card__name">{contact.name}</span>
                                                <span class="contact-card__email">{contact.email}</span>
                                                <span class=format!("badge badge--{}", status_tone(current.as_str()))>
                                                    {current.label()}
                                                </span>
                                            </div>
                                            <p class="contact-card__subject">{contact.subject}</p>
                                            <p class="contact-card__message">{contact.message}</p>
                                            <div class="contact-card__foot">
                                                <span class="contact-card__date">
                                                    {format_opt_date(contact.created_at.as_deref())}
                                                </span>
                                                <select
                                                    class="contact-card__status"
                                                    on:change=move |ev| {
                                                        if let Some(next) = ContactStatus::parse(&event_target_value(&ev)) {
                                                            if next != current {
                                                                change_status.run((id.clone(), next));
                                                            }
                                                        }
                                                    }
                                                >
                                                    {ContactStatus::ASSIGNABLE
                                                        .into_iter()
                                                        .map(|s| {
                                                            view! {
                                                                <option value=s.as_str() selected={s == current}>
                                                                    {s.label()}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
