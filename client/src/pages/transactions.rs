//! Transaction review: withdrawals to approve or reject, and refunds.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;

use crate::components::panel::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::admin::{approve_withdrawal, fetch_transactions, process_refund, reject_withdrawal};
use crate::net::api::{ApiClient, into_ack, into_data};
use crate::net::types::{RefundRequest, Transaction, TransactionStatus};
use crate::state::fetch::{FetchState, spawn_fetch, spawn_task};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::filter::filter_transactions;
use crate::util::format::{capitalize, format_amount, format_opt_date, status_tone};
use crate::util::mounted::MountFlag;

/// Status filter options; the empty value lists every status.
pub const STATUS_FILTERS: [(&str, &str); 6] = [
    ("", "All"),
    ("pending", "Pending"),
    ("completed", "Completed"),
    ("failed", "Failed"),
    ("rejected", "Rejected"),
    ("refunded", "Refunded"),
];

/// Validate the refund form.
///
/// # Errors
///
/// Returns a user-facing message for the first invalid field.
pub fn parse_refund(transaction_id: &str, amount: &str, reason: &str) -> Result<RefundRequest, &'static str> {
    let transaction_id = transaction_id.trim();
    if transaction_id.is_empty() {
        return Err("Transaction ID is required");
    }
    let amount = amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or("Enter a refund amount greater than zero")?;
    let reason = reason.trim();
    if reason.is_empty() {
        return Err("Please provide a reason for the refund");
    }
    Ok(RefundRequest {
        transaction_id: transaction_id.to_owned(),
        amount,
        reason: reason.to_owned(),
    })
}

/// Status a transaction ends in after a successful admin action.
pub fn apply_transaction_status(list: &mut [Transaction], id: &str, status: TransactionStatus) -> bool {
    match list.iter_mut().find(|t| t.id == id) {
        Some(t) => {
            t.status = status;
            true
        }
        None => false,
    }
}

#[derive(Clone, Debug, PartialEq)]
enum TransactionAction {
    Approve(String),
    Reject { id: String, reason: String },
    Refund(RefundRequest),
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mounted = MountFlag::on_current_owner();

    let transactions = RwSignal::new(FetchState::<Vec<Transaction>>::default());
    let status_filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let rejecting = RwSignal::new(None::<String>);
    let reject_reason = RwSignal::new(String::new());

    let refund_id = RwSignal::new(String::new());
    let refund_amount = RwSignal::new(String::new());
    let refund_reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load = Callback::new({
        let api = api.clone();
        let gate = mounted.gate();
        move |()| {
            let api = api.clone();
            let status = status_filter.get_untracked();
            spawn_fetch(transactions, &gate, toasts, async move {
                into_data(fetch_transactions(&api, &status).await, "Failed to fetch transactions")
                    .map(|l| l.transactions)
            });
        }
    });

    Effect::new(move || {
        status_filter.track();
        load.run(());
    });

    let act = Callback::new(move |action: TransactionAction| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        let mounted = mounted.clone();
        spawn_task(async move {
            let (result, done, updated) = match &action {
                TransactionAction::Approve(id) => (
                    into_ack(approve_withdrawal(&api, id).await, "Failed to approve withdrawal"),
                    "Withdrawal approved",
                    Some((id.clone(), TransactionStatus::Completed)),
                ),
                TransactionAction::Reject { id, reason } => (
                    into_ack(reject_withdrawal(&api, id, reason).await, "Failed to reject withdrawal"),
                    "Withdrawal rejected",
                    Some((id.clone(), TransactionStatus::Rejected)),
                ),
                TransactionAction::Refund(refund) => (
                    into_ack(process_refund(&api, refund).await, "Failed to process refund"),
                    "Refund processed",
                    None,
                ),
            };
            mounted.run_if_live(|| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        notify_success(toasts, done);
                        rejecting.set(None);
                        match updated {
                            Some((id, status)) => transactions.update(|s| {
                                s.update_ready(|list| {
                                    apply_transaction_status(list, &id, status);
                                });
                            }),
                            None => {
                                refund_id.set(String::new());
                                refund_amount.set(String::new());
                                refund_reason.set(String::new());
                                load.run(());
                            }
                        }
                    }
                    Err(message) => notify_error(toasts, message),
                }
            });
        });
    });

    let on_refund = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_refund(
            &refund_id.get_untracked(),
            &refund_amount.get_untracked(),
            &refund_reason.get_untracked(),
        ) {
            Ok(refund) => act.run(TransactionAction::Refund(refund)),
            Err(message) => notify_error(toasts, message),
        }
    };

    let on_confirm_reject = move |_| {
        let Some(id) = rejecting.get_untracked() else {
            return;
        };
        let reason = reject_reason.get_untracked().trim().to_owned();
        if reason.is_empty() {
            notify_error(toasts, "Please provide a reason for rejection");
            return;
        }
        act.run(TransactionAction::Reject { id, reason });
    };

    view! {
        <section class="page transactions-page">
            <h1 class="page__title">"Transactions"</h1>
            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by type or user"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select class="filters__select" on:change=move |ev| status_filter.set(event_target_value(&ev))>
                    {STATUS_FILTERS
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || match transactions.get() {
                FetchState::Loading => view! { <LoadingPanel message="Loading transactions..."/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load/> }.into_any(),
                FetchState::Ready(list) => {
                    let rows = filter_transactions(&list, &search.get());
                    if rows.is_empty() {
                        return view! { <EmptyPanel message="No transactions found."/> }.into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"User"</th>
                                    <th>"Amount"</th>
                                    <th>"Status"</th>
                                    <th>"Date"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|t| transaction_row(t, busy, rejecting, reject_reason, act, refund_id, refund_amount)).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
            <Show when=move || rejecting.get().is_some()>
                <div class="modal-backdrop">
                    <div class="modal" role="dialog" aria-modal="true">
                        <h2 class="modal__title">"Reject withdrawal"</h2>
                        <textarea
                            class="modal__textarea"
                            placeholder="Reason for rejection"
                            prop:value=move || reject_reason.get()
                            on:input=move |ev| reject_reason.set(event_target_value(&ev))
                        ></textarea>
                        <div class="modal__actions">
                            <button class="btn" on:click=move |_| rejecting.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" disabled=move || busy.get() on:click=on_confirm_reject>
                                "Reject"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
            <form class="refund-form" on:submit=on_refund>
                <h2 class="page__section">"Process Refund"</h2>
                <input
                    type="text"
                    placeholder="Transaction ID"
                    prop:value=move || refund_id.get()
                    on:input=move |ev| refund_id.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Amount"
                    prop:value=move || refund_amount.get()
                    on:input=move |ev| refund_amount.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Reason"
                    prop:value=move || refund_reason.get()
                    on:input=move |ev| refund_reason.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Refund"
                </button>
            </form>
        </section>
    }
}

fn transaction_row(
    t: Transaction,
    busy: RwSignal<bool>,
    rejecting: RwSignal<Option<String>>,
    reject_reason: RwSignal<String>,
    act: Callback<TransactionAction>,
    refund_id: RwSignal<String>,
    refund_amount: RwSignal<String>,
) -> impl IntoView {
    let user = t.user.clone().unwrap_or_default();
    let who = user.name.or(user.email).unwrap_or_else(|| "-".to_owned());
    let status = t.status.as_str();
    let actionable = t.is_actionable_withdrawal();
    let refundable = t.is_refundable();
    let approve_id = t.id.clone();
    let reject_id = t.id.clone();
    let refund_target = (t.id.clone(), t.amount);

    view! {
        <tr>
            <td>{capitalize(&t.kind)}</td>
            <td>{who}</td>
            <td>{format_amount(t.amount)}</td>
            <td>
                <span class=format!("badge badge--{}", status_tone(status))>{capitalize(status)}</span>
            </td>
            <td>{format_opt_date(t.created_at.as_deref())}</td>
            <td class="data-table__actions">
                <Show when=move || actionable>
                    <button
                        class="btn btn--small btn--success"
                        disabled=move || busy.get()
                        on:click={
                            let id = approve_id.clone();
                            move |_| act.run(TransactionAction::Approve(id.clone()))
                        }
                    >
                        "Approve"
                    </button>
                    <button
                        class="btn btn--small btn--danger"
                        on:click={
                            let id = reject_id.clone();
                            move |_| {
                                reject_reason.set(String::new());
                                rejecting.set(Some(id.clone()));
                            }
                        }
                    >
                        "Reject"
                    </button>
                </Show>
                <Show when=move || refundable>
                    <button
                        class="btn btn--small"
                        on:click={
                            let (id, amount) = refund_target.clone();
                            move |_| {
                                refund_id.set(id.clone());
                                refund_amount.set(format!("{amount:.2}"));
                            }
                        }
                    >
                        "Refund"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
