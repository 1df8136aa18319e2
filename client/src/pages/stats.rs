//! Analytics, system health, and recent activity.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::panel::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::admin::{Analytics, Period, fetch_activity_logs, fetch_analytics, fetch_system_health};
use crate::net::api::{ApiClient, into_data};
use crate::net::types::{ActivityLog, summary_rows};
use crate::state::fetch::{FetchState, spawn_fetch};
use crate::state::toast::ToastState;
use crate::util::format::format_opt_date;
use crate::util::mounted::{MountFlag, RequestGate};

/// Activity log entries requested per load.
const LOG_LIMIT: u32 = 20;

#[component]
pub fn StatsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mounted = MountFlag::on_current_owner();

    let period = RwSignal::new(Period::default());
    let series: Vec<(Analytics, RwSignal<FetchState<Value>>, RequestGate)> = Analytics::ALL
        .into_iter()
        .map(|s| (s, RwSignal::new(FetchState::default()), mounted.gate()))
        .collect();
    let health_gate = mounted.gate();
    let logs_gate = mounted.gate();
    let health = RwSignal::new(FetchState::<Value>::default());
    let logs = RwSignal::new(FetchState::<Vec<ActivityLog>>::default());

    let load_analytics = Callback::new({
        let api = api.clone();
        let series = series.clone();
        move |()| {
            let current = period.get_untracked();
            for (kind, state, gate) in &series {
                let api = api.clone();
                let kind = *kind;
                let failure = format!("Failed to fetch {} analytics", kind.title().to_lowercase());
                spawn_fetch(*state, gate, toasts, async move {
                    into_data(fetch_analytics(&api, kind, current).await, &failure)
                });
            }
        }
    });

    let load_system = Callback::new(move |()| {
        let health_api = api.clone();
        spawn_fetch(health, &health_gate, toasts, async move {
            into_data(fetch_system_health(&health_api).await, "Failed to fetch system health")
        });
        let logs_api = api.clone();
        spawn_fetch(logs, &logs_gate, toasts, async move {
            into_data(fetch_activity_logs(&logs_api, LOG_LIMIT).await, "Failed to fetch activity logs").map(|l| l.logs)
        });
    });

    Effect::new(move || {
        period.track();
        load_analytics.run(());
    });
    load_system.run(());

    view! {
        <section class="page stats-page">
            <h1 class="page__title">"Statistics"</h1>
            <label class="filters__label">
                "Period "
                <select on:change=move |ev| {
                    if let Some(p) = Period::parse(&event_target_value(&ev)) {
                        period.set(p);
                    }
                }>
                    {Period::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option value=p.as_str() selected={p == Period::default()}>
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <div class="summary-grid">
                {series
                    .into_iter()
                    .map(|(kind, state, _)| {
                        view! { <SummaryPanel title=kind.title() state=state on_retry=load_analytics/> }
                    })
                    .collect_view()}
                <SummaryPanel title="System Health" state=health on_retry=load_system/>
            </div>
            <h2 class="page__section">"Recent Activity"</h2>
            {move || match logs.get() {
                FetchState::Loading => view! { <LoadingPanel/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load_system/> }.into_any(),
                FetchState::Ready(entries) if entries.is_empty() => {
                    view! { <EmptyPanel message="No recent activity."/> }.into_any()
                }
                FetchState::Ready(entries) => view! {
                    <ul class="activity-log">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li class="activity-log__entry">
                                        <span class="activity-log__when">
                                            {format_opt_date(entry.created_at.as_deref())}
                                        </span>
                                        <span class="activity-log__action">{entry.action}</span>
                                        <span class="activity-log__actor">{entry.actor.unwrap_or_default()}</span>
                                        <span class="activity-log__details">{entry.details.unwrap_or_default()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}

/// Key/value rows for one analytics or health payload.
#[component]
fn SummaryPanel(title: &'static str, state: RwSignal<FetchState<Value>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="summary-panel">
            <h2 class="summary-panel__title">{title}</h2>
            {move || match state.get() {
                FetchState::Loading => view! { <LoadingPanel/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any(),
                FetchState::Ready(value) => {
                    let rows = summary_rows(&value);
                    if rows.is_empty() {
                        return view! { <EmptyPanel message="No data for this period."/> }.into_any();
                    }
                    view! {
                        <dl class="summary-panel__rows">
                            {rows
                                .into_iter()
                                .map(|(key, value)| view! { <dt>{key}</dt><dd>{value}</dd> })
                                .collect_view()}
                        </dl>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
