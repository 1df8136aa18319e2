//! Dashboard landing page with headline platform numbers.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::panel::{ErrorPanel, LoadingPanel};
use crate::components::stats_card::StatsCard;
use crate::net::admin::fetch_dashboard_stats;
use crate::net::api::{ApiClient, into_data};
use crate::net::types::DashboardStats;
use crate::state::fetch::{FetchState, spawn_fetch};
use crate::state::toast::ToastState;
use crate::util::format::format_amount;
use crate::util::mounted::MountFlag;

/// `(title, value, tone)` for each dashboard card.
pub fn stat_cards(stats: &DashboardStats) -> Vec<(&'static str, String, &'static str)> {
    vec![
        ("Total Users", stats.total_users.to_string(), "gray"),
        ("Total Signups", stats.total_signups.to_string(), "gray"),
        ("Total Quizzes", stats.total_quizzes.to_string(), "gray"),
        (
            "Pending Quizzes",
            stats.pending_quizzes.to_string(),
            if stats.pending_quizzes > 0 { "yellow" } else { "green" },
        ),
        ("Total Revenue", format_amount(stats.total_revenue), "green"),
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gate = MountFlag::on_current_owner().gate();
    let stats = RwSignal::new(FetchState::<DashboardStats>::default());

    let load = Callback::new(move |()| {
        let api = api.clone();
        spawn_fetch(stats, &gate, toasts, async move {
            into_data(fetch_dashboard_stats(&api).await, "Failed to fetch dashboard stats")
        });
    });
    load.run(());

    view! {
        <section class="page home-page">
            <h1 class="page__title">"Dashboard"</h1>
            {move || match stats.get() {
                FetchState::Loading => view! { <LoadingPanel/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load/> }.into_any(),
                FetchState::Ready(stats) => view! {
                    <div class="stats-grid">
                        {stat_cards(&stats)
                            .into_iter()
                            .map(|(title, value, tone)| view! { <StatsCard title=title value=value tone=tone/> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
