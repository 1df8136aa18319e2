//! Headline number card used on the dashboard and stats pages.

use leptos::prelude::*;

#[component]
pub fn StatsCard(
    title: &'static str,
    #[prop(into)] value: String,
    #[prop(optional, into)] detail: Option<String>,
    #[prop(default = "gray")] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stats-card stats-card--{tone}")>
            <span class="stats-card__title">{title}</span>
            <span class="stats-card__value">{value}</span>
            {detail.map(|d| view! { <span class="stats-card__detail">{d}</span> })}
        </div>
    }
}
