//! AI-generated quizzes awaiting or past moderation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::panel::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::admin::fetch_ai_quizzes;
use crate::net::api::{ApiClient, into_data};
use crate::net::types::Quiz;
use crate::state::fetch::{FetchState, spawn_fetch};
use crate::state::toast::ToastState;
use crate::util::filter::filter_quizzes;
use crate::util::format::{capitalize, format_opt_date, status_tone};
use crate::util::mounted::MountFlag;

#[component]
pub fn AiQuizPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gate = MountFlag::on_current_owner().gate();
    let quizzes = RwSignal::new(FetchState::<Vec<Quiz>>::default());
    let search = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        let api = api.clone();
        spawn_fetch(quizzes, &gate, toasts, async move {
            into_data(fetch_ai_quizzes(&api).await, "Failed to fetch AI quizzes").map(|l| l.quizzes)
        });
    });
    load.run(());

    view! {
        <section class="page ai-quiz-page">
            <h1 class="page__title">"AI Quizzes"</h1>
            <p class="page__subtitle">
                "Quizzes generated by the AI assistant. Moderate them from "
                <A href="/quizzes">"Quiz Management"</A>
                "."
            </p>
            <input
                class="search-input"
                type="search"
                placeholder="Search by title, creator or category"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            {move || match quizzes.get() {
                FetchState::Loading => view! { <LoadingPanel message="Loading AI quizzes..."/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load/> }.into_any(),
                FetchState::Ready(list) => {
                    let rows = filter_quizzes(&list, &search.get());
                    if rows.is_empty() {
                        return view! { <EmptyPanel message="No AI quizzes found."/> }.into_any();
                    }
                    view! {
                        <ul class="quiz-cards">
                            {rows
                                .into_iter()
                                .map(|quiz| {
                                    let status = quiz.status.as_str();
                                    view! {
                                        <li class="quiz-card">
                                            <span class="quiz-card__title">{quiz.title.clone()}</span>
                                            <span class="quiz-card__meta">
                                                {quiz.category.clone().unwrap_or_default()}
                                                " · "
                                                {format!("{} questions", quiz.questions.len())}
                                            </span>
                                            <span class=format!("badge badge--{}", status_tone(status))>
                                                {capitalize(status)}
                                            </span>
                                            <span class="quiz-card__date">{format_opt_date(quiz.created_at.as_deref())}</span>
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
