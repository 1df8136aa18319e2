//! Quiz moderation: status tabs, search, review modal, approve and reject.
//!
//! Approving or rejecting closes the modal and reloads the current tab. The
//! modal remembers which quiz it was opened for; a details response for any
//! other quiz is dropped.

#[cfg(test)]
#[path = "quiz_management_test.rs"]
mod quiz_management_test;

use leptos::prelude::*;

use crate::components::panel::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::admin::{QuizFilter, approve_quiz, fetch_quiz_review, fetch_quizzes, reject_quiz};
use crate::net::api::{ApiClient, into_ack, into_data};
use crate::net::types::{Question, Quiz, QuizStatus};
use crate::state::fetch::{FetchState, spawn_fetch, spawn_task};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::filter::filter_quizzes;
use crate::util::format::{capitalize, format_amount, format_opt_date, status_tone};
use crate::util::mounted::MountFlag;
use crate::util::validate::{REASON_MAX_CHARS, validate_reason};

/// Questions shown in the review modal.
pub const PREVIEW_QUESTIONS: usize = 3;

pub fn preview_questions(quiz: &Quiz) -> &[Question] {
    &quiz.questions[..quiz.questions.len().min(PREVIEW_QUESTIONS)]
}

/// `... and N more questions` when the preview is truncated.
pub fn more_questions_note(quiz: &Quiz) -> Option<String> {
    let hidden = quiz.questions.len().saturating_sub(PREVIEW_QUESTIONS);
    (hidden > 0).then(|| format!("... and {hidden} more questions"))
}

pub fn price_label(quiz: &Quiz) -> String {
    match quiz.price {
        Some(price) if quiz.is_paid => format_amount(price),
        _ => "Free".to_owned(),
    }
}

/// Review modal contents: the requested quiz id and its load state.
pub type ReviewSlot = Option<(String, FetchState<Quiz>)>;

/// Store a finished details load only if the modal still shows `quiz_id`.
pub fn accept_review(slot: &mut ReviewSlot, quiz_id: &str, result: Result<Quiz, String>) -> bool {
    match slot {
        Some((open_id, state)) if open_id == quiz_id => {
            *state = FetchState::from_result(result);
            true
        }
        _ => false,
    }
}

/// Quiz the modal's approve/reject buttons act on, once its details loaded.
pub fn reviewed_quiz_id(slot: &ReviewSlot) -> Option<String> {
    match slot {
        Some((id, FetchState::Ready(_))) => Some(id.clone()),
        _ => None,
    }
}

/// Character counter under the rejection textarea.
pub fn reason_counter(reason: &str) -> String {
    format!("{}/{REASON_MAX_CHARS} characters", reason.chars().count())
}

#[component]
pub fn QuizManagementPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mounted = MountFlag::on_current_owner();

    let quizzes = RwSignal::new(FetchState::<Vec<Quiz>>::default());
    let filter = RwSignal::new(QuizFilter::default());
    let search = RwSignal::new(String::new());

    let review = RwSignal::new(ReviewSlot::None);
    let review_gate = mounted.gate();
    let show_reject = RwSignal::new(false);
    let reject_reason = RwSignal::new(String::new());
    let acting = RwSignal::new(false);

    let load = Callback::new({
        let api = api.clone();
        let gate = mounted.gate();
        move |()| {
            let api = api.clone();
            let current = filter.get_untracked();
            spawn_fetch(quizzes, &gate, toasts, async move {
                into_data(fetch_quizzes(&api, current).await, "Failed to fetch quizzes").map(|list| list.quizzes)
            });
        }
    });

    Effect::new(move || {
        filter.track();
        load.run(());
    });

    let open_review = Callback::new({
        let api = api.clone();
        let gate = review_gate.clone();
        move |quiz_id: String| {
            let ticket = gate.begin();
            review.set(Some((quiz_id.clone(), FetchState::Loading)));
            show_reject.set(false);
            let api = api.clone();
            spawn_task(async move {
                let result =
                    into_data(fetch_quiz_review(&api, &quiz_id).await, "Failed to fetch quiz details").map(|r| r.quiz);
                ticket.run_if_current(|| {
                    let failure = result.as_ref().err().cloned();
                    let accepted = review.try_update(|r| accept_review(r, &quiz_id, result)).unwrap_or(false);
                    if let (true, Some(message)) = (accepted, failure) {
                        notify_error(toasts, message);
                    }
                });
            });
        }
    });

    let close_review = Callback::new(move |()| {
        review_gate.cancel();
        review.set(None);
    });

    // `Some(reason)` rejects, `None` approves.
    let decide = Callback::new(move |(quiz_id, reason): (String, Option<String>)| {
        if acting.get_untracked() {
            return;
        }
        acting.set(true);
        let api = api.clone();
        let mounted = mounted.clone();
        spawn_task(async move {
            let approving = reason.is_none();
            let result = match &reason {
                Some(reason) => into_ack(reject_quiz(&api, &quiz_id, reason).await, "Failed to reject quiz"),
                None => into_ack(approve_quiz(&api, &quiz_id, "").await, "Failed to approve quiz"),
            };
            mounted.run_if_live(|| {
                acting.set(false);
                match result {
                    Ok(()) => {
                        notify_success(toasts, if approving { "Quiz approved" } else { "Quiz rejected" });
                        close_review.run(());
                        show_reject.set(false);
                        reject_reason.set(String::new());
                        load.run(());
                    }
                    Err(message) => notify_error(toasts, message),
                }
            });
        });
    });

    let reviewed_id = move || review.with_untracked(reviewed_quiz_id);

    let on_approve = move |_| {
        if let Some(id) = reviewed_id() {
            decide.run((id, None));
        }
    };

    let on_reject = move |_| {
        let Some(id) = reviewed_id() else {
            return;
        };
        match validate_reason(&reject_reason.get_untracked()) {
            Ok(reason) => decide.run((id, Some(reason))),
            Err(message) => notify_error(toasts, message),
        }
    };

    view! {
        <section class="page quiz-management-page">
            <h1 class="page__title">"Quiz Management"</h1>
            <p class="page__subtitle">"Review and manage quiz submissions"</p>
            <div class="tabs">
                {QuizFilter::TABS
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || filter.get() == f
                                on:click=move |_| filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <input
                class="search-input"
                type="search"
                placeholder="Search by title, creator or category"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            {move || match quizzes.get() {
                FetchState::Loading => view! { <LoadingPanel message="Loading quiz management..."/> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message=message on_retry=load/> }.into_any(),
                FetchState::Ready(list) => {
                    let rows = filter_quizzes(&list, &search.get());
                    if rows.is_empty() {
                        return view! { <EmptyPanel message="No quizzes found for the selected filter."/> }
                            .into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Creator"</th>
                                    <th>"Category"</th>
                                    <th>"Questions"</th>
                                    <th>"Price"</th>
                                    <th>"Status"</th>
                                    <th>"Created"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|quiz| {
                                        let id = quiz.id.clone();
                                        let status = quiz.status.as_str();
                                        view! {
                                            <tr>
                                                <td>{quiz.title.clone()}</td>
                                                <td>
                                                    {quiz.creator_name().to_owned()}
                                                    <span class="muted">{quiz.creator_email().to_owned()}</span>
                                                </td>
                                                <td>{quiz.category.clone().unwrap_or_default()}</td>
                                                <td>{quiz.questions.len()}</td>
                                                <td>{price_label(&quiz)}</td>
                                                <td>
                                                    <span class=format!("badge badge--{}", status_tone(status))>
                                                        {capitalize(status)}
                                                    </span>
                                                </td>
                                                <td>{format_opt_date(quiz.created_at.as_deref())}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| open_review.run(id.clone())
                                                    >
                                                        "Review"
                                                    </button>
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
            <Show when=move || review.get().is_some()>
                <div class="modal-backdrop">
                    <div class="modal modal--wide" role="dialog" aria-modal="true">
                        <button class="modal__close" aria-label="Close" on:click=move |_| close_review.run(())>
                            "✕"
                        </button>
                        {move || match review.get() {
                            None | Some((_, FetchState::Loading)) => view! { <LoadingPanel/> }.into_any(),
                            Some((_, FetchState::Failed(message))) => {
                                view! { <p class="modal__error">{message}</p> }.into_any()
                            }
                            Some((_, FetchState::Ready(quiz))) => view! {
                                <QuizReviewBody
                                    quiz=quiz
                                    acting=acting
                                    show_reject=show_reject
                                    reject_reason=reject_reason
                                    on_approve=Callback::new(on_approve)
                                    on_reject=Callback::new(on_reject)
                                />
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn QuizReviewBody(
    quiz: Quiz,
    acting: RwSignal<bool>,
    show_reject: RwSignal<bool>,
    reject_reason: RwSignal<String>,
    on_approve: Callback<()>,
    on_reject: Callback<()>,
) -> impl IntoView {
    let anti_cheat = quiz.anti_cheat();
    let flag = |on: bool, label: &'static str| {
        let (class, mark) = if on { ("flag flag--on", "✓ ") } else { ("flag flag--off", "✗ ") };
        view! {
            <li class=class>
                {mark}
                {label}
            </li>
        }
    };
    let pending = quiz.status == QuizStatus::Pending;
    let rejection = (quiz.status == QuizStatus::Rejected)
        .then(|| quiz.rejection_reason.clone())
        .flatten();
    let questions: Vec<Question> = preview_questions(&quiz).to_vec();
    let more = more_questions_note(&quiz);

    view! {
        <h2 class="modal__title">{quiz.title.clone()}</h2>
        <dl class="quiz-meta">
            <dt>"Creator"</dt>
            <dd>{format!("{} ({})", quiz.creator_name(), quiz.creator_email())}</dd>
            <dt>"Category"</dt>
            <dd>{quiz.category.clone().unwrap_or_else(|| "-".to_owned())}</dd>
            <dt>"Difficulty"</dt>
            <dd>{quiz.difficulty.as_deref().map(capitalize).unwrap_or_else(|| "-".to_owned())}</dd>
            <dt>"Price"</dt>
            <dd>{price_label(&quiz)}</dd>
            <dt>"Time limit"</dt>
            <dd>{quiz.time_limit.map_or_else(|| "None".to_owned(), |m| format!("{m} min"))}</dd>
            <dt>"Attempts"</dt>
            <dd>{quiz.attempt_count}</dd>
        </dl>
        <h3>"Anti-cheat"</h3>
        <ul class="flags">
            {flag(anti_cheat.detect_tab_switch, "Detect Tab Switch")}
            {flag(anti_cheat.detect_copy_paste, "Detect Copy/Paste")}
            {flag(anti_cheat.force_fullscreen, "Force Fullscreen")}
        </ul>
        <h3>"Description"</h3>
        <p>{quiz.description.clone().unwrap_or_else(|| "No description provided".to_owned())}</p>
        <h3>"Questions Preview"</h3>
        <ol class="question-preview">
            {questions
                .into_iter()
                .map(|q| {
                    let correct = q.correct_answer;
                    view! {
                        <li>
                            <p>{q.text}</p>
                            <ul class="question-preview__options">
                                {q
                                    .options
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, option)| {
                                        view! {
                                            <li class:option--correct={correct == Some(i)}>{option}</li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
        {more.map(|note| view! { <p class="muted">{note}</p> })}
        {rejection.map(|reason| view! { <p class="rejection">"Rejection Reason: " {reason}</p> })}
        <Show when=move || pending>
            <Show
                when=move || show_reject.get()
                fallback=move || {
                    view! {
                        <div class="modal__actions">
                            <button
                                class="btn btn--success"
                                disabled=move || acting.get()
                                on:click=move |_| on_approve.run(())
                            >
                                {move || if acting.get() { "Processing..." } else { "Approve Quiz" }}
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || acting.get()
                                on:click=move |_| show_reject.set(true)
                            >
                                "Reject Quiz"
                            </button>
                        </div>
                    }
                }
            >
                <textarea
                    class="modal__textarea"
                    maxlength={REASON_MAX_CHARS.to_string()}
                    placeholder="Explain why this quiz is rejected (at least 10 characters)"
                    prop:value=move || reject_reason.get()
                    on:input=move |ev| reject_reason.set(event_target_value(&ev))
                ></textarea>
                <p class="muted">{move || reason_counter(&reject_reason.get())}</p>
                <div class="modal__actions">
                    <button class="btn" on:click=move |_| show_reject.set(false)>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || { acting.get() || validate_reason(&reject_reason.get()).is_err() }
                        on:click=move |_| on_reject.run(())
                    >
                        "Confirm Rejection"
                    </button>
                </div>
            </Show>
        </Show>
    }
}
