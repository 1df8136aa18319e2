//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guard::{ProtectedRoute, PublicRoute};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::toaster::Toaster;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    ai_quiz::AiQuizPage, contact_list::ContactListPage, dashboard_user_list::DashboardUserListPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, quiz_management::QuizManagementPage,
    signup::SignUpPage, stats::StatsPage, transactions::TransactionsPage, user_list::UserListPage,
};
use crate::state::session::{SessionStatus, SessionStore};
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the session store, its status mirror, the API client, and the
/// toast queue, then mounts the header, guarded routes, and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::browser();
    let status = RwSignal::new(session.status());

    // Keep the mirror current for every same-tab sign-in/out and every
    // forwarded cross-tab storage event.
    let subscription = session.subscribe(move |next| {
        let _ = status.try_set(next);
    });
    on_cleanup({
        let session = session.clone();
        move || {
            session.unsubscribe(subscription);
        }
    });

    let api = ApiClient::new(ApiConfig::from_build_env(), session.tokens().clone());
    leptos::logging::log!("QuizArena admin using API at {}", api.config().base_url());

    provide_context(session);
    provide_context(status);
    provide_context(api);
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Title text="QuizArena Admin"/>

        <Router>
            <SiteHeader/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <PublicRoute><SignUpPage/></PublicRoute> }
                    />
                    <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("userlist") view=UserListPage/>
                        <Route path=StaticSegment("dashboarduserlist") view=DashboardUserListPage/>
                        <Route path=StaticSegment("contacts") view=ContactListPage/>
                        <Route path=StaticSegment("quizzes") view=QuizManagementPage/>
                        <Route path=StaticSegment("stats") view=StatsPage/>
                        <Route path=StaticSegment("transactions") view=TransactionsPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("ai-quiz") view=AiQuizPage/>
                    </ParentRoute>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
        <Toaster/>
    }
}
