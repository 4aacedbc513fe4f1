use leptos::*;
use leptos_router::A;

use crate::config::APP_NAME;
use crate::services::session::SessionContext;

#[component]
pub fn Header(session: SessionContext) -> impl IntoView {
    let user = session.user();

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <nav class="header-nav">
                <A href="/report" class="nav-link">"Report an Issue"</A>
                <A href="/track" class="nav-link">"Track an Issue"</A>
            </nav>
            <div class="header-right">
                {move || match user.get() {
                    Some(u) => {
                        let session = session.clone();
                        let label = u.email.unwrap_or_else(|| "Signed in".to_string());
                        view! {
                            <div class="session">
                                <span class="session-email">{label}</span>
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| session.sign_out()
                                >
                                    "Sign Out"
                                </button>
                            </div>
                        }
                        .into_view()
                    }
                    None => view! {
                        <span class="badge">"Anonymous reporting"</span>
                    }
                    .into_view(),
                }}
            </div>
        </header>
    }
}
