//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"GrievanceHub: Empowering Citizens, Enhancing Accountability"</h1>
            <p class="subtitle">
                "Facing issues in your locality? Report them anonymously on GrievanceHub, "
                "the transparent and secure grievance redressal platform for your municipality."
            </p>
        </div>
    }
}
