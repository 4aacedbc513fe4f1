//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 GrievanceHub. All rights reserved."</div>
            <div class="footer-links">
                <a href="/about" class="footer-link">"About"</a>
                <a href="/contact" class="footer-link">"Contact"</a>
                <a href="/privacy" class="footer-link">"Privacy Policy"</a>
            </div>
        </footer>
    }
}
