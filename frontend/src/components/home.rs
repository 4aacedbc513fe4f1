//! Landing page: hero, feature cards, calls to action.

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::components::Hero;
use crate::config::APP_NAME;

struct Feature {
    title: &'static str,
    blurb: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        title: "Raise Concerns Anonymously",
        blurb: "Report potholes, garbage disposal, water shortages, and more \
                while keeping your identity confidential.",
    },
    Feature {
        title: "Upload Photos for Evidence",
        blurb: "Strengthen your complaint with images to ensure a quicker resolution.",
    },
    Feature {
        title: "Track Progress",
        blurb: "Stay updated with real-time issue status.",
    },
    Feature {
        title: "Automated Reminders",
        blurb: "If your problem is not addressed within a week, the municipal \
                council receives an automatic reminder.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=APP_NAME/>
        <div class="container">
            <Hero/>

            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="feature-card">
                                <h2>{f.title}</h2>
                                <p>{f.blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="cta-row">
                <A href="/report" class="btn btn-primary">"Report an Issue"</A>
                <A href="/track" class="btn btn-secondary">"Track an Issue"</A>
            </div>
        </div>
    }
}
