//! Track screen: look up a grievance by tracking code.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_meta::Title;

use crate::error::LookupError;
use crate::services::lookup::find_grievance;
use crate::services::supabase::SupabaseClient;
use crate::types::GrievanceRecord;

#[component]
pub fn TrackPage() -> impl IntoView {
    let (code, set_code) = create_signal(String::new());
    let (is_searching, set_is_searching) = create_signal(false);
    let (outcome, set_outcome) = create_signal(None::<Result<GrievanceRecord, LookupError>>);

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_searching.get_untracked() {
            return;
        }
        set_is_searching.set(true);
        set_outcome.set(None);
        let query = code.get_untracked();

        spawn_local(async move {
            let client = SupabaseClient::from_config();
            let result = find_grievance(&client, &query).await;
            set_outcome.set(Some(result));
            set_is_searching.set(false);
        });
    };

    view! {
        <Title text="Track Your Issue"/>
        <div class="container">
            <div class="form-card">
                <h1>"Track Your Issue"</h1>
                <p class="subtitle">"Enter your tracking code to check the status"</p>

                <form on:submit=on_search>
                    <div class="form-field">
                        <label>"Tracking Code"</label>
                        <input
                            type="text"
                            placeholder="Enter your tracking code"
                            prop:value=move || code.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || is_searching.get()
                    >
                        {move || if is_searching.get() { "Checking..." } else { "Check Status" }}
                    </button>
                </form>

                {move || {
                    outcome
                        .get()
                        .map(|result| match result {
                            Ok(record) => {
                                let filed = record.created_at.format("%d %b %Y").to_string();
                                view! {
                                    <div class="lookup-result">
                                        <h2>
                                            "Status: "
                                            <span class=record.status.css_class()>
                                                {record.status.to_string()}
                                            </span>
                                        </h2>
                                        <p>{record.status.detail()}</p>
                                        <div class="lookup-details">
                                            <div class="review-row">
                                                <span class="review-label">"Description"</span>
                                                <span>{record.description.clone()}</span>
                                            </div>
                                            <div class="review-row">
                                                <span class="review-label">"Location"</span>
                                                <span>{record.location.clone()}</span>
                                            </div>
                                            <div class="review-row">
                                                <span class="review-label">"Filed"</span>
                                                <span>{filed}</span>
                                            </div>
                                            <img
                                                class="photo-preview"
                                                src=record.image_url.clone()
                                                alt="Reported issue"
                                            />
                                        </div>
                                    </div>
                                }
                                .into_view()
                            }
                            Err(LookupError::NotFound) => view! {
                                <div class="lookup-empty">
                                    "No grievance found for this tracking code."
                                </div>
                            }
                            .into_view(),
                            Err(e) => view! {
                                <div class="status-message">{e.to_string()}</div>
                            }
                            .into_view(),
                        })
                }}
            </div>
        </div>
    }
}
