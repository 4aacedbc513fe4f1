//! Grievance report form.
//!
//! A four-step flow over [`SubmissionDraft`]: pick a photo, describe the
//! issue, review, submit. The submit control is disabled while its upload
//! is in flight; the draft is only cleared after the orchestrator confirms
//! the record exists.

use leptos::*;
use leptos_meta::Title;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::MAX_FILE_SIZE;
use crate::services::preview;
use crate::services::submit::{submit_grievance, SubmitPolicy};
use crate::services::supabase::SupabaseClient;
use crate::state::{FormStep, SubmissionDraft};

const STEPS: [FormStep; 4] = [
    FormStep::SelectPhoto,
    FormStep::EnterDetails,
    FormStep::Review,
    FormStep::Result,
];

#[component]
pub fn ReportPage() -> impl IntoView {
    let draft = create_rw_signal(SubmissionDraft::<File>::new());
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (submitted_code, set_submitted_code) = create_signal(None::<String>);

    let step = move || draft.with(|d| d.step);
    let status_message = move || draft.with(|d| d.status_message.clone());
    let preview_data = move || draft.with(|d| d.preview.clone());

    // Handler for the hidden file input.
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else { return };
        let Some(file) = files.get(0) else { return };

        if !preview::is_image(&file) {
            // Rejected without touching the draft.
            log::warn!("rejected non-image selection: {:?}", file.type_());
            return;
        }
        if file.size() as usize > MAX_FILE_SIZE {
            draft.update(|d| d.set_status("photo is too large (10 MB max)"));
            return;
        }

        let name = file.name();
        draft.update(|d| d.select_file(file.clone(), name));

        spawn_local(async move {
            match preview::encode_preview(&file).await {
                Ok(data_url) => draft.update(|d| d.set_preview(data_url)),
                Err(e) => {
                    log::warn!("preview read failed: {}", e);
                    draft.update(|d| d.clear_file());
                }
            }
        });
    };

    // Clicking anywhere in the drop zone opens the picker.
    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("photoInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    let on_next = move |_| {
        draft.update(|d| {
            if let Err(reason) = d.advance() {
                d.set_status(reason);
            }
        });
    };

    let on_back = move |_| {
        draft.update(|d| {
            d.back();
        });
    };

    let on_submit = move |_| {
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        let snapshot = draft.get_untracked();

        spawn_local(async move {
            let client = SupabaseClient::from_config();
            match submit_grievance(&client, &client, &snapshot, &SubmitPolicy::default()).await {
                Ok(record) => {
                    log::info!("grievance filed under code {}", record.code);
                    set_submitted_code.set(Some(record.code));
                    draft.update(|d| d.complete());
                }
                Err(e) => {
                    log::error!("submission failed: {}", e);
                    draft.update(|d| d.fail(e.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let on_reset = move |_| {
        set_submitted_code.set(None);
        draft.update(|d| d.reset());
    };

    view! {
        <Title text="Report an Issue"/>
        <div class="container">
            <div class="form-card">
                <h1>"Report an Issue"</h1>

                <div class="step-indicator">
                    {STEPS
                        .into_iter()
                        .map(|s| {
                            view! {
                                <div
                                    class="step"
                                    class:active=move || step() == s
                                    class:done=move || (step().index() > s.index())
                                >
                                    {s.label()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <Show
                    when=move || status_message().is_some()
                    fallback=|| view! { }
                >
                    <div class="status-message">
                        {move || status_message().unwrap_or_default()}
                    </div>
                </Show>

                // Step 1: pick a photo.
                <Show
                    when=move || step() == FormStep::SelectPhoto
                    fallback=|| view! { }
                >
                    <div class="upload-section" on:click=trigger_file_input>
                        <div class="upload-icon">"📷"</div>
                        <div class="upload-text">
                            {move || {
                                draft
                                    .with(|d| d.file_name.clone())
                                    .unwrap_or_else(|| "Add a photo of the issue".to_string())
                            }}
                        </div>
                        <div class="upload-hint">"or click to select an image"</div>
                        <input
                            type="file"
                            id="photoInput"
                            accept="image/*"
                            style="display:none"
                            on:change=on_file_change
                        />
                        <label for="photoInput" class="upload-button">
                            "Choose a photo"
                        </label>
                    </div>

                    <Show
                        when=move || preview_data().is_some()
                        fallback=|| view! { }
                    >
                        <img
                            class="photo-preview"
                            src=move || preview_data().unwrap_or_default()
                            alt="Selected photo"
                        />
                    </Show>

                    <div class="form-footer">
                        <button
                            class="btn btn-primary"
                            on:click=on_next
                            disabled=move || !draft.with(|d| d.can_advance())
                        >
                            "Next"
                        </button>
                    </div>
                </Show>

                // Step 2: describe the issue.
                <Show
                    when=move || step() == FormStep::EnterDetails
                    fallback=|| view! { }
                >
                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            placeholder="What is the problem?"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.set_description(event_target_value(&ev)))
                            }
                        ></textarea>
                    </div>
                    <div class="form-field">
                        <label>"Location"</label>
                        <input
                            type="text"
                            placeholder="Street, landmark or area"
                            prop:value=move || draft.with(|d| d.location.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.set_location(event_target_value(&ev)))
                            }
                        />
                    </div>
                    <div class="form-footer">
                        <button class="btn btn-secondary" on:click=on_back>"Back"</button>
                        <button
                            class="btn btn-primary"
                            on:click=on_next
                            disabled=move || !draft.with(|d| d.can_advance())
                        >
                            "Next"
                        </button>
                    </div>
                </Show>

                // Step 3: review and submit.
                <Show
                    when=move || step() == FormStep::Review
                    fallback=|| view! { }
                >
                    <div class="review-panel">
                        <Show
                            when=move || preview_data().is_some()
                            fallback=|| view! { <div class="photo-placeholder">"Photo attached"</div> }
                        >
                            <img
                                class="photo-preview"
                                src=move || preview_data().unwrap_or_default()
                                alt="Selected photo"
                            />
                        </Show>
                        <div class="review-row">
                            <span class="review-label">"Description"</span>
                            <span>{move || draft.with(|d| d.description.clone())}</span>
                        </div>
                        <div class="review-row">
                            <span class="review-label">"Location"</span>
                            <span>{move || draft.with(|d| d.location.clone())}</span>
                        </div>
                    </div>
                    <div class="form-footer">
                        <button
                            class="btn btn-secondary"
                            on:click=on_back
                            disabled=move || is_submitting.get()
                        >
                            "Back"
                        </button>
                        <button
                            class="btn btn-primary"
                            on:click=on_submit
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() { "Submitting..." } else { "Submit Report" }}
                        </button>
                    </div>
                </Show>

                // Step 4: tracking code on display.
                <Show
                    when=move || step() == FormStep::Result
                    fallback=|| view! { }
                >
                    <div class="result-panel">
                        <h2>"Report submitted"</h2>
                        <p>"Your tracking code:"</p>
                        <div class="tracking-code">
                            {move || submitted_code.get().unwrap_or_default()}
                        </div>
                        <p class="result-hint">
                            "Save this code. You will need it to check the status of your report."
                        </p>
                        <button class="btn btn-primary" on:click=on_reset>
                            "Submit Another Issue"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
