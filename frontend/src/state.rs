//! Submission form state machine.
//!
//! The in-progress draft and its transition rules live here as a plain
//! value object with pure transition functions, so the whole flow is
//! unit-testable without a browser. The draft is generic over the file
//! handle type: the app instantiates it with `web_sys::File`, tests with
//! any placeholder.

// =============================================================================
// Steps
// =============================================================================

/// Ordered stages of the report form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStep {
    /// Pick a photo of the issue.
    SelectPhoto,
    /// Describe the issue and where it is.
    EnterDetails,
    /// Confirm everything before submitting.
    Review,
    /// Submission succeeded; tracking code on display.
    Result,
}

impl FormStep {
    /// Zero-based position in the step indicator.
    pub fn index(&self) -> usize {
        match self {
            FormStep::SelectPhoto => 0,
            FormStep::EnterDetails => 1,
            FormStep::Review => 2,
            FormStep::Result => 3,
        }
    }

    /// Short label for the step indicator.
    pub fn label(&self) -> &'static str {
        match self {
            FormStep::SelectPhoto => "Photo",
            FormStep::EnterDetails => "Details",
            FormStep::Review => "Review",
            FormStep::Result => "Done",
        }
    }
}

// =============================================================================
// Draft
// =============================================================================

/// The in-progress, unsaved submission held only in client-local state.
///
/// Created empty on mount, mutated by user input and step navigation,
/// destroyed after a terminal success or an explicit "start over".
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionDraft<F> {
    /// Selected photo; owned exclusively by the form while editing,
    /// discarded on reset or successful submit.
    pub file: Option<F>,
    /// Original filename of the selected photo.
    pub file_name: Option<String>,
    /// Data-URL preview of the photo; derived, never persisted remotely.
    pub preview: Option<String>,
    /// Complaint text; required non-empty at submit time.
    pub description: String,
    /// Where the issue is; required non-empty at submit time.
    pub location: String,
    /// Current stage of the form.
    pub step: FormStep,
    /// Transient human-readable state, cleared on every state-changing
    /// action.
    pub status_message: Option<String>,
}

impl<F> Default for SubmissionDraft<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> SubmissionDraft<F> {
    /// Empty draft at the first step.
    pub fn new() -> Self {
        Self {
            file: None,
            file_name: None,
            preview: None,
            description: String::new(),
            location: String::new(),
            step: FormStep::SelectPhoto,
            status_message: None,
        }
    }

    /// Replace the selected photo. Any previous preview is dropped until
    /// the new one is encoded.
    pub fn select_file(&mut self, file: F, name: String) {
        self.file = Some(file);
        self.file_name = Some(name);
        self.preview = None;
        self.status_message = None;
    }

    /// Drop the selection entirely (used when the preview read fails).
    pub fn clear_file(&mut self) {
        self.file = None;
        self.file_name = None;
        self.preview = None;
    }

    /// Attach the encoded preview for the current selection.
    pub fn set_preview(&mut self, data_url: String) {
        self.preview = Some(data_url);
    }

    pub fn set_description(&mut self, text: String) {
        self.description = text;
        self.status_message = None;
    }

    pub fn set_location(&mut self, text: String) {
        self.location = text;
        self.status_message = None;
    }

    /// Show a transient message without moving steps.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    fn has_details(&self) -> bool {
        !self.description.trim().is_empty() && !self.location.trim().is_empty()
    }

    /// Whether the forward transition out of the current step is permitted.
    pub fn can_advance(&self) -> bool {
        match self.step {
            FormStep::SelectPhoto => self.has_file(),
            FormStep::EnterDetails => self.has_details(),
            // Review only advances through `complete`, Result through `reset`.
            FormStep::Review | FormStep::Result => false,
        }
    }

    /// Move one step forward. Refused transitions name the missing field
    /// and leave the step unchanged.
    pub fn advance(&mut self) -> Result<(), &'static str> {
        match self.step {
            FormStep::SelectPhoto => {
                if !self.has_file() {
                    return Err("please choose a photo first");
                }
                self.step = FormStep::EnterDetails;
            }
            FormStep::EnterDetails => {
                if !self.has_details() {
                    return Err("description and location are both required");
                }
                self.step = FormStep::Review;
            }
            FormStep::Review => return Err("submit the report to continue"),
            FormStep::Result => return Err("start a new report to continue"),
        }
        self.status_message = None;
        Ok(())
    }

    /// Move one step backward, keeping every entered field. Returns false
    /// when there is no backward transition from the current step.
    pub fn back(&mut self) -> bool {
        let previous = match self.step {
            FormStep::EnterDetails => FormStep::SelectPhoto,
            FormStep::Review => FormStep::EnterDetails,
            FormStep::SelectPhoto | FormStep::Result => return false,
        };
        self.step = previous;
        self.status_message = None;
        true
    }

    /// Terminal success: move to the result step and release the photo.
    /// Only called once the orchestrator has confirmed the record exists.
    pub fn complete(&mut self) {
        self.step = FormStep::Result;
        self.file = None;
        self.preview = None;
        self.status_message = None;
    }

    /// Terminal failure: stay on the current step with the reason on
    /// display, keeping the draft intact so the user can retry.
    pub fn fail(&mut self, reason: String) {
        self.status_message = Some(reason);
    }

    /// "Submit another" / "start over": back to an empty first step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
