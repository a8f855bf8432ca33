use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use strum::{AsRefStr, Display};

use crate::{
    FormFields, FormSubmission, SUBMISSION_FAILED_MESSAGE, SubmissionError, Submitter,
    ValidationError,
};

/// Label shown on the submit control while a submission is pending.
pub const SENDING_LABEL: &str = "Sender...";

/// The two feedback areas of the form. `as_ref()` gives the element id.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackRegion {
    #[strum(serialize = "form-success")]
    Success,
    #[strum(serialize = "form-error")]
    Error,
}

/// The page-side collaborator of [`FormSubmissionController`]: the form, its
/// submit control and both feedback regions.
pub trait FormView {
    /// Current field values.
    fn fields(&self) -> FormFields;

    /// Clear every field back to its initial value.
    fn reset(&mut self);

    fn hide_feedback(&mut self);

    fn show_success(&mut self);

    /// Show the error region with `message`.
    fn show_error(&mut self, message: &str);

    /// Bring a feedback region to the center of the viewport.
    fn scroll_into_view(&mut self, region: FeedbackRegion);

    fn submit_label(&self) -> String;

    fn set_submit_label(&mut self, label: &str);

    fn set_submit_enabled(&mut self, enabled: bool);
}

#[derive(Display, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Sent,
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Disables the submit control for its lifetime and restores it on drop, so the
/// control comes back on every exit path.
struct SubmitControlGuard<'a, V: FormView> {
    view: &'a mut V,
    original_label: String,
}

impl<'a, V: FormView> SubmitControlGuard<'a, V> {
    fn engage(view: &'a mut V) -> Self {
        let original_label = view.submit_label();
        view.set_submit_enabled(false);
        view.set_submit_label(SENDING_LABEL);

        Self {
            view,
            original_label,
        }
    }
}

impl<V: FormView> Deref for SubmitControlGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &Self::Target {
        self.view
    }
}

impl<V: FormView> DerefMut for SubmitControlGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.view
    }
}

impl<V: FormView> Drop for SubmitControlGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_enabled(true);
        self.view.set_submit_label(&self.original_label);
    }
}

/// Owns the contact form's submit workflow: validation, submit-control state,
/// the call to the [`Submitter`] and the success/error feedback.
pub struct FormSubmissionController<V: FormView> {
    view: V,
    submitter: Arc<dyn Submitter>,
    state: SubmitState,
}

impl<V: FormView> FormSubmissionController<V> {
    pub fn new(view: V, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            view,
            submitter,
            state: SubmitState::Idle,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn transition(&mut self, state: SubmitState) {
        tracing::debug!(from = %self.state, to = %state, "Contact form state");
        self.state = state;
    }

    fn show_error(view: &mut V, message: &str) {
        view.show_error(message);
        view.scroll_into_view(FeedbackRegion::Error);
    }

    /// Runs one submit action to completion. Taking `&mut self` keeps a second
    /// submission on the same form from starting while one is pending.
    #[tracing::instrument(skip_all)]
    pub async fn handle_submit(&mut self) -> SubmitOutcome {
        self.view.hide_feedback();
        self.transition(SubmitState::Validating);

        let submission = FormSubmission::from(self.view.fields());

        if let Err(err) = submission.validate() {
            tracing::debug!(error = %err, "Contact form rejected");
            Self::show_error(&mut self.view, &err.to_string());
            self.transition(SubmitState::Idle);

            return SubmitOutcome::Invalid(err);
        }

        self.transition(SubmitState::Submitting);

        let result = {
            let mut view = SubmitControlGuard::engage(&mut self.view);
            let result = self.submitter.submit(&submission).await;

            match &result {
                Ok(()) => {
                    view.show_success();
                    view.reset();
                    view.scroll_into_view(FeedbackRegion::Success);
                }
                Err(err) => {
                    tracing::error!(error = %err, "Form submission error");
                    Self::show_error(&mut *view, SUBMISSION_FAILED_MESSAGE);
                }
            }

            result
        };

        match result {
            Ok(()) => {
                self.transition(SubmitState::Succeeded);
                self.transition(SubmitState::Idle);

                SubmitOutcome::Sent
            }
            Err(err) => {
                self.transition(SubmitState::Failed);
                self.transition(SubmitState::Idle);

                SubmitOutcome::Failed(err)
            }
        }
    }
}
