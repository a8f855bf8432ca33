use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kvithyld_contact::{
    FeedbackRegion, FormFields, FormSubmission, FormView, SubmissionError, Submitter,
};

pub const ORIGINAL_LABEL: &str = "Send forespørsel";

#[derive(Debug, Clone)]
pub struct ViewState {
    pub fields: FormFields,
    pub submit_label: String,
    pub submit_enabled: bool,
    pub success_visible: bool,
    pub error: Option<String>,
    pub scrolled: Vec<FeedbackRegion>,
    pub restored: usize,
}

/// A form whose state stays inspectable from outside the controller.
#[derive(Clone)]
pub struct SharedView(pub Arc<Mutex<ViewState>>);

impl SharedView {
    pub fn new(fields: FormFields) -> Self {
        Self(Arc::new(Mutex::new(ViewState {
            fields,
            submit_label: ORIGINAL_LABEL.to_owned(),
            submit_enabled: true,
            success_visible: false,
            error: None,
            scrolled: vec![],
            restored: 0,
        })))
    }

    pub fn snapshot(&self) -> ViewState {
        self.0.lock().unwrap().clone()
    }
}

impl FormView for SharedView {
    fn fields(&self) -> FormFields {
        self.0.lock().unwrap().fields.clone()
    }

    fn reset(&mut self) {
        self.0.lock().unwrap().fields = FormFields::default();
    }

    fn hide_feedback(&mut self) {
        let mut state = self.0.lock().unwrap();
        state.success_visible = false;
        state.error = None;
    }

    fn show_success(&mut self) {
        self.0.lock().unwrap().success_visible = true;
    }

    fn show_error(&mut self, message: &str) {
        self.0.lock().unwrap().error = Some(message.to_owned());
    }

    fn scroll_into_view(&mut self, region: FeedbackRegion) {
        self.0.lock().unwrap().scrolled.push(region);
    }

    fn submit_label(&self) -> String {
        self.0.lock().unwrap().submit_label.clone()
    }

    fn set_submit_label(&mut self, label: &str) {
        self.0.lock().unwrap().submit_label = label.to_owned();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        let mut state = self.0.lock().unwrap();
        if enabled && !state.submit_enabled {
            state.restored += 1;
        }
        state.submit_enabled = enabled;
    }
}

/// Records what the form looked like while each submission was pending.
pub struct ProbeSubmitter {
    view: SharedView,
    fail: bool,
    pub seen: Mutex<Vec<(FormSubmission, bool, String)>>,
}

impl ProbeSubmitter {
    pub fn succeeding(view: &SharedView) -> Self {
        Self {
            view: view.clone(),
            fail: false,
            seen: Mutex::new(vec![]),
        }
    }

    pub fn failing(view: &SharedView) -> Self {
        Self {
            fail: true,
            ..Self::succeeding(view)
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl Submitter for ProbeSubmitter {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        let state = self.view.snapshot();
        self.seen.lock().unwrap().push((
            submission.clone(),
            state.submit_enabled,
            state.submit_label,
        ));

        tokio::task::yield_now().await;

        if self.fail {
            return Err(SubmissionError::Transport(
                "connection reset by peer".to_owned(),
            ));
        }

        Ok(())
    }
}

pub fn valid_fields() -> FormFields {
    FormFields {
        name: "Ola Nordmann".to_owned(),
        email: "ola@example.com".to_owned(),
        phone: "+47 12345678".to_owned(),
        address: String::new(),
        service_type: "inspection".to_owned(),
        description: "Need a panel check".to_owned(),
        want_visit: false,
    }
}
