use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use kvithyld_contact::{
    FeedbackRegion, FormFields, FormSubmissionController, FormView, SubmitOutcome, Submitter,
};

use crate::routes::ContactFormView;

pub const SUCCESS_MESSAGE: &str =
    "Takk for din henvendelse! Vi tar kontakt med deg så snart som mulig.";

/// One contact-form submission, given on the command line.
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    /// Address or city district
    #[arg(long, default_value = "")]
    pub address: String,

    /// Kind of job, e.g. el-kontroll
    #[arg(long)]
    pub service_type: String,

    #[arg(long)]
    pub description: String,

    /// Ask for an on-site visit
    #[arg(long)]
    pub visit: bool,
}

impl From<SubmitArgs> for FormFields {
    fn from(args: SubmitArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            service_type: args.service_type,
            description: args.description,
            want_visit: args.visit,
        }
    }
}

/// Prints feedback to the terminal instead of showing it on a page.
pub struct ConsoleView {
    form: ContactFormView,
}

impl ConsoleView {
    pub fn new(fields: FormFields) -> Self {
        Self {
            form: ContactFormView::new(fields),
        }
    }
}

impl FormView for ConsoleView {
    fn fields(&self) -> FormFields {
        self.form.fields()
    }

    fn reset(&mut self) {
        self.form.reset();
    }

    fn hide_feedback(&mut self) {
        self.form.hide_feedback();
    }

    fn show_success(&mut self) {
        self.form.show_success();
        println!("{SUCCESS_MESSAGE}");
    }

    fn show_error(&mut self, message: &str) {
        self.form.show_error(message);
        eprintln!("Feil: {message}");
    }

    fn scroll_into_view(&mut self, region: FeedbackRegion) {
        tracing::debug!(region = %region, "Feedback shown");
    }

    fn submit_label(&self) -> String {
        self.form.submit_label()
    }

    fn set_submit_label(&mut self, label: &str) {
        if !self.form.submit_enabled {
            println!("{label}");
        }
        self.form.set_submit_label(label);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.form.set_submit_enabled(enabled);
    }
}

pub async fn submit(submitter: Arc<dyn Submitter>, args: SubmitArgs) -> Result<()> {
    let mut controller = FormSubmissionController::new(ConsoleView::new(args.into()), submitter);

    match controller.handle_submit().await {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Invalid(err) => Err(err.into()),
        SubmitOutcome::Failed(err) => Err(err.into()),
    }
}
