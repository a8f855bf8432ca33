use askama::Template;

use crate::{FormSubmission, SubmissionError};

const ADDRESS_NOT_GIVEN: &str = "Ikke oppgitt";

#[derive(Template)]
#[template(path = "notification.html")]
struct NotificationHtmlTemplate<'a> {
    submission: &'a FormSubmission,
    address: &'a str,
}

#[derive(Template)]
#[template(path = "notification.txt")]
struct NotificationPlainTemplate<'a> {
    submission: &'a FormSubmission,
    address: &'a str,
}

/// The email sent to the contractor for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html: String,
    pub plain: String,
}

impl Notification {
    pub fn compose(submission: &FormSubmission) -> Result<Self, SubmissionError> {
        let address = if submission.address.is_empty() {
            ADDRESS_NOT_GIVEN
        } else {
            submission.address.as_str()
        };

        let html = NotificationHtmlTemplate {
            submission,
            address,
        }
        .render()?;

        let plain = NotificationPlainTemplate {
            submission,
            address,
        }
        .render()?;

        Ok(Self {
            subject: format!(
                "Ny henvendelse fra {} - {}",
                submission.name, submission.service_type
            ),
            html,
            plain,
        })
    }
}
