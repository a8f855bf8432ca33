use thiserror::Error;

/// Generic message shown when the submitter fails, whatever the cause.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Beklager, noe gikk galt. Vennligst prov igjen eller kontakt oss direkte.";

/// Input-shape failures. The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Vennligst fyll ut alle obligatoriske felt.")]
    MissingRequiredFields,

    #[error("Vennligst oppgi en gyldig e-postadresse.")]
    InvalidEmail,

    #[error("Vennligst oppgi et gyldig telefonnummer.")]
    InvalidPhone,
}

/// Failures reported by a [`crate::Submitter`]. Logged, never shown to the user.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("failed to compose notification: {0}")]
    Compose(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("email service rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl From<askama::Error> for SubmissionError {
    fn from(err: askama::Error) -> Self {
        SubmissionError::Compose(err.to_string())
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

impl From<lettre::address::AddressError> for SubmissionError {
    fn from(err: lettre::address::AddressError) -> Self {
        SubmissionError::Compose(err.to_string())
    }
}

impl From<lettre::error::Error> for SubmissionError {
    fn from(err: lettre::error::Error) -> Self {
        SubmissionError::Compose(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for SubmissionError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}
