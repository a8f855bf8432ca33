use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    ContactConfig, FormSubmission, ResendSubmitter, SimulatedSubmitter, SmtpSubmitter,
    SubmissionError, SubmitterKind,
};

/// Delivers a validated contact-form submission somewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError>;
}

/// Build the submitter selected by configuration.
pub fn create_submitter(config: &ContactConfig) -> anyhow::Result<Arc<dyn Submitter>> {
    let submitter: Arc<dyn Submitter> = match config.submitter {
        SubmitterKind::Simulated => Arc::new(SimulatedSubmitter::new(Duration::from_millis(
            config.simulated_delay_ms,
        ))),
        SubmitterKind::Resend => Arc::new(ResendSubmitter::new(
            &config.resend,
            &config.from_address,
            &config.to_address,
        )?),
        SubmitterKind::Smtp => Arc::new(SmtpSubmitter::new(
            &config.smtp,
            &config.from_address,
            &config.to_address,
        )?),
    };

    tracing::info!(submitter = %config.submitter, "Contact form submitter ready");

    Ok(submitter)
}
