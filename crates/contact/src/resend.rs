//! Delivery through the Resend transactional email API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::{FormSubmission, Notification, ResendConfig, SubmissionError, Submitter};

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

/// Sends each submission as one email, in a single attempt.
#[derive(Clone)]
pub struct ResendSubmitter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

impl ResendSubmitter {
    pub fn new(
        config: &ResendConfig,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> anyhow::Result<Self> {
        if config.api_key.is_empty() {
            anyhow::bail!("Resend API key is not configured");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.to_owned(),
            api_key: config.api_key.to_owned(),
            from: from.into(),
            to: to.into(),
        })
    }
}

#[async_trait]
impl Submitter for ResendSubmitter {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        let notification = Notification::compose(submission)?;

        tracing::info!(to = %self.to, subject = %notification.subject, "Sending email");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ResendEmail {
                from: &self.from,
                to: &self.to,
                subject: &notification.subject,
                html: &notification.html,
                text: &notification.plain,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
