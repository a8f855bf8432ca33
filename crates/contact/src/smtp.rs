//! Delivery over SMTP using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};

use crate::{FormSubmission, Notification, SmtpConfig, SubmissionError, Submitter};

#[derive(Clone)]
pub struct SmtpSubmitter {
    mailer: SmtpTransport,
    from: String,
    to: String,
}

impl SmtpSubmitter {
    pub fn new(
        config: &SmtpConfig,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let from = from.into();

        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                from = %from,
                "SMTP submitter initialized with authentication and TLS"
            );

            let creds = Credentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from,
            to: to.into(),
        })
    }

    fn message(&self, submission: &FormSubmission) -> Result<Message, SubmissionError> {
        let notification = Notification::compose(submission)?;

        tracing::info!(to = %self.to, subject = %notification.subject, "Sending email");

        Ok(Message::builder()
            .from(self.from.parse()?)
            .reply_to(submission.email.parse()?)
            .to(self.to.parse()?)
            .subject(notification.subject)
            .multipart(MultiPart::alternative_plain_html(
                notification.plain,
                notification.html,
            ))?)
    }
}

#[async_trait]
impl Submitter for SmtpSubmitter {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        let message = self.message(submission)?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|err| SubmissionError::Transport(err.to_string()))??;

        Ok(())
    }
}
