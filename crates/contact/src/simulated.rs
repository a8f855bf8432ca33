use std::time::Duration;

use async_trait::async_trait;

use crate::{FormSubmission, SubmissionError, Submitter};

/// Stand-in for a real delivery channel: waits, logs the payload and succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone,
            address = %submission.address,
            service_type = %submission.service_type,
            want_visit = submission.want_visit,
            description = %submission.description,
            "Form submitted"
        );

        Ok(())
    }
}
