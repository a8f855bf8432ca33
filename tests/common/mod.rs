use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use kvithyld::{
    AppState,
    config::{Config, ObservabilityConfig, ServerConfig, SiteConfig},
};
use kvithyld_contact::{ContactConfig, FormSubmission, SubmissionError, Submitter};

#[derive(Default)]
pub struct RecordingSubmitter {
    pub fail: bool,
    pub received: Mutex<Vec<FormSubmission>>,
}

#[async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        self.received.lock().unwrap().push(submission.clone());

        if self.fail {
            return Err(SubmissionError::Rejected {
                status: 500,
                body: "upstream exploded".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig::default(),
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(submitter: Arc<RecordingSubmitter>) -> Router {
    kvithyld::router(AppState {
        config: test_config(),
        submitter,
    })
}
