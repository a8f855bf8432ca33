use std::sync::Arc;

use kvithyld_contact::{
    FeedbackRegion, FormFields, FormSubmissionController, SENDING_LABEL,
    SUBMISSION_FAILED_MESSAGE, SubmitOutcome, ValidationError,
};
use pretty_assertions::assert_eq;

mod helpers;

use helpers::{ORIGINAL_LABEL, ProbeSubmitter, SharedView, valid_fields};

#[tokio::test]
async fn test_submit_control_disabled_while_pending() -> anyhow::Result<()> {
    let view = SharedView::new(valid_fields());
    let submitter = Arc::new(ProbeSubmitter::succeeding(&view));
    let mut controller = FormSubmissionController::new(view.clone(), submitter.clone());

    let outcome = controller.handle_submit().await;
    assert!(outcome.is_sent());

    let seen = submitter.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);

    let (submission, enabled, label) = &seen[0];
    assert_eq!(submission.name, "Ola Nordmann");
    assert_eq!(submission.phone, "+47 12345678");
    assert!(!enabled);
    assert_eq!(label, SENDING_LABEL);

    let state = view.snapshot();
    assert!(state.submit_enabled);
    assert_eq!(state.submit_label, ORIGINAL_LABEL);
    assert_eq!(state.restored, 1);
    assert!(state.success_visible);
    assert_eq!(state.error, None);
    assert_eq!(state.fields, FormFields::default());
    assert_eq!(state.scrolled, vec![FeedbackRegion::Success]);

    Ok(())
}

#[tokio::test]
async fn test_failing_submitter_restores_control() -> anyhow::Result<()> {
    let view = SharedView::new(valid_fields());
    let submitter = Arc::new(ProbeSubmitter::failing(&view));
    let mut controller = FormSubmissionController::new(view.clone(), submitter.clone());

    let outcome = controller.handle_submit().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(submitter.calls(), 1);

    let state = view.snapshot();
    assert!(!state.success_visible);
    assert_eq!(state.error.as_deref(), Some(SUBMISSION_FAILED_MESSAGE));
    assert!(state.submit_enabled);
    assert_eq!(state.submit_label, ORIGINAL_LABEL);
    assert_eq!(state.restored, 1);
    assert_eq!(state.fields, valid_fields());
    assert_eq!(state.scrolled, vec![FeedbackRegion::Error]);

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_never_submit() -> anyhow::Result<()> {
    let cases: [(&str, fn(&mut FormFields)); 5] = [
        ("name", |f: &mut FormFields| f.name.clear()),
        ("email", |f: &mut FormFields| f.email.clear()),
        ("phone", |f: &mut FormFields| f.phone.clear()),
        ("serviceType", |f: &mut FormFields| f.service_type.clear()),
        ("description", |f: &mut FormFields| f.description = "   ".to_owned()),
    ];

    for (field, clear) in cases {
        let mut fields = valid_fields();
        clear(&mut fields);

        let view = SharedView::new(fields);
        let submitter = Arc::new(ProbeSubmitter::succeeding(&view));
        let mut controller = FormSubmissionController::new(view.clone(), submitter.clone());

        let outcome = controller.handle_submit().await;

        assert!(
            matches!(
                outcome,
                SubmitOutcome::Invalid(ValidationError::MissingRequiredFields)
            ),
            "missing {field} should be rejected"
        );
        assert_eq!(submitter.calls(), 0);
        assert_eq!(
            view.snapshot().error.as_deref(),
            Some("Vennligst fyll ut alle obligatoriske felt.")
        );
        assert_eq!(view.snapshot().restored, 0);
    }

    Ok(())
}

#[tokio::test]
async fn test_bad_email_and_phone_never_submit() -> anyhow::Result<()> {
    for email in ["foo", "foo@bar", "@bar.com"] {
        let mut fields = valid_fields();
        fields.email = email.to_owned();

        let view = SharedView::new(fields);
        let submitter = Arc::new(ProbeSubmitter::succeeding(&view));
        let mut controller = FormSubmissionController::new(view.clone(), submitter.clone());

        assert!(matches!(
            controller.handle_submit().await,
            SubmitOutcome::Invalid(ValidationError::InvalidEmail)
        ));
        assert_eq!(submitter.calls(), 0);
    }

    for phone in ["123", "+4712345", "abcdefgh"] {
        let mut fields = valid_fields();
        fields.phone = phone.to_owned();

        let view = SharedView::new(fields);
        let submitter = Arc::new(ProbeSubmitter::succeeding(&view));
        let mut controller = FormSubmissionController::new(view.clone(), submitter.clone());

        assert!(matches!(
            controller.handle_submit().await,
            SubmitOutcome::Invalid(ValidationError::InvalidPhone)
        ));
        assert_eq!(submitter.calls(), 0);
        assert_eq!(
            view.snapshot().error.as_deref(),
            Some("Vennligst oppgi et gyldig telefonnummer.")
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_new_attempt_hides_previous_feedback() -> anyhow::Result<()> {
    let mut fields = valid_fields();
    fields.phone = "123".to_owned();

    let view = SharedView::new(fields);
    let submitter = Arc::new(ProbeSubmitter::succeeding(&view));
    let mut controller = FormSubmissionController::new(view.clone(), submitter.clone());

    controller.handle_submit().await;
    assert!(view.snapshot().error.is_some());

    view.0.lock().unwrap().fields.phone = "98765432".to_owned();
    assert!(controller.handle_submit().await.is_sent());

    let state = view.snapshot();
    assert_eq!(state.error, None);
    assert!(state.success_visible);
    assert_eq!(submitter.calls(), 1);

    Ok(())
}
