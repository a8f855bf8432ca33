use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::IntoResponse,
};
use kvithyld_contact::{FeedbackRegion, FormFields, FormSubmissionController, FormView};
use serde::Deserialize;

use crate::{
    routes::{AppState, index::IndexTemplate},
    template::Template,
};

/// Sent by htmx on every request it issues.
const HX_REQUEST: &str = "hx-request";

pub const SUBMIT_LABEL: &str = "Send forespørsel";

pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICE_OPTIONS: [ServiceOption; 5] = [
    ServiceOption {
        value: "el-kontroll",
        label: "El-kontroll bolig",
    },
    ServiceOption {
        value: "bedrift",
        label: "Kontroll av næringsbygg",
    },
    ServiceOption {
        value: "termografering",
        label: "Termografering",
    },
    ServiceOption {
        value: "boligsalg",
        label: "Tilstandsrapport ved boligsalg",
    },
    ServiceOption {
        value: "annet",
        label: "Annet",
    },
];

/// The contact form as posted by the browser. The visit checkbox is only
/// present when checked.
#[derive(Deserialize, Default)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "serviceType")]
    pub service_type: String,
    #[serde(default)]
    pub description: String,
    pub visit: Option<String>,
}

impl From<ContactInput> for FormFields {
    fn from(input: ContactInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            service_type: input.service_type,
            description: input.description,
            want_visit: input.visit.is_some(),
        }
    }
}

/// Request-scoped form state, rendered back as the form fragment.
#[derive(Debug)]
pub struct ContactFormView {
    pub fields: FormFields,
    pub success: bool,
    pub error: Option<String>,
    pub scroll_to: Option<FeedbackRegion>,
    pub submit_label: String,
    pub submit_enabled: bool,
}

impl Default for ContactFormView {
    fn default() -> Self {
        Self::new(FormFields::default())
    }
}

impl ContactFormView {
    pub fn new(fields: FormFields) -> Self {
        Self {
            fields,
            success: false,
            error: None,
            scroll_to: None,
            submit_label: SUBMIT_LABEL.to_owned(),
            submit_enabled: true,
        }
    }

    pub fn service_options(&self) -> &'static [ServiceOption] {
        &SERVICE_OPTIONS
    }
}

impl FormView for ContactFormView {
    fn fields(&self) -> FormFields {
        self.fields.clone()
    }

    fn reset(&mut self) {
        self.fields = FormFields::default();
    }

    fn hide_feedback(&mut self) {
        self.success = false;
        self.error = None;
    }

    fn show_success(&mut self) {
        self.success = true;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    fn scroll_into_view(&mut self, region: FeedbackRegion) {
        self.scroll_to = Some(region);
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_owned();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactFormView,
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Answers htmx with the form fragment it swaps in place. A plain browser
/// post gets the whole page back with the form in its submitted state.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<ContactInput>,
) -> impl IntoResponse {
    let view = ContactFormView::new(input.into());
    let mut controller = FormSubmissionController::new(view, app_state.submitter.clone());

    let outcome = controller.handle_submit().await;
    let htmx = is_htmx(&headers);
    tracing::info!(sent = outcome.is_sent(), htmx, "Contact form handled");

    let form = controller.into_view();
    if htmx {
        template.render(ContactFormTemplate { form })
    } else {
        template.render(IndexTemplate {
            site: &template.site,
            form,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_htmx_header_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert(HX_REQUEST, "true".parse().unwrap());
        assert!(is_htmx(&headers));

        headers.insert(HX_REQUEST, "false".parse().unwrap());
        assert!(!is_htmx(&headers));
    }

    #[test]
    fn test_visit_checkbox_maps_to_want_visit() {
        let checked: ContactInput =
            serde_urlencoded::from_str("name=Ola&serviceType=annet&visit=on").unwrap();
        let fields = FormFields::from(checked);
        assert!(fields.want_visit);
        assert_eq!(fields.service_type, "annet");

        let unchecked: ContactInput = serde_urlencoded::from_str("name=Ola").unwrap();
        let fields = FormFields::from(unchecked);
        assert!(!fields.want_visit);
        assert_eq!(fields.email, "");
    }

    #[test]
    fn test_fragment_shows_error_and_keeps_values() {
        use askama::Template as _;

        let mut view = ContactFormView::new(FormFields {
            name: "Ola <b>".to_owned(),
            service_type: "termografering".to_owned(),
            ..Default::default()
        });
        view.show_error("Vennligst fyll ut alle obligatoriske felt.");
        view.scroll_into_view(FeedbackRegion::Error);

        let html = ContactFormTemplate { form: view }.render().unwrap();

        assert!(html.contains("<strong>Feil:</strong> Vennligst fyll ut alle obligatoriske felt."));
        assert!(html.contains(r#"data-scroll-to="form-error""#));
        assert!(html.contains(r#"value="Ola &#60;b&#62;""#) || html.contains(r#"value="Ola &lt;b&gt;""#));
        assert!(html.contains(r#"<option value="termografering" selected>"#));
    }
}
