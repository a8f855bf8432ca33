/// Raw field state of the contact form, as read from the page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub description: String,
    pub want_visit: bool,
}

/// Contact-form values captured at submit time, trimmed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub description: String,
    pub want_visit: bool,
}

impl From<&FormFields> for FormSubmission {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.name.trim().to_owned(),
            email: fields.email.trim().to_owned(),
            phone: fields.phone.trim().to_owned(),
            address: fields.address.trim().to_owned(),
            service_type: fields.service_type.trim().to_owned(),
            description: fields.description.trim().to_owned(),
            want_visit: fields.want_visit,
        }
    }
}

impl From<FormFields> for FormSubmission {
    fn from(fields: FormFields) -> Self {
        Self::from(&fields)
    }
}
