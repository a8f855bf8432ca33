use axum::response::IntoResponse;

use crate::{config::SiteConfig, routes::ContactFormView, template::Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub form: ContactFormView,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        site: &template.site,
        form: ContactFormView::default(),
    })
}
