use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use kvithyld_contact::Submitter;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;
mod index;

pub use contact::{ContactFormView, ContactInput};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub submitter: Arc<dyn Submitter>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            site: &template.site,
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .nest_service("/static", assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
