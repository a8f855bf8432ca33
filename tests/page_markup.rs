use std::sync::Arc;

use axum::{body::Body, http::Request};
use http_body_util::BodyExt;
use kvithyld_interaction::{HEADER_ID, NAV_LINK_CLASS, NAV_MENU_ID, NAV_TOGGLE_ID, REVEAL_CLASSES};
use tower::ServiceExt;

mod common;

use common::create_test_app;

async fn index_html() -> String {
    let app = create_test_app(Arc::default());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

fn has_class(html: &str, class: &str) -> bool {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .any(|classes| classes.split_whitespace().any(|c| c == class))
}

#[tokio::test]
async fn test_index_carries_navigation_hooks() {
    let html = index_html().await;

    for id in [HEADER_ID, NAV_TOGGLE_ID, NAV_MENU_ID] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
    assert!(has_class(&html, NAV_LINK_CLASS));
    assert!(html.contains(r##"href="/#kontakt" class="nav__link""##));
}

#[tokio::test]
async fn test_index_carries_reveal_and_lazy_image_hooks() {
    let html = index_html().await;

    for class in REVEAL_CLASSES {
        assert!(has_class(&html, class), "missing .{class}");
    }
    assert!(html.contains(r#"loading="lazy""#));
    assert!(html.contains(r#"data-src="/static/img/hero.svg""#));
}

#[test]
fn test_class_lookup_matches_whole_names() {
    let html = r#"<div class="service-card wide"></div><p class="why-us__items"></p>"#;

    assert!(has_class(html, "service-card"));
    assert!(has_class(html, "wide"));
    assert!(!has_class(html, "why-us__item"));
}
