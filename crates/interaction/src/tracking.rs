use crate::{ClickEvent, Effects, Handler};

/// Logs clicks on `tel:` links. Navigation is left to the browser.
#[derive(Default)]
pub struct PhoneClickTracker;

impl PhoneClickTracker {
    fn phone_link(event: &ClickEvent) -> Option<String> {
        event
            .target
            .closest(|element| {
                element.tag() == "a"
                    && element
                        .attribute("href")
                        .is_some_and(|href| href.starts_with("tel:"))
            })
            .and_then(|link| link.attribute("href"))
    }
}

impl Handler<ClickEvent> for PhoneClickTracker {
    fn handle(&mut self, event: &ClickEvent) -> Effects {
        if let Some(href) = Self::phone_link(event) {
            tracing::info!(href = %href, "Phone click");
        }

        Effects::none()
    }
}
