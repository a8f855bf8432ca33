use crate::{Effects, Element, Handler, ScrollEvent};

pub const HEADER_SCROLLED_CLASS: &str = "header--scrolled";

/// Marks the page header once the page has scrolled past the threshold.
pub struct HeaderScroll {
    header: Element,
    threshold: f64,
}

impl HeaderScroll {
    pub fn new(header: &Element) -> Self {
        Self {
            header: header.clone(),
            threshold: 50.0,
        }
    }
}

impl Handler<ScrollEvent> for HeaderScroll {
    fn handle(&mut self, event: &ScrollEvent) -> Effects {
        if event.scroll_y > self.threshold {
            self.header.add_class(HEADER_SCROLLED_CLASS);
        } else {
            self.header.remove_class(HEADER_SCROLLED_CLASS);
        }

        Effects::none()
    }
}
