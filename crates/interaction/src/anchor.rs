use crate::{ClickEvent, Document, Effects, Element, Handler, ScrollBehavior, ScrollTo};

/// Extra space kept between the fixed header and the scrolled-to section.
pub const ANCHOR_GAP: f64 = 20.0;

/// Smooth scrolling for in-page `#section` links, leaving room for the header.
pub struct SmoothScroll {
    document: Document,
    header: Option<Element>,
}

impl SmoothScroll {
    pub fn new(document: &Document, header: Option<&Element>) -> Self {
        Self {
            document: document.clone(),
            header: header.cloned(),
        }
    }

    fn anchor_href(target: &Element) -> Option<String> {
        target
            .closest(|element| element.tag() == "a")
            .and_then(|link| link.attribute("href"))
            .filter(|href| href.starts_with('#'))
    }
}

impl Handler<ClickEvent> for SmoothScroll {
    fn handle(&mut self, event: &ClickEvent) -> Effects {
        let Some(href) = Self::anchor_href(&event.target) else {
            return Effects::none();
        };

        if href == "#" {
            return Effects::none();
        }

        let Some(section) = self.document.get_element_by_id(&href[1..]) else {
            return Effects::none();
        };

        let header_height = self
            .header
            .as_ref()
            .map(Element::offset_height)
            .unwrap_or_default();

        Effects::prevent_default().with_scroll(ScrollTo {
            top: section.offset_top() - header_height - ANCHOR_GAP,
            behavior: ScrollBehavior::Smooth,
        })
    }
}
