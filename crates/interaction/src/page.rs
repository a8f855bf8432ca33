use crate::{
    ClickEvent, Document, EventSource, FocusTrap, HeaderScroll, KeyEvent, LazyImages, NavClick,
    NavMenu, NavToggleKeys, PhoneClickTracker, RevealOnScroll, ScrollEvent, SmoothScroll,
    ViewportEvent,
};

pub const HEADER_ID: &str = "header";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";

/// Every page behavior, subscribed to the event source it listens on.
/// Behaviors whose elements are missing from the document are skipped.
pub struct Page {
    pub scroll: EventSource<ScrollEvent>,
    pub click: EventSource<ClickEvent>,
    pub keydown: EventSource<KeyEvent>,
    pub viewport: EventSource<ViewportEvent>,
}

impl Page {
    pub fn wire(document: &Document, native_lazy_loading: bool) -> Self {
        let header = document.get_element_by_id(HEADER_ID);

        let mut scroll = EventSource::new("scroll");
        if let Some(header) = header.as_ref() {
            scroll = scroll.handler(HeaderScroll::new(header));
        }

        let mut click = EventSource::new("click");
        let mut keydown = EventSource::new("keydown");
        let toggle = document.get_element_by_id(NAV_TOGGLE_ID);
        let menu = document.get_element_by_id(NAV_MENU_ID);
        if let (Some(toggle), Some(menu)) = (toggle, menu) {
            let nav = NavMenu::new(&toggle, &menu);
            click = click.handler(NavClick::new(&nav));
            keydown = keydown
                .handler(NavToggleKeys::new(&nav))
                .handler(FocusTrap::new(&nav));
        }

        let click = click
            .handler(SmoothScroll::new(document, header.as_ref()))
            .handler(PhoneClickTracker);

        let viewport = EventSource::new("viewport")
            .handler(RevealOnScroll::new(document))
            .handler(LazyImages::new(document, native_lazy_loading));

        tracing::debug!(
            scroll = scroll.len(),
            click = click.len(),
            keydown = keydown.len(),
            viewport = viewport.len(),
            "Page behaviors wired"
        );

        Self {
            scroll,
            click,
            keydown,
            viewport,
        }
    }
}
