use crate::{
    Document, Effects, Element, Handler, IntersectionObserver, ObserverOptions, ViewportEvent,
};

/// Loads `img[loading="lazy"]` from `data-src`. With native lazy loading the
/// source is swapped right away, otherwise once the image scrolls into view.
pub struct LazyImages {
    observer: IntersectionObserver,
}

impl LazyImages {
    pub fn new(document: &Document, native: bool) -> Self {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        let images = document.query_all(|e| {
            e.tag() == "img" && e.attribute("loading").as_deref() == Some("lazy")
        });

        for image in images {
            if native {
                Self::load(&image);
            } else {
                observer.observe(image);
            }
        }

        Self { observer }
    }

    pub fn pending(&self) -> usize {
        self.observer.observed().len()
    }

    fn load(image: &Element) {
        if let Some(src) = image.attribute("data-src").or_else(|| image.attribute("src")) {
            image.set_attribute("src", src);
        }
    }
}

impl Handler<ViewportEvent> for LazyImages {
    fn handle(&mut self, event: &ViewportEvent) -> Effects {
        for image in self.observer.take_intersecting(event) {
            Self::load(&image);
        }

        Effects::none()
    }
}
