use crate::{
    Document, Effects, Handler, IntersectionObserver, ObserverOptions, RootMargin, ViewportEvent,
};

pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Classes of the blocks that animate in the first time they become visible.
pub const REVEAL_CLASSES: [&str; 4] = ["service-card", "value-card", "why-us__item", "pricing-table"];

pub struct RevealOnScroll {
    observer: IntersectionObserver,
}

impl RevealOnScroll {
    pub fn options() -> ObserverOptions {
        ObserverOptions {
            threshold: 0.1,
            root_margin: RootMargin {
                top: 0.0,
                bottom: -50.0,
            },
        }
    }

    pub fn new(document: &Document) -> Self {
        let mut observer = IntersectionObserver::new(Self::options());
        for element in document.query_all(|e| REVEAL_CLASSES.iter().any(|class| e.has_class(class))) {
            observer.observe(element);
        }

        Self { observer }
    }

    pub fn pending(&self) -> usize {
        self.observer.observed().len()
    }
}

impl Handler<ViewportEvent> for RevealOnScroll {
    fn handle(&mut self, event: &ViewportEvent) -> Effects {
        for element in self.observer.take_intersecting(event) {
            element.add_class(ANIMATE_IN_CLASS);
        }

        Effects::none()
    }
}
