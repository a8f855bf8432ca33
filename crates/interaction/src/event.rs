use strum::EnumString;

use crate::Element;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub scroll_y: f64,
}

#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub target: Element,
}

/// Key names as reported by `KeyboardEvent.key`.
#[derive(EnumString, Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    #[strum(serialize = " ")]
    Space,
    Tab,
    Escape,
    #[strum(default)]
    Other(String),
}

#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
    pub target: Element,
}

impl KeyEvent {
    pub fn new(key: Key, target: &Element) -> Self {
        Self {
            key,
            shift: false,
            target: target.clone(),
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// The visible part of the document changed, by scrolling or resizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportEvent {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// What the host has to do after an event was handled.
#[derive(Debug, Default, PartialEq)]
pub struct Effects {
    pub prevent_default: bool,
    pub focus: Option<Element>,
    pub scroll_to: Option<ScrollTo>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            ..Default::default()
        }
    }

    pub fn with_focus(mut self, element: &Element) -> Self {
        self.focus = Some(element.clone());
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollTo) -> Self {
        self.scroll_to = Some(scroll);
        self
    }

    /// Later handlers win for focus and scroll targets.
    pub fn merge(&mut self, other: Effects) {
        self.prevent_default |= other.prevent_default;
        if other.focus.is_some() {
            self.focus = other.focus;
        }
        if other.scroll_to.is_some() {
            self.scroll_to = other.scroll_to;
        }
    }
}

pub trait Handler<E> {
    fn handle(&mut self, event: &E) -> Effects;
}

/// Handlers subscribed to one kind of page event, called in registration order.
pub struct EventSource<E> {
    name: &'static str,
    handlers: Vec<Box<dyn Handler<E>>>,
}

impl<E> EventSource<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handlers: vec![],
        }
    }

    pub fn handler(mut self, handler: impl Handler<E> + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch(&mut self, event: &E) -> Effects {
        let mut effects = Effects::none();
        for handler in self.handlers.iter_mut() {
            effects.merge(handler.handle(event));
        }

        tracing::trace!(source = self.name, handlers = self.handlers.len(), "Event dispatched");

        effects
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    struct Counter(usize);

    impl Handler<ScrollEvent> for Counter {
        fn handle(&mut self, _event: &ScrollEvent) -> Effects {
            self.0 += 1;
            Effects::none()
        }
    }

    struct Focus(Element);

    impl Handler<ScrollEvent> for Focus {
        fn handle(&mut self, _event: &ScrollEvent) -> Effects {
            Effects::prevent_default().with_focus(&self.0)
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_str("Enter").ok(), Some(Key::Enter));
        assert_eq!(Key::from_str(" ").ok(), Some(Key::Space));
        assert_eq!(Key::from_str("Escape").ok(), Some(Key::Escape));
        assert_eq!(Key::from_str("a").ok(), Some(Key::Other("a".to_owned())));
    }

    #[test]
    fn test_dispatch_merges_effects() {
        let target = Element::new("button");
        let mut source = EventSource::new("scroll")
            .handler(Counter(0))
            .handler(Focus(target.clone()))
            .handler(Counter(0));

        let effects = source.dispatch(&ScrollEvent { scroll_y: 10.0 });

        assert_eq!(source.len(), 3);
        assert!(effects.prevent_default);
        assert_eq!(effects.focus, Some(target));
        assert_eq!(effects.scroll_to, None);
    }

    #[test]
    fn test_merge_keeps_earlier_targets() {
        let scroll = ScrollTo {
            top: 100.0,
            behavior: ScrollBehavior::Smooth,
        };
        let mut effects = Effects::none().with_scroll(scroll);
        effects.merge(Effects::none());

        assert_eq!(effects.scroll_to, Some(scroll));
        assert!(!effects.prevent_default);
    }
}
