use crate::{Element, ViewportEvent};

/// Offsets applied to the viewport before testing for intersection, like the
/// CSS `rootMargin` of an intersection observer. Negative values shrink it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that has to be visible, `0.0` meaning any part.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    pub fn is_intersecting(&self, target: &Element, viewport: &ViewportEvent) -> bool {
        let root_top = viewport.top - self.root_margin.top;
        let root_bottom = viewport.top + viewport.height + self.root_margin.bottom;

        let top = target.offset_top();
        let height = target.offset_height();
        let bottom = top + height;

        if height <= 0.0 {
            return top >= root_top && top <= root_bottom;
        }

        let visible = bottom.min(root_bottom) - top.max(root_top);
        if visible <= 0.0 {
            return false;
        }

        visible / height >= self.threshold
    }
}

/// Elements waiting to come into view. Each one is reported once.
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    observed: Vec<Element>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: vec![],
        }
    }

    pub fn observe(&mut self, element: Element) {
        if !self.observed.contains(&element) {
            self.observed.push(element);
        }
    }

    pub fn unobserve(&mut self, element: &Element) {
        self.observed.retain(|observed| observed != element);
    }

    pub fn observed(&self) -> &[Element] {
        &self.observed
    }

    /// Removes and returns every observed element now intersecting.
    pub fn take_intersecting(&mut self, viewport: &ViewportEvent) -> Vec<Element> {
        let (hits, rest): (Vec<Element>, Vec<Element>) = self
            .observed
            .drain(..)
            .partition(|element| self.options.is_intersecting(element, viewport));
        self.observed = rest;

        hits
    }
}
