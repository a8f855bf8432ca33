use crate::{ClickEvent, Effects, Element, Handler, Key, KeyEvent};

pub const ACTIVE_CLASS: &str = "active";
pub const NAV_LINK_CLASS: &str = "nav__link";

/// The mobile menu and the control that opens it. Both carry `active` while
/// the menu is open.
#[derive(Clone, Debug)]
pub struct NavMenu {
    toggle: Element,
    menu: Element,
}

impl NavMenu {
    pub fn new(toggle: &Element, menu: &Element) -> Self {
        Self {
            toggle: toggle.clone(),
            menu: menu.clone(),
        }
    }

    pub fn toggle_element(&self) -> &Element {
        &self.toggle
    }

    pub fn menu_element(&self) -> &Element {
        &self.menu
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(ACTIVE_CLASS)
    }

    pub fn toggle(&self) {
        let open = self.menu.toggle_class(ACTIVE_CLASS);
        if open {
            self.toggle.add_class(ACTIVE_CLASS);
        } else {
            self.toggle.remove_class(ACTIVE_CLASS);
        }
    }

    pub fn close(&self) {
        self.toggle.remove_class(ACTIVE_CLASS);
        self.menu.remove_class(ACTIVE_CLASS);
    }
}

/// Opens and closes the menu from the toggle, closes it after a menu link is
/// followed or when the click lands outside both.
pub struct NavClick {
    nav: NavMenu,
}

impl NavClick {
    pub fn new(nav: &NavMenu) -> Self {
        Self { nav: nav.clone() }
    }
}

impl Handler<ClickEvent> for NavClick {
    fn handle(&mut self, event: &ClickEvent) -> Effects {
        let target = &event.target;

        if self.nav.toggle.contains(target) {
            self.nav.toggle();
        } else if self.nav.menu.contains(target) {
            let on_link = target
                .closest(|element| element.has_class(NAV_LINK_CLASS))
                .is_some_and(|link| self.nav.menu.contains(&link));

            if on_link {
                self.nav.close();
            }
        } else {
            self.nav.close();
        }

        Effects::none()
    }
}

/// Enter and Space on the toggle act as a click on it.
pub struct NavToggleKeys {
    nav: NavMenu,
}

impl NavToggleKeys {
    pub fn new(nav: &NavMenu) -> Self {
        Self { nav: nav.clone() }
    }
}

impl Handler<KeyEvent> for NavToggleKeys {
    fn handle(&mut self, event: &KeyEvent) -> Effects {
        if !self.nav.toggle.contains(&event.target) {
            return Effects::none();
        }

        match event.key {
            Key::Enter | Key::Space => {
                self.nav.toggle();
                Effects::prevent_default()
            }
            _ => Effects::none(),
        }
    }
}

/// Keeps Tab focus cycling inside the menu and closes it on Escape.
pub struct FocusTrap {
    nav: NavMenu,
    focusable: Vec<Element>,
}

impl FocusTrap {
    pub fn new(nav: &NavMenu) -> Self {
        let focusable = nav
            .menu
            .descendants()
            .into_iter()
            .filter(|element| matches!(element.tag().as_str(), "a" | "button"))
            .collect();

        Self {
            nav: nav.clone(),
            focusable,
        }
    }
}

impl Handler<KeyEvent> for FocusTrap {
    fn handle(&mut self, event: &KeyEvent) -> Effects {
        if !self.nav.menu.contains(&event.target) {
            return Effects::none();
        }

        match event.key {
            Key::Tab => {
                let (Some(first), Some(last)) = (self.focusable.first(), self.focusable.last())
                else {
                    return Effects::none();
                };

                if event.shift && &event.target == first {
                    Effects::prevent_default().with_focus(last)
                } else if !event.shift && &event.target == last {
                    Effects::prevent_default().with_focus(first)
                } else {
                    Effects::none()
                }
            }
            Key::Escape => {
                self.nav.close();
                Effects::none().with_focus(&self.nav.toggle)
            }
            _ => Effects::none(),
        }
    }
}
