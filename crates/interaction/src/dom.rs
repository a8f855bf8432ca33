use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    fmt,
    rc::{Rc, Weak},
};

#[derive(Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    offset_top: f64,
    offset_height: f64,
    parent: Weak<RefCell<Node>>,
    children: Vec<Element>,
}

/// Shared handle to a page element. Clones point at the same element.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.into(),
            ..Default::default()
        })))
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.0.borrow_mut().id = Some(id.into());
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.0.borrow_mut().classes.insert(class.into());
        self
    }

    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Layout box: distance from the document top and rendered height.
    pub fn with_offset(self, top: f64, height: f64) -> Self {
        {
            let mut node = self.0.borrow_mut();
            node.offset_top = top;
            node.offset_height = height;
        }
        self
    }

    pub fn with_child(self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn append(&self, child: Element) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_owned());
    }

    pub fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&self, class: &str) -> bool {
        let mut node = self.0.borrow_mut();
        if node.classes.remove(class) {
            false
        } else {
            node.classes.insert(class.to_owned());
            true
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.into(), value.into());
    }

    pub fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    pub fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }

    pub fn parent(&self) -> Option<Element> {
        self.0.borrow().parent.upgrade().map(Element)
    }

    /// Inclusive, like `Node.contains`.
    pub fn contains(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(element) = current {
            if &element == self {
                return true;
            }
            current = element.parent();
        }

        false
    }

    /// Nearest inclusive ancestor matching `predicate`.
    pub fn closest(&self, predicate: impl Fn(&Element) -> bool) -> Option<Element> {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if predicate(&element) {
                return Some(element);
            }
            current = element.parent();
        }

        None
    }

    /// Descendants in document order, excluding `self`.
    pub fn descendants(&self) -> Vec<Element> {
        let mut found = vec![];
        for child in self.0.borrow().children.iter() {
            found.push(child.clone());
            found.extend(child.descendants());
        }

        found
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        write!(f, "<{}", node.tag)?;
        if let Some(id) = &node.id {
            write!(f, "#{id}")?;
        }
        for class in node.classes.iter() {
            write!(f, ".{class}")?;
        }
        write!(f, ">")
    }
}

#[derive(Clone, Debug)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.query_all(|element| element.id().as_deref() == Some(id))
            .into_iter()
            .next()
    }

    /// Every element matching `predicate`, root included, in document order.
    pub fn query_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<Element> {
        std::iter::once(self.root.clone())
            .chain(self.root.descendants())
            .filter(|element| predicate(element))
            .collect()
    }
}
