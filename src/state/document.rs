//! Page model the form controller binds to
//!
//! `Document` is the boundary the controller talks through: element values,
//! checked flags, classes, attributes, text, focus and node insertion. `Page`
//! is the in-memory implementation rendered by the terminal UI.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use super::forms::FormBindings;

/// Stable identity of an element on the page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Operations the controller needs from the hosting page
#[cfg_attr(test, mockall::automock)]
pub trait Document {
    /// Whether an element with this id exists
    fn contains(&self, id: &ElementId) -> bool;

    fn value(&self, id: &ElementId) -> String;
    fn set_value(&mut self, id: &ElementId, value: &str);

    fn is_checked(&self, id: &ElementId) -> bool;
    fn set_checked(&mut self, id: &ElementId, checked: bool);

    fn has_class(&self, id: &ElementId, class: &str) -> bool;
    fn add_class(&mut self, id: &ElementId, class: &str);
    fn remove_class(&mut self, id: &ElementId, class: &str);

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, id: &ElementId, name: &str, value: &str);
    fn remove_attribute(&mut self, id: &ElementId, name: &str);

    fn text(&self, id: &ElementId) -> String;
    fn set_text(&mut self, id: &ElementId, text: &str);

    fn is_disabled(&self, id: &ElementId) -> bool;
    fn set_disabled(&mut self, id: &ElementId, disabled: bool);

    fn focused(&self) -> Option<ElementId>;
    fn focus(&mut self, id: &ElementId);

    /// Insert a new, empty element as the last child of `parent`
    fn insert_element(&mut self, parent: &ElementId, id: &ElementId);
    /// Remove an element and its children
    fn remove_element(&mut self, id: &ElementId);
}

/// A single element on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub parent: Option<ElementId>,
}

/// In-memory page: elements keyed by id, kept in document order
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<ElementId, Element>,
    order: Vec<ElementId>,
    focused: Option<ElementId>,
}

impl Page {
    /// Build the contact form page described by the bindings
    pub fn from_bindings(bindings: &FormBindings) -> Self {
        let mut page = Page::default();
        let root = bindings.live_root.clone();
        page.create(&root, None);
        page.create(&bindings.form, Some(&root));

        for input in bindings.text_inputs() {
            page.create(input, Some(&bindings.form));
            page.create(&FormBindings::region_for(input), Some(&bindings.form));
        }

        let group = &bindings.query_type;
        page.create(&group.group, Some(&bindings.form));
        for option in &group.options {
            page.create(&option.container, Some(&group.group));
            page.create(&option.input, Some(&option.container));
            page.set_value(&option.input, &option.value);
            page.set_text(&option.container, &option.label);
        }
        page.create(&group.region, Some(&group.group));

        let consent = &bindings.consent;
        page.create(&consent.container, Some(&bindings.form));
        page.create(&consent.input, Some(&consent.container));
        page.create(&consent.region, Some(&bindings.form));

        page.create(&bindings.submit, Some(&bindings.form));
        page.create(&bindings.toast, Some(&root));
        page
    }

    fn create(&mut self, id: &ElementId, parent: Option<&ElementId>) {
        if self.elements.contains_key(id) {
            tracing::warn!("Element {id} already exists");
            return;
        }
        self.elements.insert(
            id.clone(),
            Element {
                parent: parent.cloned(),
                ..Default::default()
            },
        );
        self.order.push(id.clone());
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Ids of elements carrying `class`, in document order
    pub fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.order
            .iter()
            .filter(|id| self.has_class(id, class))
            .cloned()
            .collect()
    }

    /// Direct children of `parent`, in document order
    pub fn children(&self, parent: &ElementId) -> Vec<ElementId> {
        self.order
            .iter()
            .filter(|id| {
                self.elements
                    .get(*id)
                    .and_then(|e| e.parent.as_ref())
                    .is_some_and(|p| p == parent)
            })
            .cloned()
            .collect()
    }

    fn with_element<F: FnOnce(&mut Element)>(&mut self, id: &ElementId, f: F) {
        match self.elements.get_mut(id) {
            Some(element) => f(element),
            None => tracing::warn!("No element with id {id}"),
        }
    }
}

impl Document for Page {
    fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    fn value(&self, id: &ElementId) -> String {
        self.element(id).map(|e| e.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, id: &ElementId, value: &str) {
        self.with_element(id, |e| e.value = value.to_string());
    }

    fn is_checked(&self, id: &ElementId) -> bool {
        self.element(id).is_some_and(|e| e.checked)
    }

    fn set_checked(&mut self, id: &ElementId, checked: bool) {
        self.with_element(id, |e| e.checked = checked);
    }

    fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.classes.contains(class))
    }

    fn add_class(&mut self, id: &ElementId, class: &str) {
        self.with_element(id, |e| {
            e.classes.insert(class.to_string());
        });
    }

    fn remove_class(&mut self, id: &ElementId, class: &str) {
        self.with_element(id, |e| {
            e.classes.remove(class);
        });
    }

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String> {
        self.element(id).and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, id: &ElementId, name: &str, value: &str) {
        self.with_element(id, |e| {
            e.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&mut self, id: &ElementId, name: &str) {
        self.with_element(id, |e| {
            e.attributes.remove(name);
        });
    }

    fn text(&self, id: &ElementId) -> String {
        self.element(id).map(|e| e.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        self.with_element(id, |e| e.text = text.to_string());
    }

    fn is_disabled(&self, id: &ElementId) -> bool {
        self.element(id).is_some_and(|e| e.disabled)
    }

    fn set_disabled(&mut self, id: &ElementId, disabled: bool) {
        self.with_element(id, |e| e.disabled = disabled);
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused.clone()
    }

    fn focus(&mut self, id: &ElementId) {
        if self.contains(id) {
            self.focused = Some(id.clone());
        } else {
            tracing::warn!("Cannot focus missing element {id}");
        }
    }

    fn insert_element(&mut self, parent: &ElementId, id: &ElementId) {
        if !self.contains(parent) {
            tracing::warn!("Cannot insert {id}: parent {parent} is missing");
            return;
        }
        self.create(id, Some(parent));
    }

    fn remove_element(&mut self, id: &ElementId) {
        let mut doomed = vec![id.clone()];
        let mut i = 0;
        while i < doomed.len() {
            let children = self.children(&doomed[i]);
            doomed.extend(children);
            i += 1;
        }
        for id in &doomed {
            self.elements.remove(id);
        }
        self.order.retain(|id| !doomed.contains(id));
        if self.focused.as_ref().is_some_and(|f| doomed.contains(f)) {
            self.focused = None;
        }
    }
}
