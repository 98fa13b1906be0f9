//! The entity tree.
//!
//! An [`Entity`] is a cheap, cloneable handle to a node. Nodes own their
//! children and keep a weak reference to their parent, so dropping the last
//! handle to a root frees the whole tree while detached subtrees stay usable.

mod global;
mod traversal;

pub use traversal::PreOrder;

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    error::{ErrorKind, LookupError, Result, XmlError},
    formatter::{FormatConfig, Formatter, XmlFormatter},
    name::{is_valid_attribute_name, is_valid_entity_name},
};

/// Returned by [`Entity::text`] when the entity is not a text node.
pub const NO_TEXT: &str = "Doesn't have text!";

/// Ordered attribute map. The `None` key holds the text content.
pub type Attributes = IndexMap<Option<String>, String>;

#[derive(Debug)]
pub(crate) struct EntityData {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    parent: Weak<RefCell<EntityData>>,
    pub(crate) children: Vec<Entity>,
}

impl EntityData {
    /// True when no key is a real attribute name (an empty map counts).
    pub(crate) fn attributes_are_blank(&self) -> bool {
        self.attributes.keys().all(is_blank_key)
    }
}

pub(crate) fn is_blank_key(key: &Option<String>) -> bool {
    key.as_deref().map_or(true, |k| k.trim().is_empty())
}

fn attribute_key(name: &str) -> Option<String> {
    Some(name.to_string())
}

/// Handle to a named node with ordered attributes and children.
///
/// Cloning the handle does not copy the node; equality is identity.
#[derive(Clone)]
pub struct Entity(Rc<RefCell<EntityData>>);

impl Entity {
    /// Creates a parentless entity without attributes.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_attributes(name, std::iter::empty::<(String, String)>())
    }

    /// Creates a parentless entity with pre-populated attributes.
    ///
    /// Every attribute key must be a valid attribute name. Empty values are
    /// skipped.
    pub fn with_attributes<I, K, V>(name: &str, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if !is_valid_entity_name(name) {
            return Err(XmlError::invalid_entity_name(name));
        }

        let mut map = Attributes::new();
        for (key, value) in attributes {
            let key = key.into();
            if !is_valid_attribute_name(&key) {
                return Err(XmlError::invalid_attribute_name(&key)
                    .with_context(format!("while creating entity '{}'", name)));
            }
            let value = value.into();
            if value.is_empty() {
                debug!("Skipping empty attribute '{}' on entity '{}'", key, name);
                continue;
            }
            map.insert(Some(key), value);
        }

        Ok(Self(Rc::new(RefCell::new(EntityData {
            name: name.to_string(),
            attributes: map,
            parent: Weak::new(),
            children: Vec::new(),
        }))))
    }

    /// Creates an entity and appends it to `parent` in one step.
    pub fn child_of<I, K, V>(name: &str, attributes: I, parent: &Self) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entity = Self::with_attributes(name, attributes)?;
        parent.add_child_entity(&entity)?;
        Ok(entity)
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.0.borrow().name == name
    }

    /// Renames the entity.
    pub fn rename(&self, name: &str) -> Result<()> {
        if !is_valid_entity_name(name) {
            return Err(XmlError::invalid_entity_name(name));
        }
        self.0.borrow_mut().name = name.to_string();
        Ok(())
    }

    /// Returns a copy of the attribute map, text entry included.
    pub fn attributes(&self) -> Attributes {
        self.0.borrow().attributes.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(&attribute_key(name)).cloned()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.0
            .borrow()
            .attributes
            .contains_key(&attribute_key(name))
    }

    /// True when the entity carries at least one real (named) attribute.
    pub fn has_real_attributes(&self) -> bool {
        !self.0.borrow().attributes_are_blank()
    }

    pub(crate) fn has_blank_attribute(&self) -> bool {
        self.0.borrow().attributes.keys().any(is_blank_key)
    }

    pub fn children(&self) -> Vec<Self> {
        self.0.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Text content if the only entry is the text pseudo-attribute.
    pub fn text_content(&self) -> Option<String> {
        let data = self.0.borrow();
        if data.attributes.len() != 1 {
            return None;
        }
        data.attributes
            .first()
            .filter(|(key, _)| key.as_deref().map_or(true, str::is_empty))
            .map(|(_, value)| value.clone())
    }

    /// Text content, or [`NO_TEXT`] when the entity is not a text node.
    pub fn text(&self) -> String {
        self.text_content().unwrap_or_else(|| NO_TEXT.to_string())
    }

    /// Inserts or overwrites an attribute.
    ///
    /// Invalid names and empty values are skipped without an error.
    pub fn add_attribute(&self, name: &str, value: &str) {
        if !is_valid_attribute_name(name) || value.is_empty() {
            debug!(
                "Skipping attribute '{}'='{}' on entity '{}'",
                name,
                value,
                self.name()
            );
            return;
        }
        self.0
            .borrow_mut()
            .attributes
            .insert(attribute_key(name), value.to_string());
    }

    /// Sets the text content, unless the entity already has real attributes.
    pub fn add_text(&self, value: &str) {
        let mut data = self.0.borrow_mut();
        if data.attributes_are_blank() {
            data.attributes.insert(None, value.to_string());
        } else {
            debug!(
                "Entity '{}' has attributes, ignoring text '{}'",
                data.name, value
            );
        }
    }

    /// Removes an attribute, keeping the order of the others.
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow_mut()
            .attributes
            .shift_remove(&attribute_key(name))
    }

    /// Replaces the value of an existing attribute and returns the old one.
    pub fn change_attribute(&self, name: &str, value: &str) -> Option<String> {
        self.0
            .borrow_mut()
            .attributes
            .get_mut(&attribute_key(name))
            .map(|current| std::mem::replace(current, value.to_string()))
    }

    /// Renames an attribute key in place.
    pub fn rename_attribute(&self, old_name: &str, new_name: &str) -> Result<()> {
        if !is_valid_attribute_name(new_name) {
            return Err(XmlError::invalid_attribute_name(new_name));
        }

        let mut data = self.0.borrow_mut();
        let old_key = attribute_key(old_name);
        if !data.attributes.contains_key(&old_key) {
            return Err(
                XmlError::new(ErrorKind::NotFound(LookupError::Attribute(
                    old_name.to_string(),
                )))
                .with_context(format!("renaming attribute on entity '{}'", data.name)),
            );
        }

        data.attributes = std::mem::take(&mut data.attributes)
            .into_iter()
            .map(|(key, value)| {
                if key == old_key {
                    (attribute_key(new_name), value)
                } else {
                    (key, value)
                }
            })
            .collect();
        Ok(())
    }

    /// Appends `child`, detaching it from its previous parent first.
    pub fn add_child_entity(&self, child: &Self) -> Result<()> {
        if self == child || self.ancestors().any(|ancestor| &ancestor == child) {
            return Err(XmlError::new(ErrorKind::CyclicReference(format!(
                "'{}' cannot become a child of '{}'",
                child.name(),
                self.name()
            ))));
        }

        if let Some(previous) = child.parent() {
            previous.remove_child_entity(child);
        }

        trace!("Attaching '{}' to '{}'", child.name(), self.name());
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    /// Detaches `child`. Returns false if it was not a child of this entity.
    pub fn remove_child_entity(&self, child: &Self) -> bool {
        let mut data = self.0.borrow_mut();
        let Some(position) = data.children.iter().position(|c| c == child) else {
            return false;
        };
        let removed = data.children.remove(position);
        drop(data);

        trace!("Detaching '{}' from '{}'", removed.name(), self.name());
        removed.0.borrow_mut().parent = Weak::new();
        true
    }

    fn ancestors(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(self.parent(), Self::parent)
    }

    /// Serializes the entity at `indentation` levels with the default config.
    pub fn pretty_print(&self, indentation: usize) -> String {
        XmlFormatter::render(self, indentation, &FormatConfig::default())
    }

    /// Serializes the entity with a custom formatting configuration.
    pub fn pretty_print_with(&self, indentation: usize, config: &FormatConfig) -> Result<String> {
        XmlFormatter.format_at(self, indentation, config)
    }

    pub(crate) fn with_data<R>(&self, f: impl FnOnce(&EntityData) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Entity {}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        let parent = data.parent.upgrade().map(|p| p.borrow().name.clone());
        f.debug_struct("Entity")
            .field("name", &data.name)
            .field("attributes", &data.attributes)
            .field("parent", &parent)
            .field("children", &data.children)
            .finish()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_print(0))
    }
}
