//! Builder and lookup helpers for entity trees.
//!
//! ```
//! use xentity::dsl::entity;
//!
//! # fn main() -> xentity::Result<()> {
//! let plano = entity("plano", |plano| {
//!     plano.child_entity("fuc", [("codigo", "M4310")], |fuc| {
//!         fuc.inside_attributes([("nome", "Programação Avançada"), ("ects", "6.0")])
//!     })?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(plano.path("fuc/ects")?.text(), "6.0");
//! assert_eq!(plano.child("fuc")?.get("codigo")?, "M4310");
//! # Ok(())
//! # }
//! ```

use crate::{
    entity::Entity,
    error::{ErrorKind, LookupError, Result, XmlError},
};

/// Creates an entity and runs `build` on it.
pub fn entity<F>(name: &str, build: F) -> Result<Entity>
where
    F: FnOnce(&Entity) -> Result<()>,
{
    let entity = Entity::new(name)?;
    build(&entity)?;
    Ok(entity)
}

impl Entity {
    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Result<Self> {
        self.with_data(|data| data.children.iter().find(|c| c.has_name(name)).cloned())
            .ok_or_else(|| {
                XmlError::new(ErrorKind::NotFound(LookupError::Child(name.to_string())))
                    .with_context(format!("looking inside '{}'", self.name()))
            })
    }

    /// Follows `/`-separated child names starting at this entity.
    pub fn path(&self, path: &str) -> Result<Self> {
        path.split('/')
            .try_fold(self.clone(), |current, segment| current.child(segment))
    }

    /// Value of a real attribute.
    pub fn get(&self, attribute_name: &str) -> Result<String> {
        self.attribute(attribute_name).ok_or_else(|| {
            XmlError::new(ErrorKind::NotFound(LookupError::Attribute(
                attribute_name.to_string(),
            )))
        })
    }

    pub fn contains(&self, attribute_name: &str) -> bool {
        self.has_attribute(attribute_name)
    }

    pub fn father_of(&self, child: &Self) -> Result<()> {
        self.add_child_entity(child)
    }

    pub fn father_of_all<'a, I>(&self, children: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        children
            .into_iter()
            .try_for_each(|child| self.add_child_entity(child))
    }

    /// Adds each pair as an attribute of this entity.
    pub fn inline_attributes<I, K, V>(&self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in attributes {
            self.add_attribute(name.as_ref(), value.as_ref());
        }
    }

    /// Adds each pair as a text child of this entity.
    pub fn inside_attributes<I, K, V>(&self, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in attributes {
            let child = Self::new(name.as_ref())?;
            child.add_text(value.as_ref());
            self.add_child_entity(&child)?;
        }
        Ok(())
    }

    /// Creates a child with `attributes`, attaches it, then runs `build` on it.
    pub fn child_entity<I, K, V, F>(&self, name: &str, attributes: I, build: F) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        F: FnOnce(&Self) -> Result<()>,
    {
        let child = Self::child_of(name, attributes, self)?;
        build(&child)?;
        Ok(child)
    }

    pub fn attribute_named(&self, name: &str, value: &str) {
        self.add_attribute(name, value);
    }

    pub fn text_node(&self, text: &str) {
        self.add_text(text);
    }
}
