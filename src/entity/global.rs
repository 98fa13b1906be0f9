//! Tree-wide search and mutation, rooted at the receiving entity.
//!
//! Every operation walks the whole subtree in pre-order; a match never stops
//! the walk from descending into the matched node.

use std::collections::VecDeque;

use tracing::debug;

use super::Entity;
use crate::{
    error::{Result, XmlError},
    name::{is_valid_attribute_name, is_valid_entity_name},
};

impl Entity {
    /// Names of every entity in pre-order, this one included.
    pub fn entity_list(&self) -> Vec<String> {
        self.pre_order().map(|entity| entity.name()).collect()
    }

    /// Adds an attribute to every entity named `entity_name` that is not a text node.
    pub fn global_add_attribute_to_entity(
        &self,
        entity_name: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) {
        let mut matched = 0usize;
        self.accept(|entity| {
            if entity.has_name(entity_name) && !entity.has_blank_attribute() {
                entity.add_attribute(attribute_name, attribute_value);
                matched += 1;
            }
        });
        debug!(
            "Added '{}' to {} '{}' entities",
            attribute_name, matched, entity_name
        );
    }

    /// Renames every entity called `old_name` except parentless ones.
    pub fn global_rename_entity(&self, old_name: &str, new_name: &str) -> Result<()> {
        if !is_valid_entity_name(new_name) {
            return Err(XmlError::invalid_entity_name(new_name));
        }
        self.try_accept(|entity| {
            if !entity.is_root() && entity.has_name(old_name) {
                entity.rename(new_name)?;
            }
            Ok(())
        })
    }

    /// Renames attribute `old_name` on every entity called `entity_name` that holds it.
    pub fn global_rename_attribute(
        &self,
        entity_name: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<()> {
        if !is_valid_attribute_name(new_name) {
            return Err(XmlError::invalid_attribute_name(new_name));
        }
        self.try_accept(|entity| {
            if entity.has_name(entity_name) && entity.has_attribute(old_name) {
                entity.rename_attribute(old_name, new_name)?;
            }
            Ok(())
        })
    }

    /// Detaches every descendant called `entity_name`.
    ///
    /// Nothing happens when this entity itself has that name.
    pub fn global_remove_entity(&self, entity_name: &str) {
        if self.has_name(entity_name) {
            debug!("Refusing to remove traversal root '{}'", entity_name);
            return;
        }

        let mut removed = 0usize;
        self.accept(|entity| {
            let doomed: Vec<Self> = entity
                .children()
                .into_iter()
                .filter(|child| child.has_name(entity_name))
                .collect();
            for child in &doomed {
                if entity.remove_child_entity(child) {
                    removed += 1;
                }
            }
        });
        debug!("Removed {} '{}' entities", removed, entity_name);
    }

    /// Removes `attribute_name` from every non-text entity called `entity_name`.
    pub fn global_remove_attribute(&self, entity_name: &str, attribute_name: &str) {
        self.accept(|entity| {
            if entity.has_name(entity_name)
                && entity.has_attribute(attribute_name)
                && entity.has_real_attributes()
            {
                entity.remove_attribute(attribute_name);
            }
        });
    }

    /// Collects entities matching a `/`-separated chain of names.
    ///
    /// A single segment list is shared by the whole walk: a matching node
    /// consumes the head segment, and once one segment is left every node
    /// with that name is collected. Sibling branches that would need the
    /// consumed segments again are therefore not matched.
    pub fn global_xpath(&self, path: &str) -> Vec<Self> {
        let mut segments: VecDeque<&str> = path.split('/').collect();
        let mut found = Vec::new();

        self.accept(|entity| {
            let Some(&head) = segments.front() else {
                return;
            };
            if entity.has_name(head) {
                if segments.len() == 1 {
                    found.push(entity.clone());
                } else {
                    segments.pop_front();
                }
            }
        });

        debug!("Path '{}' matched {} entities", path, found.len());
        found
    }

    /// Serializes every [`Entity::global_xpath`] match, one per line.
    pub fn global_print_xpath(&self, path: &str) -> String {
        self.global_xpath(path)
            .iter()
            .map(|entity| entity.pretty_print(0))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
