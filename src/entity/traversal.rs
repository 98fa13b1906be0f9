//! Pre-order depth-first traversal.
//!
//! The children of a node are read only after the node itself has been
//! handed to the caller, so a visit may detach children of the node it is
//! looking at and those children are skipped.

use super::Entity;
use crate::error::Result;

/// Lazy pre-order iterator over an entity and its descendants.
#[derive(Debug)]
pub struct PreOrder {
    stack: Vec<Entity>,
    last: Option<Entity>,
}

impl PreOrder {
    fn new(root: Entity) -> Self {
        Self {
            stack: vec![root],
            last: None,
        }
    }
}

impl Iterator for PreOrder {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(last) = self.last.take() {
            self.stack.extend(last.children().into_iter().rev());
        }
        let next = self.stack.pop()?;
        self.last = Some(next.clone());
        Some(next)
    }
}

impl Entity {
    /// Visits this entity, then each child in order, recursively.
    pub fn accept<F>(&self, mut visit: F)
    where
        F: FnMut(&Self),
    {
        for entity in self.pre_order() {
            visit(&entity);
        }
    }

    /// Like [`Entity::accept`], stopping at the first error.
    pub fn try_accept<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&Self) -> Result<()>,
    {
        for entity in self.pre_order() {
            visit(&entity)?;
        }
        Ok(())
    }

    pub fn pre_order(&self) -> PreOrder {
        PreOrder::new(self.clone())
    }
}
