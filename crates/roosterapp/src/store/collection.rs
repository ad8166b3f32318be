use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{Record, Validated};
use crate::config::RoosterConfig;
use crate::error::{Result, RoosterError};
use crate::identity;
use crate::pagination::Window;

/// Insertion-ordered, id-keyed set of one resource kind.
pub struct Collection<R: Record> {
    items: RwLock<IndexMap<Uuid, R>>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(IndexMap::new()),
        }
    }

    /// Validates `draft`, assigns its id and appends it.
    pub fn create(&self, draft: R::Draft, config: &RoosterConfig) -> Result<R> {
        let Validated {
            requested_id,
            fields,
        } = R::validate(draft, config)?;

        let mut items = self.items.write();
        let id = identity::assign(requested_id.as_deref(), |uuid| items.contains_key(uuid))?;
        let record = R::assemble(id, fields);
        items.insert(*record.id().as_uuid(), record.clone());

        tracing::debug!(kind = %R::KIND, id = %record.id(), count = items.len(), "created");
        Ok(record)
    }

    /// Every present resource, in insertion order.
    pub fn read_all(&self) -> Vec<R> {
        self.items.read().values().cloned().collect()
    }

    /// One page of [`Collection::read_all`], cut from the same snapshot.
    pub fn read_page(&self, window: &Window) -> Vec<R> {
        window.apply(self.items.read().values())
    }

    pub fn read_one(&self, id: &str) -> Result<R> {
        let key = identity::lookup_key(id).ok_or(RoosterError::NotFound)?;
        self.items
            .read()
            .get(&key)
            .cloned()
            .ok_or(RoosterError::NotFound)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let key = identity::lookup_key(id).ok_or(RoosterError::NotFound)?;
        let mut items = self.items.write();
        match items.shift_remove(&key) {
            Some(removed) => {
                tracing::debug!(kind = %R::KIND, id = %removed.id(), count = items.len(), "deleted");
                Ok(())
            }
            None => Err(RoosterError::NotFound),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Removes everything.
    pub fn clear(&self) {
        self.items.write().clear();
    }
}
