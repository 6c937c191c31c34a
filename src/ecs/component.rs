//! Component storage keyed by entity id

use std::any::Any;
use std::collections::HashMap;

use super::EntityId;

/// Marker for types that can be attached to entities
pub trait Component: Any + Send + Sync + 'static {}

/// Type-erased view of a storage, used for lookups by runtime type id
pub trait ComponentStorage: Send + Sync {
    fn remove(&mut self, entity_id: EntityId);
    fn has(&self, entity_id: EntityId) -> bool;
    fn get_any(&self, entity_id: EntityId) -> Option<&dyn Any>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Concrete storage for one component type
pub struct TypedComponentStorage<T: Component> {
    data: HashMap<EntityId, T>,
}

impl<T: Component> TypedComponentStorage<T> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn insert(&mut self, entity_id: EntityId, component: T) -> Option<T> {
        self.data.insert(entity_id, component)
    }

    pub fn get(&self, entity_id: EntityId) -> Option<&T> {
        self.data.get(&entity_id)
    }

    pub fn get_mut(&mut self, entity_id: EntityId) -> Option<&mut T> {
        self.data.get_mut(&entity_id)
    }
}

impl<T: Component> Default for TypedComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentStorage for TypedComponentStorage<T> {
    fn remove(&mut self, entity_id: EntityId) {
        self.data.remove(&entity_id);
    }

    fn has(&self, entity_id: EntityId) -> bool {
        self.data.contains_key(&entity_id)
    }

    fn get_any(&self, entity_id: EntityId) -> Option<&dyn Any> {
        self.data.get(&entity_id).map(|comp| comp as &dyn Any)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
