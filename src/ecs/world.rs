//! World - central container for entities and their components

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::component::ComponentStorage;
use super::entity::EntityAllocator;
use super::{Component, Entity, TypedComponentStorage};

/// World holds all entities and components
pub struct World {
    entities: EntityAllocator,
    components: HashMap<TypeId, Box<dyn ComponentStorage>>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            components: HashMap::new(),
        }
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        self.entities.allocate()
    }

    /// Destroy an entity and remove all its components
    pub fn destroy_entity(&mut self, entity: Entity) {
        if !self.entities.deallocate(entity) {
            return;
        }
        for storage in self.components.values_mut() {
            storage.remove(entity.id);
        }
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.count()
    }

    /// Attach a component, replacing any previous one of the same type.
    /// Dead entities are ignored.
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.entities.is_alive(entity) {
            return;
        }

        let storage = self
            .components
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(TypedComponentStorage::<T>::new()));

        if let Some(storage) = storage
            .as_any_mut()
            .downcast_mut::<TypedComponentStorage<T>>()
        {
            storage.insert(entity.id, component);
        }
    }

    /// Lookup by type parameter
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.get_storage::<T>()?.get(entity.id)
    }

    /// Lookup by runtime type id; the caller downcasts the result
    pub fn get_component_by_type(&self, entity: Entity, type_id: TypeId) -> Option<&dyn Any> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.components.get(&type_id)?.get_any(entity.id)
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.components
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<TypedComponentStorage<T>>()?
            .get_mut(entity.id)
    }

    pub fn get_storage<T: Component>(&self) -> Option<&TypedComponentStorage<T>> {
        self.components
            .get(&TypeId::of::<T>())?
            .as_any()
            .downcast_ref::<TypedComponentStorage<T>>()
    }

    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.is_alive(entity)
            && self
                .components
                .get(&TypeId::of::<T>())
                .is_some_and(|storage| storage.has(entity.id))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker(u8);
    impl Component for Marker {}

    #[derive(Debug, PartialEq)]
    struct Speed(f32);
    impl Component for Speed {}

    #[test]
    fn test_world_entity_lifecycle() {
        let mut world = World::new();

        let e1 = world.create_entity();
        let e2 = world.create_entity();
        assert_eq!(world.entity_count(), 2);

        world.destroy_entity(e1);
        assert!(!world.is_alive(e1));
        assert!(world.is_alive(e2));
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn test_world_components() {
        let mut world = World::new();

        let entity = world.create_entity();
        world.add_component(entity, Marker(1));
        world.add_component(entity, Speed(0.5));

        assert!(world.has_component::<Marker>(entity));
        assert_eq!(world.get_component::<Marker>(entity), Some(&Marker(1)));

        if let Some(speed) = world.get_component_mut::<Speed>(entity) {
            speed.0 = 2.0;
        }
        assert_eq!(world.get_component::<Speed>(entity), Some(&Speed(2.0)));
    }

    #[test]
    fn test_lookup_by_type_id_matches_generic_lookup() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Marker(9));

        let explicit = world
            .get_component_by_type(entity, TypeId::of::<Marker>())
            .and_then(|any| any.downcast_ref::<Marker>());
        assert_eq!(explicit, world.get_component::<Marker>(entity));
        assert!(world
            .get_component_by_type(entity, TypeId::of::<Speed>())
            .is_none());
    }

    #[test]
    fn test_destroy_removes_components() {
        let mut world = World::new();
        let old = world.create_entity();
        world.add_component(old, Marker(3));
        world.destroy_entity(old);

        let recycled = world.create_entity();
        assert_eq!(recycled.id, old.id);
        assert!(!world.has_component::<Marker>(recycled));
        assert!(world.get_component::<Marker>(old).is_none());
    }
}
