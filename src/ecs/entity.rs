//! Entity handles and allocation

use std::collections::HashMap;

/// Raw entity id, reused after the entity is destroyed
pub type EntityId = u64;

/// Entity handle. The generation tells a recycled id apart from a stale handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub id: EntityId,
    pub generation: u32,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self { id, generation: 0 }
    }
}

/// Entity allocator with a free list
pub struct EntityAllocator {
    next_id: EntityId,
    free_list: Vec<EntityId>,
    generations: HashMap<EntityId, u32>,
    alive: HashMap<EntityId, u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            free_list: Vec::new(),
            generations: HashMap::new(),
            alive: HashMap::new(),
        }
    }

    pub fn allocate(&mut self) -> Entity {
        let id = self.free_list.pop().unwrap_or_else(|| {
            let id = self.next_id;
            self.next_id += 1;
            id
        });
        let generation = self.generations.get(&id).copied().unwrap_or(0);
        self.alive.insert(id, generation);
        Entity { id, generation }
    }

    /// Returns false when the handle was already stale.
    pub fn deallocate(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        self.alive.remove(&entity.id);
        self.generations.insert(entity.id, entity.generation.wrapping_add(1));
        self.free_list.push(entity.id);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(&entity.id) == Some(&entity.generation)
    }

    pub fn count(&self) -> usize {
        self.alive.len()
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
