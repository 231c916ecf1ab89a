//=========================================================================
// World Store
//=========================================================================
//
// Owns every possessable entity, keyed by `EntityId`.
//
// Ids are never reused, so a stale id held by a subscriber simply stops
// resolving once its entity is gone.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{EntityId, Possessable};

//=== World ===============================================================

/// Entity storage for the possession core.
pub struct World {
    next_id: u64,
    entities: HashMap<EntityId, Box<dyn Possessable>>,
}

impl World {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: HashMap::new(),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Adds an entity and returns its id.
    pub fn spawn<P>(&mut self, entity: P) -> EntityId
    where
        P: Possessable + 'static,
    {
        self.spawn_boxed(Box::new(entity))
    }

    /// Adds an already boxed entity and returns its id.
    pub fn spawn_boxed(&mut self, entity: Box<dyn Possessable>) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        debug!(target: "world", "Spawned {} as {}", entity.name(), id);
        self.entities.insert(id, entity);
        id
    }

    /// Removes an entity, returning it if it existed.
    pub fn despawn(&mut self, id: EntityId) -> Option<Box<dyn Possessable>> {
        let removed = self.entities.remove(&id);
        if removed.is_some() {
            debug!(target: "world", "Despawned {}", id);
        }
        removed
    }

    //--- Access -----------------------------------------------------------

    pub fn get(&self, id: EntityId) -> Option<&dyn Possessable> {
        self.entities.get(&id).map(|e| e.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut (dyn Possessable + 'static)> {
        self.entities.get_mut(&id).map(|e| e.as_mut())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over all entities in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &(dyn Possessable + 'static))> {
        self.entities.iter().map(|(id, e)| (*id, e.as_ref()))
    }

    /// Ids of every entity whose possession flag is set.
    pub fn possessed(&self) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| e.is_possessed())
            .map(|(id, _)| *id)
            .collect()
    }

    //--- Update -----------------------------------------------------------

    /// Advances every entity by `dt` seconds of scaled time.
    pub fn update(&mut self, dt: f32) {
        for entity in self.entities.values_mut() {
            entity.update(dt);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
