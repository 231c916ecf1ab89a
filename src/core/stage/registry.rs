//=========================================================================
// Spawn Registry
//=========================================================================
//
// Area id → spawn descriptor table plus the "active spawn" slot.
//
// Architecture:
//   register()/register_all() ──► HashMap + insertion order
//   set_active() ──► StageEvents.active_spawn (cell)
//                └─► StageEvents.area_changed (edge)
//
// Append-only: a duplicate id is logged and ignored, never replaced.
// The registry is the only writer of the active-spawn cell.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::SpawnDescriptor;
use crate::core::event_bus::StageEvents;

//=== SpawnRegistry =======================================================

/// Owns every spawn descriptor in the stage and which one is active.
pub struct SpawnRegistry {
    descriptors: HashMap<String, SpawnDescriptor>,
    order: Vec<String>,
    events: StageEvents,
}

impl SpawnRegistry {
    //--- Construction -----------------------------------------------------

    pub fn new(events: StageEvents) -> Self {
        Self {
            descriptors: HashMap::new(),
            order: Vec::new(),
            events,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Adds a descriptor under `id`.
    ///
    /// Returns false (and leaves the registry untouched) if `id` is
    /// already taken.
    pub fn register(&mut self, id: impl Into<String>, descriptor: SpawnDescriptor) -> bool {
        let id = id.into();
        if self.descriptors.contains_key(&id) {
            warn!(target: "stage", "Spawn '{}' already registered, keeping the first", id);
            return false;
        }

        self.order.push(id.clone());
        self.descriptors.insert(id, descriptor);
        true
    }

    /// Startup batch registration.
    ///
    /// Each descriptor is keyed by its own `area_id`. The descriptor named
    /// by `initial` becomes active; without one (or if it is unknown) the
    /// first registered descriptor is used instead.
    pub fn register_all<I>(&mut self, descriptors: I, initial: Option<&str>)
    where
        I: IntoIterator<Item = SpawnDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor.area_id.clone(), descriptor);
        }

        let chosen = match initial {
            Some(id) => self.resolve(id),
            None => {
                warn!(target: "stage", "No initial spawn given, using the first registered");
                None
            }
        };

        let chosen = chosen.or_else(|| self.first().cloned());
        self.set_active(chosen);
    }

    //--- Activation -------------------------------------------------------

    /// Makes `descriptor` the active spawn and announces the area change.
    ///
    /// `None` is logged and ignored. Cell update and edge emission happen
    /// back to back, so cell subscribers have already seen the new value by
    /// the time area-changed observers run.
    pub fn set_active(&mut self, descriptor: Option<SpawnDescriptor>) {
        let Some(descriptor) = descriptor else {
            warn!(target: "stage", "Ignoring request to activate a missing spawn");
            return;
        };

        info!(target: "stage", "Active spawn set to '{}' at {}", descriptor.area_id, descriptor.position);
        self.events.active_spawn.set(Some(descriptor.clone()));
        self.events.area_changed.emit(descriptor);
    }

    /// Activates the descriptor registered under `id`, if any.
    pub fn transition_to_area(&mut self, id: &str) {
        if let Some(descriptor) = self.resolve(id) {
            self.set_active(Some(descriptor));
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn resolve(&self, id: &str) -> Option<SpawnDescriptor> {
        let found = self.descriptors.get(id).cloned();
        if found.is_none() {
            warn!(target: "stage", "Spawn '{}' not found", id);
        }
        found
    }

    pub fn active_descriptor(&self) -> Option<SpawnDescriptor> {
        self.events.active_spawn.get()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    fn first(&self) -> Option<&SpawnDescriptor> {
        self.order.first().and_then(|id| self.descriptors.get(id))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
