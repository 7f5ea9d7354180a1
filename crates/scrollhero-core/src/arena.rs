use serde::{Deserialize, Serialize};

/// Generation-tagged handle into an [`Arena`].
///
/// Handles stay valid while the entity lives; after the slot is swept and
/// reused, stale handles resolve to `None` instead of the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId {
    index: u32,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
    alive: bool,
}

/// Dense entity storage with deferred removal.
///
/// `kill` marks an entity dead immediately — dead entities are excluded
/// from `get`/`iter` for the rest of the tick — but the slot is only
/// reclaimed by `sweep`, called once at end of tick. This keeps handles
/// stable while subsystems iterate and kill within the same tick.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> EntityId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            slot.alive = true;
            EntityId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
                alive: true,
            });
            EntityId {
                index,
                generation: 0,
            }
        }
    }

    fn slot(&self, id: EntityId) -> Option<&Slot<T>> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
    }

    /// Live-entity lookup. Dead or stale handles return `None`.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.slot(id).filter(|s| s.alive)?.value.as_ref()
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation && s.alive)?;
        slot.value.as_mut()
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.slot(id).is_some_and(|s| s.alive)
    }

    /// Mark an entity dead. Returns false for dead or stale handles, so a
    /// double kill never fires twice.
    pub fn kill(&mut self, id: EntityId) -> bool {
        match self
            .slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation && s.alive)
        {
            Some(slot) => {
                slot.alive = false;
                true
            },
            None => false,
        }
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over live entities only.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            if !s.alive {
                return None;
            }
            let id = EntityId {
                index: i as u32,
                generation: s.generation,
            };
            s.value.as_ref().map(|v| (id, v))
        })
    }

    /// Snapshot of live entity handles, for iteration that kills mid-loop.
    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Reclaim slots of dead entities and retire their handles.
    pub fn sweep(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if !slot.alive && slot.value.is_some() {
                slot.value = None;
                slot.generation += 1;
                self.free.push(i as u32);
            }
        }
    }
}
