//! Entity store
//!
//! Owns every entity in a single master list (creation order) and keeps a
//! per-kind index of positions into it, so typed iteration never scans or
//! inspects unrelated entities.
//!
//! Destruction is two-phase:
//! - mark: gameplay code sets an entity's `destroyed` flag
//! - sweep: [`EntityStore::refresh`] drops flagged entities and re-indexes
//!
//! Nothing is removed outside `refresh`/`clear`, and both take `&mut self`,
//! so no borrowed view can outlive a compaction.

use super::entity::{Entity, EntityKind, UpdateContext, Variant};
use crate::renderer::Renderer;

/// Stable handle to an entity, valid until it is swept
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

#[derive(Debug, Clone)]
struct Slot {
    id: EntityId,
    entity: Entity,
}

type GroupIndex = [Vec<usize>; EntityKind::COUNT];

/// Owning registry of all entities, grouped by kind
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    /// Master list, sorted by id (creation order)
    slots: Vec<Slot>,
    /// Positions into `slots`, per kind, in creation order
    groups: GroupIndex,
    /// 64-bit so ids never wrap and the master list stays sorted
    next_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a new entity and register it with its group
    pub fn create<T: Variant>(&mut self, value: T) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        self.groups[T::KIND.index()].push(self.slots.len());
        self.slots.push(Slot {
            id,
            entity: value.into(),
        });
        id
    }

    /// Look up an entity of a known kind
    pub fn get<T: Variant>(&self, id: EntityId) -> Option<&T> {
        let pos = self.position(id)?;
        T::from_entity(&self.slots[pos].entity)
    }

    pub fn get_mut<T: Variant>(&mut self, id: EntityId) -> Option<&mut T> {
        let pos = self.position(id)?;
        T::from_entity_mut(&mut self.slots[pos].entity)
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.slots.binary_search_by_key(&id, |s| s.id).ok()
    }

    /// Visit every registered `T`, in creation order
    ///
    /// Entities already flagged as destroyed are still visited until the
    /// next `refresh`.
    pub fn for_each<T: Variant, F: FnMut(&mut T)>(&mut self, mut f: F) {
        let slots = &mut self.slots;
        for &pos in &self.groups[T::KIND.index()] {
            if let Some(value) = T::from_entity_mut(&mut slots[pos].entity) {
                f(value);
            }
        }
    }

    /// Visit every `T` together with a mutable view of all other entities
    ///
    /// Used for pairwise passes such as ball against bricks, where both
    /// sides of the pair are mutated.
    pub fn for_each_with_others<T, F>(&mut self, mut f: F)
    where
        T: Variant,
        F: FnMut(&mut T, &mut Others<'_>),
    {
        let groups = &self.groups;
        for &pos in &groups[T::KIND.index()] {
            let (before, rest) = self.slots.split_at_mut(pos);
            let Some((current, after)) = rest.split_first_mut() else {
                continue;
            };
            let Some(value) = T::from_entity_mut(&mut current.entity) else {
                continue;
            };
            let mut others = Others {
                before,
                after,
                skip: pos,
                groups,
            };
            f(value, &mut others);
        }
    }

    /// Iterate every registered `T`, in creation order
    pub fn iter<'a, T: Variant + 'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a {
        self.groups[T::KIND.index()]
            .iter()
            .filter_map(|&pos| T::from_entity(&self.slots[pos].entity))
    }

    /// Handles of every registered `T`, in creation order
    pub fn ids<T: Variant>(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.groups[T::KIND.index()]
            .iter()
            .map(|&pos| self.slots[pos].id)
    }

    /// Snapshot of the current `T` group
    pub fn get_all<T: Variant>(&self) -> Vec<&T> {
        self.iter::<T>().collect()
    }

    pub fn count<T: Variant>(&self) -> usize {
        self.groups[T::KIND.index()].len()
    }

    pub fn is_group_empty<T: Variant>(&self) -> bool {
        self.groups[T::KIND.index()].is_empty()
    }

    /// All entities in master order
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.slots.iter().map(|s| (s.id, &s.entity))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Update every entity in creation order, regardless of kind
    pub fn update_all(&mut self, ctx: &UpdateContext) {
        for slot in &mut self.slots {
            slot.entity.update(ctx);
        }
    }

    /// Draw every entity in creation order
    pub fn draw_all(&self, renderer: &mut dyn Renderer) {
        for slot in &self.slots {
            slot.entity.draw(renderer);
        }
    }

    /// Sweep destroyed entities. Returns how many were removed.
    pub fn refresh(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| !s.entity.is_destroyed());
        let removed = before - self.slots.len();
        if removed > 0 {
            self.rebuild_groups();
            log::trace!("Swept {} destroyed entities, {} remain", removed, self.slots.len());
        }
        removed
    }

    /// Drop everything (restart)
    pub fn clear(&mut self) {
        self.slots.clear();
        for group in &mut self.groups {
            group.clear();
        }
    }

    fn rebuild_groups(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
        for (pos, slot) in self.slots.iter().enumerate() {
            self.groups[slot.entity.kind().index()].push(pos);
        }
    }
}

/// Every entity except the one currently being visited
pub struct Others<'a> {
    before: &'a mut [Slot],
    after: &'a mut [Slot],
    skip: usize,
    groups: &'a GroupIndex,
}

impl Others<'_> {
    /// Visit every other registered `U`, in creation order
    pub fn for_each<U: Variant, F: FnMut(&mut U)>(&mut self, mut f: F) {
        let groups = self.groups;
        for &pos in &groups[U::KIND.index()] {
            let slot = match pos.cmp(&self.skip) {
                std::cmp::Ordering::Less => &mut self.before[pos],
                std::cmp::Ordering::Equal => continue,
                std::cmp::Ordering::Greater => &mut self.after[pos - self.skip - 1],
            };
            if let Some(value) = U::from_entity_mut(&mut slot.entity) {
                f(value);
            }
        }
    }
}
