//! Entity identity and lifecycle for the ECS.
//!
//! Entities are lightweight, copyable handles. They carry no data of their own; components
//! are attached to them through the [`Registry`](crate::ecs::Registry).
//!
//! # Architecture
//!
//! - **[`Entity`]**: A handle combining an [`Index`] and a [`Generation`]. The index names a
//!   slot in the registry's dense tables, while the generation counts how many times that slot
//!   has been reused. Two handles are equal only when both parts match.
//!
//! - **[`Allocator`]**: Hands out indices, recycling freed slots from a free list before
//!   growing the index space, and owns the per-slot generation table used to reject stale
//!   handles.
//!
//! # Generation Tracking
//!
//! When an entity is freed its slot's generation is incremented before the index is placed on
//! the free list. Any handle to the old entity then carries a generation that no longer matches
//! the slot, so it is detected as stale even after the index has been handed out again:
//!
//! ```rust,ignore
//! let entity = allocator.alloc(); // Entity { index: 0, generation: 0 }
//! allocator.free(entity)?;
//! let reused = allocator.alloc(); // Entity { index: 0, generation: 1 }
//! assert!(!allocator.is_alive(entity));
//! ```
//!
//! # Wrap Policy
//!
//! Generations never wrap. The allocator is built with a retirement limit (by default
//! `u32::MAX`). When freeing an entity would advance its slot to that limit, the slot is retired
//! instead of recycled: it keeps the limit as its generation, which no handle ever carries, and
//! it never returns to the free list. Allocation simply grows past retired slots.

use std::fmt;

use fixedbitset::FixedBitSet;

use crate::ecs::error::Error;

/// The generation of an entity slot, used to detect handles to entities that no longer exist.
/// The generation starts at `FIRST` and is incremented each time the slot is freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u32);

impl Generation {
    /// The first generation of a slot.
    pub const FIRST: Self = Self(0);

    /// The widest possible generation. This is the default retirement limit.
    pub const MAX: Self = Self(u32::MAX);

    /// Construct a generation from a raw counter value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw counter value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Get the next generation from the current, or `None` if the counter would overflow.
    #[inline]
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

/// The slot of an entity in the registry's dense tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(u32);

impl Index {
    /// Construct an index from a raw slot number.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw slot number.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Get the index as a position in indexable storage (e.g. Vec).
    #[inline]
    pub const fn slot(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Index {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity in the ECS.
///
/// The registry holds at most one live entity for a given index. The generation decides whether
/// this particular handle still refers to it. Handles order by index first, then generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    /// The slot of the entity.
    index: Index,

    /// The generation of the slot when this handle was issued.
    generation: Generation,
}

impl Entity {
    /// Construct a handle from its parts.
    ///
    /// Only the allocator issues live handles, so this is crate private.
    #[inline]
    pub(crate) const fn new(index: Index, generation: Generation) -> Self {
        Self { index, generation }
    }

    /// Get the index of this entity.
    #[inline]
    pub const fn index(&self) -> Index {
        self.index
    }

    /// Get the generation of this entity.
    #[inline]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Get the position of this entity in indexable storage (e.g. Vec).
    #[inline]
    pub const fn slot(&self) -> usize {
        self.index.slot()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index.0, self.generation.0)
    }
}

/// An allocator for entities in the ECS.
///
/// Allocates entity indices and recycles freed ones. Freeing bumps the slot generation before the
/// index is reused, invalidating every outstanding handle to the old entity.
///
/// The allocator is owned by the registry and requires `&mut self` for every mutation; no
/// synchronisation is involved.
#[derive(Debug, Clone)]
pub struct Allocator {
    /// Current generation of each slot, indexed by entity index.
    generations: Vec<Generation>,

    /// Indices available for reuse. Popped from the back.
    free: Vec<Index>,

    /// Slots that currently hold a live entity.
    alive: FixedBitSet,

    /// Generation at which a slot is retired instead of recycled.
    retire_at: Generation,

    /// Number of live entities.
    live: usize,

    /// Number of retired slots.
    retired: usize,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator {
    /// Construct a new allocator with the widest generation counter.
    #[inline]
    pub const fn new() -> Self {
        Self::with_limit(Generation::MAX)
    }

    /// Construct a new allocator that retires a slot once its generation reaches `retire_at`.
    ///
    /// A limit of zero would retire slots before their first use, so it is raised to one.
    pub const fn with_limit(retire_at: Generation) -> Self {
        let retire_at = if retire_at.0 == 0 {
            Generation(1)
        } else {
            retire_at
        };
        Self {
            generations: Vec::new(),
            free: Vec::new(),
            alive: FixedBitSet::new(),
            retire_at,
            live: 0,
            retired: 0,
        }
    }

    /// Reserve room for at least `additional` more slots.
    pub fn reserve(&mut self, additional: usize) {
        self.generations.reserve(additional);
        self.free.reserve(additional);
        self.alive.grow(self.generations.len() + additional);
    }

    /// Allocate a new entity, reusing a freed index when one is available.
    ///
    /// # Panics
    ///
    /// Panics if the 32-bit index space is exhausted.
    pub fn alloc(&mut self) -> Entity {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let raw = u32::try_from(self.generations.len())
                    .unwrap_or_else(|_| panic!("entity index space exhausted"));
                self.generations.push(Generation::FIRST);
                self.alive.grow(self.generations.len());
                Index(raw)
            }
        };

        self.alive.insert(index.slot());
        self.live += 1;
        Entity::new(index, self.generations[index.slot()])
    }

    /// Free an entity, returning its index to the free list.
    ///
    /// Fails with [`Error::StaleHandle`] if the handle does not match the slot's generation.
    /// Fails with [`Error::GenerationExhausted`] if the slot was retired rather than recycled;
    /// the entity is freed either way.
    pub fn free(&mut self, entity: Entity) -> Result<(), Error> {
        if !self.is_alive(entity) {
            return Err(Error::StaleHandle(entity));
        }

        let slot = entity.slot();
        self.alive.set(slot, false);
        self.live -= 1;

        match entity.generation.next().filter(|next| *next < self.retire_at) {
            Some(next) => {
                self.generations[slot] = next;
                self.free.push(entity.index);
                Ok(())
            }
            None => {
                self.generations[slot] = self.retire_at;
                self.retired += 1;
                Err(Error::GenerationExhausted(entity.index))
            }
        }
    }

    /// Determine if the handle refers to the live entity in its slot.
    ///
    /// This is a generation comparison only: a freed slot's generation has always moved past
    /// every handle issued for it.
    #[inline]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations.get(entity.slot()) == Some(&entity.generation)
    }

    /// Get the live entity occupying `slot`, if any.
    #[inline]
    pub fn entity_at(&self, slot: usize) -> Option<Entity> {
        if self.alive.contains(slot) {
            // Slots are only ever created from a `u32` index.
            Some(Entity::new(Index(slot as u32), self.generations[slot]))
        } else {
            None
        }
    }

    /// Iterate the live entities in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive
            .ones()
            .map(|slot| Entity::new(Index(slot as u32), self.generations[slot]))
    }

    /// One past the highest slot ever allocated.
    #[inline]
    pub fn slots(&self) -> usize {
        self.generations.len()
    }

    /// Number of live entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no entity is alive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots retired by the wrap policy.
    #[inline]
    pub fn retired(&self) -> usize {
        self.retired
    }

    /// Get the generation at which slots are retired.
    #[inline]
    pub fn retire_at(&self) -> Generation {
        self.retire_at
    }
}
