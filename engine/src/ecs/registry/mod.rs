//! The entity registry: entity lifecycle, component assignment and queries.
//!
//! [`Registry`] owns the entity [`Allocator`], one [`Signature`] per entity slot and the
//! component [`Set`] holding a [`Pool`](crate::ecs::storage::Pool) per component type. It keeps
//! one invariant above all: the signature bit for a component is set exactly when that
//! component's pool holds a value for the slot.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = Registry::<Components>::new();
//!
//! let entity = registry.create_with((Position { x: 0.0, y: 0.0 }, Velocity { dx: 1.0, dy: 0.0 }));
//! registry.for_each::<(Position, Velocity)>(|_, (position, velocity)| {
//!     position.x += velocity.dx;
//! });
//!
//! registry.destroy(entity)?;
//! assert_eq!(registry.get::<Position>(entity), Err(Error::StaleHandle(entity)));
//! ```

mod config;

pub use config::Config;

use log::{debug, trace, warn};

use crate::ecs::{
    component::{Bundle, Member, Set, Signature},
    entity::{Allocator, Entity, Generation},
    error::Error,
    query::{Pass, Query},
};

/// Owns every entity and component of one component set.
pub struct Registry<S: Set> {
    allocator: Allocator,
    signatures: Vec<Signature>,
    components: S,
}

impl<S: Set> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Set> Registry<S> {
    /// Create a new, empty registry with the default configuration.
    pub fn new() -> Self {
        Self {
            allocator: Allocator::new(),
            signatures: Vec::new(),
            components: S::default(),
        }
    }

    /// Create a new, empty registry with the given configuration.
    pub fn with_config(config: Config) -> Self {
        debug!(
            "configuring registry: {} components, initial capacity {}, max generation {}",
            S::COUNT,
            config.initial_capacity,
            config.max_generation
        );

        let mut allocator = Allocator::with_limit(Generation::new(config.max_generation));
        allocator.reserve(config.initial_capacity);
        let mut components = S::default();
        components.reserve(config.initial_capacity);

        Self {
            allocator,
            signatures: Vec::with_capacity(config.initial_capacity),
            components,
        }
    }

    /// Create a new entity with no components.
    ///
    /// Reuses a freed index when one is available.
    pub fn create(&mut self) -> Entity {
        let entity = self.allocator.alloc();
        let slot = entity.slot();
        if slot >= self.signatures.len() {
            self.signatures.resize(slot + 1, Signature::EMPTY);
        }
        debug_assert!(self.signatures[slot].is_empty());

        trace!("created entity {entity}");
        entity
    }

    /// Create a new entity and assign it a bundle of components.
    pub fn create_with<B: Bundle<S>>(&mut self, bundle: B) -> Entity {
        let entity = self.create();
        let slot = entity.slot();
        self.signatures[slot] = B::signature();
        bundle.insert(&mut self.components, slot);
        entity
    }

    /// Destroy an entity, dropping every component it owns.
    ///
    /// The handle, and every copy of it, is stale afterwards. If the slot's generation reached
    /// the configured limit the slot is retired rather than recycled: the entity is still torn
    /// down, but the caller gets `GenerationExhausted` for the index.
    pub fn destroy(&mut self, entity: Entity) -> Result<(), Error> {
        let slot = self.slot_of(entity)?;
        self.components.clear(slot);
        self.signatures[slot] = Signature::EMPTY;

        if let Err(err) = self.allocator.free(entity) {
            if let Error::GenerationExhausted(index) = err {
                warn!(
                    "entity index {index} reached generation {}, retiring it",
                    self.allocator.retire_at().value()
                );
            }
            return Err(err);
        }

        trace!("destroyed entity {entity}");
        Ok(())
    }

    /// Assign a component to an entity, returning the value it replaced.
    pub fn assign<C: Member<S>>(&mut self, entity: Entity, value: C) -> Result<Option<C>, Error> {
        let slot = self.slot_of(entity)?;
        self.signatures[slot].insert(C::ID);
        Ok(C::pool_mut(&mut self.components).insert(slot, value))
    }

    /// Remove a component from an entity, returning it. Removing an absent component is a no-op.
    pub fn remove<C: Member<S>>(&mut self, entity: Entity) -> Result<Option<C>, Error> {
        let slot = self.slot_of(entity)?;
        self.signatures[slot].remove(C::ID);
        Ok(C::pool_mut(&mut self.components).remove(slot))
    }

    /// Assign every component of a bundle to an entity, replacing existing values.
    pub fn insert<B: Bundle<S>>(&mut self, entity: Entity, bundle: B) -> Result<(), Error> {
        let slot = self.slot_of(entity)?;
        let signature = &mut self.signatures[slot];
        *signature = signature.union(B::signature());
        bundle.insert(&mut self.components, slot);
        Ok(())
    }

    /// Remove every component type of a bundle from an entity.
    pub fn remove_bundle<B: Bundle<S>>(&mut self, entity: Entity) -> Result<(), Error> {
        let slot = self.slot_of(entity)?;
        let signature = &mut self.signatures[slot];
        *signature = signature.difference(B::signature());
        B::remove(&mut self.components, slot);
        Ok(())
    }

    /// Determine if an entity owns a component.
    pub fn has<C: Member<S>>(&self, entity: Entity) -> Result<bool, Error> {
        let slot = self.slot_of(entity)?;
        Ok(self.signatures[slot].contains(C::ID))
    }

    /// Get a component of an entity.
    pub fn get<C: Member<S>>(&self, entity: Entity) -> Result<Option<&C>, Error> {
        let slot = self.slot_of(entity)?;
        Ok(C::pool(&self.components).get(slot))
    }

    /// Get a component of an entity, mutably.
    pub fn get_mut<C: Member<S>>(&mut self, entity: Entity) -> Result<Option<&mut C>, Error> {
        let slot = self.slot_of(entity)?;
        Ok(C::pool_mut(&mut self.components).get_mut(slot))
    }

    /// Get the component signature of an entity.
    pub fn signature(&self, entity: Entity) -> Result<Signature, Error> {
        let slot = self.slot_of(entity)?;
        Ok(self.signatures[slot])
    }

    /// Determine if the handle refers to a live entity.
    #[inline]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity)
    }

    /// Number of live entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.allocator.len()
    }

    /// Returns true if no entity is alive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.allocator.is_empty()
    }

    /// Number of entity indices retired by the generation limit.
    #[inline]
    pub fn retired(&self) -> usize {
        self.allocator.retired()
    }

    /// Iterate the live entities in ascending index order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.allocator.iter()
    }

    /// Iterate the live entities owning every component of `Q`, in ascending index order.
    pub fn matching<Q: Query<S>>(&self) -> impl Iterator<Item = Entity> + '_ {
        let required = Q::signature();
        self.allocator
            .iter()
            .filter(move |entity| self.signatures[entity.slot()].contains_all(required))
    }

    /// Number of entities a pass over `Q` would visit.
    pub fn count<Q: Query<S>>(&self) -> usize {
        self.matching::<Q>().count()
    }

    /// Get the component set.
    pub fn components(&self) -> &S {
        &self.components
    }

    /// Start a pass over the entities matching `Q`.
    ///
    /// # Panics
    ///
    /// Panics if `Q` names the same component more than once.
    pub fn query<Q: Query<S>>(&mut self) -> Pass<'_, S, Q> {
        Pass::new(&mut self.components, &self.signatures, &self.allocator)
    }

    /// Visit every entity matching `Q` in ascending index order.
    ///
    /// The visitor receives the entity and mutable references to its requested components.
    ///
    /// # Panics
    ///
    /// Panics if `Q` names the same component more than once.
    pub fn for_each<Q: Query<S>>(&mut self, mut visitor: impl FnMut(Entity, Q::Item<'_>)) {
        let mut pass = self.query::<Q>();
        while let Some((entity, item)) = pass.next() {
            visitor(entity, item);
        }
    }

    #[inline]
    fn slot_of(&self, entity: Entity) -> Result<usize, Error> {
        if self.allocator.is_alive(entity) {
            Ok(entity.slot())
        } else {
            Err(Error::StaleHandle(entity))
        }
    }
}

impl<S: Set + std::fmt::Debug> std::fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entities", &self.allocator.len())
            .field("retired", &self.allocator.retired())
            .field("components", &self.components)
            .finish()
    }
}
