//! Deferred structural changes to a registry.
//!
//! A query pass holds the registry mutably, so a visitor that wants to create or destroy
//! entities records [`Command`]s instead. The buffer is flushed once the pass is over.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  for_each pass                                │
//! │    visitor ──record──► CommandBuffer          │
//! └───────────────────────────┬───────────────────┘
//!                             │ flush (FIFO)
//!                             ▼
//!                          Registry
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let mut commands = CommandBuffer::new();
//! registry.for_each::<Health>(|entity, health| {
//!     if health.0 <= 0 {
//!         commands.destroy(entity);
//!     }
//! });
//! for err in commands.flush(&mut registry) {
//!     log::error!("{err}");
//! }
//! ```

use std::fmt;

use log::warn;

use crate::ecs::{
    component::{Bundle, Set},
    entity::Entity,
    error::Error,
    registry::Registry,
};

/// Assigns a captured bundle to an entity.
pub type Insertion<S> = Box<dyn FnOnce(&mut Registry<S>, Entity) -> Result<(), Error>>;

/// Removes a bundle type from an entity.
pub type Removal<S> = fn(&mut Registry<S>, Entity) -> Result<(), Error>;

/// A deferred registry command.
pub enum Command<S: Set> {
    /// Create a new entity with the captured components.
    Create {
        /// Assigns the components to the new entity.
        components: Insertion<S>,
    },

    /// Destroy an entity and drop its components.
    Destroy {
        /// The entity to destroy.
        entity: Entity,
    },

    /// Assign components to an existing entity, replacing existing values.
    Insert {
        /// The target entity.
        entity: Entity,
        /// Assigns the components to the target.
        components: Insertion<S>,
    },

    /// Remove component types from an existing entity.
    ///
    /// Components not present on the entity are ignored.
    Remove {
        /// The target entity.
        entity: Entity,
        /// Removes the component types from the target.
        components: Removal<S>,
    },
}

impl<S: Set> Command<S> {
    /// Apply the command to a registry.
    pub fn apply(self, registry: &mut Registry<S>) -> Result<(), Error> {
        match self {
            Command::Create { components } => {
                let entity = registry.create();
                components(registry, entity)
            }
            Command::Destroy { entity } => registry.destroy(entity),
            Command::Insert { entity, components } => components(registry, entity),
            Command::Remove { entity, components } => components(registry, entity),
        }
    }
}

impl<S: Set> fmt::Debug for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create { .. } => f.write_str("Create"),
            Command::Destroy { entity } => f.debug_struct("Destroy").field("entity", entity).finish(),
            Command::Insert { entity, .. } => f.debug_struct("Insert").field("entity", entity).finish(),
            Command::Remove { entity, .. } => f.debug_struct("Remove").field("entity", entity).finish(),
        }
    }
}

/// A FIFO queue of deferred registry commands.
pub struct CommandBuffer<S: Set> {
    commands: Vec<Command<S>>,
}

impl<S: Set> Default for CommandBuffer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Set> CommandBuffer<S> {
    /// Create a new empty command buffer.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Queue the creation of an entity with a bundle of components.
    pub fn create<B: Bundle<S>>(&mut self, bundle: B) {
        self.push(Command::Create {
            components: Box::new(move |registry: &mut Registry<S>, entity| {
                registry.insert(entity, bundle)
            }),
        });
    }

    /// Queue the destruction of an entity.
    pub fn destroy(&mut self, entity: Entity) {
        self.push(Command::Destroy { entity });
    }

    /// Queue assigning a bundle of components to an entity.
    pub fn insert<B: Bundle<S>>(&mut self, entity: Entity, bundle: B) {
        self.push(Command::Insert {
            entity,
            components: Box::new(move |registry: &mut Registry<S>, entity| {
                registry.insert(entity, bundle)
            }),
        });
    }

    /// Queue removing the component types of a bundle from an entity.
    pub fn remove<B: Bundle<S>>(&mut self, entity: Entity) {
        let components: Removal<S> = |registry, entity| registry.remove_bundle::<B>(entity);
        self.push(Command::Remove { entity, components });
    }

    /// Queue a command.
    pub fn push(&mut self, command: Command<S>) {
        self.commands.push(command);
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no command is queued.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take every queued command in FIFO order, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<Command<S>> {
        std::mem::take(&mut self.commands)
    }

    /// Apply every queued command to the registry in FIFO order.
    ///
    /// A failing command does not stop the flush. Every failure is returned, in order.
    pub fn flush(&mut self, registry: &mut Registry<S>) -> Vec<Error> {
        let mut errors = Vec::new();
        for command in self.drain() {
            if let Err(err) = command.apply(registry) {
                warn!("deferred command failed: {err}");
                errors.push(err);
            }
        }
        errors
    }
}

impl<S: Set> fmt::Debug for CommandBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.commands).finish()
    }
}
