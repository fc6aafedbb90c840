//! Ordered execution of systems.
//!
//! A [`Schedule`] is a flat list of systems run in the order they were added, each to
//! completion before the next starts. There is no dependency graph: ordering is declared by the
//! caller and fixed.
//!
//! ```text
//! Schedule::run(registry, dt)
//!   ├── movement_system.update(registry, dt)
//!   ├── comflab_system.update(registry, dt)
//!   └── ...
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut schedule = Schedule::<Components>::new();
//! schedule.add(MovementSystem);
//! schedule.add(|registry: &mut Registry<Components>, _dt| registry.create());
//!
//! loop {
//!     schedule.run(&mut registry, 1.0 / 60.0);
//! }
//! ```

use log::{debug, trace};

use crate::ecs::{
    component::Set,
    registry::Registry,
    system::{Id, System, TimeDelta},
};

/// An ordered list of systems.
pub struct Schedule<S: Set> {
    systems: Vec<Box<dyn System<S>>>,
}

impl<S: Set> Default for Schedule<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Set> Schedule<S> {
    /// Create a new, empty schedule.
    #[inline]
    pub const fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Append a system and return its identifier.
    pub fn add(&mut self, system: impl System<S> + 'static) -> Id {
        let id = Id::new(self.systems.len() as u32);
        debug!("adding system {} as #{}", system.name(), id.index());
        self.systems.push(Box::new(system));
        id
    }

    /// Retrieve a system by its identifier.
    #[inline]
    pub fn get(&self, id: Id) -> Option<&dyn System<S>> {
        self.systems.get(id.index()).map(|system| system.as_ref())
    }

    /// Run every system once, in the order they were added.
    pub fn run(&mut self, registry: &mut Registry<S>, dt: TimeDelta) {
        for system in self.systems.iter_mut() {
            trace!("running system {}", system.name());
            system.update(registry, dt);
        }
    }

    /// Iterate the names of the systems in run order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().map(|system| system.name())
    }

    /// Number of systems.
    #[inline]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true if the schedule has no systems.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl<S: Set> std::fmt::Debug for Schedule<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
