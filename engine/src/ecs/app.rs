//! The application: one registry and the systems that run over it.
//!
//! ```rust,ignore
//! let mut app = Application::<Components>::new()
//!     .with_system(MovementSystem)
//!     .with_system(ComflabSystem);
//!
//! app.registry_mut().create_with((Position::default(), Direction::default()));
//!
//! loop {
//!     app.update(1.0 / 60.0);
//! }
//! ```

use crate::ecs::{
    component::Set,
    registry::{Config, Registry},
    schedule::Schedule,
    system::{Id, System, TimeDelta},
};

/// Owns a [`Registry`] and a [`Schedule`], and drives the per-tick update.
pub struct Application<S: Set> {
    registry: Registry<S>,
    schedule: Schedule<S>,
}

impl<S: Set> Default for Application<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Set> Application<S> {
    /// Create an application with an empty registry and no systems.
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Create an application whose registry uses the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self::with_registry(Registry::with_config(config))
    }

    /// Create an application around an existing registry.
    pub fn with_registry(registry: Registry<S>) -> Self {
        Self {
            registry,
            schedule: Schedule::new(),
        }
    }

    /// Append a system to the update order.
    pub fn add_system(&mut self, system: impl System<S> + 'static) -> Id {
        self.schedule.add(system)
    }

    /// Append a system to the update order, builder style.
    pub fn with_system(mut self, system: impl System<S> + 'static) -> Self {
        self.add_system(system);
        self
    }

    /// Run every system once, in registration order.
    pub fn update(&mut self, dt: TimeDelta) {
        self.schedule.run(&mut self.registry, dt);
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Get the registry, mutably.
    pub fn registry_mut(&mut self) -> &mut Registry<S> {
        &mut self.registry
    }

    /// Get the schedule.
    pub fn schedule(&self) -> &Schedule<S> {
        &self.schedule
    }
}
