//! Systems: units of per-tick logic over a registry.
//!
//! # Overview
//!
//! A [`System`] receives exclusive access to the [`Registry`] and the elapsed time for the tick.
//! It does its work through queries, so it only ever touches the component types it names:
//!
//! ```rust,ignore
//! use rusty_ecs::ecs::{Registry, System, TimeDelta};
//!
//! struct Gravity;
//!
//! impl System<Components> for Gravity {
//!     fn update(&mut self, registry: &mut Registry<Components>, dt: TimeDelta) {
//!         registry.for_each::<Velocity>(|_, velocity| velocity.dy -= 9.8 * dt);
//!     }
//! }
//! ```
//!
//! Closures taking `(&mut Registry<S>, TimeDelta)` are systems as well:
//!
//! ```rust,ignore
//! schedule.add(|registry: &mut Registry<Components>, _dt| {
//!     log::info!("{} entities", registry.len());
//! });
//! ```
//!
//! # Structural Changes
//!
//! A query pass borrows the registry mutably, so entities cannot be created or destroyed from
//! inside the visitor. Record them in a [`CommandBuffer`] and flush it once the pass is over.

mod command;

pub use command::{Command, CommandBuffer};

use crate::ecs::{component::Set, registry::Registry};

/// Elapsed simulation time for one tick.
pub type TimeDelta = f64;

/// A system identifier: the position of a system within its schedule.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// Construct a new system Id from a raw u32 value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the index of this system if it were to live in indexable storage (e.g. Vec)
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A unit of per-tick logic over a [`Registry`].
pub trait System<S: Set> {
    /// Run the system once.
    fn update(&mut self, registry: &mut Registry<S>, dt: TimeDelta);

    /// A name for diagnostics. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<S: Set, F> System<S> for F
where
    F: FnMut(&mut Registry<S>, TimeDelta),
{
    #[inline]
    fn update(&mut self, registry: &mut Registry<S>, dt: TimeDelta) {
        self(registry, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::testing::{Health, TestComponents};

    struct Decay {
        amount: i32,
    }

    impl System<TestComponents> for Decay {
        fn update(&mut self, registry: &mut Registry<TestComponents>, _dt: TimeDelta) {
            let amount = self.amount;
            registry.for_each::<Health>(|_, health| health.0 -= amount);
        }

        fn name(&self) -> &str {
            "decay"
        }
    }

    #[test]
    fn struct_system_updates_registry() {
        // Given
        let mut registry = Registry::<TestComponents>::new();
        let entity = registry.create_with(Health(10));
        let mut system = Decay { amount: 3 };

        // When
        system.update(&mut registry, 1.0);

        // Then
        assert_eq!(registry.get::<Health>(entity), Ok(Some(&Health(7))));
        assert_eq!(system.name(), "decay");
    }

    #[test]
    fn closure_is_a_system() {
        // Given
        let mut registry = Registry::<TestComponents>::new();
        let mut ticks = Vec::new();
        let mut system = |registry: &mut Registry<TestComponents>, dt: TimeDelta| {
            registry.create();
            ticks.push(dt);
        };

        // When
        System::update(&mut system, &mut registry, 0.5);
        System::update(&mut system, &mut registry, 0.25);

        // Then
        assert_eq!(registry.len(), 2);
        assert_eq!(ticks, vec![0.5, 0.25]);
    }

    #[test]
    fn default_name_is_type_name() {
        // Given
        let system = Decay { amount: 0 };
        let boxed: Box<dyn System<TestComponents>> = Box::new(
            |_: &mut Registry<TestComponents>, _: TimeDelta| {},
        );

        // Then
        assert_eq!(system.name(), "decay");
        assert!(boxed.name().contains("closure"));
    }
}
