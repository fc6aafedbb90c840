//! Component declaration for the ECS.
//!
//! Components are plain data attached to entities. The set of component types a registry can
//! store is closed and declared at build time, so asking for a type outside of it is a compile
//! error rather than a runtime failure.
//!
//! ## Architecture
//!
//! - [`Component`]: The trait that all component types implement (`#[derive(Component)]`)
//! - [`Set`]: A closed set of component pools (`#[derive(ComponentSet)]`)
//! - [`Member`]: Ties a component type to its pool and [`Id`] within one set
//! - [`Signature`]: A fixed-width bitset of component ids
//! - [`Bundle`]: One component or a tuple of components, assigned together
//!
//! ## Usage
//!
//! ```ignore
//! use rusty_ecs::ecs::storage::Pool;
//! use rusty_ecs_macros::{Component, ComponentSet};
//!
//! #[derive(Component)]
//! struct Position { x: f64, y: f64 }
//!
//! #[derive(Component)]
//! struct Velocity { dx: f64, dy: f64 }
//!
//! #[derive(ComponentSet, Default)]
//! struct Components {
//!     position: Pool<Position>,
//!     velocity: Pool<Velocity>,
//! }
//! ```

mod bundle;
mod signature;

pub use bundle::Bundle;
pub use signature::Signature;

use crate::ecs::storage::Pool;

/// A component identifier: the position of a component type within its [`Set`], which is also
/// its bit in a [`Signature`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// Construct a new component Id from a raw u32 value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the index of this component if it were to live in indexable storage (e.g. Vec)
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Id {
    #[inline]
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// A trait representing a component in the ECS.
///
/// At present this only sets the required trait bounds for a type to be used as a component.
pub trait Component: 'static + Sized + Send + Sync {}

/// A closed set of component pools, one per declared component type.
///
/// Implemented by `#[derive(ComponentSet)]`; writing it by hand is possible but the derive also
/// generates the [`Member`] impls and checks the set fits in a [`Signature`].
pub trait Set: Default + 'static {
    /// Number of component types in the set.
    const COUNT: usize;

    /// Names of the component types, indexed by [`Id`].
    fn names() -> &'static [&'static str];

    /// Reserve room for at least `slots` more entity slots in every pool.
    fn reserve(&mut self, slots: usize);

    /// Drop every component stored for the entity slot.
    fn clear(&mut self, slot: usize);
}

/// A component type that belongs to the set `S`.
pub trait Member<S: Set>: Component {
    /// The id, and signature bit, of this component within `S`.
    const ID: Id;

    /// Get the pool holding this component type.
    fn pool(set: &S) -> &Pool<Self>;

    /// Get the pool holding this component type, mutably.
    fn pool_mut(set: &mut S) -> &mut Pool<Self>;
}
