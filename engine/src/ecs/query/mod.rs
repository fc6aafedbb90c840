//! Queries over the entities owning a given set of component types.
//!
//! A query is named by a type: a single component `C`, a tuple of components `(A, B, ...)`, or
//! the unit type `()` for every live entity. Each matching entity is visited with mutable
//! references to the requested components.
//!
//! # Architecture
//!
//! - **[`Query`]**: Describes which pools a query needs, and how to fetch an item for one
//!   entity slot from those pools.
//! - **[`Pass`]**: A single walk over the registry. It moves the requested pools out of the
//!   component set for its lifetime, which is what lets it hand out `&mut` references into
//!   several columns at once, and puts them back when dropped.
//!
//! # Usage
//!
//! ```rust,ignore
//! registry.for_each::<(Position, Velocity)>(|_entity, (position, velocity)| {
//!     position.x += velocity.dx;
//!     position.y += velocity.dy;
//! });
//!
//! let mut pass = registry.query::<Health>();
//! while let Some((entity, health)) = pass.next() {
//!     health.0 -= 1;
//! }
//! ```
//!
//! # Guarantees
//!
//! - Entities are visited in ascending slot order, each at most once.
//! - The slot range is fixed when the pass starts.
//! - Requesting the same component twice in one query panics before any pool is touched.
//! - The registry cannot be structurally changed during a pass since the pass holds it
//!   mutably. Record changes in a [`CommandBuffer`](crate::ecs::CommandBuffer) instead.

mod pass;

pub use pass::Pass;

use crate::ecs::{
    component::{Component, Member, Set, Signature},
    storage::Pool,
};

/// A description of the components a query visits.
pub trait Query<S: Set> {
    /// The pools taken from the set for the duration of a pass.
    type Columns;

    /// The item handed to the visitor for each matching entity.
    type Item<'a>;

    /// Components an entity must own to be visited.
    fn signature() -> Signature;

    /// Returns true if no component type is requested more than once.
    fn is_disjoint() -> bool;

    /// Move the requested pools out of the set.
    fn take(set: &mut S) -> Self::Columns;

    /// Move the pools back into the set.
    fn restore(set: &mut S, columns: Self::Columns);

    /// Determine if every requested component is stored for the slot.
    fn contains(columns: &Self::Columns, slot: usize) -> bool;

    /// Fetch the item for one entity slot.
    fn fetch<'a>(columns: &'a mut Self::Columns, slot: usize) -> Option<Self::Item<'a>>;
}

impl<S: Set> Query<S> for () {
    type Columns = ();
    type Item<'a> = ();

    #[inline]
    fn signature() -> Signature {
        Signature::EMPTY
    }

    #[inline]
    fn is_disjoint() -> bool {
        true
    }

    #[inline]
    fn take(_set: &mut S) -> Self::Columns {}

    #[inline]
    fn restore(_set: &mut S, _columns: Self::Columns) {}

    #[inline]
    fn contains(_columns: &Self::Columns, _slot: usize) -> bool {
        true
    }

    #[inline]
    fn fetch<'a>(_columns: &'a mut Self::Columns, _slot: usize) -> Option<Self::Item<'a>> {
        Some(())
    }
}

impl<S: Set, C: Component + Member<S>> Query<S> for C {
    type Columns = Pool<C>;
    type Item<'a> = &'a mut C;

    #[inline]
    fn signature() -> Signature {
        Signature::of::<S, C>()
    }

    #[inline]
    fn is_disjoint() -> bool {
        true
    }

    #[inline]
    fn take(set: &mut S) -> Self::Columns {
        std::mem::take(C::pool_mut(set))
    }

    #[inline]
    fn restore(set: &mut S, columns: Self::Columns) {
        *C::pool_mut(set) = columns;
    }

    #[inline]
    fn contains(columns: &Self::Columns, slot: usize) -> bool {
        columns.contains(slot)
    }

    #[inline]
    fn fetch<'a>(columns: &'a mut Self::Columns, slot: usize) -> Option<Self::Item<'a>> {
        columns.get_mut(slot)
    }
}

macro_rules! tuple_query {
    ($($name: ident),*) => {
        impl<CS: Set, $($name: Component + Member<CS>),*> Query<CS> for ($($name,)*) {
            type Columns = ($(Pool<$name>,)*);
            type Item<'a> = ($(&'a mut $name,)*);

            #[inline]
            fn signature() -> Signature {
                Signature::EMPTY $(.with(<$name as Member<CS>>::ID))*
            }

            #[inline]
            fn is_disjoint() -> bool {
                Self::signature().len() == $crate::count_idents!($($name),*)
            }

            #[inline]
            fn take(set: &mut CS) -> Self::Columns {
                ($(std::mem::take(<$name as Member<CS>>::pool_mut(set)),)*)
            }

            #[inline]
            fn restore(set: &mut CS, columns: Self::Columns) {
                #[allow(non_snake_case)]
                let ($($name,)*) = columns;
                $(*<$name as Member<CS>>::pool_mut(set) = $name;)*
            }

            #[inline]
            fn contains(columns: &Self::Columns, slot: usize) -> bool {
                #[allow(non_snake_case)]
                let ($($name,)*) = columns;
                true $(&& $name.contains(slot))*
            }

            #[inline]
            fn fetch<'a>(columns: &'a mut Self::Columns, slot: usize) -> Option<Self::Item<'a>> {
                #[allow(non_snake_case)]
                let ($($name,)*) = columns;
                Some(($($name.get_mut(slot)?,)*))
            }
        }
    }
}

crate::all_tuples!(tuple_query);
