use crate::ecs::component::{Component, Member, Set, Signature};

/// A group of components that can be assigned to, or removed from, an entity in one step.
///
/// Implemented for every member component of a set, for the unit type, and for tuples of
/// bundles, so `(Position, Velocity)` and `(Position, (Velocity, Health))` are both bundles.
pub trait Bundle<S: Set>: Sized + 'static {
    /// The combined signature of every component in the bundle.
    fn signature() -> Signature;

    /// Move each component into its pool at the given entity slot, replacing existing values.
    fn insert(self, set: &mut S, slot: usize);

    /// Drop each component type of the bundle stored at the given entity slot.
    fn remove(set: &mut S, slot: usize);
}

impl<S: Set> Bundle<S> for () {
    #[inline]
    fn signature() -> Signature {
        Signature::EMPTY
    }

    #[inline]
    fn insert(self, _set: &mut S, _slot: usize) {}

    #[inline]
    fn remove(_set: &mut S, _slot: usize) {}
}

impl<S: Set, C: Component + Member<S>> Bundle<S> for C {
    #[inline]
    fn signature() -> Signature {
        Signature::of::<S, C>()
    }

    #[inline]
    fn insert(self, set: &mut S, slot: usize) {
        C::pool_mut(set).insert(slot, self);
    }

    #[inline]
    fn remove(set: &mut S, slot: usize) {
        C::pool_mut(set).remove(slot);
    }
}

macro_rules! tuple_bundle {
    ($($name: ident),*) => {
        impl<CS: Set, $($name: Bundle<CS>),*> Bundle<CS> for ($($name,)*) {
            #[inline]
            fn signature() -> Signature {
                Signature::EMPTY $(.union(<$name as Bundle<CS>>::signature()))*
            }

            #[inline]
            fn insert(self, set: &mut CS, slot: usize) {
                #[allow(non_snake_case)]
                let ($($name,)*) = self;
                $(<$name as Bundle<CS>>::insert($name, set, slot);)*
            }

            #[inline]
            fn remove(set: &mut CS, slot: usize) {
                $(<$name as Bundle<CS>>::remove(set, slot);)*
            }
        }
    }
}

crate::all_tuples!(tuple_bundle);
