use std::fmt;

use crate::ecs::component::{Id, Member, Set};

/// A fixed-width bitset recording which component types an entity owns, or which a query
/// requires. Bit `n` is set when the component with [`Id`] `n` is present.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(u64);

impl Signature {
    /// The number of component ids a signature can hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// A signature with no components.
    pub const EMPTY: Self = Self(0);

    /// Get the raw bits of this signature.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Get the signature of a single member component.
    #[inline]
    pub const fn of<S: Set, C: Member<S>>() -> Self {
        Self::EMPTY.with(C::ID)
    }

    /// Get a copy of this signature with the given id added.
    #[inline]
    pub const fn with(self, id: Id) -> Self {
        Self(self.0 | Self::bit(id))
    }

    /// Add a component id.
    #[inline]
    pub fn insert(&mut self, id: Id) {
        self.0 |= Self::bit(id);
    }

    /// Remove a component id.
    #[inline]
    pub fn remove(&mut self, id: Id) {
        self.0 &= !Self::bit(id);
    }

    /// Determine if this signature contains the given component id.
    #[inline]
    pub const fn contains(&self, id: Id) -> bool {
        self.0 & Self::bit(id) != 0
    }

    /// Determine if this signature contains every id in `other`.
    #[inline]
    pub const fn contains_all(&self, other: Signature) -> bool {
        self.0 & other.0 == other.0
    }

    /// Determine if this signature shares any id with `other`.
    #[inline]
    pub const fn contains_any(&self, other: Signature) -> bool {
        self.0 & other.0 != 0
    }

    /// The ids in either signature.
    #[inline]
    pub const fn union(self, other: Signature) -> Self {
        Self(self.0 | other.0)
    }

    /// The ids in both signatures.
    #[inline]
    pub const fn intersection(self, other: Signature) -> Self {
        Self(self.0 & other.0)
    }

    /// The ids in self that are not in other.
    #[inline]
    pub const fn difference(self, other: Signature) -> Self {
        Self(self.0 & !other.0)
    }

    /// Number of component ids in this signature.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if this signature is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the component ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Id> + '_ {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let id = bits.trailing_zeros();
            bits &= bits - 1;
            Some(Id::new(id))
        })
    }

    /// Iterate the names of the component types in this signature, as declared by `S`.
    pub fn names<S: Set>(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .filter_map(|id| S::names().get(id.index()).copied())
    }

    #[inline]
    const fn bit(id: Id) -> u64 {
        1 << id.0
    }
}

impl FromIterator<Id> for Signature {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|id| id.index())).finish()
    }
}
