use std::fmt;

use crate::ecs::{
    component::{Set, Signature},
    entity::{Allocator, Entity},
    query::Query,
};

/// A single walk over the entities matching a query.
///
/// `Pass` is a lending iterator: each item borrows the pass, so it is driven with
/// `while let Some(..) = pass.next()` rather than a `for` loop. The requested pools are held by
/// the pass and returned to the component set when it is dropped, including during unwinding.
pub struct Pass<'r, S: Set, Q: Query<S>> {
    set: &'r mut S,
    signatures: &'r [Signature],
    allocator: &'r Allocator,
    columns: Option<Q::Columns>,
    required: Signature,
    cursor: usize,
    end: usize,
}

impl<'r, S: Set, Q: Query<S>> Pass<'r, S, Q> {
    /// Start a pass over the first `end` slots.
    ///
    /// # Panics
    ///
    /// Panics if the query names the same component more than once.
    pub(crate) fn new(
        set: &'r mut S,
        signatures: &'r [Signature],
        allocator: &'r Allocator,
    ) -> Self {
        assert!(
            Q::is_disjoint(),
            "Query aliasing violation: same component requested multiple times"
        );

        let columns = Some(Q::take(set));
        Self {
            set,
            signatures,
            allocator,
            columns,
            required: Q::signature(),
            cursor: 0,
            end: allocator.slots().min(signatures.len()),
        }
    }

    /// Advance to the next matching entity.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(Entity, Q::Item<'_>)> {
        let columns = self.columns.as_mut()?;
        let (entity, slot) = loop {
            if self.cursor >= self.end {
                return None;
            }
            let slot = self.cursor;
            self.cursor += 1;

            if !self.signatures[slot].contains_all(self.required) {
                continue;
            }
            let Some(entity) = self.allocator.entity_at(slot) else {
                continue;
            };
            if Q::contains(columns, slot) {
                break (entity, slot);
            }
        };

        Q::fetch(columns, slot).map(|item| (entity, item))
    }
}

impl<S: Set, Q: Query<S>> Drop for Pass<'_, S, Q> {
    fn drop(&mut self) {
        if let Some(columns) = self.columns.take() {
            Q::restore(self.set, columns);
        }
    }
}

impl<S: Set, Q: Query<S>> fmt::Debug for Pass<'_, S, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pass")
            .field("required", &self.required)
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .finish()
    }
}
