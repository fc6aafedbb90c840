//! Errors reported by registry operations.
//!
//! Every error is returned to the immediate caller. Nothing here is transient, so there is no
//! retry path: a [`StaleHandle`](Error::StaleHandle) means the entity is gone and the caller
//! should drop the handle.

use crate::ecs::entity::{Entity, Index};

/// The error type for entity registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The handle's generation no longer matches its slot. The entity was destroyed, and the
    /// slot may since have been reused.
    #[error("stale entity handle {0}")]
    StaleHandle(Entity),

    /// The slot's generation counter reached its limit, so the index was retired instead of
    /// being returned to the free list.
    #[error("generation counter exhausted for entity index {0}")]
    GenerationExhausted(Index),
}
