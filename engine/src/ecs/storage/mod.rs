//! Columnar component storage.
//!
//! Every component type gets its own [`Pool`]: a column indexed directly by entity slot. Values
//! for the same entity live at the same position in every pool, so a query walks several
//! columns in lock step without any per-entity lookup.
//!
//! ```text
//! slot:             0         1         2         3
//!                ┌─────────┬─────────┬─────────┬─────────┐
//! Pool<Position> │ Some(p) │ Some(p) │ None    │ Some(p) │
//!                ├─────────┼─────────┼─────────┼─────────┤
//! Pool<Velocity> │ Some(v) │ None    │ None    │ Some(v) │
//!                └─────────┴─────────┴─────────┴─────────┘
//! ```
//!
//! Pools only ever grow. A slot freed by a destroyed entity is emptied and left in place for the
//! next entity that reuses the index.

mod pool;

pub use pool::Pool;
