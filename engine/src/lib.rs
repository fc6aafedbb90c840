//! A small, columnar entity-component-system runtime.
//!
//! The runtime is built around a closed set of component types declared at build time with
//! `#[derive(ComponentSet)]`. Entities are generation-tagged handles into a [`Registry`]
//! that stores each component type in its own dense [`Pool`], tracks a per-entity
//! [`Signature`] bitset, and drives signature-matched iteration for [`System`]s scheduled
//! by an [`Application`].
//!
//! [`Registry`]: ecs::Registry
//! [`Pool`]: ecs::storage::Pool
//! [`Signature`]: ecs::component::Signature
//! [`System`]: ecs::System
//! [`Application`]: ecs::Application

// Allow the derive macros to refer to `::rusty_ecs` from inside this crate.
extern crate self as rusty_ecs;

pub mod ecs;
