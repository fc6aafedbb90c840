//! Shared component fixtures for unit tests.

use rusty_ecs_macros::{Component, ComponentSet};

use crate::ecs::storage::Pool;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health(pub i32);

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Name(pub String);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frozen;

#[derive(ComponentSet, Default, Debug)]
pub struct TestComponents {
    pub position: Pool<Position>,
    pub velocity: Pool<Velocity>,
    pub health: Pool<Health>,
    pub name: Pool<Name>,
    pub frozen: Pool<Frozen>,
}
