//! Component types of the benchmark domain.

use rusty_ecs::ecs::{Registry, storage::Pool};
use rusty_ecs_macros::{Component, ComponentSet};

/// 2D position.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D direction of travel, in units per second.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
}

/// A record of busywork fields touched every tick.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct Comflabulation {
    pub thingy: f64,
    pub dingy: i32,
    pub mingy: bool,
    pub stringy: String,
}

/// Every component type of the benchmark domain.
#[derive(ComponentSet, Default, Debug)]
pub struct BenchComponents {
    pub position: Pool<Position>,
    pub direction: Pool<Direction>,
    pub comflabulation: Pool<Comflabulation>,
}

/// The registry type of the benchmark domain.
pub type BenchRegistry = Registry<BenchComponents>;
