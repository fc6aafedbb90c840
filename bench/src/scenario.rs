//! Seeding and assembly of the benchmark application.
//!
//! The benchmark application runs the movement and comflab systems (and optionally the more
//! complex system) over `N` entities. Every entity gets a position and a direction; entities
//! created at odd positions also get a comflabulation.

use log::debug;
use rusty_ecs::ecs::{Application, Entity, TimeDelta, registry::Config};

use crate::{
    components::{BenchComponents, BenchRegistry, Comflabulation, Direction, Position},
    systems::{ComflabSystem, MoreComplexSystem, MovementSystem},
};

/// Configuration for the benchmark application.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Number of entities to seed.
    pub entity_count: usize,
    /// Simulated delta time per update.
    pub delta_time: TimeDelta,
    /// Run the more complex system after movement and comflab.
    pub more_complex: bool,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            entity_count: 10_000,
            delta_time: 1.0 / 60.0, // 60 FPS
            more_complex: false,
            seed: 12345,
        }
    }
}

/// Seed `count` entities, returning them in creation order.
pub fn init_entities(registry: &mut BenchRegistry, count: usize) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            let placement = (Position::default(), Direction::default());
            if i % 2 == 1 {
                registry.create_with((placement, Comflabulation::default()))
            } else {
                registry.create_with(placement)
            }
        })
        .collect()
}

/// Build the benchmark application and seed its entities.
pub fn build_application(config: &ScenarioConfig) -> Application<BenchComponents> {
    debug!("building benchmark application: {config:?}");

    let mut app = Application::with_config(Config {
        initial_capacity: config.entity_count,
        ..Default::default()
    })
    .with_system(MovementSystem)
    .with_system(ComflabSystem);
    if config.more_complex {
        app.add_system(MoreComplexSystem::new(config.seed));
    }

    init_entities(app.registry_mut(), config.entity_count);
    app
}
