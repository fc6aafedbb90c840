//! Example systems of the benchmark domain.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rusty_ecs::ecs::{System, TimeDelta};

use crate::components::{BenchComponents, BenchRegistry, Comflabulation, Direction, Position};

/// Moves every entity along its direction.
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System<BenchComponents> for MovementSystem {
    fn update(&mut self, registry: &mut BenchRegistry, dt: TimeDelta) {
        registry.for_each::<(Position, Direction)>(|_, (position, direction)| {
            position.x += direction.x * dt;
            position.y += direction.y * dt;
        });
    }

    fn name(&self) -> &str {
        "movement"
    }
}

/// Churns the fields of every comflabulation.
#[derive(Debug, Default)]
pub struct ComflabSystem;

impl System<BenchComponents> for ComflabSystem {
    fn update(&mut self, registry: &mut BenchRegistry, _dt: TimeDelta) {
        registry.for_each::<Comflabulation>(|_, comflab| {
            comflab.thingy *= 1.000001;
            comflab.mingy = !comflab.mingy;
            comflab.dingy += 1;
        });
    }

    fn name(&self) -> &str {
        "comflab"
    }
}

/// Heavier per-entity work over all three component types.
///
/// Accumulates a short series derived from the comflabulation, renders its counter as text and,
/// every 10000th tick of the counter, picks a new random direction.
pub struct MoreComplexSystem {
    rng: ChaCha8Rng,
}

impl MoreComplexSystem {
    /// Upper bound of the accumulated series.
    const SERIES_LIMIT: i32 = 100;

    /// The counter period of a direction change.
    const REROLL_PERIOD: i32 = 10_000;

    /// Create the system with a seeded random generator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl System<BenchComponents> for MoreComplexSystem {
    fn update(&mut self, registry: &mut BenchRegistry, _dt: TimeDelta) {
        let rng = &mut self.rng;
        registry.for_each::<(Position, Direction, Comflabulation)>(
            |_, (position, direction, comflab)| {
                let series: Vec<f64> = (0..comflab.dingy.clamp(0, Self::SERIES_LIMIT))
                    .map(|i| f64::from(i) * comflab.thingy)
                    .collect();
                let sum: f64 = series.iter().sum();
                let product: f64 = series.iter().product();
                std::hint::black_box((sum, product));

                comflab.stringy = comflab.dingy.to_string();

                if comflab.dingy % Self::REROLL_PERIOD == 0 {
                    let (x_max, y_max) = if position.x > position.y {
                        (5, 10)
                    } else {
                        (10, 5)
                    };
                    direction.x = f64::from(rng.gen_range(0..=x_max));
                    direction.y = f64::from(rng.gen_range(0..=y_max));
                }
            },
        );
    }

    fn name(&self) -> &str {
        "more_complex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_moves_only_entities_with_position_and_direction() {
        // Given
        let mut registry = BenchRegistry::new();
        let a = registry.create();
        let b = registry.create();
        registry.assign(a, Position { x: 0.0, y: 0.0 }).unwrap();
        registry.assign(a, Direction { x: 1.0, y: 0.0 }).unwrap();

        // When
        MovementSystem.update(&mut registry, 1.0);

        // Then
        assert_eq!(
            registry.get::<Position>(a),
            Ok(Some(&Position { x: 1.0, y: 0.0 }))
        );
        assert_eq!(registry.signature(b).map(|sig| sig.is_empty()), Ok(true));
        assert_eq!(registry.get::<Position>(b), Ok(None));
    }

    #[test]
    fn movement_scales_by_delta() {
        // Given
        let mut registry = BenchRegistry::new();
        let entity = registry.create_with((Position { x: 1.0, y: 1.0 }, Direction { x: 6.0, y: -3.0 }));

        // When
        MovementSystem.update(&mut registry, 0.5);

        // Then
        assert_eq!(
            registry.get::<Position>(entity),
            Ok(Some(&Position { x: 4.0, y: -0.5 }))
        );
    }

    #[test]
    fn comflab_churns_fields() {
        // Given
        let mut registry = BenchRegistry::new();
        let entity = registry.create();
        registry
            .assign(
                entity,
                Comflabulation {
                    thingy: 1.0,
                    dingy: 0,
                    mingy: false,
                    stringy: String::new(),
                },
            )
            .unwrap();

        // When
        ComflabSystem.update(&mut registry, 1.0 / 60.0);

        // Then
        let comflab = registry.get::<Comflabulation>(entity).unwrap().unwrap();
        assert_eq!(comflab.dingy, 1);
        assert!(comflab.mingy);
        assert!((comflab.thingy - 1.000001).abs() < 1e-12);
    }

    #[test]
    fn more_complex_rerolls_direction_on_period() {
        // Given
        let mut registry = BenchRegistry::new();
        let entity = registry.create_with((
            Position { x: 2.0, y: 1.0 },
            Direction { x: -1.0, y: -1.0 },
            Comflabulation {
                thingy: 1.0,
                ..Default::default()
            },
        ));
        let mut system = MoreComplexSystem::new(7);

        // When
        system.update(&mut registry, 1.0 / 60.0);

        // Then
        let direction = *registry.get::<Direction>(entity).unwrap().unwrap();
        assert!((0.0..=5.0).contains(&direction.x));
        assert!((0.0..=10.0).contains(&direction.y));
        assert_eq!(
            registry.get::<Comflabulation>(entity).unwrap().map(|c| c.stringy.as_str()),
            Some("0")
        );
    }

    #[test]
    fn more_complex_keeps_direction_off_period() {
        // Given
        let mut registry = BenchRegistry::new();
        let entity = registry.create_with((
            Position::default(),
            Direction { x: -1.0, y: -1.0 },
            Comflabulation {
                thingy: 2.0,
                dingy: 42,
                ..Default::default()
            },
        ));
        let mut system = MoreComplexSystem::new(7);

        // When
        system.update(&mut registry, 1.0 / 60.0);

        // Then
        assert_eq!(
            registry.get::<Direction>(entity),
            Ok(Some(&Direction { x: -1.0, y: -1.0 }))
        );
        assert_eq!(
            registry.get::<Comflabulation>(entity).unwrap().map(|c| c.stringy.as_str()),
            Some("42")
        );
    }
}
