use rusty_ecs::ecs::{
    Application, CommandBuffer, Registry, System, TimeDelta, registry::Config, storage::Pool,
};
use rusty_ecs_macros::{Component, ComponentSet};

const BOUNDS: f64 = 10.0;
const TICKS: usize = 20;

#[derive(Component, Debug, Clone, Copy)]
struct Position {
    x: f64,
    y: f64,
}

#[derive(Component, Debug, Clone, Copy)]
struct Velocity {
    dx: f64,
    dy: f64,
}

#[derive(Component, Debug)]
struct Lifetime(u32);

#[derive(ComponentSet, Default)]
struct Components {
    position: Pool<Position>,
    velocity: Pool<Velocity>,
    lifetime: Pool<Lifetime>,
}

struct Movement;

impl System<Components> for Movement {
    fn update(&mut self, registry: &mut Registry<Components>, dt: TimeDelta) {
        registry.for_each::<(Position, Velocity)>(|_, (position, velocity)| {
            position.x += velocity.dx * dt;
            position.y += velocity.dy * dt;
        });
    }
}

/// Despawns particles that left the bounds or ran out of time, and spawns a replacement for each.
struct Recycle {
    commands: CommandBuffer<Components>,
    spawned: u32,
}

impl System<Components> for Recycle {
    fn update(&mut self, registry: &mut Registry<Components>, _dt: TimeDelta) {
        let commands = &mut self.commands;
        let spawned = &mut self.spawned;
        registry.for_each::<(Position, Lifetime)>(|entity, (position, lifetime)| {
            lifetime.0 = lifetime.0.saturating_sub(1);
            if lifetime.0 == 0 || position.x.abs() > BOUNDS || position.y.abs() > BOUNDS {
                commands.destroy(entity);
                *spawned += 1;
                commands.create(particle(*spawned));
            }
        });

        for err in self.commands.flush(registry) {
            eprintln!("command failed: {err}");
        }
    }
}

fn particle(seed: u32) -> (Position, Velocity, Lifetime) {
    let angle = seed as f64 * 0.7;
    (
        Position { x: 0.0, y: 0.0 },
        Velocity {
            dx: angle.cos() * 30.0,
            dy: angle.sin() * 30.0,
        },
        Lifetime(5 + seed % 7),
    )
}

fn main() {
    let mut app = Application::<Components>::with_config(Config {
        initial_capacity: 16,
        ..Default::default()
    })
    .with_system(Movement)
    .with_system(Recycle {
        commands: CommandBuffer::new(),
        spawned: 0,
    });

    for seed in 0..8 {
        app.registry_mut().create_with(particle(seed));
    }

    for tick in 0..TICKS {
        app.update(1.0 / 60.0);
        println!(
            "tick {tick:>2}: {} particles, {} moving",
            app.registry().len(),
            app.registry().count::<(Position, Velocity)>()
        );
    }

    for entity in app.registry().entities() {
        if let Ok(Some(position)) = app.registry().get::<Position>(entity) {
            println!("{entity}: ({:.2}, {:.2})", position.x, position.y);
        }
    }
}
