//! The position / direction / comflabulation benchmark domain for `rusty_ecs`.
//!
//! This crate provides the components, example systems and entity seeding used to measure the
//! ECS, including:
//!
//! - **Components**: [`Position`](components::Position), [`Direction`](components::Direction)
//!   and [`Comflabulation`](components::Comflabulation), gathered in
//!   [`BenchComponents`](components::BenchComponents)
//! - **Systems**: movement, comflab and the optional "more complex" system
//! - **Scenario**: seeding `N` entities and building the [`Application`](rusty_ecs::ecs::Application)
//!   the benchmarks drive
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p rusty_ecs_bench
//!
//! # Run specific benchmark group
//! cargo bench -p rusty_ecs_bench -- "component systems update"
//! ```
//!
//! # Benchmark Results
//!
//! Results are written to `target/criterion/` with HTML reports for visualization.

pub mod components;
pub mod scenario;
pub mod systems;
