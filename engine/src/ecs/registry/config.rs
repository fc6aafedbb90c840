/// Tuning for a [`Registry`](super::Registry).
///
/// ```rust,ignore
/// let registry = Registry::<Components>::with_config(Config {
///     initial_capacity: 10_000,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of entity slots to reserve up front in the generation table, the signature table
    /// and every component pool.
    pub initial_capacity: usize,

    /// The generation at which an entity slot is retired instead of recycled.
    ///
    /// Handles are issued with generations `0..max_generation`. A value of zero is treated as
    /// one, so every slot is used at least once.
    pub max_generation: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_generation: u32::MAX,
        }
    }
}
