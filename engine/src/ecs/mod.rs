pub mod app;
pub mod component;
pub mod entity;
pub mod error;
pub mod query;
pub mod registry;
pub mod schedule;
pub mod storage;
pub mod system;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod util;

pub use app::Application;
pub use component::Component;
pub use entity::Entity;
pub use error::Error;
pub use query::Query;
pub use registry::Registry;
pub use schedule::Schedule;
pub use system::{CommandBuffer, System, TimeDelta};
