//! Route table and navigation guard

pub mod guard;
pub mod routes;

pub use guard::{GuardedSwitch, Navigation, guard};
pub use routes::{AppRoute, Route};
