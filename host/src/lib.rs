// Library entry for the host crate. This re-exports the host modules so
// integration tests and the `startup-bust` binary share one implementation.

pub mod config;
pub mod game;
pub mod visualize;
