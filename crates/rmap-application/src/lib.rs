//! Application layer for Rejection Mapper.
//!
//! The `ApplicationStore` is the only entry point a UI uses to read and
//! mutate job applications. `bootstrap` wires it to a storage backend and
//! `telemetry` installs logging for the host process.

pub mod bootstrap;
pub mod store;
pub mod telemetry;

pub use bootstrap::{AppBootstrap, bootstrap, bootstrap_default};
pub use store::{ApplicationStore, StoreState};
pub use telemetry::init_tracing;
