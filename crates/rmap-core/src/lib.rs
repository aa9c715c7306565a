//! Domain layer for Rejection Mapper.
//!
//! Holds the job application model, the persistence and key-value traits the
//! other crates implement, the configuration model, stage name suggestions and
//! the flow aggregator used by the application-flow diagram.

pub mod application;
pub mod config;
pub mod error;
pub mod flow;
pub mod storage;
pub mod suggestion;

// Re-export common error type
pub use error::TrackerError;
