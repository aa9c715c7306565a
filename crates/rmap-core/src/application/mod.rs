//! Job application domain module.
//!
//! # Module Structure
//!
//! - `model`: `Application`, `Stage`, predefined stages and date ordering
//! - `channel`: canonical acquisition channels
//! - `repository`: persistence trait for the application collection

mod channel;
mod model;
pub mod repository;

pub use channel::{Channel, UNKNOWN_CHANNEL, channel_or_unknown};
pub use model::{
    Application, ApplicationData, INITIAL_STAGE_NOTES, PREDEFINED_STAGES, Stage,
    initial_stage_name, sort_stages,
};
pub use repository::ApplicationRepository;
