//! Flow aggregation for the application-flow diagram.
//!
//! Turns the stage histories of all applications into nodes (stages with
//! occupancy counts) and links (transitions weighted by count, keyed by
//! channel). Pure: no I/O, no mutation of the input.

mod aggregator;
mod model;

pub use aggregator::transform;
pub use model::{FlowGraph, FlowLink, FlowNode};
