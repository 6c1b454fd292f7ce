//! Core value types for the arrivals pipeline.

mod arrival;

pub use arrival::Arrival;
