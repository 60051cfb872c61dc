//! Interview template intake and CaRe talent insight adapters.

pub mod care;
pub mod config;
pub mod error;
pub mod interviews;
pub mod telemetry;
