//! Test support for the nbgateway crates.

mod gateway;

pub use gateway::*;
