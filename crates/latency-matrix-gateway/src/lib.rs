//! latency-matrix gateway library entry.
//!
//! Wires config, the telemetry-backed app state, the HTTP handler and the ops
//! endpoints into a router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
