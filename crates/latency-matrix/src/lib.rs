//! Top-level facade crate for latency-matrix.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use latency_matrix_core::*;
}

pub mod gateway {
    pub use latency_matrix_gateway::*;
}
