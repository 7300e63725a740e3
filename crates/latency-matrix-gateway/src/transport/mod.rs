//! HTTP transport: request decoding and the metrics endpoint handler.

pub mod http;
