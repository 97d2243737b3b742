//! Test utilities
//!
//! Hand-written mock strategies and a tiny canned-response HTTP server, so
//! both the orchestrator and the network strategies can be tested without
//! reaching real upstreams.

pub mod http;
pub mod mocks;
