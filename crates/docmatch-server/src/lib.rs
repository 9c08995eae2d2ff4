//! HTTP gateway for the docmatch comparison service.
//!
//! The heavy lifting (pair generation, concurrent dispatch, schema
//! validation, aggregation) lives in `docmatch-core`; this crate wires it to
//! an Axum router and the process entrypoint.

pub mod gateway;
