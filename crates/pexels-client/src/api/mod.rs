//! Pexels REST API plumbing.
//!
//! Endpoint definitions, response decoding and transport error mapping.

mod endpoints;
mod transport;

pub(crate) use endpoints::*;
pub(crate) use transport::*;
