//! HTTP API modules
//!
//! This module contains the OpenAPI descriptor and the endpoint handlers.

pub mod docs;
pub mod endpoints;
