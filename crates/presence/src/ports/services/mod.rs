//! Service Ports
//!
//! Abstract interfaces for external services.

mod status_service;

pub use status_service::*;
