//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod documents;
pub mod error;
pub mod traits;
pub mod window_host;

pub use error::{InfraError, InfraResult};
pub use window_host::WindowHost;
