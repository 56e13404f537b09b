//! Error types for every FaultFuse subsystem.
//!
//! Each subsystem owns a focused enum; [`FaultFuseError`] wraps them so
//! callers can propagate any failure with `?`.

mod faultfuse_error;
mod fusion_error;
mod mass_error;
mod registry_error;

pub use faultfuse_error::{FaultFuseError, FaultFuseResult};
pub use fusion_error::FusionError;
pub use mass_error::MassError;
pub use registry_error::RegistryError;
