//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts used by the kernel.
//! - `adapters`: filesystem/environment specific implementations.

pub mod adapters;
pub mod ports;
