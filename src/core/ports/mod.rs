//! Port traits (interfaces) for external dependencies
//!
//! The engine reaches the host only through [`HostProbe`]. The real
//! implementation lives in `adapters::host`; tests substitute their own.

mod host;

pub use host::HostProbe;
