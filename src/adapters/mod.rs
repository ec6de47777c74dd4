//! Adapter implementations
//!
//! Concrete code that touches the outside world:
//!
//! - `host/` - [`HostProbe`](crate::core::ports::HostProbe) for the local machine
//! - `yaml/` - SCA policy file loading
//! - `report/` - JSON and HTML report writers

pub mod host;
pub mod report;
pub mod yaml;
