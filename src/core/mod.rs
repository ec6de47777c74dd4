//! Core domain logic for hostaudit
//!
//! This module contains the probe/evaluate/aggregate engine. Host access is
//! abstracted behind the [`ports::HostProbe`] trait so the engine itself can
//! be exercised without touching the machine it runs on.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rule, Probe, Observation, RuleResult)
//! - `services/` - Execution, evaluation and aggregation
//! - `ports/` - Trait definitions for host access

pub mod models;
pub mod ports;
pub mod services;
