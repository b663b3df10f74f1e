//! Core service library for SIWARGA, the neighborhood letter-request desk.
//!
//! The `letters` module carries the request lifecycle: domain records, the
//! per-type document checklist, the status transition engine, access rules,
//! the storage contract, and the HTTP surface. `config` and `telemetry`
//! provide the runtime plumbing shared by the binaries in `services/`.

pub mod config;
pub mod error;
pub mod letters;
pub mod telemetry;
