//! Shared core for vigil, the one-shot service-liveness checker.
//!
//! Given a list of service addresses (URLs or `host:port` pairs), vigil
//! runs a cascading sequence of reachability probes per service and
//! reports UP/DOWN with the probe that succeeded or the final failure
//! reason. The binary crate (`vigilctl`) handles flags, config-file
//! discovery, and report rendering; everything with decision content
//! lives here.

pub mod address;
pub mod cascade;
pub mod config;
pub mod dispatcher;
pub mod probe;

pub use cascade::{check_service, CheckResult, Status};
pub use config::{Config, ConfigError};
pub use dispatcher::run_checks;
pub use probe::{NetProbes, Pinger, ProbeOutcome, ProbeSuite, SystemPing};
