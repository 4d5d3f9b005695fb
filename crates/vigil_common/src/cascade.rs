//! Per-service probe cascade.
//!
//! One service address, one ordered walk through the applicable probes,
//! terminal on first success or exhaustion. URL-shaped addresses try
//! http -> tcp -> ping; bare `host:port` addresses start at tcp. A DOWN
//! result keeps only the last attempted probe's failure detail, so the
//! method column tells an operator exactly how far the check got.

use crate::address;
use crate::probe::ProbeSuite;
use tracing::debug;

/// Liveness verdict for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Up,
    Down,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Up => "UP",
            Status::Down => "DOWN",
        }
    }
}

/// Final per-service outcome. `method` names the probe that succeeded,
/// or carries the last attempted probe's failure detail.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub service: String,
    pub status: Status,
    pub method: String,
}

/// One step of the cascade, carrying the target string its probe receives.
#[derive(Debug)]
enum ProbeStep {
    Http(String),
    Tcp(String),
    Ping(String),
}

/// Build the ordered probe plan for an address, per its shape.
fn probe_plan(service: &str) -> Vec<ProbeStep> {
    if address::is_http_url(service) {
        vec![
            ProbeStep::Http(service.to_string()),
            ProbeStep::Tcp(address::scheme_remainder(service).to_string()),
            ProbeStep::Ping(address::host_part(service).to_string()),
        ]
    } else {
        vec![
            ProbeStep::Tcp(service.to_string()),
            ProbeStep::Ping(address::host_part(service).to_string()),
        ]
    }
}

/// Walk the probe cascade for one service address.
///
/// Always produces exactly one [`CheckResult`]; probe failures are folded
/// into the walk and never escape as errors.
pub async fn check_service<S>(service: &str, suite: &S) -> CheckResult
where
    S: ProbeSuite + ?Sized,
{
    let mut last_detail = String::new();

    for step in probe_plan(service) {
        let outcome = match &step {
            ProbeStep::Http(url) => suite.http(url).await,
            ProbeStep::Tcp(target) => suite.tcp(target).await,
            ProbeStep::Ping(host) => suite.ping(host).await,
        };

        if outcome.up {
            debug!(service, method = %outcome.detail, "probe succeeded");
            return CheckResult {
                service: service.to_string(),
                status: Status::Up,
                method: outcome.detail,
            };
        }

        debug!(service, ?step, detail = %outcome.detail, "probe failed");
        last_detail = outcome.detail;
    }

    CheckResult {
        service: service.to_string(),
        status: Status::Down,
        method: last_detail,
    }
}
