//! Concurrent fan-out/fan-in of service checks.
//!
//! One independent task per configured service, no throttling, no shared
//! mutable state. Results land in a bounded channel sized to the batch so
//! producers never block, and nothing is drained until every task has
//! finished: consumers see the complete result set or nothing.

use crate::cascade::{self, CheckResult, Status};
use crate::probe::ProbeSuite;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Check every service concurrently and return one result per input.
///
/// No ordering guarantee: results arrive in completion order. Duplicate
/// addresses are checked independently and reported separately. A check
/// whose task dies still yields a DOWN result, so the output length
/// always equals the input length.
pub async fn run_checks<S>(services: &[String], suite: Arc<S>) -> Vec<CheckResult>
where
    S: ProbeSuite + ?Sized + 'static,
{
    if services.is_empty() {
        return Vec::new();
    }

    info!(count = services.len(), "dispatching service checks");

    let (tx, mut rx) = mpsc::channel::<CheckResult>(services.len());
    let mut handles = Vec::with_capacity(services.len());

    for service in services {
        let service = service.clone();
        let suite = Arc::clone(&suite);
        let tx = tx.clone();
        handles.push(tokio::spawn(async move {
            let result = cascade::check_service(&service, suite.as_ref()).await;
            // Capacity covers every producer, so this send cannot block.
            let _ = tx.send(result).await;
        }));
    }
    drop(tx);

    // Barrier: every unit must finish before any result is observed.
    let mut aborted = Vec::new();
    for (handle, service) in handles.into_iter().zip(services) {
        if let Err(e) = handle.await {
            warn!(service = %service, error = %e, "check task aborted");
            aborted.push(service.clone());
        }
    }

    let mut results = Vec::with_capacity(services.len());
    while let Some(result) = rx.recv().await {
        results.push(result);
    }

    // An aborted task sent nothing; keep the one-result-per-service
    // invariant intact.
    for service in aborted {
        results.push(CheckResult {
            service,
            status: Status::Down,
            method: "check aborted".to_string(),
        });
    }

    results
}
