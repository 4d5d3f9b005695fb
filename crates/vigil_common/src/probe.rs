//! Reachability probes.
//!
//! Three independent tests, ordered from most protocol-meaningful to most
//! permissive: an HTTP(S) GET, a raw TCP connect, and an ICMP echo via
//! the system ping utility. Each probe carries its own deadline and folds
//! every failure into a [`ProbeOutcome`]; nothing here returns a hard
//! error.

use async_trait::async_trait;
use std::process::Command;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// HTTP probe deadline.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(3);

/// TCP connect deadline.
pub const TCP_TIMEOUT: Duration = Duration::from_secs(2);

/// Echo wait handed to the ping utility (`-W`). The process bounds
/// itself; no outer kill timer is applied.
pub const PING_WAIT_SECS: u64 = 2;

/// Result of a single protocol attempt. `detail` carries the protocol
/// name on success and an error description on failure.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub up: bool,
    pub detail: String,
}

impl ProbeOutcome {
    pub fn up(detail: impl Into<String>) -> Self {
        Self {
            up: true,
            detail: detail.into(),
        }
    }

    pub fn down(detail: impl Into<String>) -> Self {
        Self {
            up: false,
            detail: detail.into(),
        }
    }
}

/// ICMP reachability capability.
///
/// The cascade depends on this seam, not on how the echo is performed;
/// the backend is fixed when the probe suite is constructed.
#[async_trait]
pub trait Pinger: Send + Sync {
    async fn ping(&self, host: &str) -> ProbeOutcome;
}

/// Backend that shells out to the system ping utility as
/// `ping -c 1 -W 2 <host>`. The `-W` flag and the success phrasing assume
/// a Linux-style ping; BSD wording is matched as well.
pub struct SystemPing;

#[async_trait]
impl Pinger for SystemPing {
    async fn ping(&self, host: &str) -> ProbeOutcome {
        let host = host.to_string();
        let joined = tokio::task::spawn_blocking(move || {
            let wait = PING_WAIT_SECS.to_string();
            Command::new("ping")
                .args(["-c", "1", "-W", wait.as_str(), host.as_str()])
                .output()
        })
        .await;

        let output = match joined {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return ProbeOutcome::down(e.to_string()),
            Err(e) => return ProbeOutcome::down(e.to_string()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("ping: {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return ProbeOutcome::down(detail);
        }

        if echo_received(&String::from_utf8_lossy(&output.stdout)) {
            ProbeOutcome::up("ping")
        } else {
            ProbeOutcome::down("ping timeout")
        }
    }
}

/// True when the ping summary reports exactly one echo received.
/// iputils prints "1 received", BSD ping "1 packets received".
fn echo_received(stdout: &str) -> bool {
    stdout.contains("1 received") || stdout.contains("1 packets received")
}

/// The three probe entry points the cascade walks. Production code uses
/// [`NetProbes`]; tests substitute scripted outcomes.
#[async_trait]
pub trait ProbeSuite: Send + Sync {
    /// HTTP GET against the full URL.
    async fn http(&self, url: &str) -> ProbeOutcome;

    /// Raw TCP connect against a `host:port` target.
    async fn tcp(&self, target: &str) -> ProbeOutcome;

    /// ICMP echo against a bare hostname.
    async fn ping(&self, host: &str) -> ProbeOutcome;
}

/// Production probe suite backed by the real network.
pub struct NetProbes {
    client: reqwest::Client,
    pinger: Box<dyn Pinger>,
}

impl NetProbes {
    pub fn new() -> Self {
        Self::with_pinger(Box::new(SystemPing))
    }

    /// Select the ICMP backend at construction time.
    pub fn with_pinger(pinger: Box<dyn Pinger>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, pinger }
    }
}

impl Default for NetProbes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProbeSuite for NetProbes {
    async fn http(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            // Any received response counts, 4xx/5xx included: the server
            // answered, so it is reachable. The body is never read and
            // the response is released on drop.
            Ok(response) => {
                debug!(url, status = %response.status(), "http probe answered");
                drop(response);
                ProbeOutcome::up("http")
            }
            Err(e) => ProbeOutcome::down(e.to_string()),
        }
    }

    async fn tcp(&self, target: &str) -> ProbeOutcome {
        match timeout(TCP_TIMEOUT, TcpStream::connect(target)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                ProbeOutcome::up("tcp")
            }
            Ok(Err(e)) => ProbeOutcome::down(e.to_string()),
            Err(_) => ProbeOutcome::down(format!(
                "connect to {} timed out after {:?}",
                target, TCP_TIMEOUT
            )),
        }
    }

    async fn ping(&self, host: &str) -> ProbeOutcome {
        self.pinger.ping(host).await
    }
}
