use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use thiserror::Error;
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    system_conf::read_system_conf,
};

/// Errors raised while gathering host identity data.
#[derive(Debug, Error)]
pub enum HostInfoError {
    #[error("host lookup failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("address resolution failed: {0}")]
    Resolution(#[from] trust_dns_resolver::error::ResolveError),
    #[error("no address records found for {0}")]
    NoAddress(String),
}

/// # Wall-Clock Source
///
/// Supplies the current local time for the details endpoint. Abstracted so
/// tests can substitute a deterministic clock instead of the real one.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// # Host-Info Provider
///
/// Abstracted source of hostname/address data, standing in for direct
/// operating-system calls.
///
/// ## Operations
/// - `hostname`: the network host name of the machine running the process
/// - `resolve_ip`: the address that host name resolves to at lookup time
#[cfg_attr(test, mockall::automock)]
pub trait HostInfoProvider: Send + Sync {
    fn hostname(&self) -> Result<String, HostInfoError>;
    fn resolve_ip(&self, hostname: &str) -> Result<IpAddr, HostInfoError>;
}

/// Clock backed by [`chrono::Local`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Provider backed by the operating system's hostname registry and the
/// standard name-resolution service.
pub struct SystemHostInfo;

impl HostInfoProvider for SystemHostInfo {
    fn hostname(&self) -> Result<String, HostInfoError> {
        let name = hostname::get()?;
        Ok(name.to_string_lossy().to_string())
    }

    fn resolve_ip(&self, hostname: &str) -> Result<IpAddr, HostInfoError> {
        let resolver = create_resolver()?;
        let lookup = resolver.lookup_ip(hostname)?;

        // Prefer an IPv4 address when both families resolve
        lookup
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| lookup.iter().next())
            .ok_or_else(|| HostInfoError::NoAddress(hostname.to_string()))
    }
}

/// Creates a DNS resolver with custom configuration
///
/// Configures resolver with:
/// - 2 second timeout per request
/// - 2 retry attempts
/// - System resolver configuration (falls back to the library default when
///   the system configuration cannot be read)
fn create_resolver() -> Result<Resolver, HostInfoError> {
    let (config, mut opts) = read_system_conf()
        .unwrap_or_else(|_| (ResolverConfig::default(), ResolverOpts::default()));
    opts.timeout = Duration::from_secs(2);
    opts.attempts = 2;

    Ok(Resolver::new(config, opts)?)
}

/// # Handler State
///
/// Bundles the injectable capabilities the details handler depends on. Built
/// once at startup and shared across workers via `web::Data`; tests construct
/// it with mock implementations instead.
#[derive(Clone)]
pub struct HostInfoService {
    pub clock: Arc<dyn Clock>,
    pub provider: Arc<dyn HostInfoProvider>,
}

impl HostInfoService {
    /// Production wiring backed by the operating system facilities.
    pub fn system() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            provider: Arc::new(SystemHostInfo),
        }
    }
}
