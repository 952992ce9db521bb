// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/client.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the upstream client variants and their factory for
// rxm-miner, located in the pool subdirectory. It dispatches on the config's
// connection mode to a stratum, daemon-RPC, or self-select client and
// handles TCP connection establishment; the wire protocols themselves live
// with each variant's protocol driver, not here.
//
// Tree Location:
// - src/pool/client.rs (client variants and factory)
// - Depends on: tokio, async-trait, thiserror, log, crate::pool::config

use crate::pool::config::{Mode, PoolConfig};
use crate::utils::user_agent::user_agent;
use async_trait::async_trait;
use log::{debug, info};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, lookup_host};

const LOG_TARGET: &str = "rxm::pool::client";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Pool endpoint is not valid")]
    InvalidEndpoint,

    #[error("TLS connection requested but this build has no TLS support")]
    TlsUnavailable,

    #[error("No addresses found for {host}")]
    HostNotFound { host: String },

    #[error("Client is not connected")]
    NotConnected,

    #[error("IO operation failed")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Connection lifecycle notifications delivered to the client's owner.
pub trait ClientListener: Send + Sync {
    fn on_connect(&self, id: usize);
    fn on_close(&self, id: usize);
}

/// Abstract capability set of an upstream client.
///
/// Callers interact with the factory's result only through this trait,
/// never through mode-specific fields.
#[async_trait]
pub trait Client: Send + Sync {
    fn id(&self) -> usize;
    fn mode(&self) -> Mode;
    fn pool(&self) -> &PoolConfig;
    fn set_pool(&mut self, pool: PoolConfig);
    fn user_agent(&self) -> Option<&str>;

    /// Establish the transport connection and notify the listener.
    async fn connect(&mut self) -> Result<(), ClientError>;

    /// Send one newline-terminated protocol line.
    async fn send(&mut self, line: &str) -> Result<(), ClientError>;

    fn close(&mut self);
}

/// State shared by all client variants: identity, injected config, the
/// listener, and the TCP transport.
struct ClientCore {
    id: usize,
    user_agent: Option<String>,
    listener: Arc<dyn ClientListener>,
    pool: PoolConfig,
    stream: Option<TcpStream>,
}

impl ClientCore {
    fn new(id: usize, user_agent: Option<String>, listener: Arc<dyn ClientListener>) -> Self {
        Self {
            id,
            user_agent,
            listener,
            pool: PoolConfig::default(),
            stream: None,
        }
    }

    /// Resolve the pool address from either ip:port or domain:port form.
    async fn resolve(host: &str, port: u16) -> Result<SocketAddr, ClientError> {
        // Try parsing as a direct IP first
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, port));
        }

        // If that fails, try DNS resolution
        let mut addrs = lookup_host((host, port)).await?;
        addrs.next().ok_or_else(|| ClientError::HostNotFound {
            host: host.to_string(),
        })
    }

    async fn connect(&mut self) -> Result<(), ClientError> {
        let endpoint = self.pool.url();
        if !endpoint.is_valid() {
            return Err(ClientError::InvalidEndpoint);
        }

        if cfg!(not(feature = "tls")) && self.pool.is_tls() {
            return Err(ClientError::TlsUnavailable);
        }

        let addr = Self::resolve(endpoint.host(), endpoint.port()).await?;
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?; // Disable Nagle's algorithm for low latency

        info!(target: LOG_TARGET, "client {} connected to {}", self.id, endpoint);
        self.stream = Some(stream);
        self.listener.on_connect(self.id);
        Ok(())
    }

    async fn send(&mut self, line: &str) -> Result<(), ClientError> {
        let stream = self.stream.as_mut().ok_or(ClientError::NotConnected)?;
        stream.write_all(line.as_bytes()).await?;
        stream.write_all(b"\n").await?;
        debug!(target: LOG_TARGET, "client {} sent: {}", self.id, line);
        Ok(())
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            self.listener.on_close(self.id);
        }
    }
}

/// Plain stratum pool client; the pool constructs jobs.
pub struct StratumClient {
    core: ClientCore,
}

impl StratumClient {
    pub fn new(id: usize, user_agent: Option<String>, listener: Arc<dyn ClientListener>) -> Self {
        Self {
            core: ClientCore::new(id, user_agent, listener),
        }
    }
}

#[async_trait]
impl Client for StratumClient {
    fn id(&self) -> usize {
        self.core.id
    }

    fn mode(&self) -> Mode {
        Mode::Pool
    }

    fn pool(&self) -> &PoolConfig {
        &self.core.pool
    }

    fn set_pool(&mut self, pool: PoolConfig) {
        self.core.pool = pool;
    }

    fn user_agent(&self) -> Option<&str> {
        self.core.user_agent.as_deref()
    }

    async fn connect(&mut self) -> Result<(), ClientError> {
        self.core.connect().await
    }

    async fn send(&mut self, line: &str) -> Result<(), ClientError> {
        self.core.send(line).await
    }

    fn close(&mut self) {
        self.core.close()
    }
}

/// Direct daemon-RPC client; the config's URL is the daemon itself, so no
/// user agent is presented.
#[cfg(feature = "daemon")]
pub struct DaemonClient {
    core: ClientCore,
}

#[cfg(feature = "daemon")]
impl DaemonClient {
    pub fn new(id: usize, listener: Arc<dyn ClientListener>) -> Self {
        Self {
            core: ClientCore::new(id, None, listener),
        }
    }

    /// Polling cadence for the daemon's job source, in milliseconds.
    pub fn poll_interval(&self) -> u64 {
        self.core.pool.poll_interval()
    }
}

#[cfg(feature = "daemon")]
#[async_trait]
impl Client for DaemonClient {
    fn id(&self) -> usize {
        self.core.id
    }

    fn mode(&self) -> Mode {
        Mode::Daemon
    }

    fn pool(&self) -> &PoolConfig {
        &self.core.pool
    }

    fn set_pool(&mut self, pool: PoolConfig) {
        self.core.pool = pool;
    }

    fn user_agent(&self) -> Option<&str> {
        self.core.user_agent.as_deref()
    }

    async fn connect(&mut self) -> Result<(), ClientError> {
        self.core.connect().await
    }

    async fn send(&mut self, line: &str) -> Result<(), ClientError> {
        self.core.send(line).await
    }

    fn close(&mut self) {
        self.core.close()
    }
}

/// Hybrid client: jobs are selected via the nested daemon endpoint while
/// submission still follows the pool connection.
#[cfg(feature = "self-select")]
pub struct SelfSelectClient {
    core: ClientCore,
}

#[cfg(feature = "self-select")]
impl SelfSelectClient {
    pub fn new(id: usize, user_agent: Option<String>, listener: Arc<dyn ClientListener>) -> Self {
        Self {
            core: ClientCore::new(id, user_agent, listener),
        }
    }

    /// The nested daemon endpoint jobs are selected from.
    pub fn daemon_url(&self) -> String {
        self.core.pool.daemon().to_string()
    }
}

#[cfg(feature = "self-select")]
#[async_trait]
impl Client for SelfSelectClient {
    fn id(&self) -> usize {
        self.core.id
    }

    fn mode(&self) -> Mode {
        Mode::SelfSelect
    }

    fn pool(&self) -> &PoolConfig {
        &self.core.pool
    }

    fn set_pool(&mut self, pool: PoolConfig) {
        self.core.pool = pool;
    }

    fn user_agent(&self) -> Option<&str> {
        self.core.user_agent.as_deref()
    }

    async fn connect(&mut self) -> Result<(), ClientError> {
        self.core.connect().await
    }

    async fn send(&mut self, line: &str) -> Result<(), ClientError> {
        self.core.send(line).await
    }

    fn close(&mut self) {
        self.core.close()
    }
}

/// Construct the client variant matching the config's mode and inject the
/// config into it.
///
/// Modes whose variant was compiled out must never reach this point;
/// `PoolConfig::is_enabled` is the gate that excludes them. Hitting one
/// here is a programming error and panics rather than returning a
/// degraded client.
pub fn create_client(
    id: usize,
    pool: &PoolConfig,
    listener: Arc<dyn ClientListener>,
) -> Box<dyn Client> {
    let client: Option<Box<dyn Client>> = match pool.mode() {
        Mode::Pool => Some(Box::new(StratumClient::new(
            id,
            Some(user_agent()),
            listener,
        ))),
        #[cfg(feature = "daemon")]
        Mode::Daemon => Some(Box::new(DaemonClient::new(id, listener))),
        #[cfg(feature = "self-select")]
        Mode::SelfSelect => Some(Box::new(SelfSelectClient::new(
            id,
            Some(user_agent()),
            listener,
        ))),
        #[allow(unreachable_patterns)]
        _ => None,
    };

    let mut client = client.expect("no client variant available for pool mode");
    client.set_pool(pool.clone());
    client
}


// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Polymorphic upstream clients behind a single Client trait,
//     with mode-based construction in create_client.
//   - Note: Variant availability follows the daemon and self-select cargo
//     features; is_enabled() keeps unavailable modes from reaching the
//     factory.
