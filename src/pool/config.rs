// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/config.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the upstream pool configuration for rxm-miner,
// located in the pool subdirectory. It owns the connection mode derivation
// (pool, daemon, self-select), the JSON codec for config files, the
// enablement gate consulted before connecting, and the color-coded
// diagnostic presenter.
//
// Tree Location:
// - src/pool/config.rs (pool configuration and JSON codec)
// - Depends on: serde_json, log, crate::pool::endpoint, crate::utils

use crate::pool::endpoint::Endpoint;
use crate::utils::format::{CYAN, GREEN, RED, bright};
use crate::utils::json::{get_bool, get_str, get_string, get_u64};
use log::{debug, info};
use serde_json::{Map, Value, json};

const LOG_TARGET: &str = "rxm::pool::config";

// Config-file field names
const FIELD_DAEMON: &str = "daemon";
const FIELD_DAEMON_POLL_INTERVAL: &str = "daemon-poll-interval";
const FIELD_ENABLED: &str = "enabled";
const FIELD_FINGERPRINT: &str = "tls-fingerprint";
const FIELD_KEEPALIVE: &str = "keepalive";
const FIELD_PASS: &str = "pass";
const FIELD_RIG_ID: &str = "rig-id";
const FIELD_SELF_SELECT: &str = "self-select";
const FIELD_TLS: &str = "tls";
const FIELD_URL: &str = "url";
const FIELD_USER: &str = "user";

/// Substituted by the accessors when no user/password is configured
pub const DEFAULT_USER: &str = "x";
pub const DEFAULT_PASSWORD: &str = "x";

/// Sentinel keep-alive value meaning "use the default timeout", in seconds
pub const DEFAULT_KEEP_ALIVE: i32 = 60;

/// Default daemon polling cadence in milliseconds
pub const DEFAULT_POLL_INTERVAL: u64 = 1000;

/// Upstream connection mode, derived once at construction.
///
/// A valid `self-select` endpoint always wins over the plain `daemon`
/// flag; self-select is the more specific configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pool,
    Daemon,
    SelfSelect,
}

/// Configuration of a single upstream connection.
///
/// A config is valid iff its URL parsed to a valid endpoint; every
/// construction path leaves the remaining fields at their defaults when it
/// did not. Instances are value objects: construct, optionally adjust
/// keep-alive, then treat as immutable once shared.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolConfig {
    enabled: bool,
    tls: bool,
    keep_alive: i32,
    mode: Mode,
    fingerprint: String,
    password: String,
    rig_id: String,
    user: String,
    poll_interval: u64,
    url: Endpoint,
    daemon: Endpoint,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tls: false,
            keep_alive: 0,
            mode: Mode::Pool,
            fingerprint: String::new(),
            password: String::new(),
            rig_id: String::new(),
            user: String::new(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            url: Endpoint::default(),
            daemon: Endpoint::default(),
        }
    }
}

impl PoolConfig {
    /// Construct from a bare connection string; all other fields take
    /// their defaults.
    pub fn from_url(url: &str) -> Self {
        let url = Endpoint::parse(url);

        Self {
            tls: url.is_tls(),
            url,
            ..Self::default()
        }
    }

    /// Construct directly from connection parts. The TLS argument is
    /// forced onto the flag regardless of what the endpoint would infer.
    pub fn new(
        host: &str,
        port: u16,
        user: &str,
        password: &str,
        keep_alive: i32,
        tls: bool,
    ) -> Self {
        Self {
            tls,
            keep_alive,
            password: password.to_string(),
            user: user.to_string(),
            url: Endpoint::build(host, port, tls),
            ..Self::default()
        }
    }

    /// Decode a config-file object.
    ///
    /// Fields may appear in any order and unknown fields are ignored. A
    /// missing or unparseable `url` short-circuits the whole decode: the
    /// result is invalid and every other field stays at its default, so
    /// callers must check [`PoolConfig::is_valid`] immediately.
    pub fn from_value(object: &Value) -> Self {
        let mut pool = Self {
            url: Endpoint::parse(get_str(object, FIELD_URL).unwrap_or_default()),
            ..Self::default()
        };

        if !pool.url.is_valid() {
            return pool;
        }

        pool.user = get_string(object, FIELD_USER);
        pool.password = get_string(object, FIELD_PASS);
        pool.rig_id = get_string(object, FIELD_RIG_ID);
        pool.fingerprint = get_string(object, FIELD_FINGERPRINT);
        pool.poll_interval = get_u64(object, FIELD_DAEMON_POLL_INTERVAL, DEFAULT_POLL_INTERVAL);
        pool.daemon = Endpoint::parse(&get_string(object, FIELD_SELF_SELECT));

        pool.enabled = get_bool(object, FIELD_ENABLED, true);
        pool.tls = get_bool(object, FIELD_TLS, false) || pool.url.is_tls();

        if pool.daemon.is_valid() {
            pool.mode = Mode::SelfSelect;
        } else if get_bool(object, FIELD_DAEMON, false) {
            pool.mode = Mode::Daemon;
        }

        match object.get(FIELD_KEEPALIVE) {
            Some(Value::Number(seconds)) => {
                // values that don't fit an i32 leave keep-alive unset
                if let Some(seconds) = seconds.as_i64().and_then(|s| i32::try_from(s).ok()) {
                    pool.set_keep_alive(seconds);
                }
            }
            Some(Value::Bool(enabled)) => pool.set_keep_alive_enabled(*enabled),
            _ => {}
        }

        pool
    }

    /// Encode back to a config-file object, the inverse of
    /// [`PoolConfig::from_value`].
    ///
    /// Daemon mode suppresses `pass`, `rig-id`, and `keepalive` and emits
    /// `daemon-poll-interval`; the other modes emit `self-select` instead,
    /// even when no daemon endpoint is set. Keep-alive encodes as a
    /// boolean when it is 0 or the default timeout, as the raw integer
    /// otherwise, matching both accepted decode shapes.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();

        obj.insert(FIELD_URL.to_string(), string_or_null(self.url.url()));
        obj.insert(FIELD_USER.to_string(), string_or_null(&self.user));

        if self.mode != Mode::Daemon {
            obj.insert(FIELD_PASS.to_string(), string_or_null(&self.password));
            obj.insert(FIELD_RIG_ID.to_string(), string_or_null(&self.rig_id));

            if self.keep_alive == 0 || self.keep_alive == DEFAULT_KEEP_ALIVE {
                obj.insert(FIELD_KEEPALIVE.to_string(), json!(self.keep_alive > 0));
            } else {
                obj.insert(FIELD_KEEPALIVE.to_string(), json!(self.keep_alive));
            }
        }

        obj.insert(FIELD_ENABLED.to_string(), json!(self.enabled));
        obj.insert(FIELD_TLS.to_string(), json!(self.is_tls()));
        obj.insert(FIELD_FINGERPRINT.to_string(), string_or_null(&self.fingerprint));
        obj.insert(FIELD_DAEMON.to_string(), json!(self.mode == Mode::Daemon));

        if self.mode == Mode::Daemon {
            obj.insert(FIELD_DAEMON_POLL_INTERVAL.to_string(), json!(self.poll_interval));
        } else {
            obj.insert(FIELD_SELF_SELECT.to_string(), string_or_null(self.daemon.url()));
        }

        Value::Object(obj)
    }

    pub fn is_valid(&self) -> bool {
        self.url.is_valid()
    }

    pub fn is_tls(&self) -> bool {
        self.tls || self.url.is_tls()
    }

    /// The single gate to consult before attempting to connect: the config
    /// must be enabled, valid, and within the running build's
    /// capabilities.
    pub fn is_enabled(&self) -> bool {
        if cfg!(not(feature = "tls")) && self.is_tls() {
            return false;
        }

        if cfg!(not(feature = "daemon")) && self.mode == Mode::Daemon {
            return false;
        }

        if cfg!(not(feature = "self-select")) && self.mode == Mode::SelfSelect {
            return false;
        }

        self.enabled && self.is_valid()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn url(&self) -> &Endpoint {
        &self.url
    }

    /// The nested daemon endpoint; valid only in self-select mode.
    pub fn daemon(&self) -> &Endpoint {
        &self.daemon
    }

    pub fn user(&self) -> &str {
        if self.user.is_empty() { DEFAULT_USER } else { &self.user }
    }

    pub fn password(&self) -> &str {
        if self.password.is_empty() { DEFAULT_PASSWORD } else { &self.password }
    }

    pub fn rig_id(&self) -> &str {
        &self.rig_id
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn keep_alive(&self) -> i32 {
        self.keep_alive
    }

    pub fn poll_interval(&self) -> u64 {
        self.poll_interval
    }

    /// Set the keep-alive interval in seconds. Negative values are passed
    /// through for downstream consumers to treat as disabled. Call before
    /// the config is shared; instances are read concurrently afterwards.
    pub fn set_keep_alive(&mut self, seconds: i32) {
        self.keep_alive = seconds;
    }

    /// Boolean form: true selects the default timeout, false disables.
    pub fn set_keep_alive_enabled(&mut self, enabled: bool) {
        self.keep_alive = if enabled { DEFAULT_KEEP_ALIVE } else { 0 };
    }

    /// Color-coded endpoint summary for diagnostics: bright green when
    /// enabled with TLS, bright cyan when enabled plaintext, bright red
    /// when disabled. Self-select mode appends the daemon endpoint colored
    /// by its own TLS status.
    pub fn printable_name(&self) -> String {
        let color = if self.is_enabled() {
            if self.is_tls() { GREEN } else { CYAN }
        } else {
            RED
        };

        let mut out = bright(color, self.url.url());

        if self.mode == Mode::SelfSelect {
            let daemon_color = if self.daemon.is_tls() { GREEN } else { CYAN };
            out.push_str(" self-select ");
            out.push_str(&bright(daemon_color, self.daemon.url()));
        }

        out
    }

    /// Dump every field to the log for troubleshooting.
    pub fn print(&self) {
        info!(target: LOG_TARGET, "url:       {}", self.url);
        debug!(target: LOG_TARGET, "host:      {}", self.url.host());
        debug!(target: LOG_TARGET, "port:      {}", self.url.port());
        debug!(target: LOG_TARGET, "user:      {}", self.user);
        debug!(target: LOG_TARGET, "pass:      {}", self.password);
        debug!(target: LOG_TARGET, "rig-id:    {}", self.rig_id);
        debug!(target: LOG_TARGET, "keepAlive: {}", self.keep_alive);
    }
}

fn string_or_null(text: &str) -> Value {
    if text.is_empty() {
        Value::Null
    } else {
        Value::String(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_url_defaults() {
        let pool = PoolConfig::from_url("pool.rxm.example.com:3333");
        assert!(pool.is_valid());
        assert!(pool.is_enabled());
        assert_eq!(pool.mode(), Mode::Pool);
        assert!(!pool.is_tls());
        assert_eq!(pool.keep_alive(), 0);
        assert_eq!(pool.user(), DEFAULT_USER);
        assert_eq!(pool.password(), DEFAULT_PASSWORD);
        assert_eq!(pool.rig_id(), "");
        assert_eq!(pool.poll_interval(), DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn test_from_url_infers_tls() {
        let pool = PoolConfig::from_url("stratum+ssl://pool.rxm.example.com:443");
        assert!(pool.is_tls());
    }

    #[test]
    fn test_new_forces_tls_flag() {
        let pool = PoolConfig::new("pool.rxm.example.com", 3333, "wallet", "secret", 42, true);
        assert!(pool.is_valid());
        assert!(pool.is_tls());
        assert_eq!(pool.user(), "wallet");
        assert_eq!(pool.password(), "secret");
        assert_eq!(pool.keep_alive(), 42);
        assert_eq!(pool.mode(), Mode::Pool);
    }

    #[test]
    fn test_decode_minimal_pool() {
        let pool = PoolConfig::from_value(&json!({
            "url": "pool.example.com:3333",
            "user": "wallet",
            "pass": "x",
        }));

        assert!(pool.is_valid());
        assert_eq!(pool.mode(), Mode::Pool);
        assert!(!pool.is_tls());
        assert_eq!(pool.keep_alive(), 0);
        assert_eq!(pool.rig_id(), "");
    }

    #[test]
    fn test_decode_missing_url_short_circuits() {
        let pool = PoolConfig::from_value(&json!({
            "user": "wallet",
            "pass": "secret",
            "daemon": true,
        }));

        assert!(!pool.is_valid());
        assert!(!pool.is_enabled());
        // no other field was populated
        assert_eq!(pool.user(), DEFAULT_USER);
        assert_eq!(pool.mode(), Mode::Pool);
    }

    #[test]
    fn test_decode_daemon_mode() {
        let pool = PoolConfig::from_value(&json!({
            "url": "daemon.example.com:18081",
            "daemon": true,
            "daemon-poll-interval": 500,
        }));

        assert_eq!(pool.mode(), Mode::Daemon);
        assert_eq!(pool.poll_interval(), 500);
    }

    #[test]
    fn test_self_select_wins_over_daemon_flag() {
        let pool = PoolConfig::from_value(&json!({
            "url": "pool.example.com:3333",
            "self-select": "daemon.example.com:18081",
            "daemon": true,
        }));

        assert_eq!(pool.mode(), Mode::SelfSelect);
        assert!(pool.daemon().is_valid());
        assert_eq!(pool.daemon().host(), "daemon.example.com");
    }

    #[test]
    fn test_invalid_self_select_falls_back() {
        let pool = PoolConfig::from_value(&json!({
            "url": "pool.example.com:3333",
            "self-select": "http://nope:1",
            "daemon": true,
        }));

        assert_eq!(pool.mode(), Mode::Daemon);
    }

    #[test]
    fn test_keep_alive_mapping() {
        let mut pool = PoolConfig::from_url("pool.rxm.example.com:3333");

        pool.set_keep_alive_enabled(true);
        assert_eq!(pool.keep_alive(), DEFAULT_KEEP_ALIVE);

        pool.set_keep_alive_enabled(false);
        assert_eq!(pool.keep_alive(), 0);

        pool.set_keep_alive(42);
        assert_eq!(pool.keep_alive(), 42);

        pool.set_keep_alive(-5);
        assert_eq!(pool.keep_alive(), -5);
    }

    #[test]
    fn test_decode_keepalive_shapes() {
        let pool = PoolConfig::from_value(&json!({"url": "p:1", "keepalive": true}));
        assert_eq!(pool.keep_alive(), DEFAULT_KEEP_ALIVE);

        let pool = PoolConfig::from_value(&json!({"url": "p:1", "keepalive": false}));
        assert_eq!(pool.keep_alive(), 0);

        let pool = PoolConfig::from_value(&json!({"url": "p:1", "keepalive": 42}));
        assert_eq!(pool.keep_alive(), 42);

        let pool = PoolConfig::from_value(&json!({"url": "p:1"}));
        assert_eq!(pool.keep_alive(), 0);
    }

    #[test]
    fn test_decode_keepalive_out_of_range_left_unset() {
        // 2^33 + 7 would wrap to 7 under a plain cast
        let pool = PoolConfig::from_value(&json!({"url": "p:1", "keepalive": 8589934599i64}));
        assert_eq!(pool.keep_alive(), 0);

        let pool = PoolConfig::from_value(&json!({"url": "p:1", "keepalive": -8589934599i64}));
        assert_eq!(pool.keep_alive(), 0);

        // boundary values still pass through
        let pool = PoolConfig::from_value(&json!({"url": "p:1", "keepalive": i32::MAX}));
        assert_eq!(pool.keep_alive(), i32::MAX);
    }

    #[test]
    fn test_disabled_never_enabled() {
        let pool = PoolConfig::from_value(&json!({
            "url": "pool.example.com:3333",
            "enabled": false,
        }));

        assert!(pool.is_valid());
        assert!(!pool.is_enabled());
    }

    #[test]
    fn test_equality_sensitive_to_every_field() {
        let base = json!({"url": "pool.example.com:3333", "user": "wallet"});
        let a = PoolConfig::from_value(&base);
        let b = PoolConfig::from_value(&base);
        assert_eq!(a, b);

        let mut other = base.clone();
        other["rig-id"] = json!("rig-01");
        assert_ne!(a, PoolConfig::from_value(&other));

        let mut other = base.clone();
        other["tls-fingerprint"] = json!("ab:cd");
        assert_ne!(a, PoolConfig::from_value(&other));
    }

    #[test]
    fn test_printable_name_colors() {
        let pool = PoolConfig::from_url("pool.rxm.example.com:3333");
        assert!(pool.printable_name().starts_with("\x1b[1;36m"));

        let pool = PoolConfig::from_url("stratum+ssl://pool.rxm.example.com:443");
        if cfg!(feature = "tls") {
            assert!(pool.printable_name().starts_with("\x1b[1;32m"));
        }

        let pool = PoolConfig::from_value(&json!({
            "url": "pool.example.com:3333",
            "enabled": false,
        }));
        assert!(pool.printable_name().starts_with("\x1b[1;31m"));
    }

    #[test]
    fn test_printable_name_self_select_segment() {
        let pool = PoolConfig::from_value(&json!({
            "url": "pool.example.com:3333",
            "self-select": "daemon.example.com:18081",
        }));

        let name = pool.printable_name();
        assert!(name.contains(" self-select "));
        assert!(name.contains("daemon.example.com:18081"));
    }
}

// Changelog:
// - v1.0.1 (2026-08-28): Range-gated the keepalive decode.
//   - A JSON keepalive outside i32 range now leaves keep-alive unset
//     instead of wrapping to an arbitrary value.
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Central upstream configuration entity with JSON codec,
//     mode derivation, enablement gating, and diagnostic presenter.
//   - Note: Mode is computed once at construction and has no setter; the
//     self-select endpoint takes precedence over the daemon flag.
