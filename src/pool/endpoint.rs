// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/endpoint.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the upstream endpoint representation for rxm-miner,
// located in the pool subdirectory. It parses stratum URLs into host, port,
// and TLS components, inferring TLS from the scheme.
//
// Tree Location:
// - src/pool/endpoint.rs (endpoint parsing)
// - Depends on: std

use std::fmt;

/// Default stratum port used when the URL omits one
pub const DEFAULT_PORT: u16 = 3333;

const SCHEME_STRATUM_TCP: &str = "stratum+tcp";
const SCHEME_STRATUM_SSL: &str = "stratum+ssl";
const SCHEME_STRATUM_TLS: &str = "stratum+tls";

/// Parsed upstream endpoint: host, port, and TLS flag.
///
/// An endpoint that fails parsing is *invalid* (empty host), never
/// partially populated. Callers must check [`Endpoint::is_valid`] before
/// use. The raw URL text is preserved so configs re-encode exactly as
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    host: String,
    port: u16,
    tls: bool,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: String::new(),
            host: String::new(),
            port: DEFAULT_PORT,
            tls: false,
        }
    }
}

impl Endpoint {
    /// Parse a stratum URL of the form `[scheme://]host[:port]`.
    ///
    /// Recognized schemes are `stratum+tcp` (plaintext) and `stratum+ssl`
    /// or `stratum+tls` (TLS). A missing port defaults to 3333. Bracketed
    /// IPv6 hosts (`[::1]:3333`) are accepted. Any syntax error yields an
    /// invalid endpoint rather than an error value.
    pub fn parse(url: &str) -> Self {
        let mut out = Self {
            url: url.to_string(),
            ..Self::default()
        };

        let rest = match url.split_once("://") {
            Some((scheme, rest)) => {
                out.tls = match scheme {
                    SCHEME_STRATUM_TCP => false,
                    SCHEME_STRATUM_SSL | SCHEME_STRATUM_TLS => true,
                    _ => return out, // unknown scheme, endpoint stays invalid
                };
                rest
            }
            None => url,
        };

        let (host, port) = match Self::split_host_port(rest) {
            Some(parts) => parts,
            None => return out,
        };

        if host.is_empty() {
            return out;
        }

        out.host = host.to_string();
        out.port = port;
        out
    }

    /// Construct an endpoint directly from its parts, for programmatic
    /// (non-URL) use.
    pub fn build(host: &str, port: u16, tls: bool) -> Self {
        let url = if host.contains(':') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        };

        Self {
            url,
            host: host.to_string(),
            port,
            tls,
        }
    }

    /// Split `host[:port]`, handling bracketed IPv6 literals. Returns None
    /// on malformed input.
    fn split_host_port(input: &str) -> Option<(&str, u16)> {
        if let Some(rest) = input.strip_prefix('[') {
            let (host, after) = rest.split_once(']')?;
            return match after.strip_prefix(':') {
                Some(port) => Some((host, port.parse().ok()?)),
                None if after.is_empty() => Some((host, DEFAULT_PORT)),
                None => None,
            };
        }

        match input.rsplit_once(':') {
            // A second ':' means an unbracketed IPv6 literal, which is
            // ambiguous as host:port input.
            Some((host, _)) if host.contains(':') => None,
            Some((host, port)) => Some((host, port.parse().ok()?)),
            None => Some((input, DEFAULT_PORT)),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_tls(&self) -> bool {
        self.tls
    }

    pub fn is_valid(&self) -> bool {
        !self.host.is_empty()
    }

    /// The URL text as originally written (empty for invalid endpoints
    /// built from parts that never had one).
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_host_port() {
        let endpoint = Endpoint::parse("pool.rxm.example.com:4444");
        assert!(endpoint.is_valid());
        assert_eq!(endpoint.host(), "pool.rxm.example.com");
        assert_eq!(endpoint.port(), 4444);
        assert!(!endpoint.is_tls());
    }

    #[test]
    fn test_parse_default_port() {
        let endpoint = Endpoint::parse("pool.rxm.example.com");
        assert!(endpoint.is_valid());
        assert_eq!(endpoint.port(), DEFAULT_PORT);
    }

    #[test]
    fn test_parse_tls_scheme() {
        let endpoint = Endpoint::parse("stratum+ssl://pool.rxm.example.com:443");
        assert!(endpoint.is_valid());
        assert!(endpoint.is_tls());
        assert_eq!(endpoint.port(), 443);

        let endpoint = Endpoint::parse("stratum+tls://pool.rxm.example.com:443");
        assert!(endpoint.is_tls());

        let endpoint = Endpoint::parse("stratum+tcp://pool.rxm.example.com:3333");
        assert!(endpoint.is_valid());
        assert!(!endpoint.is_tls());
    }

    #[test]
    fn test_parse_unknown_scheme_is_invalid() {
        let endpoint = Endpoint::parse("http://pool.rxm.example.com:3333");
        assert!(!endpoint.is_valid());
        assert!(endpoint.host().is_empty());
    }

    #[test]
    fn test_parse_bad_port_is_invalid() {
        assert!(!Endpoint::parse("pool.rxm.example.com:notaport").is_valid());
        assert!(!Endpoint::parse("pool.rxm.example.com:99999").is_valid());
    }

    #[test]
    fn test_parse_empty_is_invalid() {
        assert!(!Endpoint::parse("").is_valid());
        assert!(!Endpoint::parse(":3333").is_valid());
    }

    #[test]
    fn test_parse_ipv6() {
        let endpoint = Endpoint::parse("[::1]:18081");
        assert!(endpoint.is_valid());
        assert_eq!(endpoint.host(), "::1");
        assert_eq!(endpoint.port(), 18081);

        let endpoint = Endpoint::parse("[2001:db8::1]");
        assert!(endpoint.is_valid());
        assert_eq!(endpoint.port(), DEFAULT_PORT);

        assert!(!Endpoint::parse("2001:db8::1:3333").is_valid());
    }

    #[test]
    fn test_build() {
        let endpoint = Endpoint::build("daemon.rxm.example.com", 18081, true);
        assert!(endpoint.is_valid());
        assert!(endpoint.is_tls());
        assert_eq!(endpoint.to_string(), "daemon.rxm.example.com:18081");

        let endpoint = Endpoint::build("::1", 18081, false);
        assert_eq!(endpoint.to_string(), "[::1]:18081");
    }

    #[test]
    fn test_raw_url_preserved() {
        let endpoint = Endpoint::parse("stratum+ssl://pool.rxm.example.com:443");
        assert_eq!(endpoint.to_string(), "stratum+ssl://pool.rxm.example.com:443");
    }
}

// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Parses upstream URLs into host/port/TLS with scheme-based
//     TLS inference, keeping the raw text for exact re-encoding.
//   - Note: Parsing never fails; malformed input produces an invalid
//     endpoint that callers must check with is_valid().
