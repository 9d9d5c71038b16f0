//! URI Module
//!
//! Splits an `srt://[host][:port][?key=value&...]` URI into the destination
//! and the option mapping. The host may be empty (`srt://:9000`), which the
//! generic URL grammar rejects, so only the host itself and the query string
//! go through the `url` crate.

use std::collections::HashMap;

use thiserror::Error;
use url::{form_urlencoded, Host};

/// URI scheme accepted by [`parse_srt_uri`]
pub const SCHEME: &str = "srt";

/// Destination and options taken from an SRT URI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SrtTarget {
    /// Destination host; empty when none was given
    pub host: String,
    pub port: Option<u16>,
    /// Query pairs, percent-decoded; a repeated key keeps its last value
    pub options: HashMap<String, String>,
}

/// URI parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("missing `srt://` prefix in `{0}`")]
    MissingScheme(String),
    #[error("unsupported scheme `{0}`, expected `srt`")]
    UnsupportedScheme(String),
    #[error("invalid host `{host}`: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid port `{0}`")]
    InvalidPort(String),
}

/// Parse an SRT URI
///
/// # Arguments
///
/// * `input` - URI text, e.g. `srt://example.com:9000?latency=200`
///
/// # Returns
///
/// * `Ok(SrtTarget)` - Host, port and option mapping
/// * `Err(UriError)` - Wrong scheme, malformed host or port
pub fn parse_srt_uri(input: &str) -> Result<SrtTarget, UriError> {
    let (scheme, rest) = input
        .split_once("://")
        .ok_or_else(|| UriError::MissingScheme(input.to_string()))?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(UriError::UnsupportedScheme(scheme.to_string()));
    }

    let (location, query) = rest.split_once('?').unwrap_or((rest, ""));
    let authority = location.split('/').next().unwrap_or_default();
    // userinfo is not used by SRT
    let authority = authority.rsplit_once('@').map_or(authority, |(_, a)| a);

    let (host, port) = split_host_port(authority)?;
    let options = form_urlencoded::parse(query.as_bytes()).into_owned().collect();

    Ok(SrtTarget { host, port, options })
}

fn split_host_port(authority: &str) -> Result<(String, Option<u16>), UriError> {
    let (host, port) = match authority.find(']') {
        Some(end) if authority.starts_with('[') => {
            let (host, after) = authority.split_at(end + 1);
            match after {
                "" => (host, None),
                _ => (
                    host,
                    Some(after.strip_prefix(':').ok_or_else(|| UriError::InvalidPort(after.to_string()))?),
                ),
            }
        }
        _ => match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        },
    };

    let port = port
        .map(|p| p.parse::<u16>().map_err(|_| UriError::InvalidPort(p.to_string())))
        .transpose()?;

    if host.is_empty() {
        return Ok((String::new(), port));
    }

    let host = Host::parse(host).map_err(|source| UriError::InvalidHost {
        host: host.to_string(),
        source,
    })?;
    Ok((host.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_uri() {
        let target = parse_srt_uri("srt://Example.COM:9000?latency=200&mode=caller").unwrap();

        assert_eq!(target.host, "example.com");
        assert_eq!(target.port, Some(9000));
        assert_eq!(target.options.get("latency").map(String::as_str), Some("200"));
        assert_eq!(target.options.get("mode").map(String::as_str), Some("caller"));
    }

    #[test]
    fn test_empty_host() {
        let target = parse_srt_uri("srt://:4200?passphrase=supersecretphrase").unwrap();

        assert_eq!(target.host, "");
        assert_eq!(target.port, Some(4200));
        assert_eq!(target.options.len(), 1);
    }

    #[test]
    fn test_no_query() {
        let target = parse_srt_uri("srt://192.0.2.10").unwrap();

        assert_eq!(target.host, "192.0.2.10");
        assert_eq!(target.port, None);
        assert!(target.options.is_empty());
    }

    #[test]
    fn test_ipv6_host() {
        let target = parse_srt_uri("srt://[2001:db8::1]:9000").unwrap();

        assert_eq!(target.host, "[2001:db8::1]");
        assert_eq!(target.port, Some(9000));
    }

    #[test]
    fn test_percent_decoded_values() {
        let target = parse_srt_uri("srt://host:1?streamid=%23!%3A%3Ar%3Dlive&latency=100&latency=300").unwrap();

        assert_eq!(target.options.get("streamid").map(String::as_str), Some("#!::r=live"));
        assert_eq!(target.options.get("latency").map(String::as_str), Some("300"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_srt_uri("udp://host:9000"),
            Err(UriError::UnsupportedScheme("udp".to_string()))
        );
        assert!(matches!(parse_srt_uri("host:9000"), Err(UriError::MissingScheme(_))));
        assert_eq!(
            parse_srt_uri("srt://host:90000"),
            Err(UriError::InvalidPort("90000".to_string()))
        );
        assert!(matches!(
            parse_srt_uri("srt://[::1"),
            Err(UriError::InvalidHost { .. }) | Err(UriError::InvalidPort(_))
        ));
    }
}
