//! Transport error mapping and proxy handling.

use std::time::Duration;

use pexels_core::error::TransferError;

/// Map a reqwest failure onto the transfer error taxonomy.
pub fn transfer_error(err: reqwest::Error, timeout: Duration, proxied: bool) -> TransferError {
    if err.is_timeout() {
        TransferError::Timeout {
            duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else if err.is_connect() && proxied {
        TransferError::Proxy {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransferError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransferError::Decode {
            message: err.to_string(),
        }
    } else {
        TransferError::Http {
            message: err.to_string(),
        }
    }
}

/// Normalize a configured proxy URL for reqwest.
///
/// Proxies may be configured with the raw-stream `tcp://` prefix; reqwest
/// expects `http://` for those. Blank values mean "no proxy".
pub fn normalize_proxy_url(proxy: &str) -> Option<String> {
    let proxy = proxy.trim();
    if proxy.is_empty() {
        return None;
    }

    match proxy.strip_prefix("tcp://") {
        Some(rest) => Some(format!("http://{}", rest)),
        None => Some(proxy.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_proxy_is_none() {
        assert_eq!(normalize_proxy_url(""), None);
        assert_eq!(normalize_proxy_url("   "), None);
    }

    #[test]
    fn tcp_scheme_is_rewritten() {
        assert_eq!(
            normalize_proxy_url("tcp://proxy.local:3128").as_deref(),
            Some("http://proxy.local:3128")
        );
    }

    #[test]
    fn http_schemes_are_kept() {
        assert_eq!(
            normalize_proxy_url("https://proxy.local:3128").as_deref(),
            Some("https://proxy.local:3128")
        );
    }
}
