//! `ClientIp` extractor: the address recorded as an account's last IP.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use midgard_core::config::ServerConfig;

use crate::state::AppState;

/// Recorded when neither a trusted header nor the peer address is known.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Client address of the current request.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

/// First `X-Forwarded-For` entry when trusted, otherwise the socket peer.
pub fn client_ip(parts: &Parts, config: &ServerConfig) -> String {
    if config.trust_forwarded_for {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(ClientIp(client_ip(parts, &state.config.server)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(forwarded: Option<&str>, peer: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = forwarded {
            builder = builder.header("x-forwarded-for", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        if let Some(peer) = peer {
            let addr: SocketAddr = peer.parse().unwrap();
            parts.extensions.insert(ConnectInfo(addr));
        }
        parts
    }

    #[test]
    fn test_forwarded_header_ignored_unless_trusted() {
        let config = ServerConfig::default();
        let p = parts(Some("203.0.113.7"), Some("10.0.0.1:5555"));
        assert_eq!(client_ip(&p, &config), "10.0.0.1");
    }

    #[test]
    fn test_first_forwarded_entry_when_trusted() {
        let config = ServerConfig {
            trust_forwarded_for: true,
            ..ServerConfig::default()
        };
        let p = parts(Some(" 203.0.113.7 , 10.0.0.2"), Some("10.0.0.1:5555"));
        assert_eq!(client_ip(&p, &config), "203.0.113.7");

        let p = parts(None, Some("10.0.0.1:5555"));
        assert_eq!(client_ip(&p, &config), "10.0.0.1");
    }

    #[test]
    fn test_unknown_without_peer() {
        let p = parts(None, None);
        assert_eq!(client_ip(&p, &ServerConfig::default()), UNKNOWN_CLIENT);
    }
}
