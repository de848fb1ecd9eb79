use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use tracing::warn;

pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// 3D scene embedded on the landing screen.
    pub scene_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            scene_url: DEFAULT_SCENE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .and_then(|value| parse_host(&value))
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|value| {
                    let port = value.trim().parse::<u16>().ok();
                    if port.is_none() {
                        warn!(value = %value, "PORT is not a valid port, using {}", defaults.port);
                    }
                    port
                })
                .unwrap_or(defaults.port),
            scene_url: lookup("SPLINE_SCENE_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.scene_url),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Accepts any IPv4/IPv6 literal, plus `localhost` as the IPv4 loopback.
fn parse_host(value: &str) -> Option<IpAddr> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("localhost") {
        return Some(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    let host = value.trim_start_matches('[').trim_end_matches(']').parse().ok();
    if host.is_none() {
        warn!(value, "HOST is not an IP address, binding all interfaces");
    }
    host
}
