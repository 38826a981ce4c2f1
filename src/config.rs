use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub cors_permissive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: PathBuf::from("static"),
            cors_permissive: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value
                .parse()
                .with_context(|| format!("BIND_ADDR must be a socket address, got {value:?}"))?,
            None => defaults.bind_addr,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let cors_permissive = match lookup("CORS_PERMISSIVE") {
            Some(value) => value
                .parse()
                .with_context(|| format!("CORS_PERMISSIVE must be true or false, got {value:?}"))?,
            None => defaults.cors_permissive,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            cors_permissive,
        })
    }
}
