use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Interface to listen on
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("BIND_ADDR is not an IP address: {}", addr))?,
            Err(_) => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", port))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            bind_addr,
            port,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
