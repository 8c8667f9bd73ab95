//! Server configuration loaded from the environment (and `.env`).

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_TITLE: &str = "In-House Pricing System";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Heading shown on the quote page
    pub site_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `SITE_TITLE`, falling back to defaults.
    ///
    /// A missing `.env` file is not an error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            site_title: env::var("SITE_TITLE").unwrap_or_else(|_| DEFAULT_SITE_TITLE.to_string()),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}
