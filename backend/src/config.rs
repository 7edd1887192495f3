use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;

use crate::db::DATABASE_URL;

/// Runtime settings, read from flags or the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "expense-tracker", about = "Expense tracking HTTP backend")]
pub struct Config {
    /// SQLite database URL
    #[arg(long, env = "EXPENSES_DATABASE_URL", default_value = DATABASE_URL)]
    pub database_url: String,

    /// Address to bind
    #[arg(long, env = "EXPENSES_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "EXPENSES_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origins allowed to make cross-origin requests (comma separated)
    #[arg(
        long,
        env = "EXPENSES_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5173", "http://localhost:5174"]
    )]
    pub allowed_origins: Vec<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, env = "EXPENSES_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("invalid listen address {addr}"))
    }

    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .trim()
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid allowed origin {origin:?}"))
            })
            .collect()
    }
}
