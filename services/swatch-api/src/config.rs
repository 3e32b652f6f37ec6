//! Command line / environment configuration.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Swatch API Server
#[derive(Parser, Debug, Clone)]
#[command(name = "swatch-api")]
#[command(about = "Placeholder image server: solid colors and gradients from URL paths")]
pub struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000", env = "SWATCH_LISTEN_ADDR")]
    pub listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Json, env = "SWATCH_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Number of worker threads
    #[arg(long, env = "SWATCH_WORKER_THREADS")]
    pub worker_threads: Option<usize>,

    /// Content-Disposition for image responses
    #[arg(long, value_enum, default_value_t = Disposition::Inline, env = "SWATCH_DISPOSITION")]
    pub disposition: Disposition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Text,
}

/// Whether browsers should display or download the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Disposition {
    #[default]
    Inline,
    Attachment,
}

impl Disposition {
    /// Full `Content-Disposition` header value for `filename`.
    pub fn header_value(self, filename: &str) -> String {
        let kind = match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        };
        format!("{}; filename=\"{}\"", kind, filename)
    }
}

/// Validated server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub log_level: String,
    pub log_format: LogFormat,
    pub worker_threads: Option<usize>,
    pub disposition: Disposition,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
            worker_threads: None,
            disposition: Disposition::Inline,
        }
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let listen: SocketAddr = args
            .listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", args.listen))?;

        if args.worker_threads == Some(0) {
            anyhow::bail!("worker_threads must be at least 1");
        }

        Ok(Self {
            listen,
            log_level: args.log_level,
            log_format: args.log_format,
            worker_threads: args.worker_threads,
            disposition: args.disposition,
        })
    }
}
