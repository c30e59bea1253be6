use clap::Parser;
use std::path::PathBuf;

/// Runtime configuration. Every flag can also be supplied through its
/// environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "review-analyzer")]
#[command(about = "Serves customer reviews sorted by sentiment")]
#[command(version)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Address to bind; defaults to all interfaces
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Largest accepted POST body, in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = crate::state::DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// CSV dataset holding the reviews
    #[arg(long, env = "REVIEWS_CSV", default_value = "data/reviews.csv")]
    pub data_file: PathBuf,
}
