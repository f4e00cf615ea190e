use crate::error::Result;
pub use clap::Parser;
use url::Url;

#[derive(Debug, Clone, clap::Parser)]
pub struct ServerConfig {
    #[arg(
        short,
        long,
        default_value_t = 8080,
        env = "FILMORATE_LISTEN_PORT",
        help = "Port to listen on"
    )]
    pub port: u16,
    #[arg(
        short,
        long,
        default_value = "127.0.0.1",
        env = "FILMORATE_LISTEN_ADDRESS",
        help = "Address to listen on"
    )]
    pub listen_address: String,

    #[arg(
        long,
        env = "FILMORATE_BASE_URL",
        default_value = "http://localhost:8080",
        help = "Base URL of the API, as visible to clients"
    )]
    pub base_url: Url,

    #[arg(long, env = "FILMORATE_NO_CORS", help = "Disable CORS")]
    pub no_cors: bool,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        ServerConfig::try_parse().map_err(|e| e.into())
    }
}
