pub mod rest;

use std::time::Duration;

use anyhow::{Result, anyhow};
use filmorate_app::state::AppState;
use filmorate_server::config::{Parser, ServerConfig};
use rand::Rng as _;
use reqwest::Url;
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{debug, error};

fn random_port() -> Result<u16> {
    let mut rng = rand::rng();

    let mut retries = 3;
    while retries > 0 {
        let port: u16 = rng.random_range(3030..4030);
        let addr: std::net::SocketAddr = format!("127.0.0.1:{}", port).parse()?;
        match std::net::TcpStream::connect_timeout(&addr, Duration::from_millis(100)) {
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => return Ok(port),
            Err(_) => retries -= 1,
            Ok(_) => retries -= 1,
        }
    }

    Err(anyhow!("Could not find a free port"))
}

pub fn test_config() -> Result<ServerConfig> {
    let port = random_port()?.to_string();
    let base_url = format!("http://127.0.0.1:{}", port);
    let args = &[
        "filmorate-e2e-tests",
        "--port",
        &port,
        "--base-url",
        &base_url,
    ];
    let config = ServerConfig::try_parse_from(args)?;
    Ok(config)
}

/// Running server, stopped when dropped
pub struct ServerGuard {
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl ServerGuard {
    pub async fn stop(mut self) -> Result<()> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        (&mut self.handle).await?;
        Ok(())
    }
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

pub async fn spawn_server(args: ServerConfig) -> Result<ServerGuard> {
    let health_url = args.base_url.join("health")?;
    let (tx, rx) = oneshot::channel::<()>();
    let shutdown = async move {
        let _ = rx.await;
    };
    let handle = tokio::spawn(async move {
        if let Err(e) =
            filmorate_server::run::run_graceful_with_state(args, AppState::new(), shutdown).await
        {
            error!("Server error: {e}");
        }
    });

    let client = reqwest::Client::new();
    for _ in 0..50 {
        match client.get(health_url.clone()).send().await {
            Ok(response) if response.status().is_success() => {
                return Ok(ServerGuard {
                    shutdown: Some(tx),
                    handle,
                });
            }
            Ok(response) => debug!("Server not ready: {}", response.status()),
            Err(e) => debug!("Server not ready: {e}"),
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    Err(anyhow!("Server did not start"))
}

pub async fn launch_env() -> Result<(reqwest::Client, Url, ServerGuard)> {
    let args = test_config()?;
    let base_url = args.base_url.clone();
    let guard = spawn_server(args).await?;
    Ok((reqwest::Client::new(), base_url, guard))
}
