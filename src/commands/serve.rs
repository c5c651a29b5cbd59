//! Proxy server command

use crate::config::Config;
use crate::error::Result;
use crate::server;

/// Apply CLI overrides and run the local API proxy
pub async fn run_serve(
    mut config: Config,
    port: Option<u16>,
    upstream: Option<String>,
) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(upstream) = upstream {
        config.server.upstream_url = upstream;
    }

    server::serve(&config.server).await
}
