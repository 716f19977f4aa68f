//! Startup orchestration.

use std::io;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Bind the catalog listener described by `config`.
pub async fn bind_listener(config: &ListenerConfig) -> io::Result<TcpListener> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %listener.local_addr()?, "Listening for connections");
    Ok(listener)
}
