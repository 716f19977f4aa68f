//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use product_catalog::{CatalogConfig, CatalogStore, HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A catalog server running on an ephemeral localhost port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub catalog: Arc<CatalogStore>,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server over a freshly seeded catalog.
pub async fn start_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let catalog = Arc::new(CatalogStore::seeded());
    let server = HttpServer::new(CatalogConfig::default(), catalog.clone());
    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });

    // listener is already bound; give the accept loop a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        catalog,
        shutdown,
    }
}

/// reqwest client that never routes through a system proxy.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
