use std::net::Ipv4Addr;

use relay_core_contact_contracts::MockContactService;
use relay_core_health_contracts::MockHealthService;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use crate::{RestServer, RestServerConfig};

mod misc;

fn config() -> RestServerConfig {
    RestServerConfig {
        service_name: "Contact Form".into(),
        development: false,
        cors: true,
    }
}

/// A server bound to an ephemeral port on localhost.
struct TestServer {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start(
        health: MockHealthService,
        contact: MockContactService,
        config: RestServerConfig,
    ) -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown, signal) = oneshot::channel();
        let server = RestServer::new(health, contact, config);
        let handle = tokio::spawn(server.serve_with_shutdown(listener, async move {
            signal.await.ok();
        }));

        Self {
            base_url,
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Shut the server down so the mocks are dropped and their expectations
    /// checked.
    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}
