use std::{future::Future, net::IpAddr, sync::Arc};

use axum::Router;
use relay_core_contact_contracts::ContactService;
use relay_core_health_contracts::HealthService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Name shown in the service banner
    pub service_name: Arc<str>,
    /// Include the underlying error text in failed delivery responses
    pub development: bool,
    /// Add permissive CORS headers and answer OPTIONS requests
    pub cors: bool,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    /// Serve until the process receives ctrl-c.
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        self.serve_with_shutdown(listener, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {err}");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down http server");
        })
        .await
    }

    pub async fn serve_with_shutdown(
        self,
        listener: TcpListener,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let router = self.router();
        axum::serve(listener, router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let health = Arc::new(self.health);
        let contact = Arc::new(self.contact);
        let config = Arc::new(self.config);

        Router::new()
            .merge(routes::index::router(Arc::clone(&health), Arc::clone(&config)))
            .merge(routes::health::router(health))
            .merge(routes::contact::router(
                Arc::clone(&contact),
                Arc::clone(&config),
            ))
            .merge(routes::stats::router(Arc::clone(&contact)))
            .merge(routes::debug::router(contact, Arc::clone(&config)))
            .apply(middlewares::panic_handler::add)
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
            .apply(|router| {
                if config.cors {
                    middlewares::cors::add(router)
                } else {
                    router
                }
            })
    }
}

trait RouterExt<S> {
    fn apply(self, f: impl FnOnce(Router<S>) -> Router<S>) -> Router<S>;
}

impl<S> RouterExt<S> for Router<S> {
    fn apply(self, f: impl FnOnce(Router<S>) -> Router<S>) -> Router<S> {
        f(self)
    }
}
