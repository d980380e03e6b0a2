use relay_config::Config;
use tracing::{info, warn};

use crate::environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let delivery = environment::delivery_settings(&config);
    if let Err(missing) = delivery.resolve() {
        warn!(
            ?missing,
            "Email configuration incomplete, submissions will be rejected until it is set"
        );
    }

    let server = environment::rest_server(&config);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
