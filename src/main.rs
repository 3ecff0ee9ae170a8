use std::sync::Arc;
use tracing::{error, info};
use vitrine::collection::HarvardClient;
use vitrine::config::Config;
use vitrine::ui::{make_config, App};
use vitrine::AppContext;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vitrine=info")),
        )
        .with_target(false)
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match HarvardClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create collection API client: {}", e);
            std::process::exit(1);
        }
    };

    let app_context = AppContext {
        config,
        api: Arc::new(client),
    };

    info!("Launching vitrine");

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config())
        .with_context(app_context)
        .launch(App);
}
