//! ESP32 Panel entry point.
//!
//! With the `server` feature this runs the gateway that serves the compiled UI
//! and forwards device API calls. Without it, it launches the Dioxus web app.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "esp32_panel=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ESP32 Panel gateway");

    let config = esp32_panel::config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    esp32_panel::gateway::serve(config).await
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(esp32_panel::app::App);
}
