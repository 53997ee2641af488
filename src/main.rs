mod app;
mod config;
mod core;
mod error;
mod input;
mod rendering;
mod state;
mod ui;

use macroquad::window::Conf;
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    // Runs before the subscriber exists; main reports a bad config once logging is up
    let (width, height) = config::EtchConfig::from_env().unwrap_or_default().window_size();
    Conf {
        window_title: "etch-grid".to_owned(),
        window_width: width.ceil() as i32,
        window_height: height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::EtchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid configuration, using defaults");
            config::EtchConfig::default()
        }
    };

    app::run(config).await;
}
