use anyhow::Result;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use projectboard::config::AppConfig;
use projectboard::ui_dioxus::App;
use std::any::Any;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        auth_configured = config.auth.base_url.is_some(),
        "Starting projectboard"
    );

    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height));

    let app_config = config.clone();
    let contexts: Vec<Box<dyn Fn() -> Box<dyn Any> + Send + Sync>> =
        vec![Box::new(move || Box::new(app_config.clone()) as Box<dyn Any>)];

    // Launch the Dioxus desktop app
    dioxus_desktop::launch::launch(App, contexts, Config::default().with_window(window));
    Ok(())
}
