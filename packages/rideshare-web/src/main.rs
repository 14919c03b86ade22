use rideshare_web::{validate, App, AppConfig, ROUTES};

fn main() {
    let (config, config_error) = match AppConfig::bundled() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("failed to initialize logger: {err}");
    }

    // logging is only available once the level is known
    if let Some(err) = config_error {
        tracing::error!("{err}; falling back to the default config");
    }

    match validate(ROUTES) {
        Ok(()) => tracing::info!(routes = ROUTES.len(), "route table loaded"),
        Err(err) => tracing::error!("invalid route table: {err}"),
    }
    tracing::info!(?config, "launching");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
