use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

pub fn init_logger(component: &str, is_dev: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer: Box<dyn Layer<Registry> + Send + Sync> = if is_dev {
        fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .boxed()
    } else {
        fmt::layer().compact().with_ansi(false).boxed()
    };

    tracing_subscriber::registry()
        .with(console_layer.with_filter(filter))
        .init();

    tracing::info!("📋 Logger initialized for {component}");
}
