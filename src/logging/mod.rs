use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the default subscriber stack. Optional: embedders with their own
/// `tracing` setup should skip this.
pub fn init() {
    let env_filter = EnvFilter::default()
        .add_directive("strabo_engine=info".parse().expect("Failed to parse the logging directive."));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
